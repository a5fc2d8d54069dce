//! Dense id-indexed storage for netlist entities.
//!
//! Entities are appended once by the producer and never removed, so an id
//! stays valid for the life of the design. Iteration follows allocation
//! order, which is the order the report walks entities in.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// An opaque `u32` key into an [`Arena`].
pub trait ArenaId: Copy {
    /// Wraps a raw index.
    fn from_raw(index: u32) -> Self;

    /// Unwraps the raw index.
    fn as_raw(self) -> u32;
}

/// Append-only vector addressed by a typed id.
///
/// Serializes as a plain JSON array; ids are positions in that array. A
/// deserialized design may therefore hold ids past the end of an arena,
/// which [`Arena::try_get`] and [`Arena::contains`] detect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arena<I: ArenaId, T> {
    items: Vec<T>,
    #[serde(skip)]
    _id: PhantomData<I>,
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            _id: PhantomData,
        }
    }
}

impl<I: ArenaId, T> Arena<I, T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` and returns its id.
    pub fn alloc(&mut self, item: T) -> I {
        let id = I::from_raw(self.items.len() as u32);
        self.items.push(item);
        id
    }

    /// Looks up `id`, returning `None` for an id this arena never issued.
    pub fn try_get(&self, id: I) -> Option<&T> {
        self.items.get(id.as_raw() as usize)
    }

    /// Returns `true` if `id` was issued by this arena.
    pub fn contains(&self, id: I) -> bool {
        self.try_get(id).is_some()
    }

    /// Number of entities stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing was allocated.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `(id, entity)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        (0u32..).map(I::from_raw).zip(self.items.iter())
    }

    /// Entities in allocation order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

/// Panics on an id this arena never issued; run `Design::check_hierarchy`
/// on untrusted input first.
impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        &self.items[id.as_raw() as usize]
    }
}

impl<I: ArenaId, T> IndexMut<I> for Arena<I, T> {
    fn index_mut(&mut self, id: I) -> &mut T {
        &mut self.items[id.as_raw() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{NexusId, SignalId};

    #[test]
    fn ids_follow_allocation_order() {
        let mut arena: Arena<SignalId, &str> = Arena::new();
        let clk = arena.alloc("clk");
        let rst = arena.alloc("rst");
        assert_eq!((clk.as_raw(), rst.as_raw()), (0, 1));
        assert_eq!(arena[rst], "rst");
        let names: Vec<_> = arena.iter().map(|(id, n)| (id.as_raw(), *n)).collect();
        assert_eq!(names, [(0, "clk"), (1, "rst")]);
    }

    #[test]
    fn index_mut_edits_in_place() {
        let mut arena: Arena<SignalId, u32> = Arena::new();
        let id = arena.alloc(4);
        arena[id] = 8;
        assert_eq!(arena.values().copied().collect::<Vec<_>>(), [8]);
    }

    #[test]
    fn foreign_ids_are_detected() {
        let mut arena: Arena<NexusId, u32> = Arena::new();
        let id = arena.alloc(1);
        assert!(arena.contains(id));
        assert_eq!(arena.try_get(NexusId::from_raw(3)), None);
        assert!(!arena.contains(NexusId::from_raw(1)));
    }

    #[test]
    fn json_is_a_plain_array() {
        let mut arena: Arena<NexusId, u32> = Arena::new();
        arena.alloc(7);
        arena.alloc(9);
        let json = serde_json::to_string(&arena).unwrap();
        assert_eq!(json, "[7,9]");
        let back: Arena<NexusId, u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[NexusId::from_raw(1)], 9);
    }

    #[test]
    fn empty_by_default() {
        assert!(Arena::<SignalId, u8>::default().is_empty());
    }
}
