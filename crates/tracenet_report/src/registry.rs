//! Reference counting for user-defined primitive definitions.

use indexmap::IndexMap;
use tracenet_ir::UdpId;

/// Collects the UDP definitions instantiated during a walk.
///
/// Definitions are remembered in first-reference order and printed once
/// each after the scope tree, with the number of instances that named them.
#[derive(Debug, Default)]
pub struct UdpRegistry {
    refs: IndexMap<UdpId, u32>,
}

impl UdpRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more instance of `udp` and returns its new count.
    pub fn reference(&mut self, udp: UdpId) -> u32 {
        let count = self.refs.entry(udp).or_insert(0);
        *count += 1;
        *count
    }

    /// Number of distinct definitions referenced.
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Returns `true` if nothing was referenced.
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Consumes the registry, yielding each definition once with its count.
    pub fn drain(self) -> impl Iterator<Item = (UdpId, u32)> {
        self.refs.into_iter()
    }
}
