//! Packed vectors of 4-state logic levels for constant payloads.

use crate::logic::Logic;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of logic levels packed per `u64` word.
const LEVELS_PER_WORD: u32 = 32;

/// A vector of [`Logic`] levels, index 0 being the least significant bit.
///
/// Each level occupies 2 bits; 32 levels are packed per `u64`. A
/// deserialized vector must carry exactly as many words as its width needs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PackedLevels")]
pub struct LogicVec {
    width: u32,
    data: Vec<u64>,
}

/// The wire form of a [`LogicVec`], checked before it is trusted.
#[derive(Deserialize)]
struct PackedLevels {
    width: u32,
    data: Vec<u64>,
}

impl TryFrom<PackedLevels> for LogicVec {
    type Error = String;

    fn try_from(raw: PackedLevels) -> Result<Self, Self::Error> {
        let words = raw.width.div_ceil(LEVELS_PER_WORD) as usize;
        if raw.data.len() != words {
            return Err(format!(
                "logic vector of width {} needs {words} data words, found {}",
                raw.width,
                raw.data.len()
            ));
        }
        Ok(Self {
            width: raw.width,
            data: raw.data,
        })
    }
}

impl LogicVec {
    /// Creates a vector of the given width with every level `Zero`.
    pub fn new(width: u32) -> Self {
        Self {
            width,
            data: vec![0; width.div_ceil(LEVELS_PER_WORD) as usize],
        }
    }

    /// Returns the number of levels in this vector.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the level at `index`, or `None` past the end.
    pub fn get(&self, index: u32) -> Option<Logic> {
        if index >= self.width {
            return None;
        }
        let word = self.data[(index / LEVELS_PER_WORD) as usize];
        Some(Logic::from_bits(word >> ((index % LEVELS_PER_WORD) * 2)))
    }

    /// Sets the level at `index`. Out-of-range writes are ignored.
    pub fn set(&mut self, index: u32, value: Logic) {
        if index >= self.width {
            return;
        }
        let shift = (index % LEVELS_PER_WORD) * 2;
        let word = &mut self.data[(index / LEVELS_PER_WORD) as usize];
        *word = (*word & !(0b11u64 << shift)) | ((value as u64) << shift);
    }

    /// Creates a vector holding the low `width` bits of `value`.
    pub fn from_u64(value: u64, width: u32) -> Self {
        let mut v = Self::new(width);
        for i in 0..width.min(64) {
            if (value >> i) & 1 != 0 {
                v.set(i, Logic::One);
            }
        }
        v
    }

    /// Parses an MSB-first level string such as `"10xz"`.
    pub fn from_binary_str(s: &str) -> Option<Self> {
        let mut v = Self::new(s.chars().count() as u32);
        for (i, c) in s.chars().rev().enumerate() {
            v.set(i as u32, Logic::from_char(c)?);
        }
        Some(v)
    }

    /// Returns the value as a `u64` if every level is `0`/`1` and it fits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.width > 64 {
            return None;
        }
        let mut result = 0u64;
        for i in 0..self.width {
            match self.get(i)? {
                Logic::Zero => {}
                Logic::One => result |= 1 << i,
                Logic::X | Logic::Z => return None,
            }
        }
        Some(result)
    }

    /// Iterates the levels from the most significant bit down.
    pub fn iter_msb_first(&self) -> impl Iterator<Item = Logic> + '_ {
        (0..self.width).rev().filter_map(|i| self.get(i))
    }
}

impl fmt::Display for LogicVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in self.iter_msb_first() {
            write!(f, "{level}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for LogicVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogicVec({self})")
    }
}
