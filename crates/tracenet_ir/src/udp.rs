//! Table-defined user primitives.

use serde::{Deserialize, Serialize};
use tracenet_common::{Ident, Logic};

/// A user-defined primitive definition shared by all its instances.
///
/// Each table row is a string of level characters. Combinational rows are
/// `inputs... out`; sequential rows are prefixed with the current output
/// level: `cur inputs... out`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UdpDefinition {
    /// Primitive name.
    pub name: Ident,
    /// Whether the primitive has state.
    pub sequential: bool,
    /// Initial output level of a sequential primitive.
    pub init: Logic,
    /// Number of inputs.
    pub inputs: u32,
    /// Truth table rows.
    pub rows: Vec<String>,
}

impl UdpDefinition {
    /// Returns the number of characters a well-formed row has.
    pub fn row_len(&self) -> usize {
        self.inputs as usize + 1 + usize::from(self.sequential)
    }
}
