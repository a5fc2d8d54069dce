//! Macro-cell (LPM) devices: arithmetic, comparison, selection, and storage.
//!
//! Every device has a declared `width`, an output `q`, and positional data
//! inputs. The per-kind extras live on [`LpmKind`].

use crate::ids::{NexusId, ScopeId, SignalId};
use serde::{Deserialize, Serialize};
use tracenet_common::Ident;

/// The reduction performed by a reduction device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReduceOp {
    /// `&`
    And,
    /// `~&`
    Nand,
    /// `|`
    Or,
    /// `~|`
    Nor,
    /// `^`
    Xor,
    /// `~^`
    Xnor,
}

impl ReduceOp {
    /// Returns the label used in device headers.
    pub fn label(self) -> &'static str {
        match self {
            ReduceOp::And => "AND",
            ReduceOp::Nand => "NAND",
            ReduceOp::Or => "OR",
            ReduceOp::Nor => "NOR",
            ReduceOp::Xor => "XOR",
            ReduceOp::Xnor => "XNOR",
        }
    }
}

/// Direction of a shift device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftDir {
    /// Shift toward the most significant bit.
    Left,
    /// Shift toward the least significant bit.
    Right,
}

impl ShiftDir {
    /// Returns `"L"` or `"R"`.
    pub fn suffix(self) -> &'static str {
        match self {
            ShiftDir::Left => "L",
            ShiftDir::Right => "R",
        }
    }
}

/// Device kind with the attributes only that kind carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LpmKind {
    /// `q = a + b`
    Add,
    /// `q = a - b`
    Sub,
    /// `q = a * b`
    Mult,
    /// `q = a / b`
    Divide,
    /// `q = a % b`
    Mod,
    /// `q = a === b`
    CmpEeq,
    /// `q = a !== b`
    CmpNee,
    /// `q = a >= b`
    CmpGe,
    /// `q = a > b`
    CmpGt,
    /// `q = a != b`
    CmpNe,
    /// `q = {d[n-1], ..., d[0]}`
    Concat,
    /// `q = d[select]`
    Mux {
        /// Number of data inputs.
        size: u32,
        /// Width of the select input.
        selects: u32,
        /// The select input.
        select: Option<NexusId>,
    },
    /// Part select out of a vector.
    PartVp {
        /// Constant offset of the part.
        base: u32,
        /// Variable offset, exclusive with a non-zero base.
        select: Option<NexusId>,
    },
    /// Part select into a vector.
    PartPv {
        /// Constant offset of the part.
        base: u32,
        /// Variable offset, exclusive with a non-zero base.
        select: Option<NexusId>,
    },
    /// Bidirectional part select between `q` (the part) and data 0 (the vector).
    PartBi {
        /// Constant offset of the part.
        base: u32,
    },
    /// Unary reduction to one bit.
    Reduce(ReduceOp),
    /// Shift data 0 by the amount on data 1.
    Shift(ShiftDir),
    /// Sign extension of data 0 to the device width.
    SignExt,
    /// `q = {count{d}}`
    Repeat {
        /// Replication count.
        count: u32,
    },
    /// Read of one word of an array signal.
    Array {
        /// The array being read.
        array: SignalId,
        /// Width of the address input.
        selects: u32,
        /// The address input.
        address: Option<NexusId>,
    },
    /// Edge-triggered register `q <= d`.
    Ff {
        /// Clock input.
        clock: Option<NexusId>,
        /// Optional clock enable.
        enable: Option<NexusId>,
    },
    /// Call of a system function.
    Sfunc {
        /// Function name including the `$`.
        call: String,
    },
    /// Call of a user function.
    Ufunc {
        /// The function's definition scope.
        definition: ScopeId,
    },
    /// A device type this model has no name for, with the producer's code.
    Unsupported {
        /// The producer's numeric type code.
        code: u32,
    },
}

/// A macro-cell device instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lpm {
    /// Instance name.
    pub name: Ident,
    /// The scope containing the instance.
    pub scope: ScopeId,
    /// Declared device width.
    pub width: u32,
    /// Whether the operation is signed.
    pub signed: bool,
    /// Output.
    pub q: Option<NexusId>,
    /// Positional data inputs.
    pub data: Vec<Option<NexusId>>,
    /// Kind and per-kind attributes.
    pub kind: LpmKind,
}

impl Lpm {
    /// Returns data input `index`, or `None` if absent or unconnected.
    pub fn data(&self, index: usize) -> Option<NexusId> {
        self.data.get(index).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_labels_are_distinct() {
        let ops = [
            ReduceOp::And,
            ReduceOp::Nand,
            ReduceOp::Or,
            ReduceOp::Nor,
            ReduceOp::Xor,
            ReduceOp::Xnor,
        ];
        let labels: Vec<_> = ops.iter().map(|op| op.label()).collect();
        assert_eq!(labels, ["AND", "NAND", "OR", "NOR", "XOR", "XNOR"]);
    }

    #[test]
    fn shift_suffix() {
        assert_eq!(ShiftDir::Left.suffix(), "L");
        assert_eq!(ShiftDir::Right.suffix(), "R");
    }

    #[test]
    fn data_accessor_past_end() {
        let lpm = Lpm {
            name: Ident::from_raw(0),
            scope: ScopeId::from_raw(0),
            width: 8,
            signed: false,
            q: None,
            data: vec![Some(NexusId::from_raw(1)), None],
            kind: LpmKind::Add,
        };
        assert_eq!(lpm.data(0), Some(NexusId::from_raw(1)));
        assert_eq!(lpm.data(1), None);
        assert_eq!(lpm.data(5), None);
    }

    #[test]
    fn serde_roundtrip() {
        let lpm = Lpm {
            name: Ident::from_raw(0),
            scope: ScopeId::from_raw(0),
            width: 4,
            signed: true,
            q: Some(NexusId::from_raw(0)),
            data: vec![],
            kind: LpmKind::Mux {
                size: 4,
                selects: 2,
                select: Some(NexusId::from_raw(9)),
            },
        };
        let json = serde_json::to_string(&lpm).unwrap();
        let back: Lpm = serde_json::from_str(&json).unwrap();
        assert_eq!(lpm, back);
    }
}
