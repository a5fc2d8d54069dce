//! Constant drivers attached to nexuses.
//!
//! A [`NetConst`] is a literal the elaborator wired straight onto a net, for
//! example the `1'b0` feeding a tied-off input.

use crate::signal::DataType;
use serde::{Deserialize, Serialize};
use tracenet_common::LogicVec;

/// The payload of a constant driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstValue {
    /// A 4-state bit pattern.
    Bits(LogicVec),
    /// A real number.
    Real(f64),
}

/// A constant driving a nexus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetConst {
    /// Declared width in bits.
    pub width: u32,
    /// Value type of the literal.
    pub data_type: DataType,
    /// The literal itself.
    pub value: ConstValue,
}

impl NetConst {
    /// Creates a 4-state constant whose width and type follow the vector.
    pub fn bits(value: LogicVec) -> Self {
        Self {
            width: value.width(),
            data_type: DataType::Logic,
            value: ConstValue::Bits(value),
        }
    }

    /// Creates a one-bit-wide real constant.
    pub fn real(value: f64) -> Self {
        Self {
            width: 1,
            data_type: DataType::Real,
            value: ConstValue::Real(value),
        }
    }
}
