//! Signal definitions and their timing annotations.
//!
//! A [`Signal`] is a named net or variable. Arrays have one nexus per word;
//! scalars and vectors have exactly one.

use crate::attribute::Attribute;
use crate::ids::{NexusId, ScopeId};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracenet_common::Ident;

/// The value type carried by a signal, nexus, or constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataType {
    /// No type information; what an unresolvable nexus reports.
    #[default]
    NoType,
    /// The void type.
    Void,
    /// 2-state bits.
    Bool,
    /// Real numbers.
    Real,
    /// 4-state bits.
    Logic,
}

impl DataType {
    /// Returns the name used in macro-cell port listings.
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::NoType => "NO_TYPE",
            DataType::Void => "void",
            DataType::Bool => "bool",
            DataType::Real => "real",
            DataType::Logic => "logic",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port direction of a signal that is part of its scope's interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PortDirection {
    /// Not a port.
    #[default]
    None,
    /// An input port.
    Input,
    /// An output port.
    Output,
    /// A bidirectional port.
    Inout,
}

/// Net or variable kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SignalKind {
    /// A variable.
    Reg,
    /// A plain net.
    #[default]
    Tri,
    /// A net that pulls to 0 when undriven.
    Tri0,
    /// A net that pulls to 1 when undriven.
    Tri1,
    /// Any other net kind.
    Other,
}

/// A module path delay from a source nexus to the owning signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayPath {
    /// The path source.
    pub source: NexusId,
    /// Condition for state-dependent paths.
    pub condition: Option<NexusId>,
    /// Path is sensitive to a rising source.
    pub posedge: bool,
    /// Path is sensitive to a falling source.
    pub negedge: bool,
    /// Delays in transition order 01, 10, 0z, z1, 1z, z0, 0x, x1, 1x, x0, xz, zx.
    pub delays: [u64; 12],
}

/// A signal (net or variable) within a scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Local name; the hierarchical name comes from
    /// [`Design::full_name`](crate::design::Design::full_name).
    pub name: Ident,
    /// The scope that declares this signal.
    pub scope: ScopeId,
    /// Width of one word in bits.
    pub width: u32,
    /// Whether arithmetic on the signal is signed.
    pub signed: bool,
    /// Value type.
    pub data_type: DataType,
    /// Port direction.
    pub port: PortDirection,
    /// Net or variable kind.
    pub kind: SignalKind,
    /// Declared most significant index.
    pub msb: i32,
    /// Declared least significant index.
    pub lsb: i32,
    /// Address of word 0 for arrays.
    pub array_base: i32,
    /// One nexus per array word.
    pub words: Vec<NexusId>,
    /// Module path delays ending at this signal.
    pub paths: Vec<DelayPath>,
    /// Source attributes.
    pub attributes: Vec<Attribute>,
}

impl Signal {
    /// Creates an unsigned 4-state net `[width-1:0]` with no words yet.
    pub fn new(name: Ident, scope: ScopeId, width: u32) -> Self {
        Self {
            name,
            scope,
            width,
            signed: false,
            data_type: DataType::Logic,
            port: PortDirection::None,
            kind: SignalKind::Tri,
            msb: width.saturating_sub(1) as i32,
            lsb: 0,
            array_base: 0,
            words: Vec::new(),
            paths: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Returns the number of array words.
    pub fn array_count(&self) -> usize {
        self.words.len()
    }
}
