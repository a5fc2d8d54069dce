//! The immutable netlist model inspected by the tracenet reporter.
//!
//! An elaborator produces a [`Design`]: a forest of [`Scope`]s holding
//! [`Signal`]s, primitive [`Gate`]s, macro-cell [`Lpm`] devices and events,
//! all wired together through [`Nexus`] connection points. Behavioral code
//! lives in [`Process`]es and scope definitions as [`Statement`] trees.
//!
//! Every entity is stored in a dense [`Arena`](arena::Arena) owned by the
//! design and referred to by an opaque `u32` id.

#![warn(missing_docs)]

pub mod arena;
pub mod attribute;
pub mod builder;
pub mod const_value;
pub mod design;
pub mod error;
pub mod event;
pub mod expr;
pub mod gate;
pub mod ids;
pub mod lpm;
pub mod nexus;
pub mod process;
pub mod scope;
pub mod signal;
pub mod stmt;
pub mod udp;

pub use arena::{Arena, ArenaId};
pub use attribute::{AttrValue, Attribute};
pub use builder::DesignBuilder;
pub use const_value::{ConstValue, NetConst};
pub use design::Design;
pub use error::HierarchyError;
pub use event::Event;
pub use expr::{BinaryOp, Expr, UnaryOp};
pub use gate::{Gate, GateKind};
pub use ids::{
    ConstId, EventId, GateId, LpmId, NexusId, ProcessId, ScopeId, SignalId, UdpId,
};
pub use lpm::{Lpm, LpmKind, ReduceOp, ShiftDir};
pub use nexus::{DriveStrength, Nexus, NexusPointer, PointerTarget};
pub use process::{Process, ProcessKind};
pub use scope::{Parameter, Scope, ScopeKind};
pub use signal::{DataType, DelayPath, PortDirection, Signal, SignalKind};
pub use stmt::{CaseArm, Statement};
pub use udp::UdpDefinition;
