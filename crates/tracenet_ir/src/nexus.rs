//! Connection points and the endpoints attached to them.
//!
//! A [`Nexus`] is a node in the netlist graph. Every device pin, signal word
//! and constant that shares the node appears in its pointer list, in the
//! order the elaborator connected them.

use crate::ids::{ConstId, GateId, LpmId, SignalId};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracenet_common::Ident;

/// Drive strength of an endpoint, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum DriveStrength {
    /// High impedance; does not drive.
    #[default]
    HiZ = 0,
    /// Small charge storage.
    Small = 1,
    /// Medium charge storage.
    Medium = 2,
    /// Weak drive.
    Weak = 3,
    /// Large charge storage.
    Large = 4,
    /// Pull drive.
    Pull = 5,
    /// Strong drive, the default for gate outputs.
    Strong = 6,
    /// Supply drive.
    Supply = 7,
}

impl DriveStrength {
    /// Returns the short name used in nexus detail lines.
    pub fn as_str(self) -> &'static str {
        match self {
            DriveStrength::HiZ => "HiZ",
            DriveStrength::Small => "small",
            DriveStrength::Medium => "medium",
            DriveStrength::Weak => "weak",
            DriveStrength::Large => "large",
            DriveStrength::Pull => "pull",
            DriveStrength::Strong => "strong",
            DriveStrength::Supply => "supply",
        }
    }

    /// Returns the numeric level, `0` for `HiZ` through `7` for `Supply`.
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for DriveStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The object on the far side of a nexus pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerTarget {
    /// A word of a signal.
    Signal(SignalId),
    /// A pin of a primitive gate.
    Gate(GateId),
    /// A pin of a macro-cell device.
    Lpm(LpmId),
    /// A constant driver.
    Const(ConstId),
    /// An endpoint the elaborator could not classify.
    Unknown,
}

/// One endpoint attached to a nexus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NexusPointer {
    /// What the pointer connects to.
    pub target: PointerTarget,
    /// Pin number on the target; the word index for signals.
    pub pin: u32,
    /// Strength driven for a logic 0.
    pub drive0: DriveStrength,
    /// Strength driven for a logic 1.
    pub drive1: DriveStrength,
}

impl NexusPointer {
    /// Creates a pointer that drives nothing.
    pub fn passive(target: PointerTarget, pin: u32) -> Self {
        Self {
            target,
            pin,
            drive0: DriveStrength::HiZ,
            drive1: DriveStrength::HiZ,
        }
    }

    /// Returns the signal on the far side, if this is a signal endpoint.
    pub fn signal(&self) -> Option<SignalId> {
        match self.target {
            PointerTarget::Signal(sig) => Some(sig),
            _ => None,
        }
    }
}

/// A connection point shared by device pins, signal words and constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nexus {
    /// Display name, normally the hierarchical name of a connected signal.
    pub name: Ident,
    /// Endpoints in connection order.
    pub pointers: Vec<NexusPointer>,
}

impl Nexus {
    /// Creates a nexus with no endpoints.
    pub fn new(name: Ident) -> Self {
        Self {
            name,
            pointers: Vec::new(),
        }
    }
}
