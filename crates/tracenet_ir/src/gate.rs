//! Primitive gates, switches, and user-defined-primitive instances.

use crate::attribute::Attribute;
use crate::expr::Expr;
use crate::ids::{NexusId, ScopeId, UdpId};
use crate::nexus::DriveStrength;
use serde::{Deserialize, Serialize};
use tracenet_common::Ident;

/// The function of a primitive gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    /// `and`
    And,
    /// `buf`
    Buf,
    /// `bufif0`
    Bufif0,
    /// `bufif1`
    Bufif1,
    /// A zero-delay continuous-assignment buffer.
    Bufz,
    /// `cmos`
    Cmos,
    /// `nand`
    Nand,
    /// `nmos`
    Nmos,
    /// `nor`
    Nor,
    /// `not`
    Not,
    /// `notif0`
    Notif0,
    /// `notif1`
    Notif1,
    /// `or`
    Or,
    /// `pmos`
    Pmos,
    /// `pulldown`
    Pulldown,
    /// `pullup`
    Pullup,
    /// `rcmos`
    Rcmos,
    /// `rnmos`
    Rnmos,
    /// `rpmos`
    Rpmos,
    /// `xnor`
    Xnor,
    /// `xor`
    Xor,
    /// An instance of a user-defined primitive.
    Udp(UdpId),
    /// A gate type this model has no name for, with the producer's code.
    Unsupported(u32),
}

impl GateKind {
    /// Returns the primitive keyword, or `None` for UDP and unsupported kinds.
    pub fn keyword(self) -> Option<&'static str> {
        let kw = match self {
            GateKind::And => "and",
            GateKind::Buf => "buf",
            GateKind::Bufif0 => "bufif0",
            GateKind::Bufif1 => "bufif1",
            GateKind::Bufz => "bufz",
            GateKind::Cmos => "cmos",
            GateKind::Nand => "nand",
            GateKind::Nmos => "nmos",
            GateKind::Nor => "nor",
            GateKind::Not => "not",
            GateKind::Notif0 => "notif0",
            GateKind::Notif1 => "notif1",
            GateKind::Or => "or",
            GateKind::Pmos => "pmos",
            GateKind::Pulldown => "pulldown",
            GateKind::Pullup => "pullup",
            GateKind::Rcmos => "rcmos",
            GateKind::Rnmos => "rnmos",
            GateKind::Rpmos => "rpmos",
            GateKind::Xnor => "xnor",
            GateKind::Xor => "xor",
            GateKind::Udp(_) | GateKind::Unsupported(_) => return None,
        };
        Some(kw)
    }
}

/// A primitive gate instance.
///
/// Pin 0 is the output; the remaining pins are inputs. Every pin carries a
/// vector of the gate's width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Instance name.
    pub name: Ident,
    /// The scope containing the instance.
    pub scope: ScopeId,
    /// Gate function.
    pub kind: GateKind,
    /// Vector width of every pin.
    pub width: u32,
    /// Pin connections; `None` for an unconnected pin.
    pub pins: Vec<Option<NexusId>>,
    /// Rise, fall, and turn-off delay expressions.
    pub delays: [Option<Expr>; 3],
    /// Output strength for a logic 0.
    pub drive0: DriveStrength,
    /// Output strength for a logic 1.
    pub drive1: DriveStrength,
    /// Source attributes.
    pub attributes: Vec<Attribute>,
}
