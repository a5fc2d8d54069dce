//! Named and implicit events that processes wait on.

use crate::ids::{NexusId, ScopeId};
use serde::{Deserialize, Serialize};
use tracenet_common::Ident;

/// An event and the nexuses whose edges trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Local name.
    pub name: Ident,
    /// The declaring scope.
    pub scope: ScopeId,
    /// Nexuses triggering on any change.
    pub any: Vec<NexusId>,
    /// Nexuses triggering on a falling edge.
    pub neg: Vec<NexusId>,
    /// Nexuses triggering on a rising edge.
    pub pos: Vec<NexusId>,
}
