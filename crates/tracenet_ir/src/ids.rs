//! Typed ids for every entity kind in a [`Design`](crate::Design).
//!
//! An id is the position of its entity in the owning arena. Ids serialize
//! as bare integers, which keeps a dumped design compact and lets a
//! producer written in any language emit them directly.

use crate::arena::ArenaId;
use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw arena position.
            pub const fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// The raw arena position.
            pub const fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl ArenaId for $name {
            fn from_raw(index: u32) -> Self {
                $name::from_raw(index)
            }

            fn as_raw(self) -> u32 {
                $name::as_raw(self)
            }
        }
    };
}

define_id!(
    /// A module, function, task or named block.
    ScopeId
);

define_id!(
    /// A signal (net, variable or memory).
    SignalId
);

define_id!(
    /// A connection point joining device pins and signal words.
    NexusId
);

define_id!(
    /// A primitive gate or UDP instance.
    GateId
);

define_id!(
    /// A macro-cell device.
    LpmId
);

define_id!(
    /// A user-defined primitive definition.
    UdpId
);

define_id!(
    /// A constant driving a nexus.
    ConstId
);

define_id!(
    /// A named or implicit event.
    EventId
);

define_id!(
    /// A top-level behavioral process.
    ProcessId
);
