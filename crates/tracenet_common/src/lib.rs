//! Shared foundational types used across the tracenet workspace.
//!
//! This crate provides interned identifiers, 4-state logic levels and packed
//! logic vectors for constant payloads, streaming content hashes for report
//! fingerprints, and the internal error type.

#![warn(missing_docs)]

pub mod hash;
pub mod ident;
pub mod logic;
pub mod logic_vec;
pub mod result;

pub use hash::{ContentHash, ContentHasher};
pub use ident::{Ident, Interner};
pub use logic::Logic;
pub use logic_vec::LogicVec;
pub use result::{InternalError, TraceResult};
