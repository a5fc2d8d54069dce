//! Structural errors found when checking a design before it is reported.

use thiserror::Error;

/// A design whose scope hierarchy or entity references are malformed.
///
/// These are producer bugs severe enough that the design cannot be walked
/// at all, as opposed to the width and type defects the reporter counts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// An id points past the end of its arena.
    #[error("{owner} refers to missing {kind} #{index}")]
    DanglingReference {
        /// Description of the referring object.
        owner: String,
        /// Entity kind of the missing target.
        kind: &'static str,
        /// The out-of-range index.
        index: u32,
    },

    /// The same scope is listed twice among the roots.
    #[error("scope `{0}` is listed as a root more than once")]
    DuplicateRoot(String),

    /// A root scope also appears as the child of another scope.
    #[error("root scope `{0}` is also the child of another scope")]
    RootHasParent(String),

    /// A scope appears in the child lists of two scopes, or twice in one.
    #[error("scope `{0}` has more than one parent")]
    MultipleParents(String),

    /// Following child links leads back to a scope already on the path.
    #[error("scope hierarchy contains a cycle through `{0}`")]
    Cycle(String),
}
