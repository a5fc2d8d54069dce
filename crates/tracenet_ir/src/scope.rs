//! Scopes: modules, task and function definitions, and named blocks.

use crate::attribute::Attribute;
use crate::expr::Expr;
use crate::ids::{EventId, GateId, LpmId, ScopeId, SignalId};
use crate::stmt::Statement;
use serde::{Deserialize, Serialize};
use tracenet_common::Ident;

/// The kind of a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeKind {
    /// A module instance.
    Module,
    /// A function definition.
    Function,
    /// A task definition.
    Task,
    /// A named `begin` block.
    Begin,
    /// A named `fork` block.
    Fork,
}

impl ScopeKind {
    /// Returns `true` for kinds that own a behavioral definition.
    pub fn is_subprogram(self) -> bool {
        matches!(self, ScopeKind::Function | ScopeKind::Task)
    }
}

/// A parameter declared in a scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: Ident,
    /// Value expression.
    pub value: Expr,
}

/// A node of the scope hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    /// Full hierarchical name, e.g. `top.u1.blk`.
    pub name: Ident,
    /// Local name.
    pub basename: Ident,
    /// Definition name: the module, task, or function type name.
    pub tname: Ident,
    /// Scope kind.
    pub kind: ScopeKind,
    /// Time unit exponent, e.g. `-9` for nanoseconds.
    pub time_units: i32,
    /// Source attributes.
    pub attributes: Vec<Attribute>,
    /// Parameters in declaration order.
    pub params: Vec<Parameter>,
    /// Signals in declaration order.
    pub signals: Vec<SignalId>,
    /// Events in declaration order.
    pub events: Vec<EventId>,
    /// Primitive gates.
    pub gates: Vec<GateId>,
    /// Macro-cell devices.
    pub lpms: Vec<LpmId>,
    /// Body of a task or function.
    pub def: Option<Statement>,
    /// Child scopes in elaboration order.
    pub children: Vec<ScopeId>,
}

impl Scope {
    /// Creates an empty scope.
    pub fn new(name: Ident, basename: Ident, tname: Ident, kind: ScopeKind) -> Self {
        Self {
            name,
            basename,
            tname,
            kind,
            time_units: 0,
            attributes: Vec::new(),
            params: Vec::new(),
            signals: Vec::new(),
            events: Vec::new(),
            gates: Vec::new(),
            lpms: Vec::new(),
            def: None,
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subprogram_kinds() {
        assert!(ScopeKind::Function.is_subprogram());
        assert!(ScopeKind::Task.is_subprogram());
        assert!(!ScopeKind::Module.is_subprogram());
        assert!(!ScopeKind::Begin.is_subprogram());
        assert!(!ScopeKind::Fork.is_subprogram());
    }

    #[test]
    fn new_scope_is_empty() {
        let s = Scope::new(
            Ident::from_raw(0),
            Ident::from_raw(0),
            Ident::from_raw(1),
            ScopeKind::Module,
        );
        assert!(s.signals.is_empty());
        assert!(s.children.is_empty());
        assert!(s.def.is_none());
        assert_eq!(s.time_units, 0);
    }
}
