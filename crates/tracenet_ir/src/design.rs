//! Top-level design container.
//!
//! A [`Design`] owns every entity of an elaborated netlist. It is produced
//! once (by an elaborator or [`DesignBuilder`](crate::builder::DesignBuilder))
//! and only read afterwards.

use crate::arena::{Arena, ArenaId};
use crate::const_value::NetConst;
use crate::error::HierarchyError;
use crate::event::Event;
use crate::gate::{Gate, GateKind};
use crate::ids::{
    ConstId, EventId, GateId, LpmId, NexusId, ProcessId, ScopeId, SignalId, UdpId,
};
use crate::lpm::{Lpm, LpmKind};
use crate::nexus::{Nexus, PointerTarget};
use crate::process::Process;
use crate::scope::Scope;
use crate::signal::Signal;
use crate::udp::UdpDefinition;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracenet_common::{Ident, Interner};

/// A complete elaborated design.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Design {
    /// String table for every name in the design.
    pub names: Interner,
    /// All scopes.
    pub scopes: Arena<ScopeId, Scope>,
    /// All signals.
    pub signals: Arena<SignalId, Signal>,
    /// All connection points.
    pub nexuses: Arena<NexusId, Nexus>,
    /// All primitive gates.
    pub gates: Arena<GateId, Gate>,
    /// All macro-cell devices.
    pub lpms: Arena<LpmId, Lpm>,
    /// All user-defined primitive definitions.
    pub udps: Arena<UdpId, UdpDefinition>,
    /// All constant drivers.
    pub consts: Arena<ConstId, NetConst>,
    /// All events.
    pub events: Arena<EventId, Event>,
    /// Behavioral processes in elaboration order.
    pub processes: Arena<ProcessId, Process>,
    /// Root scopes in order.
    pub roots: Vec<ScopeId>,
}

impl Design {
    /// Resolves an interned name.
    pub fn name(&self, ident: Ident) -> &str {
        self.names.resolve(ident)
    }

    /// Returns the full hierarchical name of a scope.
    pub fn scope_name(&self, scope: ScopeId) -> &str {
        self.name(self.scopes[scope].name)
    }

    /// Returns the hierarchical name of a signal, `<scope>.<name>`.
    pub fn full_name(&self, signal: SignalId) -> String {
        let sig = &self.signals[signal];
        format!("{}.{}", self.scope_name(sig.scope), self.name(sig.name))
    }

    /// Returns the display name of a nexus, or `""` for an unconnected pin.
    pub fn nexus_name(&self, nexus: Option<NexusId>) -> &str {
        match nexus {
            Some(id) => self.name(self.nexuses[id].name),
            None => "",
        }
    }

    /// Returns the scope whose child list contains `scope`.
    pub fn parent_of(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes
            .iter()
            .find(|(_, s)| s.children.contains(&scope))
            .map(|(id, _)| id)
    }

    /// Checks that every id is in range and the scopes form a forest.
    ///
    /// After this succeeds every scope is reachable from at most one root,
    /// along exactly one path, so a recursive walk visits it at most once.
    pub fn check_hierarchy(&self) -> Result<(), HierarchyError> {
        self.check_references()?;

        let mut graph: DiGraph<ScopeId, ()> = DiGraph::with_capacity(self.scopes.len(), 0);
        for (id, _) in self.scopes.iter() {
            graph.add_node(id);
        }
        for (id, scope) in self.scopes.iter() {
            for child in &scope.children {
                graph.add_edge(node(id), node(*child), ());
            }
        }

        let mut seen_roots = HashSet::new();
        for &root in &self.roots {
            if !seen_roots.insert(root) {
                return Err(HierarchyError::DuplicateRoot(self.scope_name(root).to_string()));
            }
            if graph
                .neighbors_directed(node(root), Direction::Incoming)
                .next()
                .is_some()
            {
                return Err(HierarchyError::RootHasParent(self.scope_name(root).to_string()));
            }
        }

        for idx in graph.node_indices() {
            if graph.edges_directed(idx, Direction::Incoming).count() > 1 {
                let scope = graph[idx];
                return Err(HierarchyError::MultipleParents(
                    self.scope_name(scope).to_string(),
                ));
            }
        }

        toposort(&graph, None).map_err(|cycle| {
            HierarchyError::Cycle(self.scope_name(graph[cycle.node_id()]).to_string())
        })?;
        Ok(())
    }

    fn check_references(&self) -> Result<(), HierarchyError> {
        for &root in &self.roots {
            check_id(&self.scopes, root, "the root list", "scope")?;
        }
        for (id, scope) in self.scopes.iter() {
            let owner = || format!("scope #{}", id.as_raw());
            check_all(&self.scopes, &scope.children, owner, "scope")?;
            check_all(&self.signals, &scope.signals, owner, "signal")?;
            check_all(&self.events, &scope.events, owner, "event")?;
            check_all(&self.gates, &scope.gates, owner, "gate")?;
            check_all(&self.lpms, &scope.lpms, owner, "lpm")?;
        }
        for (id, sig) in self.signals.iter() {
            let owner = || format!("signal #{}", id.as_raw());
            check_id(&self.scopes, sig.scope, owner(), "scope")?;
            check_all(&self.nexuses, &sig.words, owner, "nexus")?;
            for path in &sig.paths {
                check_id(&self.nexuses, path.source, owner(), "nexus")?;
                check_opt(&self.nexuses, path.condition, owner, "nexus")?;
            }
        }
        for (id, nex) in self.nexuses.iter() {
            let owner = format!("nexus #{}", id.as_raw());
            for ptr in &nex.pointers {
                match ptr.target {
                    PointerTarget::Signal(s) => check_id(&self.signals, s, owner.clone(), "signal")?,
                    PointerTarget::Gate(g) => check_id(&self.gates, g, owner.clone(), "gate")?,
                    PointerTarget::Lpm(l) => check_id(&self.lpms, l, owner.clone(), "lpm")?,
                    PointerTarget::Const(c) => check_id(&self.consts, c, owner.clone(), "constant")?,
                    PointerTarget::Unknown => {}
                }
            }
        }
        for (id, gate) in self.gates.iter() {
            let owner = || format!("gate #{}", id.as_raw());
            check_id(&self.scopes, gate.scope, owner(), "scope")?;
            for pin in &gate.pins {
                check_opt(&self.nexuses, *pin, owner, "nexus")?;
            }
            if let GateKind::Udp(udp) = gate.kind {
                check_id(&self.udps, udp, owner(), "primitive definition")?;
            }
        }
        for (id, lpm) in self.lpms.iter() {
            let owner = || format!("lpm #{}", id.as_raw());
            check_id(&self.scopes, lpm.scope, owner(), "scope")?;
            check_opt(&self.nexuses, lpm.q, owner, "nexus")?;
            for pin in &lpm.data {
                check_opt(&self.nexuses, *pin, owner, "nexus")?;
            }
            match &lpm.kind {
                LpmKind::Mux { select, .. }
                | LpmKind::PartVp { select, .. }
                | LpmKind::PartPv { select, .. } => {
                    check_opt(&self.nexuses, *select, owner, "nexus")?;
                }
                LpmKind::Array { array, address, .. } => {
                    check_id(&self.signals, *array, owner(), "signal")?;
                    check_opt(&self.nexuses, *address, owner, "nexus")?;
                }
                LpmKind::Ff { clock, enable } => {
                    check_opt(&self.nexuses, *clock, owner, "nexus")?;
                    check_opt(&self.nexuses, *enable, owner, "nexus")?;
                }
                LpmKind::Ufunc { definition } => {
                    check_id(&self.scopes, *definition, owner(), "scope")?;
                }
                _ => {}
            }
        }
        for (id, ev) in self.events.iter() {
            let owner = || format!("event #{}", id.as_raw());
            check_id(&self.scopes, ev.scope, owner(), "scope")?;
            check_all(&self.nexuses, &ev.any, owner, "nexus")?;
            check_all(&self.nexuses, &ev.neg, owner, "nexus")?;
            check_all(&self.nexuses, &ev.pos, owner, "nexus")?;
        }
        for (id, proc) in self.processes.iter() {
            check_id(&self.scopes, proc.scope, format!("process #{}", id.as_raw()), "scope")?;
        }
        Ok(())
    }
}

fn node(scope: ScopeId) -> NodeIndex {
    NodeIndex::new(scope.as_raw() as usize)
}

fn check_id<I: ArenaId, T>(
    arena: &Arena<I, T>,
    id: I,
    owner: impl Into<String>,
    kind: &'static str,
) -> Result<(), HierarchyError> {
    if arena.contains(id) {
        Ok(())
    } else {
        Err(HierarchyError::DanglingReference {
            owner: owner.into(),
            kind,
            index: id.as_raw(),
        })
    }
}

fn check_opt<I: ArenaId, T>(
    arena: &Arena<I, T>,
    id: Option<I>,
    owner: impl Fn() -> String,
    kind: &'static str,
) -> Result<(), HierarchyError> {
    match id {
        Some(id) => check_id(arena, id, owner(), kind),
        None => Ok(()),
    }
}

fn check_all<I: ArenaId, T>(
    arena: &Arena<I, T>,
    ids: &[I],
    owner: impl Fn() -> String,
    kind: &'static str,
) -> Result<(), HierarchyError> {
    ids.iter()
        .try_for_each(|&id| check_id(arena, id, owner(), kind))
}
