//! Programmatic construction of a [`Design`].
//!
//! Producers and tests use [`DesignBuilder`] instead of filling arenas by
//! hand. The builder keeps the scope entity lists and the nexus pointer
//! lists consistent: connecting a pin appends one [`NexusPointer`] to the
//! nexus, in call order.

use crate::attribute::{AttrValue, Attribute};
use crate::const_value::NetConst;
use crate::design::Design;
use crate::event::Event;
use crate::expr::Expr;
use crate::gate::{Gate, GateKind};
use crate::ids::{
    ConstId, EventId, GateId, LpmId, NexusId, ProcessId, ScopeId, SignalId, UdpId,
};
use crate::lpm::{Lpm, LpmKind};
use crate::nexus::{DriveStrength, Nexus, NexusPointer, PointerTarget};
use crate::process::{Process, ProcessKind};
use crate::scope::{Parameter, Scope, ScopeKind};
use crate::signal::Signal;
use crate::stmt::Statement;
use crate::udp::UdpDefinition;
use tracenet_common::{Ident, Logic};

/// Incrementally assembles a [`Design`].
#[derive(Debug, Default)]
pub struct DesignBuilder {
    design: Design,
}

impl DesignBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a name in the design's string table.
    pub fn intern(&mut self, name: &str) -> Ident {
        self.design.names.intern(name)
    }

    /// Creates a key/value attribute.
    pub fn attribute(&mut self, key: &str, value: AttrValue) -> Attribute {
        Attribute::new(self.intern(key), value)
    }

    /// Adds a root scope whose full name is its basename.
    pub fn root_scope(&mut self, name: &str, tname: &str, kind: ScopeKind) -> ScopeId {
        let full = self.intern(name);
        let tname = self.intern(tname);
        let id = self.design.scopes.alloc(Scope::new(full, full, tname, kind));
        self.design.roots.push(id);
        id
    }

    /// Adds a child scope named `<parent>.<basename>`.
    pub fn child_scope(
        &mut self,
        parent: ScopeId,
        basename: &str,
        tname: &str,
        kind: ScopeKind,
    ) -> ScopeId {
        let full = format!("{}.{}", self.design.scope_name(parent), basename);
        let full = self.intern(&full);
        let base = self.intern(basename);
        let tname = self.intern(tname);
        let mut scope = Scope::new(full, base, tname, kind);
        scope.time_units = self.design.scopes[parent].time_units;
        let id = self.design.scopes.alloc(scope);
        self.design.scopes[parent].children.push(id);
        id
    }

    /// Returns a scope for in-place edits (time units, attributes).
    pub fn scope_mut(&mut self, scope: ScopeId) -> &mut Scope {
        &mut self.design.scopes[scope]
    }

    /// Adds a parameter to a scope.
    pub fn parameter(&mut self, scope: ScopeId, name: &str, value: Expr) {
        let name = self.intern(name);
        self.design.scopes[scope].params.push(Parameter { name, value });
    }

    /// Attaches a task or function body to a scope.
    pub fn definition(&mut self, scope: ScopeId, body: Statement) {
        self.design.scopes[scope].def = Some(body);
    }

    /// Adds a nexus with no endpoints.
    pub fn nexus(&mut self, name: &str) -> NexusId {
        let name = self.intern(name);
        self.design.nexuses.alloc(Nexus::new(name))
    }

    /// Appends an endpoint to a nexus.
    pub fn connect(&mut self, nexus: NexusId, pointer: NexusPointer) {
        self.design.nexuses[nexus].pointers.push(pointer);
    }

    /// Adds a single-word signal on a fresh nexus named after it.
    pub fn signal(&mut self, scope: ScopeId, name: &str, width: u32) -> SignalId {
        let full = format!("{}.{}", self.design.scope_name(scope), name);
        let nexus = self.nexus(&full);
        self.signal_on(scope, name, width, nexus)
    }

    /// Adds a single-word signal whose word 0 is an existing nexus.
    pub fn signal_on(
        &mut self,
        scope: ScopeId,
        name: &str,
        width: u32,
        nexus: NexusId,
    ) -> SignalId {
        self.array_signal_on(scope, name, width, &[nexus])
    }

    /// Adds an array signal with `words` fresh nexuses, named `<sig>[i]`.
    pub fn array_signal(
        &mut self,
        scope: ScopeId,
        name: &str,
        width: u32,
        words: u32,
    ) -> SignalId {
        let full = format!("{}.{}", self.design.scope_name(scope), name);
        let nexuses: Vec<_> = (0..words)
            .map(|i| self.nexus(&format!("{full}[{i}]")))
            .collect();
        self.array_signal_on(scope, name, width, &nexuses)
    }

    fn array_signal_on(
        &mut self,
        scope: ScopeId,
        name: &str,
        width: u32,
        words: &[NexusId],
    ) -> SignalId {
        let name = self.intern(name);
        let mut sig = Signal::new(name, scope, width);
        sig.words = words.to_vec();
        let id = self.design.signals.alloc(sig);
        for (word, &nexus) in words.iter().enumerate() {
            self.connect(
                nexus,
                NexusPointer::passive(PointerTarget::Signal(id), word as u32),
            );
        }
        self.design.scopes[scope].signals.push(id);
        id
    }

    /// Returns a signal for in-place edits (type, port, paths).
    pub fn signal_mut(&mut self, signal: SignalId) -> &mut Signal {
        &mut self.design.signals[signal]
    }

    /// Returns the nexus of word 0 of a signal.
    pub fn nexus_of(&self, signal: SignalId) -> NexusId {
        self.design.signals[signal].words[0]
    }

    /// Adds a primitive gate with strong output drive and no delays.
    ///
    /// Pin 0 is connected with the gate's drive strengths; input pins are
    /// connected passively.
    pub fn gate(
        &mut self,
        scope: ScopeId,
        name: &str,
        kind: GateKind,
        width: u32,
        pins: &[Option<NexusId>],
    ) -> GateId {
        let name = self.intern(name);
        let id = self.design.gates.alloc(Gate {
            name,
            scope,
            kind,
            width,
            pins: pins.to_vec(),
            delays: [None, None, None],
            drive0: DriveStrength::Strong,
            drive1: DriveStrength::Strong,
            attributes: Vec::new(),
        });
        for (pin, nexus) in pins.iter().enumerate() {
            let Some(nexus) = *nexus else { continue };
            let mut ptr = NexusPointer::passive(PointerTarget::Gate(id), pin as u32);
            if pin == 0 {
                ptr.drive0 = DriveStrength::Strong;
                ptr.drive1 = DriveStrength::Strong;
            }
            self.connect(nexus, ptr);
        }
        self.design.scopes[scope].gates.push(id);
        id
    }

    /// Returns a gate for in-place edits (delays, attributes).
    pub fn gate_mut(&mut self, gate: GateId) -> &mut Gate {
        &mut self.design.gates[gate]
    }

    /// Adds a macro-cell device and connects its pins.
    ///
    /// `q` is pin 0 and data input `i` is pin `i + 1`; select, clock,
    /// enable and address inputs named by `kind` are connected after them.
    pub fn lpm(
        &mut self,
        scope: ScopeId,
        name: &str,
        width: u32,
        kind: LpmKind,
        q: Option<NexusId>,
        data: &[Option<NexusId>],
    ) -> LpmId {
        let name = self.intern(name);
        let extra: Vec<NexusId> = match &kind {
            LpmKind::Mux { select, .. }
            | LpmKind::PartVp { select, .. }
            | LpmKind::PartPv { select, .. } => select.iter().copied().collect(),
            LpmKind::Array { address, .. } => address.iter().copied().collect(),
            LpmKind::Ff { clock, enable } => clock.iter().chain(enable.iter()).copied().collect(),
            _ => Vec::new(),
        };
        let id = self.design.lpms.alloc(Lpm {
            name,
            scope,
            width,
            signed: false,
            q,
            data: data.to_vec(),
            kind,
        });
        let pins = std::iter::once(q)
            .chain(data.iter().copied())
            .chain(extra.into_iter().map(Some));
        for (pin, nexus) in pins.enumerate() {
            if let Some(nexus) = nexus {
                let ptr = NexusPointer::passive(PointerTarget::Lpm(id), pin as u32);
                self.connect(nexus, ptr);
            }
        }
        self.design.scopes[scope].lpms.push(id);
        id
    }

    /// Drives a nexus with a constant at strong strength.
    pub fn constant(&mut self, nexus: NexusId, value: NetConst) -> ConstId {
        let id = self.design.consts.alloc(value);
        self.connect(
            nexus,
            NexusPointer {
                target: PointerTarget::Const(id),
                pin: 0,
                drive0: DriveStrength::Strong,
                drive1: DriveStrength::Strong,
            },
        );
        id
    }

    /// Adds a user-defined primitive definition.
    pub fn udp(
        &mut self,
        name: &str,
        sequential: bool,
        init: Logic,
        inputs: u32,
        rows: &[&str],
    ) -> UdpId {
        let name = self.intern(name);
        self.design.udps.alloc(UdpDefinition {
            name,
            sequential,
            init,
            inputs,
            rows: rows.iter().map(|r| r.to_string()).collect(),
        })
    }

    /// Adds an event to a scope.
    pub fn event(
        &mut self,
        scope: ScopeId,
        name: &str,
        any: &[NexusId],
        neg: &[NexusId],
        pos: &[NexusId],
    ) -> EventId {
        let name = self.intern(name);
        let id = self.design.events.alloc(Event {
            name,
            scope,
            any: any.to_vec(),
            neg: neg.to_vec(),
            pos: pos.to_vec(),
        });
        self.design.scopes[scope].events.push(id);
        id
    }

    /// Adds a top-level process.
    pub fn process(&mut self, scope: ScopeId, kind: ProcessKind, body: Statement) -> ProcessId {
        self.design.processes.alloc(Process {
            kind,
            scope,
            attributes: Vec::new(),
            body,
        })
    }

    /// Returns a process for in-place edits.
    pub fn process_mut(&mut self, process: ProcessId) -> &mut Process {
        &mut self.design.processes[process]
    }

    /// Finishes construction.
    pub fn finish(self) -> Design {
        self.design
    }
}
