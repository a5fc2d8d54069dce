//! Nexus width and type resolution.
//!
//! A nexus has no width of its own; it takes the width and value type of
//! the first signal attached to it. Pin checks compare against this shape.

use tracenet_ir::{DataType, Design, NexusId};

/// The width and value type a nexus carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NexusShape {
    /// Width in bits.
    pub width: u32,
    /// Value type.
    pub data_type: DataType,
}

impl NexusShape {
    /// The shape of a nexus with no signal endpoint, or of a missing pin.
    pub const UNDEFINED: NexusShape = NexusShape {
        width: 0,
        data_type: DataType::NoType,
    };

    /// Returns `false` for [`NexusShape::UNDEFINED`].
    pub fn is_defined(&self) -> bool {
        *self != Self::UNDEFINED
    }
}

/// Resolves the shape of `nexus` from its first signal endpoint, in stored
/// pointer order.
pub fn resolve(design: &Design, nexus: Option<NexusId>) -> NexusShape {
    let Some(id) = nexus else {
        return NexusShape::UNDEFINED;
    };
    let Some(nex) = design.nexuses.try_get(id) else {
        tracing::debug!(nexus = id.as_raw(), "nexus id out of range");
        return NexusShape::UNDEFINED;
    };
    let first = nex
        .pointers
        .iter()
        .filter_map(|ptr| ptr.signal())
        .find_map(|sig| design.signals.try_get(sig));
    match first {
        Some(sig) => NexusShape {
            width: sig.width,
            data_type: sig.data_type,
        },
        None => {
            tracing::debug!(nexus = design.name(nex.name), "nexus has no signal endpoint");
            NexusShape::UNDEFINED
        }
    }
}

/// Shorthand for `resolve(design, nexus).width`.
pub fn width_of(design: &Design, nexus: Option<NexusId>) -> u32 {
    resolve(design, nexus).width
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracenet_common::LogicVec;
    use tracenet_ir::{DesignBuilder, GateKind, NetConst, ScopeKind};

    #[test]
    fn first_signal_wins() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        let a = b.signal(top, "a", 8);
        let nex = b.nexus_of(a);
        let alias = b.signal_on(top, "alias", 4, nex);
        b.signal_mut(alias).data_type = DataType::Real;
        let d = b.finish();

        let shape = resolve(&d, Some(nex));
        assert_eq!(shape.width, 8);
        assert_eq!(shape.data_type, DataType::Logic);
    }

    #[test]
    fn non_signal_pointers_are_skipped() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        let nex = b.nexus("n");
        b.constant(nex, NetConst::bits(LogicVec::from_u64(0, 2)));
        b.gate(top, "g", GateKind::Buf, 2, &[Some(nex), None]);
        b.signal_on(top, "late", 2, nex);
        let d = b.finish();
        assert_eq!(width_of(&d, Some(nex)), 2);
    }

    #[test]
    fn no_signal_is_undefined() {
        let mut b = DesignBuilder::new();
        let nex = b.nexus("floating");
        b.constant(nex, NetConst::bits(LogicVec::from_u64(1, 1)));
        let d = b.finish();
        let shape = resolve(&d, Some(nex));
        assert_eq!(shape, NexusShape::UNDEFINED);
        assert!(!shape.is_defined());
    }

    #[test]
    fn missing_pin_is_undefined() {
        let d = DesignBuilder::new().finish();
        assert_eq!(resolve(&d, None), NexusShape::UNDEFINED);
        assert_eq!(resolve(&d, Some(NexusId::from_raw(9))), NexusShape::UNDEFINED);
    }
}
