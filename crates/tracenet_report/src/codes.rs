//! Diagnostic codes for every defect and degraded-report condition.

use tracenet_diagnostics::{Category, DiagnosticCode};

const fn error(number: u16) -> DiagnosticCode {
    DiagnosticCode::new(Category::Error, number)
}

/// A pin's resolved width differs from what the device requires.
pub const NEXUS_WIDTH: DiagnosticCode = error(201);
/// A gate output (pin 0) is unconnected.
pub const UNCONNECTED_OUTPUT: DiagnosticCode = error(202);
/// A UDP instance's pin count does not match the definition's arity.
pub const UDP_ARITY: DiagnosticCode = error(203);
/// A gate delay is not a number, constant, or signal.
pub const UNSUITABLE_DELAY: DiagnosticCode = error(204);
/// Two signals sharing a nexus have different widths.
pub const SIGNAL_WIDTH: DiagnosticCode = error(205);
/// Two signals sharing a nexus have different value types.
pub const SIGNAL_TYPE: DiagnosticCode = error(206);
/// A constant's width differs from the signal it drives.
pub const CONST_WIDTH: DiagnosticCode = error(207);
/// A constant's type differs from the signal it drives.
pub const CONST_TYPE: DiagnosticCode = error(208);
/// A part select reaches past the end of its vector.
pub const PART_RANGE: DiagnosticCode = error(209);
/// A part select has both a constant base and a variable selector.
pub const PART_BASE_AND_SELECT: DiagnosticCode = error(210);
/// A repeat count is zero, too large, or does not divide the width.
pub const REPEAT_COUNT: DiagnosticCode = error(211);
/// Concatenation inputs do not add up to the output width.
pub const CONCAT_WIDTH: DiagnosticCode = error(212);
/// An array read's word width differs from the device width.
pub const ARRAY_WORD_WIDTH: DiagnosticCode = error(213);
/// A scope other than a task or function carries a definition.
pub const STRAY_DEFINITION: DiagnosticCode = error(214);
/// A UDP table row has the wrong number of levels.
pub const UDP_ROW: DiagnosticCode = error(215);

/// A gate kind the reporter does not know; printed without a keyword.
pub const UNSUPPORTED_GATE: DiagnosticCode = DiagnosticCode::new(Category::Warning, 301);
/// A macro-cell kind the reporter does not know; printed without checks.
pub const UNSUPPORTED_LPM: DiagnosticCode = DiagnosticCode::new(Category::Warning, 302);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_contiguous() {
        let codes = [
            NEXUS_WIDTH,
            UNCONNECTED_OUTPUT,
            UDP_ARITY,
            UNSUITABLE_DELAY,
            SIGNAL_WIDTH,
            SIGNAL_TYPE,
            CONST_WIDTH,
            CONST_TYPE,
            PART_RANGE,
            PART_BASE_AND_SELECT,
            REPEAT_COUNT,
            CONCAT_WIDTH,
            ARRAY_WORD_WIDTH,
            STRAY_DEFINITION,
            UDP_ROW,
        ];
        for (i, code) in codes.iter().enumerate() {
            assert_eq!(code.category, Category::Error);
            assert_eq!(code.number as usize, 201 + i);
        }
    }

    #[test]
    fn warnings_display() {
        assert_eq!(UNSUPPORTED_GATE.to_string(), "W301");
        assert_eq!(UNSUPPORTED_LPM.to_string(), "W302");
    }
}
