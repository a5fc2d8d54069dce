//! Expression trees for behavioral code.
//!
//! [`Expr`] appears in process bodies, parameter values, and gate delays.
//! The reporter never evaluates expressions; it only hands them to a
//! statement printer and classifies gate delays by shape.

use crate::ids::{ScopeId, SignalId};
use serde::{Deserialize, Serialize};
use tracenet_common::{Ident, LogicVec};

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Bitwise NOT (`~`).
    Not,
    /// Arithmetic negation (`-`).
    Neg,
    /// Reduction AND (`&`).
    RedAnd,
    /// Reduction OR (`|`).
    RedOr,
    /// Reduction XOR (`^`).
    RedXor,
    /// Logical NOT (`!`).
    LogicNot,
}

impl UnaryOp {
    /// Returns the operator's source token.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "~",
            UnaryOp::Neg => "-",
            UnaryOp::RedAnd => "&",
            UnaryOp::RedOr => "|",
            UnaryOp::RedXor => "^",
            UnaryOp::LogicNot => "!",
        }
    }
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
    /// Modulo (`%`).
    Mod,
    /// Exponentiation (`**`).
    Pow,
    /// Bitwise AND (`&`).
    And,
    /// Bitwise OR (`|`).
    Or,
    /// Bitwise XOR (`^`).
    Xor,
    /// Left shift (`<<`).
    Shl,
    /// Right shift (`>>`).
    Shr,
    /// Equality (`==`).
    Eq,
    /// Inequality (`!=`).
    Ne,
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Le,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Ge,
    /// Logical AND (`&&`).
    LogicAnd,
    /// Logical OR (`||`).
    LogicOr,
}

impl BinaryOp {
    /// Returns the operator's source token.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "**",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::LogicAnd => "&&",
            BinaryOp::LogicOr => "||",
        }
    }
}

/// An expression in a behavioral tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A sized 4-state literal.
    Number {
        /// The literal bits.
        value: LogicVec,
        /// Whether the literal is signed.
        signed: bool,
    },
    /// An unsigned machine-word constant.
    ULong(u64),
    /// A real literal.
    Real(f64),
    /// A string literal.
    Str(String),
    /// A signal reference, with a word index for arrays.
    Signal {
        /// The referenced signal.
        signal: SignalId,
        /// Word selector for array signals.
        word: Option<Box<Expr>>,
    },
    /// A reference to a scope, e.g. a task name passed to `$display("%m")`.
    Scope(ScopeId),
    /// A part select `base[offset +: width]`.
    Select {
        /// The expression being selected from.
        base: Box<Expr>,
        /// Bit offset; `None` selects from bit 0.
        offset: Option<Box<Expr>>,
        /// Selected width in bits.
        width: u32,
    },
    /// A unary operation.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand expression.
        operand: Box<Expr>,
    },
    /// A binary operation.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// The left-hand side.
        lhs: Box<Expr>,
        /// The right-hand side.
        rhs: Box<Expr>,
    },
    /// A conditional expression (`cond ? a : b`).
    Ternary {
        /// The condition.
        condition: Box<Expr>,
        /// The value when true.
        true_val: Box<Expr>,
        /// The value when false.
        false_val: Box<Expr>,
    },
    /// A concatenation, repeated `repeat` times (`{n{a, b}}`).
    Concat {
        /// The parts, most significant first.
        parts: Vec<Expr>,
        /// Repeat count; 1 for a plain concatenation.
        repeat: u32,
    },
    /// A system function call such as `$time`.
    SystemCall {
        /// The function name including the `$`.
        name: Ident,
        /// Call arguments.
        args: Vec<Expr>,
    },
    /// A user function call.
    UserCall {
        /// The function definition scope.
        function: ScopeId,
        /// Call arguments.
        args: Vec<Expr>,
    },
}

impl Expr {
    /// A signal reference without a word selector.
    pub fn signal(signal: SignalId) -> Self {
        Expr::Signal { signal, word: None }
    }

    /// An unsigned number literal.
    pub fn number(value: LogicVec) -> Self {
        Expr::Number {
            value,
            signed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_helper() {
        let e = Expr::number(LogicVec::from_u64(3, 4));
        if let Expr::Number { value, signed } = &e {
            assert_eq!(value.width(), 4);
            assert!(!signed);
        } else {
            panic!("expected Number");
        }
    }

    #[test]
    fn signal_helper_has_no_word() {
        let e = Expr::signal(SignalId::from_raw(2));
        assert_eq!(
            e,
            Expr::Signal {
                signal: SignalId::from_raw(2),
                word: None
            }
        );
    }

    #[test]
    fn binary_expr() {
        let e = Expr::Binary {
            op: BinaryOp::Add,
            lhs: Box::new(Expr::ULong(1)),
            rhs: Box::new(Expr::ULong(2)),
        };
        if let Expr::Binary { op, .. } = &e {
            assert_eq!(op.symbol(), "+");
        } else {
            panic!("expected Binary");
        }
    }

    #[test]
    fn unary_symbols_distinct() {
        let ops = [
            UnaryOp::Not,
            UnaryOp::Neg,
            UnaryOp::RedAnd,
            UnaryOp::RedOr,
            UnaryOp::RedXor,
            UnaryOp::LogicNot,
        ];
        for (i, a) in ops.iter().enumerate() {
            for (j, b) in ops.iter().enumerate() {
                assert_eq!(i == j, a.symbol() == b.symbol());
            }
        }
    }

    #[test]
    fn serde_roundtrip() {
        let e = Expr::Ternary {
            condition: Box::new(Expr::signal(SignalId::from_raw(0))),
            true_val: Box::new(Expr::Real(1.5)),
            false_val: Box::new(Expr::Concat {
                parts: vec![Expr::Str("x".into()), Expr::ULong(7)],
                repeat: 2,
            }),
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: Expr = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
