//! Behavioral statements for process bodies and task/function definitions.

use crate::expr::Expr;
use crate::ids::{EventId, ScopeId, SignalId};
use serde::{Deserialize, Serialize};
use tracenet_common::Ident;

/// A case arm in a case statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseArm {
    /// The label expressions to match against.
    pub patterns: Vec<Expr>,
    /// The body to execute when matched.
    pub body: Statement,
}

/// A behavioral statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// A procedural assignment.
    Assign {
        /// The assigned signal.
        target: SignalId,
        /// Word selector for array targets.
        word: Option<Expr>,
        /// The value expression.
        value: Expr,
        /// `<=` instead of `=`.
        nonblocking: bool,
    },
    /// A `begin ... end` block, optionally naming its scope.
    Block {
        /// Scope of a named block.
        scope: Option<ScopeId>,
        /// The statements in execution order.
        stmts: Vec<Statement>,
    },
    /// A `fork ... join` block.
    Fork {
        /// Scope of a named fork.
        scope: Option<ScopeId>,
        /// The parallel threads.
        stmts: Vec<Statement>,
    },
    /// An if-else statement.
    If {
        /// The condition expression.
        condition: Expr,
        /// The body when the condition is true.
        then_body: Box<Statement>,
        /// The optional body when the condition is false.
        else_body: Option<Box<Statement>>,
    },
    /// A case statement.
    Case {
        /// The subject expression being matched.
        subject: Expr,
        /// The match arms.
        arms: Vec<CaseArm>,
        /// The default arm, if any.
        default: Option<Box<Statement>>,
    },
    /// A constant delay `#n stmt`.
    Delay {
        /// Delay in simulation ticks.
        ticks: u64,
        /// The delayed statement.
        body: Box<Statement>,
    },
    /// A computed delay `#(expr) stmt`.
    DelayExpr {
        /// The delay expression.
        delay: Expr,
        /// The delayed statement.
        body: Box<Statement>,
    },
    /// An event wait `@(ev) stmt`.
    Wait {
        /// The events waited on.
        events: Vec<EventId>,
        /// The statement run after the wait.
        body: Box<Statement>,
    },
    /// A `while` loop.
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body: Box<Statement>,
    },
    /// A `repeat (n)` loop.
    Repeat {
        /// The iteration count.
        count: Expr,
        /// The loop body.
        body: Box<Statement>,
    },
    /// A `forever` loop.
    Forever {
        /// The loop body.
        body: Box<Statement>,
    },
    /// A system task call such as `$display`.
    SystemTask {
        /// The task name including the `$`.
        name: Ident,
        /// Call arguments.
        args: Vec<Expr>,
    },
    /// A user task call.
    UserTask {
        /// The task definition scope.
        task: ScopeId,
    },
    /// An event trigger `-> ev`.
    Trigger {
        /// The triggered event.
        event: EventId,
    },
    /// A `disable` of a named block or task.
    Disable {
        /// The disabled scope.
        scope: ScopeId,
    },
    /// An empty statement.
    Nop,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracenet_common::LogicVec;

    #[test]
    fn if_statement() {
        let stmt = Statement::If {
            condition: Expr::number(LogicVec::from_u64(1, 1)),
            then_body: Box::new(Statement::Nop),
            else_body: Some(Box::new(Statement::Nop)),
        };
        if let Statement::If { else_body, .. } = &stmt {
            assert!(else_body.is_some());
        } else {
            panic!("expected If");
        }
    }

    #[test]
    fn case_statement() {
        let arm = CaseArm {
            patterns: vec![Expr::number(LogicVec::from_u64(0, 2))],
            body: Statement::Nop,
        };
        let stmt = Statement::Case {
            subject: Expr::signal(SignalId::from_raw(0)),
            arms: vec![arm],
            default: None,
        };
        if let Statement::Case { arms, default, .. } = &stmt {
            assert_eq!(arms.len(), 1);
            assert!(default.is_none());
        } else {
            panic!("expected Case");
        }
    }

    #[test]
    fn forever_with_delay() {
        let stmt = Statement::Forever {
            body: Box::new(Statement::Delay {
                ticks: 5,
                body: Box::new(Statement::Nop),
            }),
        };
        if let Statement::Forever { body } = &stmt {
            assert!(matches!(**body, Statement::Delay { ticks: 5, .. }));
        } else {
            panic!("expected Forever");
        }
    }

    #[test]
    fn serde_roundtrip() {
        let stmt = Statement::Block {
            scope: None,
            stmts: vec![
                Statement::Assign {
                    target: SignalId::from_raw(1),
                    word: None,
                    value: Expr::ULong(0),
                    nonblocking: true,
                },
                Statement::Trigger {
                    event: EventId::from_raw(0),
                },
            ],
        };
        let json = serde_json::to_string(&stmt).unwrap();
        let back: Statement = serde_json::from_str(&json).unwrap();
        assert_eq!(stmt, back);
    }
}
