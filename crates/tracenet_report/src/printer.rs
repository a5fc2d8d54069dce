//! Rendering of behavioral statements and expressions.
//!
//! Delay expressions, parameter values, task and function definitions and
//! process bodies are all handed to a [`StatementPrinter`]. The reporter
//! only fixes the indentation; the printer decides the text.

use std::io::{self, Write};
use tracenet_ir::{Design, EventId, Expr, ScopeId, SignalId, Statement};

/// Renders behavioral code into the report at a given indentation.
pub trait StatementPrinter {
    /// Writes `stmt` and its nested statements, one construct per line.
    fn print_statement(
        &self,
        design: &Design,
        stmt: &Statement,
        indent: usize,
        out: &mut dyn Write,
    ) -> io::Result<()>;

    /// Writes `expr` as a single line.
    fn print_expression(
        &self,
        design: &Design,
        expr: &Expr,
        indent: usize,
        out: &mut dyn Write,
    ) -> io::Result<()>;
}

/// Prints a compact Verilog-like outline; nested bodies indent by two.
#[derive(Debug, Default, Clone, Copy)]
pub struct OutlinePrinter;

impl OutlinePrinter {
    /// Creates the printer.
    pub fn new() -> Self {
        Self
    }

    /// Renders an expression inline.
    pub fn render(&self, design: &Design, expr: &Expr) -> String {
        match expr {
            Expr::Number { value, signed } => {
                let s = if *signed { "s" } else { "" };
                format!("{}'{s}b{value}", value.width())
            }
            Expr::ULong(n) => n.to_string(),
            Expr::Real(r) => format!("{r:?}"),
            Expr::Str(s) => format!("{s:?}"),
            Expr::Signal { signal, word } => {
                let name = signal_name(design, *signal);
                match word {
                    Some(word) => format!("{name}[{}]", self.render(design, word)),
                    None => name,
                }
            }
            Expr::Scope(scope) => scope_name(design, *scope).to_string(),
            Expr::Select {
                base,
                offset,
                width,
            } => {
                let offset = match offset {
                    Some(off) => self.render(design, off),
                    None => "0".to_string(),
                };
                format!("{}[{offset} +: {width}]", self.render(design, base))
            }
            Expr::Unary { op, operand } => {
                format!("{}{}", op.symbol(), self.render(design, operand))
            }
            Expr::Binary { op, lhs, rhs } => format!(
                "({} {} {})",
                self.render(design, lhs),
                op.symbol(),
                self.render(design, rhs)
            ),
            Expr::Ternary {
                condition,
                true_val,
                false_val,
            } => format!(
                "({} ? {} : {})",
                self.render(design, condition),
                self.render(design, true_val),
                self.render(design, false_val)
            ),
            Expr::Concat { parts, repeat } => {
                let inner = self.render_list(design, parts);
                if *repeat == 1 {
                    format!("{{{inner}}}")
                } else {
                    format!("{{{repeat}{{{inner}}}}}")
                }
            }
            Expr::SystemCall { name, args } => {
                call(design.name(*name), &self.render_list(design, args), args.is_empty())
            }
            Expr::UserCall { function, args } => call(
                scope_name(design, *function),
                &self.render_list(design, args),
                false,
            ),
        }
    }

    fn render_list(&self, design: &Design, exprs: &[Expr]) -> String {
        exprs
            .iter()
            .map(|e| self.render(design, e))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn body(
        &self,
        design: &Design,
        head: &str,
        body: &Statement,
        indent: usize,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(out, "{:indent$}{head}", "")?;
        self.print_statement(design, body, indent + 2, out)
    }

    fn block(
        &self,
        design: &Design,
        (open, close): (&str, &str),
        scope: Option<ScopeId>,
        stmts: &[Statement],
        indent: usize,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        match scope {
            Some(scope) => writeln!(out, "{:indent$}{open} : {}", "", scope_name(design, scope))?,
            None => writeln!(out, "{:indent$}{open}", "")?,
        }
        for stmt in stmts {
            self.print_statement(design, stmt, indent + 2, out)?;
        }
        writeln!(out, "{:indent$}{close}", "")
    }
}

impl StatementPrinter for OutlinePrinter {
    fn print_statement(
        &self,
        design: &Design,
        stmt: &Statement,
        indent: usize,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let pad = "";
        match stmt {
            Statement::Assign {
                target,
                word,
                value,
                nonblocking,
            } => {
                let mut lhs = signal_name(design, *target);
                if let Some(word) = word {
                    lhs = format!("{lhs}[{}]", self.render(design, word));
                }
                let op = if *nonblocking { "<=" } else { "=" };
                writeln!(out, "{pad:indent$}{lhs} {op} {};", self.render(design, value))
            }
            Statement::Block { scope, stmts } => {
                self.block(design, ("begin", "end"), *scope, stmts, indent, out)
            }
            Statement::Fork { scope, stmts } => {
                self.block(design, ("fork", "join"), *scope, stmts, indent, out)
            }
            Statement::If {
                condition,
                then_body,
                else_body,
            } => {
                let head = format!("if ({})", self.render(design, condition));
                self.body(design, &head, then_body, indent, out)?;
                if let Some(else_body) = else_body {
                    self.body(design, "else", else_body, indent, out)?;
                }
                Ok(())
            }
            Statement::Case {
                subject,
                arms,
                default,
            } => {
                writeln!(out, "{pad:indent$}case ({})", self.render(design, subject))?;
                for arm in arms {
                    let head = format!("{}:", self.render_list(design, &arm.patterns));
                    self.body(design, &head, &arm.body, indent + 2, out)?;
                }
                if let Some(default) = default {
                    self.body(design, "default:", default, indent + 2, out)?;
                }
                writeln!(out, "{pad:indent$}endcase")
            }
            Statement::Delay { ticks, body } => {
                self.body(design, &format!("#{ticks}"), body, indent, out)
            }
            Statement::DelayExpr { delay, body } => {
                let head = format!("#({})", self.render(design, delay));
                self.body(design, &head, body, indent, out)
            }
            Statement::Wait { events, body } => {
                let names: Vec<_> = events.iter().map(|&ev| event_name(design, ev)).collect();
                let head = format!("@({})", names.join(" or "));
                self.body(design, &head, body, indent, out)
            }
            Statement::While { condition, body } => {
                let head = format!("while ({})", self.render(design, condition));
                self.body(design, &head, body, indent, out)
            }
            Statement::Repeat { count, body } => {
                let head = format!("repeat ({})", self.render(design, count));
                self.body(design, &head, body, indent, out)
            }
            Statement::Forever { body } => self.body(design, "forever", body, indent, out),
            Statement::SystemTask { name, args } => {
                let text = call(design.name(*name), &self.render_list(design, args), args.is_empty());
                writeln!(out, "{pad:indent$}{text};")
            }
            Statement::UserTask { task } => {
                writeln!(out, "{pad:indent$}call {};", scope_name(design, *task))
            }
            Statement::Trigger { event } => {
                writeln!(out, "{pad:indent$}-> {};", event_name(design, *event))
            }
            Statement::Disable { scope } => {
                writeln!(out, "{pad:indent$}disable {};", scope_name(design, *scope))
            }
            Statement::Nop => writeln!(out, "{pad:indent$};"),
        }
    }

    fn print_expression(
        &self,
        design: &Design,
        expr: &Expr,
        indent: usize,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(out, "{:indent$}{}", "", self.render(design, expr))
    }
}

fn call(name: &str, args: &str, bare: bool) -> String {
    if bare {
        name.to_string()
    } else {
        format!("{name}({args})")
    }
}

fn scope_name(design: &Design, scope: ScopeId) -> &str {
    match design.scopes.try_get(scope) {
        Some(s) => design.name(s.name),
        None => "?",
    }
}

fn signal_name(design: &Design, signal: SignalId) -> String {
    match design.signals.try_get(signal) {
        Some(sig) => format!("{}.{}", scope_name(design, sig.scope), design.name(sig.name)),
        None => "?".to_string(),
    }
}

fn event_name(design: &Design, event: EventId) -> String {
    match design.events.try_get(event) {
        Some(ev) => format!("{}.{}", scope_name(design, ev.scope), design.name(ev.name)),
        None => "?".to_string(),
    }
}
