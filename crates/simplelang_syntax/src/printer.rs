//! Human-readable dumps of the token stream and the AST.
//!
//! These are presentation helpers for the CLI's `--lex`/`--parse`/`--verbose` output. Nothing in the compilation
//! pipeline depends on them.

use std::fmt::Write as _;

use simplelang_core::lang::operators;

use crate::ast::{Expr, IfStmt, Program, Statement};
use crate::lexer::Token;

/// Render one line per token: `Token[i]: KIND (text)`.
///
/// The `(text)` suffix is omitted for tokens with empty text (only `Eof`).
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, tok) in tokens.iter().enumerate() {
        let _ = write!(out, "Token[{}]: {}", i, tok.kind.dump_name());
        if !tok.text.is_empty() {
            let _ = write!(out, " ({})", tok.text);
        }
        out.push('\n');
    }
    out
}

/// Render the AST as an indented tree (two spaces per level).
///
/// ## Examples
/// ```rust
/// use simplelang_syntax::{lexer, parser, printer};
///
/// let program = parser::parse(&lexer::lex("int a = 4;")).unwrap();
/// assert_eq!(printer::render_tree(&program), "Program:\n  VarDeclAssign: a =\n    Number: 4\n");
/// ```
pub fn render_tree(program: &Program) -> String {
    let mut printer = TreePrinter::default();
    printer.line("Program:");
    printer.nested(|p| p.statements(&program.statements));
    printer.out
}

#[derive(Default)]
struct TreePrinter {
    out: String,
    indent: usize,
}

impl TreePrinter {
    fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent += 1;
        f(self);
        self.indent -= 1;
    }

    fn statements(&mut self, stmts: &[Statement]) {
        for stmt in stmts {
            self.statement(stmt);
        }
    }

    fn statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::VarDecl { name } => self.line(format!("VarDecl: {}", name)),
            Statement::VarDeclAssign { name, value } => {
                self.line(format!("VarDeclAssign: {} =", name));
                self.nested(|p| p.expr(value));
            }
            Statement::Assign { name, value } => {
                self.line(format!("Assignment: {} =", name));
                self.nested(|p| p.expr(value));
            }
            Statement::If(stmt) => self.if_stmt(stmt),
        }
    }

    fn if_stmt(&mut self, stmt: &IfStmt) {
        self.line("IfStmt:");
        self.nested(|p| {
            p.line("Condition:");
            p.nested(|p| p.expr(&stmt.condition));

            p.line("Then Body:");
            p.nested(|p| p.statements(&stmt.then_body));

            if !stmt.else_body.is_empty() {
                p.line("Else Body:");
                p.nested(|p| p.statements(&stmt.else_body));
            }
        });
    }

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(name) => self.line(format!("Identifier: {}", name)),
            Expr::Int(value) => self.line(format!("Number: {}", value)),
            Expr::Binary(left, op, right) => {
                self.line(format!("BinaryExpr: {}", operators::as_str(*op)));
                self.nested(|p| {
                    p.expr(left);
                    p.expr(right);
                });
            }
        }
    }
}
