//! Abstract Syntax Tree definitions for SimpleLang.
//!
//! The tree is a closed set of sum types: every traversal (tree printing, code generation) is an exhaustive `match`.
//! Each composite node owns its children outright; there is no sharing and there are no cycles.

use simplelang_core::lang::operators::OperatorId;

/// Identifier (variable name as written in the source)
pub type Ident = String;

/// A program is a flat sequence of top-level statements
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// Statement forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `int name;`
    VarDecl { name: Ident },
    /// `int name = value;`
    VarDeclAssign { name: Ident, value: Expr },
    /// `name = value;` (the target need not have been declared)
    Assign { name: Ident, value: Expr },
    /// `if (condition) { ... } else { ... }`
    If(IfStmt),
}

/// Conditional statement.
///
/// A missing `else` clause and an empty `else {}` produce the same node: `else_body` is simply empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Vec<Statement>,
    pub else_body: Vec<Statement>,
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Variable reference
    Ident(Ident),
    /// Integer literal
    Int(i64),
    /// `left op right`; the parser only produces `+`, `-` and `==`
    Binary(Box<Expr>, OperatorId, Box<Expr>),
}

impl Expr {
    /// Build a binary expression node.
    pub fn binary(left: Expr, op: OperatorId, right: Expr) -> Self {
        Expr::Binary(Box::new(left), op, Box::new(right))
    }
}
