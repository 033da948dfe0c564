//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with descriptive metadata: precedence, associativity and
//! whether the operator may appear inside an expression at all. The parser's precedence ladder is written out by
//! hand; its tests check that the ladder agrees with these tables.
//!
//! ## Notes
//! - `=` is registered here (as an assignment operator) because the lexer produces it from the same scanning
//!   branch as `==`; it never appears inside an expression tree built by the parser.
//!
//! ## Examples
//! ```rust
//! use simplelang_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("+"), Some(OperatorId::Plus));
//! assert!(operators::info_for(OperatorId::Plus).precedence > operators::info_for(OperatorId::EqEq).precedence);
//! ```

use super::registry::{INITIAL_VERSION, SinceVersion, Stability};

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    /// Chaining is a syntax error (`a == b == c`).
    None,
}

/// Broad role of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Arithmetic,
    Comparison,
    Assignment,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,

    // Comparison
    EqEq,

    // Assignment
    Eq,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is relative: higher binds tighter. Assignment has precedence `0` because it is a statement-level
///   marker, not an expression operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
    pub kind: OperatorKind,
    pub since_version: SinceVersion,
    pub stability: Stability,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Plus, "+", 50, Associativity::Left, OperatorKind::Arithmetic),
    op(OperatorId::Minus, "-", 50, Associativity::Left, OperatorKind::Arithmetic),
    op(OperatorId::EqEq, "==", 40, Associativity::None, OperatorKind::Comparison),
    op(OperatorId::Eq, "=", 0, Associativity::None, OperatorKind::Assignment),
];

/// Return the spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return `true` if the operator is allowed as the operator of a binary expression.
pub fn is_binary_expr_operator(id: OperatorId) -> bool {
    !matches!(info_for(id).kind, OperatorKind::Assignment)
}

/// Look up operator metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    associativity: Associativity,
    kind: OperatorKind,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        associativity,
        kind,
        since_version: INITIAL_VERSION,
        stability: Stability::Stable,
    }
}
