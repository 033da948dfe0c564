//! Shareable metadata for `simplelang_core::lang` registries.
//!
//! These types are lightweight and `Copy` so registries can live in `const` tables. Metadata is meant for
//! tooling/docs/diagnostics; enforcement of syntax rules still lives in the lexer/parser.

/// Identify the language version a vocabulary item is available since (e.g. `"0.1.0"`).
pub type SinceVersion = &'static str;

/// Version every item of the initial language carries.
pub const INITIAL_VERSION: SinceVersion = "0.1.0";

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Examples
/// ```rust
/// use simplelang_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(format!("{s:?}"), "Stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}
