//! Text canonicalization for free-text survey answers.
//!
//! Currency codes and country names arrive in many spellings. A
//! [`TextCanonicalizer`] resolves them through an alias table and falls back to
//! a field-specific casing rule when no alias matches.

pub mod canonicalize;
pub mod text;

pub use canonicalize::{CaseRule, TextCanonicalizer, canonicalizer_for};
pub use text::{collapse_whitespace, is_blank, title_case};
