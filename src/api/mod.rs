//! Purpose: Define the stable public Rust API boundary for optfield.
//! Exports: Container type, read trait, field predicates, and JSON codec helpers.
//! Role: Public, additive-only surface; hides internal module layout.
//! Invariants: Everything a caller needs is reachable from here or the crate root.

pub use crate::core::field::{self, is_absent, is_unset};
pub use crate::core::maybe::Maybe;
pub use crate::core::presence::Presence;
pub use crate::json::codec::{
    self, FailureCategory, categorize_error, decode_into, from_slice, hint_for_error, to_string,
    to_vec,
};
