//! Purpose: JSON codec boundary shared by the container and its callers.
//! Exports: `codec` module with encode/decode helpers and failure categorization.
//! Role: Single seam for serde_json so callsites avoid ad hoc encode/decode logic.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub mod codec;
