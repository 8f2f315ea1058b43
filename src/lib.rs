//! Purpose: Optional struct fields that tell "not provided" apart from a zero value.
//! Exports: `Maybe`, `Presence`, `field` predicates, and the `api` module (codec helpers).
//! Role: Library crate for data-transfer structs encoded with serde (JSON via serde_json).
//! Invariants: Reads never fail; an unset `Option<Maybe<T>>` reads like an absent container.
//! Invariants: Absent encodes as `null`; decoding always marks a container present.
//! Notes: Direct `Maybe<T>` struct fields need `#[serde(default)]` so a missing key stays absent.
//!
//! ```
//! use optfield::{Maybe, Presence};
//!
//! struct User {
//!     name: String,
//!     visits: Option<Maybe<u32>>,
//! }
//!
//! let user = User { name: "Ernesto".into(), visits: Some(Maybe::present(0)) };
//! if let (visits, true) = user.visits.get_ok() {
//!     println!("{} visited {visits} times", user.name);
//! }
//! ```
pub mod api;
mod core;
mod json;

pub use api::{Maybe, Presence, field};
