//! Purpose: serde `skip_serializing_if` predicates for optional container fields.
//! Exports: `is_unset`, `is_absent`.
//! Role: Attribute helpers used on enclosing structs; no state of their own.
//! Invariants: `is_unset` omits only a never-allocated slot; `Some(absent)` still encodes `null`.
use crate::core::presence::Presence;

/// True when the container slot itself was never set.
///
/// ```
/// use optfield::{Maybe, field};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Profile {
///     #[serde(skip_serializing_if = "field::is_unset")]
///     pronouns: Option<Maybe<String>>,
/// }
///
/// let unset = Profile { pronouns: None };
/// assert_eq!(serde_json::to_string(&unset).unwrap(), "{}");
///
/// let absent = Profile { pronouns: Some(Maybe::absent()) };
/// assert_eq!(serde_json::to_string(&absent).unwrap(), r#"{"pronouns":null}"#);
/// ```
pub fn is_unset<P>(slot: &Option<P>) -> bool {
    slot.is_none()
}

/// True when the slot is unset or holds an absent container.
///
/// Opt-in: fields tagged with this drop absent containers from the output
/// instead of encoding them as `null`.
pub fn is_absent<P: Presence>(slot: &P) -> bool {
    !slot.is_present()
}

#[cfg(test)]
mod tests {
    use super::{is_absent, is_unset};
    use crate::core::maybe::Maybe;

    #[test]
    fn unset_is_only_the_missing_slot() {
        assert!(is_unset::<Maybe<u8>>(&None));
        assert!(!is_unset(&Some(Maybe::<u8>::absent())));
        assert!(!is_unset(&Some(Maybe::present(1u8))));
        assert!(is_unset::<Box<Maybe<u8>>>(&None));
        assert!(!is_unset(&Some(Box::new(Maybe::<u8>::absent()))));
    }

    #[test]
    fn absent_covers_unset_and_empty() {
        assert!(is_absent::<Option<Maybe<u8>>>(&None));
        assert!(is_absent(&Some(Maybe::<u8>::absent())));
        assert!(is_absent(&Maybe::<u8>::absent()));
        assert!(!is_absent(&Some(Maybe::present(0u8))));
    }
}
