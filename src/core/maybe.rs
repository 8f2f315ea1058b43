//! Purpose: Define `Maybe<T>`, a container that separates "not provided" from a zero value.
//! Exports: `Maybe`.
//! Role: Leaf value type embedded in data-transfer structs; serde hooks delegate to `T`.
//! Invariants: An absent container never exposes `val`; reads mask back to `T::default()`.
//! Invariants: Deserialization always marks the container present, including for `null`.
//! Invariants: Nothing moves a container from present back to absent after construction.
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::core::presence::Presence;
use crate::json::codec;

/// Optional value that tells "not provided" apart from `T::default()`.
///
/// As a direct struct field, tag it `#[serde(default)]`. A missing key then
/// leaves the container absent. Without the attribute serde falls back to
/// decoding `T` from nothing, which fails for most `T` and yields a present
/// `None` for `T = Option<U>`. Fields typed `Option<Maybe<T>>` need no
/// attribute: a missing key leaves the slot unset.
///
/// ```
/// use optfield::Maybe;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Visit {
///     #[serde(default)]
///     count: Maybe<u32>,
/// }
///
/// let visit: Visit = serde_json::from_str("{}").unwrap();
/// assert!(!visit.count.is_present());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maybe<T> {
    val: T,
    present: bool,
}

impl<T> Maybe<T> {
    /// Container holding `value`.
    pub fn present(value: T) -> Self {
        Self {
            val: value,
            present: true,
        }
    }

    /// Container that could hold a `T` but is empty.
    pub fn absent() -> Self
    where
        T: Default,
    {
        Self {
            val: T::default(),
            present: false,
        }
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Held value, or `T::default()` when absent.
    pub fn get(&self) -> T
    where
        T: Clone + Default,
    {
        Presence::get(self)
    }

    /// Shorthand for `(self.get(), self.is_present())`.
    pub fn get_ok(&self) -> (T, bool)
    where
        T: Clone + Default,
    {
        Presence::get_ok(self)
    }

    pub fn as_option(&self) -> Option<&T> {
        if self.present { Some(&self.val) } else { None }
    }

    pub fn into_option(self) -> Option<T> {
        if self.present { Some(self.val) } else { None }
    }

    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        U: Default,
        F: FnOnce(T) -> U,
    {
        match self.into_option() {
            Some(value) => Maybe::present(f(value)),
            None => Maybe::absent(),
        }
    }

    /// Empty string when absent, otherwise the `Display` text of the value.
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        Presence::render(self)
    }

    /// Like [`Maybe::render`] but through `Debug`, for values without `Display`.
    pub fn render_debug(&self) -> String
    where
        T: fmt::Debug,
    {
        Presence::render_debug(self)
    }

    /// Encode as JSON; an absent container encodes as `null`.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error>
    where
        T: Serialize,
    {
        codec::to_vec(self)
    }

    /// Decode JSON into the held value.
    ///
    /// The container is marked present before decoding starts, so it stays
    /// present even when the decoder rejects the input (`null` into an
    /// `i32`, for instance). Errors come back from serde_json untouched.
    pub fn from_json<'de>(&mut self, input: &'de [u8]) -> Result<(), serde_json::Error>
    where
        T: Deserialize<'de>,
    {
        codec::decode_into(input, self)
    }
}

impl<T: Default> Default for Maybe<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T: Default> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::present(value),
            None => Self::absent(),
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Present").field(value).finish(),
            None => f.write_str("Absent"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => value.fmt(f),
            None => Ok(()),
        }
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_option() {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::present)
    }

    fn deserialize_in_place<D: Deserializer<'de>>(
        deserializer: D,
        place: &mut Self,
    ) -> Result<(), D::Error> {
        place.present = true;
        T::deserialize_in_place(deserializer, &mut place.val)
    }
}
