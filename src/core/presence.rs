//! Purpose: Total read access over a container that may itself be unset.
//! Exports: `Presence`.
//! Role: Lets `Option<Maybe<T>>` fields read like `Maybe<T>` without unwrapping.
//! Invariants: An unset reference (`None`) reads exactly like an absent container.
//! Invariants: Every accessor is total; none of them can fail or panic.
use std::fmt;

use crate::core::maybe::Maybe;

/// Read side of an optional container.
///
/// Implemented for [`Maybe<T>`], for `Option<P>` where `None` stands for a
/// container that was never allocated, and for references and boxes of
/// either. Nesting composes: `Option<Maybe<Option<Maybe<T>>>>` reads through
/// both layers with [`Presence::get`].
pub trait Presence {
    type Value;

    fn is_present(&self) -> bool;

    fn value_ref(&self) -> Option<&Self::Value>;

    fn get(&self) -> Self::Value
    where
        Self::Value: Clone + Default,
    {
        self.value_ref().cloned().unwrap_or_default()
    }

    fn get_ok(&self) -> (Self::Value, bool)
    where
        Self::Value: Clone + Default,
    {
        (self.get(), self.is_present())
    }

    fn render(&self) -> String
    where
        Self::Value: fmt::Display,
    {
        self.value_ref()
            .map(|value| value.to_string())
            .unwrap_or_default()
    }

    fn render_debug(&self) -> String
    where
        Self::Value: fmt::Debug,
    {
        self.value_ref()
            .map(|value| format!("{value:?}"))
            .unwrap_or_default()
    }
}

impl<T> Presence for Maybe<T> {
    type Value = T;

    fn is_present(&self) -> bool {
        Maybe::is_present(self)
    }

    fn value_ref(&self) -> Option<&T> {
        self.as_option()
    }
}

impl<P: Presence> Presence for Option<P> {
    type Value = P::Value;

    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(P::is_present)
    }

    fn value_ref(&self) -> Option<&P::Value> {
        self.as_ref().and_then(P::value_ref)
    }
}

impl<P: Presence + ?Sized> Presence for &P {
    type Value = P::Value;

    fn is_present(&self) -> bool {
        (**self).is_present()
    }

    fn value_ref(&self) -> Option<&P::Value> {
        (**self).value_ref()
    }
}

impl<P: Presence + ?Sized> Presence for Box<P> {
    type Value = P::Value;

    fn is_present(&self) -> bool {
        (**self).is_present()
    }

    fn value_ref(&self) -> Option<&P::Value> {
        (**self).value_ref()
    }
}
