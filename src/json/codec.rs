//! Purpose: Provide the JSON encode/decode entrypoints used by containers and callers.
//! Exports: `to_vec`, `to_string`, `from_slice`, `decode_into`, `FailureCategory`,
//! `categorize_error`, `hint_for_error`.
//! Role: Codec boundary that centralizes serde_json usage details.
//! Invariants: Errors are returned exactly as serde_json produced them.
//! Invariants: Diagnostics never echo payload bytes, only category and position.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureCategory {
    Io,
    Syntax,
    Data,
    Eof,
}

impl FailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            FailureCategory::Io => "io",
            FailureCategory::Syntax => "syntax",
            FailureCategory::Data => "data",
            FailureCategory::Eof => "eof",
        }
    }
}

pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let bytes = serde_json::to_vec(value)?;
    tracing::trace!(len = bytes.len(), "json encoded");
    Ok(bytes)
}

pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let text = serde_json::to_string(value)?;
    tracing::trace!(len = text.len(), "json encoded");
    Ok(text)
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T, serde_json::Error> {
    tracing::trace!(len = input.len(), "json decode");
    serde_json::from_slice(input).inspect_err(log_failure)
}

/// Decode `input` into an existing value through `deserialize_in_place`.
///
/// Types that track state across decodes (such as `Maybe`) see the target
/// before the payload is parsed. Trailing non-whitespace input is an error.
pub fn decode_into<'de, T: Deserialize<'de>>(
    input: &'de [u8],
    place: &mut T,
) -> Result<(), serde_json::Error> {
    tracing::trace!(len = input.len(), "json decode in place");
    let mut deserializer = serde_json::Deserializer::from_slice(input);
    T::deserialize_in_place(&mut deserializer, place)
        .and_then(|()| deserializer.end())
        .inspect_err(log_failure)
}

pub fn categorize_error(err: &serde_json::Error) -> FailureCategory {
    match err.classify() {
        serde_json::error::Category::Io => FailureCategory::Io,
        serde_json::error::Category::Syntax => FailureCategory::Syntax,
        serde_json::error::Category::Data => FailureCategory::Data,
        serde_json::error::Category::Eof => FailureCategory::Eof,
    }
}

pub fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    format!(
        "parse category: {}; context: {context}; line {} column {}",
        categorize_error(err).label(),
        err.line(),
        err.column()
    )
}

fn log_failure(err: &serde_json::Error) {
    tracing::debug!(
        category = categorize_error(err).label(),
        line = err.line(),
        column = err.column(),
        "json decode failed"
    );
}
