//! Opaque version tokens
//!
//! The service versions the rules collection and each rule with an ETag. The
//! token is an uninterpreted string: it is compared byte-for-byte and sent back
//! exactly as received, surrounding quotes included.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned version token, carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ETag(String);

impl ETag {
    /// Wrap a token exactly as the service sent it.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The token text, for an `If-Match` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap the token for persisting it.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ETag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ETag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ETag {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ETag {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<str> for ETag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ETag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A decoded value together with the version token it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned<T> {
    pub value: T,
    pub etag: ETag,
}

impl<T> Versioned<T> {
    /// Pair `value` with the token it was read at.
    pub fn new(value: T, etag: ETag) -> Self {
        Self { value, etag }
    }

    /// Split into the value and its token.
    pub fn into_parts(self) -> (T, ETag) {
        (self.value, self.etag)
    }
}
