//! Validated, case-folded MIME type keys.

use crate::error::{Result, SniffError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The generic binary type returned when nothing more specific is known.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// A lowercase `type/subtype[; parameter=value]` key.
///
/// Construction validates against the media-type grammar and folds the
/// input to lowercase, so two keys compare equal iff their normalized
/// forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MimeType(String);

impl MimeType {
    /// Validate and normalize `input`.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.to_lowercase();
        normalized
            .parse::<mime_guess::Mime>()
            .map_err(|e| SniffError::InvalidMimeType {
                input: input.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self(normalized))
    }

    /// Build a key from a string already known to be valid and lowercase.
    ///
    /// Used for the built-in catalog, whose keys are compile-time constants.
    pub(crate) fn from_static(key: &'static str) -> Self {
        debug_assert!(Self::parse(key).is_ok(), "invalid built-in key {key}");
        Self(key.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `type/subtype` portion, without parameters.
    pub fn essence(&self) -> &str {
        self.0.split(';').next().unwrap_or_default().trim()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for MimeType {
    type Err = SniffError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MimeType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for MimeType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MimeType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for MimeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
