//! Detection results and their provenance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which stage of the dispatch produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionSource {
    /// The buffer was empty; nothing was consulted.
    Empty,
    /// A caller-registered predicate matched.
    Registry,
    /// A built-in signature matched.
    Catalog,
    /// The generic classifier decided.
    Fallback,
}

impl fmt::Display for DetectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DetectionSource::Empty => "empty",
            DetectionSource::Registry => "registry",
            DetectionSource::Catalog => "catalog",
            DetectionSource::Fallback => "fallback",
        };
        f.write_str(s)
    }
}

/// A sniffed MIME type together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub mime: String,
    pub source: DetectionSource,
}

impl Detection {
    pub fn new(mime: impl Into<String>, source: DetectionSource) -> Self {
        Self {
            mime: mime.into(),
            source,
        }
    }

    /// Conventional file extensions for the detected type.
    ///
    /// Informational only; extensions never take part in detection.
    pub fn extensions(&self) -> &'static [&'static str] {
        let essence = self.mime.split(';').next().unwrap_or_default().trim();
        mime_guess::get_mime_extensions_str(essence).unwrap_or(&[])
    }

    pub fn into_mime(self) -> String {
        self.mime
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.mime, self.source)
    }
}
