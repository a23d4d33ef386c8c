//! The dispatch engine.
//!
//! [`Sniffer::sniff`] tries registered overrides, then the built-in catalog,
//! then the generic classifier, and always returns a MIME type.

use super::catalog::Catalog;
use super::config::SniffConfig;
use super::fallback::{ContentClassifier, InferClassifier};
use super::registry::Registry;
use crate::core::{Detection, DetectionSource, Predicate, OCTET_STREAM};
use crate::error::Result;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Owns a registry, the catalog and a fallback classifier.
#[derive(Clone)]
pub struct Sniffer {
    config: SniffConfig,
    registry: Registry,
    catalog: Catalog,
    fallback: Arc<dyn ContentClassifier>,
}

impl Default for Sniffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sniffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sniffer")
            .field("config", &self.config)
            .field("registered", &self.registry.len())
            .field("catalog", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

impl Sniffer {
    /// A sniffer with an empty registry and default limits.
    pub fn new() -> Self {
        Self::with_config(SniffConfig::default())
    }

    pub fn with_config(config: SniffConfig) -> Self {
        Self {
            catalog: Catalog::new(&config),
            config,
            registry: Registry::new(),
            fallback: Arc::new(InferClassifier),
        }
    }

    /// Load limits from a JSON file.
    pub fn from_config_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Ok(Self::with_config(SniffConfig::from_json_file(path)?))
    }

    /// Share `registry` with this sniffer instead of a private one.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the generic classifier consulted when nothing else matches.
    pub fn with_fallback<C>(mut self, fallback: C) -> Self
    where
        C: ContentClassifier + 'static,
    {
        self.fallback = Arc::new(fallback);
        self
    }

    pub fn config(&self) -> &SniffConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Register an override; invalid MIME types are silently dropped.
    pub fn register<P>(&self, mime_type: &str, predicate: P)
    where
        P: Into<Predicate>,
    {
        self.registry.register(mime_type, predicate);
    }

    /// Register an override, reporting an invalid MIME type.
    pub fn try_register<P>(&self, mime_type: &str, predicate: P) -> Result<()>
    where
        P: Into<Predicate>,
    {
        self.registry.try_register(mime_type, predicate)
    }

    /// The MIME type of `data`. Never fails.
    pub fn sniff(&self, data: &[u8]) -> String {
        self.detect(data).into_mime()
    }

    /// The MIME type of `data` along with the stage that decided it.
    pub fn detect(&self, data: &[u8]) -> Detection {
        if data.is_empty() {
            return Detection::new(OCTET_STREAM, DetectionSource::Empty);
        }

        let window = &data[..data.len().min(self.config.sniff_len)];

        if let Some(mime) = self.registry.find(window) {
            debug!(mime = %mime, len = data.len(), "registered signature matched");
            return Detection::new(mime.into_string(), DetectionSource::Registry);
        }

        if let Some(sig) = self.catalog.find(data) {
            debug!(mime = sig.mime, len = data.len(), "built-in signature matched");
            return Detection::new(sig.mime, DetectionSource::Catalog);
        }

        let mut mime = self.fallback.classify(window);
        if mime.is_empty() {
            mime = OCTET_STREAM.to_string();
        }
        trace!(mime = %mime, len = data.len(), "no signature matched, using fallback");
        Detection::new(mime, DetectionSource::Fallback)
    }
}
