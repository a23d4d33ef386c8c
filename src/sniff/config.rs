//! Configuration for the sniffing runtime.
//!
//! Every bound that limits how much of a buffer a predicate may look at
//! lives here, with defaults matching the conventional 512-byte magic window
//! and the office container scan limits.

use crate::error::{Result, SniffError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of leading bytes visible to fixed-offset predicates.
pub const DEFAULT_SNIFF_LEN: usize = 512;

/// Default forward window searched for the next ZIP local file header.
pub const DEFAULT_SCAN_WINDOW: usize = 6000;

/// Default number of local-file-header hops taken past the first entry.
pub const DEFAULT_MAX_HOPS: usize = 3;

/// Master configuration for a [`Sniffer`](crate::sniff::api::Sniffer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SniffConfig {
    /// Bytes of the buffer that registry and fixed catalog predicates see.
    pub sniff_len: usize,
    /// Limits for the office container disambiguator.
    pub container: ContainerScanConfig,
}

impl Default for SniffConfig {
    fn default() -> Self {
        Self {
            sniff_len: DEFAULT_SNIFF_LEN,
            container: ContainerScanConfig::default(),
        }
    }
}

impl SniffConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations under which no predicate could ever match.
    pub fn validate(&self) -> Result<()> {
        if self.sniff_len == 0 {
            return Err(SniffError::Config("sniff_len must be non-zero".into()));
        }
        self.container.validate()
    }
}

/// Bounds for the forward local-file-header scan over ZIP packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerScanConfig {
    /// Bytes searched per hop for the next `PK\x03\x04`.
    pub scan_window: usize,
    /// Maximum number of hops past the leading packaging entry.
    pub max_hops: usize,
}

impl Default for ContainerScanConfig {
    fn default() -> Self {
        Self {
            scan_window: DEFAULT_SCAN_WINDOW,
            max_hops: DEFAULT_MAX_HOPS,
        }
    }
}

impl ContainerScanConfig {
    pub fn validate(&self) -> Result<()> {
        if self.scan_window == 0 {
            return Err(SniffError::Config(
                "container.scan_window must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
