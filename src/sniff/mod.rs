//! Signature-based MIME sniffing runtime.
//!
//! Dispatch order is registry overrides, then the built-in catalog, then the
//! generic classifier. See [`api::Sniffer`].

pub mod api;
pub mod catalog;
pub mod config;
pub mod containers;
pub mod fallback;
pub mod registry;
pub mod signatures;

pub use api::Sniffer;
pub use catalog::{Catalog, Matcher, Signature};
pub use config::{ContainerScanConfig, SniffConfig};
pub use containers::OfficeFamily;
pub use fallback::{ContentClassifier, InferClassifier};
pub use registry::{Registry, RegistryEntry, RegistrySnapshot};
