//! Content-type detection from magic numbers.
//!
//! A [`Sniffer`] matches a byte buffer against caller-registered signatures,
//! then a built-in catalog of binary format signatures (including bounded
//! disambiguation of OOXML office packages), and finally a generic
//! `infer`-backed classifier. [`sniff`] and [`register`] operate on a lazily
//! created process-wide instance for callers who do not need their own.

/// Core data types module
pub mod core;
pub mod error;
pub mod logging;
#[cfg(feature = "python-ext")]
pub mod python_bindings;
pub mod sniff;

pub use crate::core::{Detection, DetectionSource, MimeType, Predicate, OCTET_STREAM};
pub use crate::error::{Result, SniffError};
pub use crate::sniff::{ContentClassifier, Registry, SniffConfig, Sniffer};

use std::sync::OnceLock;

static GLOBAL: OnceLock<Sniffer> = OnceLock::new();

/// The process-wide sniffer used by [`register`] and [`sniff`].
pub fn global() -> &'static Sniffer {
    GLOBAL.get_or_init(Sniffer::new)
}

/// Register a signature on the process-wide sniffer.
///
/// Invalid MIME types are silently dropped; see
/// [`Sniffer::try_register`] to detect that case.
pub fn register<P>(mime_type: &str, predicate: P)
where
    P: Into<Predicate>,
{
    global().register(mime_type, predicate);
}

/// Sniff `data` with the process-wide sniffer.
///
/// Considers at most the first 512 bytes for fixed signatures and always
/// returns a valid MIME type, `application/octet-stream` when nothing more
/// specific is known.
pub fn sniff(data: &[u8]) -> String {
    global().sniff(data)
}

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python-ext")]
#[pymodule]
fn magicsniff(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python_bindings::register_python_bindings(m)
}
