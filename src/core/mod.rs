//! Core data types for magicsniff.
//!
//! These are the values that flow through the sniffing runtime: validated
//! MIME type keys, shareable signature predicates, and detection results.

pub mod detection;
pub mod mime_type;
pub mod predicate;

pub use detection::{Detection, DetectionSource};
pub use mime_type::{MimeType, OCTET_STREAM};
pub use predicate::Predicate;
