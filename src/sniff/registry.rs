//! Caller-registered signature overrides.
//!
//! The registry is an ordered list of `(MimeType, Predicate)` pairs that the
//! dispatcher consults before the built-in catalog. Entries keep the
//! position of their first registration; registering an existing key again
//! swaps the predicate in place.
//!
//! Storage is copy-on-write: writers clone the list, modify it and publish a
//! new `Arc`, while readers grab the current `Arc` and evaluate predicates
//! with no lock held. A predicate may therefore register further entries
//! without deadlocking, and a sniff in flight never observes a half-applied
//! update.

use crate::core::{MimeType, Predicate};
use crate::error::Result;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, trace};

/// One registered override.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub mime: MimeType,
    pub predicate: Predicate,
}

/// An immutable view of the registry at one point in time.
pub type RegistrySnapshot = Arc<Vec<RegistryEntry>>;

/// Shared, mutable set of signature overrides.
///
/// Cloning a `Registry` yields a handle to the same underlying entries.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Arc<RwLock<RegistrySnapshot>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `predicate` under `mime_type`, reporting invalid keys.
    pub fn try_register<P>(&self, mime_type: &str, predicate: P) -> Result<()>
    where
        P: Into<Predicate>,
    {
        let mime = MimeType::parse(mime_type)?;
        self.insert(mime, predicate.into());
        Ok(())
    }

    /// Register `predicate` under `mime_type`.
    ///
    /// Invalid MIME types are dropped without any signal.
    pub fn register<P>(&self, mime_type: &str, predicate: P)
    where
        P: Into<Predicate>,
    {
        if let Err(err) = self.try_register(mime_type, predicate) {
            trace!(error = %err, "registration dropped");
        }
    }

    /// Insert or replace an already validated entry.
    pub fn insert(&self, mime: MimeType, predicate: Predicate) {
        let mut guard = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = Vec::clone(&guard);

        match next.iter_mut().find(|e| e.mime == mime) {
            Some(existing) => {
                debug!(mime = %mime, "replacing registered signature");
                existing.predicate = predicate;
            }
            None => {
                debug!(mime = %mime, "registering signature");
                next.push(RegistryEntry { mime, predicate });
            }
        }

        *guard = Arc::new(next);
    }

    /// Current entries, in evaluation order.
    pub fn snapshot(&self) -> RegistrySnapshot {
        let guard = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// First registered entry whose predicate matches `data`.
    pub fn find(&self, data: &[u8]) -> Option<MimeType> {
        self.snapshot()
            .iter()
            .find(|e| e.predicate.matches(data))
            .map(|e| e.mime.clone())
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    pub fn contains(&self, mime_type: &str) -> bool {
        let Ok(mime) = MimeType::parse(mime_type) else {
            return false;
        };
        self.snapshot().iter().any(|e| e.mime == mime)
    }

    pub fn keys(&self) -> Vec<MimeType> {
        self.snapshot().iter().map(|e| e.mime.clone()).collect()
    }
}
