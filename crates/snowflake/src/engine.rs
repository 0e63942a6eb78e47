//! Engine collaborator contracts.
//!
//! The actual database driver lives outside this crate; what we define here
//! is the narrow seam the descriptor talks through: a builder that turns a
//! final URL or a flat argument map into an opaque live handle.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use url::Url;

/// Keyword construction arguments handed to an [`EngineBuilder`].
pub type ConnectArgs = IndexMap<String, Value>;

/// Opaque driver-side failure.
pub type DriverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A live, reusable connection handle.
///
/// The handle is opaque to this layer: the descriptor only creates, caches,
/// and hands it out. Cloning shares the same underlying engine; use
/// [`same_handle`](Self::same_handle) to check identity.
#[derive(Clone)]
pub struct EngineHandle {
    inner: Arc<dyn Any + Send + Sync>,
}

impl EngineHandle {
    /// Wrap a driver engine.
    pub fn new<E>(engine: E) -> Self
    where
        E: Any + Send + Sync,
    {
        Self {
            inner: Arc::new(engine),
        }
    }

    /// Borrow the wrapped engine, if it is of type `E`.
    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.inner.downcast_ref()
    }

    /// Whether two handles share the same underlying engine.
    pub fn same_handle(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for EngineHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineHandle").finish_non_exhaustive()
    }
}

/// Constructs live engines from a validated connection specification.
///
/// Implementations wrap a concrete driver. Errors are surfaced as opaque
/// boxed errors; the descriptor re-wraps them so callers never depend on a
/// driver's error type.
pub trait EngineBuilder: Send + Sync {
    /// Build from a final connection URL (attribution tag already injected).
    fn build_from_url(&self, url: &Url, connect_args: &ConnectArgs)
        -> Result<EngineHandle, DriverError>;

    /// Build from a flat keyword-argument map, bypassing URL assembly.
    fn build_from_connect_args(&self, connect_args: &ConnectArgs)
        -> Result<EngineHandle, DriverError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_identity() {
        let handle = EngineHandle::new("engine".to_string());
        let clone = handle.clone();
        assert!(handle.same_handle(&clone));
    }

    #[test]
    fn distinct_handles_differ() {
        let a = EngineHandle::new("engine".to_string());
        let b = EngineHandle::new("engine".to_string());
        assert!(!a.same_handle(&b));
    }

    #[test]
    fn downcast_recovers_the_engine() {
        let handle = EngineHandle::new(42u32);
        assert_eq!(handle.downcast_ref::<u32>(), Some(&42));
        assert!(handle.downcast_ref::<String>().is_none());
    }
}
