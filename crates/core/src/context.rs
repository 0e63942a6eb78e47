//! Runtime context attached to components after construction.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::secrets::ConfigProvider;

/// Which product edition is running.
///
/// Decides the attribution tag sent to partner backends when building
/// database engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentEdition {
    /// Managed cloud deployment.
    Cloud,
    /// Self-hosted / open deployment.
    SelfHosted,
}

/// Ambient runtime state a descriptor needs beyond its own configuration.
///
/// Attached after construction. Components must degrade gracefully when no
/// context (or no secrets provider) is attached: read-only accessors warn
/// and return nothing, while operations that genuinely need a secret value
/// fail with a configuration error.
#[derive(Clone)]
pub struct RuntimeContext {
    pub edition: DeploymentEdition,
    pub secrets: Option<Arc<dyn ConfigProvider>>,
}

impl RuntimeContext {
    pub fn new(edition: DeploymentEdition) -> Self {
        Self {
            edition,
            secrets: None,
        }
    }

    pub fn cloud() -> Self {
        Self::new(DeploymentEdition::Cloud)
    }

    pub fn self_hosted() -> Self {
        Self::new(DeploymentEdition::SelfHosted)
    }

    pub fn with_secrets(mut self, provider: Arc<dyn ConfigProvider>) -> Self {
        self.secrets = Some(provider);
        self
    }
}

impl fmt::Debug for RuntimeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeContext")
            .field("edition", &self.edition)
            .field("secrets", &self.secrets.as_ref().map(|_| "<provider>"))
            .finish()
    }
}
