pub mod config;
pub mod context;
pub mod secrets;

pub use config::Config;
pub use context::{DeploymentEdition, RuntimeContext};
pub use secrets::{
    ConfigProvider, EnvConfigProvider, SecretsError, StaticConfigProvider, TemplateStr,
};
