pub mod datasource;
pub mod details;
pub mod dsn;
pub mod engine;
pub mod error;
pub mod spec;

pub use datasource::{
    SnowflakeDatasource, PARTNER_APPLICATION_CLOUD, PARTNER_APPLICATION_OSS,
};
pub use details::ConnectionDetails;
pub use dsn::{SnowflakeDsn, SNOWFLAKE_SCHEME};
pub use engine::{ConnectArgs, DriverError, EngineBuilder, EngineHandle};
pub use error::{
    IssueCode, SnowflakeDatasourceError, ValidationErrors, ValidationIssue,
};
pub use spec::ConnectionSpec;
