//! Validation and datasource error types.
//!
//! Connection validation collects every discoverable problem before
//! reporting, so a caller sees the full list of defects in one pass rather
//! than fixing them one at a time.

use std::fmt;

use datacheck_core::SecretsError;

/// Classifies a single validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCode {
    /// URL scheme missing or not `snowflake`.
    Scheme,
    /// URL user info missing.
    User,
    /// URL password missing.
    Password,
    /// URL host/domain missing.
    Domain,
    /// URL path does not decompose into database and schema.
    Path,
    /// A mandated query parameter is missing.
    Query,
    /// A placeholder occupies a position where substitution is not allowed.
    Substitution,
    /// A required field is missing or empty.
    Required,
    /// Mutually exclusive configuration styles were both supplied.
    Conflict,
    /// The specification as a whole is not usable.
    Incomplete,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::Scheme => "url.scheme",
            IssueCode::User => "url.user",
            IssueCode::Password => "url.password",
            IssueCode::Domain => "url.domain",
            IssueCode::Path => "url.path",
            IssueCode::Query => "url.query",
            IssueCode::Substitution => "url.substitution",
            IssueCode::Required => "field.required",
            IssueCode::Conflict => "conflict",
            IssueCode::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem discovered while validating a connection specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Which part of the configuration the issue concerns
    /// (e.g. `connection_string`, `connection_string.password`).
    pub field: String,
    pub code: IssueCode,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.field, self.message, self.code)
    }
}

/// Accumulated validation failures, reported together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.issues.extend(other.issues);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Whether any issue carries the given code.
    pub fn has_code(&self, code: IssueCode) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }
}

impl From<ValidationIssue> for ValidationErrors {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationIssue;
    type IntoIter = std::vec::IntoIter<ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connection validation failed with {} issue(s): ", self.len())?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Errors raised by a [`SnowflakeDatasource`](crate::SnowflakeDatasource).
///
/// Validation errors surface when the specification is constructed; engine
/// construction errors surface only from `get_engine`, since engines are
/// built lazily.
#[derive(Debug, thiserror::Error)]
pub enum SnowflakeDatasourceError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The specification needs secret substitution but no config provider
    /// is attached.
    #[error("connection specification requires secret substitution but no config provider is attached")]
    MissingConfigProvider,

    /// `get_engine` was called before an engine builder was attached.
    #[error("no engine builder attached to datasource '{name}'")]
    MissingEngineBuilder { name: String },

    #[error(transparent)]
    Secrets(#[from] SecretsError),

    /// The engine collaborator failed; only the cause message is carried,
    /// never the driver's own error type.
    #[error("unable to create a database engine: {0}")]
    EngineConstruction(String),
}
