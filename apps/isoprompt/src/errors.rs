use std::path::PathBuf;

use thiserror::Error;

/// Library-level error type.
///
/// Validation variants carry the full set of accepted values so the caller can
/// show it without another catalog lookup.
#[derive(Debug, Error)]
pub enum IsoPromptError {
    /// The catalog is missing its designated default. Programmer error.
    #[error("Catalog error: {0}")]
    Configuration(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid mode '{given}'. Available: {}", .available.join(", "))]
    InvalidMode {
        given: String,
        available: Vec<String>,
    },

    #[error("Invalid domain '{given}'. Available: {}", .available.join(", "))]
    InvalidDomain {
        given: String,
        available: Vec<String>,
    },

    #[error("Temperature must be between 0.0 and 2.0 (got {0})")]
    InvalidTemperature(f64),

    #[error("Invalid model '{given}'. Available: {}", .available.join(", "))]
    InvalidModel {
        given: String,
        available: Vec<String>,
    },

    #[error("Mode not found: {0}")]
    ModeNotFound(String),

    #[error("Domain not found: {0}")]
    DomainNotFound(String),

    #[error(
        "{0} environment variable not set. \
        Please set your OpenAI API key: export {0}='your-api-key' \
        (or add it to a .env file)"
    )]
    MissingCredential(&'static str),

    #[error("Empty prompt provided")]
    EmptyInput,

    #[error("No content in model response")]
    EmptyResponse,

    #[error("Failed to optimize prompt: {0}")]
    OptimizationFailed(String),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IsoPromptError {
    /// True for failures the user can fix by changing arguments.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            IsoPromptError::InvalidConfiguration(_)
                | IsoPromptError::InvalidMode { .. }
                | IsoPromptError::InvalidDomain { .. }
                | IsoPromptError::InvalidTemperature(_)
                | IsoPromptError::InvalidModel { .. }
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IsoPromptError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = IsoPromptError> = std::result::Result<T, E>;
