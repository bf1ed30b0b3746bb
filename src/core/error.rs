//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid configuration with details, reported at setup time
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Event content that has no serialized form
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Template execution failure
    #[error("Render error in template '{template}': {message}")]
    Render { template: String, message: String },

    /// The output sink rejected a write
    #[error("Sink write failed while {message}")]
    SinkWrite {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        LoggerError::Serialization {
            message: message.into(),
        }
    }

    /// Create a template render error
    pub fn render(template: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Render {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Create a sink write error with context
    pub fn sink_write(message: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkWrite {
            message: message.into(),
            source,
        }
    }

    /// True for errors that can only happen while building a logger
    pub fn is_configuration(&self) -> bool {
        matches!(self, LoggerError::InvalidConfiguration { .. })
    }
}
