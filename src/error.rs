//! Error handling for the sandbox simulation
//!
//! The simulation tick itself never fails. Errors only surface from the
//! I/O edges: configuration loading and save/load.

use std::error::Error as StdError;
use std::fmt;

/// Main error type for the sandbox crate
#[derive(Debug)]
pub enum SandboxError {
    // World Errors
    MisalignedBlock {
        pos: (i32, i32),
        block_size: i32,
    },
    UnknownBlockKind {
        name: String,
    },

    // Persistence Errors
    SaveFailed {
        path: String,
        error: String,
    },
    LoadFailed {
        path: String,
        error: String,
    },
    SaveNotFound {
        path: String,
    },
    CorruptedData {
        reason: String,
    },

    // Configuration Errors
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    // System Errors
    IoError {
        path: String,
        error: String,
    },
    SerializationError {
        context: String,
        error: String,
    },
    DeserializationError {
        context: String,
        error: String,
    },

    // Generic fallback for unexpected errors
    Internal {
        message: String,
    },
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandboxError::MisalignedBlock { pos, block_size } => write!(
                f,
                "Block position {:?} is not aligned to block size {}",
                pos, block_size
            ),
            SandboxError::UnknownBlockKind { name } => write!(f, "Unknown block kind: {}", name),

            SandboxError::SaveFailed { path, error } => {
                write!(f, "Save failed for {}: {}", path, error)
            }
            SandboxError::LoadFailed { path, error } => {
                write!(f, "Load failed for {}: {}", path, error)
            }
            SandboxError::SaveNotFound { path } => write!(f, "Save file not found: {}", path),
            SandboxError::CorruptedData { reason } => write!(f, "Data corrupted: {}", reason),

            SandboxError::InvalidConfig {
                field,
                value,
                reason,
            } => write!(f, "Invalid config: {} = {} ({})", field, value, reason),

            SandboxError::IoError { path, error } => write!(f, "IO error for {}: {}", path, error),
            SandboxError::SerializationError { context, error } => {
                write!(f, "Serialization error in {}: {}", context, error)
            }
            SandboxError::DeserializationError { context, error } => {
                write!(f, "Deserialization error in {}: {}", context, error)
            }

            SandboxError::Internal { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl StdError for SandboxError {}

/// Type alias for Results in the sandbox crate
pub type SandboxResult<T> = Result<T, SandboxError>;

// Conversion traits for common error types

impl From<std::io::Error> for SandboxError {
    fn from(error: std::io::Error) -> Self {
        SandboxError::IoError {
            path: String::new(),
            error: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SandboxError {
    fn from(error: serde_json::Error) -> Self {
        SandboxError::DeserializationError {
            context: "json".to_string(),
            error: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for SandboxError {
    fn from(error: toml::de::Error) -> Self {
        SandboxError::DeserializationError {
            context: "toml".to_string(),
            error: error.to_string(),
        }
    }
}

impl From<bincode::Error> for SandboxError {
    fn from(error: bincode::Error) -> Self {
        SandboxError::DeserializationError {
            context: "bincode".to_string(),
            error: error.to_string(),
        }
    }
}

impl From<crate::persistence::PersistenceError> for SandboxError {
    fn from(err: crate::persistence::PersistenceError) -> Self {
        use crate::persistence::PersistenceError;
        match err {
            PersistenceError::NotFound(path) => SandboxError::SaveNotFound { path },
            PersistenceError::IoError { path, error } => SandboxError::IoError { path, error },
            PersistenceError::SerializationError(e) => SandboxError::SerializationError {
                context: "persistence".to_string(),
                error: e,
            },
            PersistenceError::DeserializationError(e) => SandboxError::DeserializationError {
                context: "persistence".to_string(),
                error: e,
            },
            PersistenceError::CorruptedData(e) => SandboxError::CorruptedData { reason: e },
            PersistenceError::UnsupportedFormat(ext) => SandboxError::LoadFailed {
                path: String::new(),
                error: format!("unsupported save format '{}'", ext),
            },
        }
    }
}

// Helper functions for common error patterns

/// Convert Option to Result with context
pub trait OptionExt<T> {
    fn ok_or_sandbox<F>(self, f: F) -> SandboxResult<T>
    where
        F: FnOnce() -> SandboxError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_sandbox<F>(self, f: F) -> SandboxResult<T>
    where
        F: FnOnce() -> SandboxError,
    {
        self.ok_or_else(f)
    }
}

/// Extension trait for adding context to errors
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> SandboxResult<T>;
    fn with_context<F>(self, f: F) -> SandboxResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn context(self, msg: &str) -> SandboxResult<T> {
        self.map_err(|e| SandboxError::Internal {
            message: format!("{}: {}", msg, e),
        })
    }

    fn with_context<F>(self, f: F) -> SandboxResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| SandboxError::Internal {
            message: format!("{}: {}", f(), e),
        })
    }
}
