//! Persistence Module - flat save records on disk
//!
//! - save_data.rs: the record layout and file formats
//! - save_operations.rs: capture/apply against live state, encode/decode, atomic file I/O

pub mod save_data;
pub mod save_operations;

pub use save_data::{SaveFormat, SaveRecord};

pub use save_operations::{
    // Live state
    capture_record,
    apply_record,
    validate_record,

    // Encoding
    encode_record,
    decode_record,

    // File I/O
    save_to_path,
    load_from_path,
};

pub type PersistenceResult<T> = Result<T, PersistenceError>;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Save file not found: {0}")]
    NotFound(String),
    #[error("IO error for {path}: {error}")]
    IoError { path: String, error: String },
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
    #[error("Corrupted data: {0}")]
    CorruptedData(String),
    #[error("Unsupported save format: '{0}'")]
    UnsupportedFormat(String),
}
