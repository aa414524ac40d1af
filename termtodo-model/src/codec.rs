//! Serialization for the persisted task list.
//!
//! The persisted layout is a JSON array of task objects:
//!
//! ```json
//! [{"id":"…","text":"Walk dog","completed":false,"createdAt":"2026-10-16T09:30:00Z"}]
//! ```
//!
//! `createdAt` is an RFC 3339 string and is parsed back into a UTC timestamp.

use crate::task::Task;

/// Error type for codec encode/decode operations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The task list could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
    /// The stored text is not a valid task list.
    #[error("malformed task list: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Encodes a task sequence as a JSON array string.
///
/// # Errors
///
/// Returns `CodecError::Serialize` if the tasks cannot be serialized.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, CodecError> {
    serde_json::to_string(tasks).map_err(CodecError::Serialize)
}

/// Decodes a task sequence from a JSON array string.
///
/// # Errors
///
/// Returns `CodecError::Deserialize` if `text` is not a JSON array of task
/// objects in the persisted layout.
pub fn decode_tasks(text: &str) -> Result<Vec<Task>, CodecError> {
    serde_json::from_str(text).map_err(CodecError::Deserialize)
}
