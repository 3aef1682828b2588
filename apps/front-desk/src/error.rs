//! # API Error Type
//!
//! Unified error type for front-desk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Albergo                                │
//! │                                                                         │
//! │  Command Function → Result<T, ApiError>                                 │
//! │         │                                                               │
//! │         ├── CoreError::RoomConflict ──────► ROOM_CONFLICT               │
//! │         ├── CoreError::InvalidDateRange ──► INVALID_DATES               │
//! │         ├── CoreError::CapacityExceeded ──► CAPACITY_EXCEEDED           │
//! │         ├── CoreError::*NotFound ─────────► NOT_FOUND                   │
//! │         ├── CoreError::Validation ────────► VALIDATION_ERROR            │
//! │         └── StoreError ── logged ─────────► STORAGE_ERROR (generic)     │
//! │                                                                         │
//! │  Desk UI receives:                                                      │
//! │  { "code": "ROOM_CONFLICT",                                             │
//! │    "message": "Room 101 is occupied by Mario Rossi from 2025-08-01 ..." }│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use albergo_core::CoreError;
use albergo_store::StoreError;
use serde::Serialize;

/// Error returned from front-desk commands.
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Room not found: 999"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Room, service or stay not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Unparseable dates or an empty interval
    InvalidDates,

    /// Party larger than the room
    CapacityExceeded,

    /// Room already booked on overlapping nights
    RoomConflict,

    /// Snapshot could not be read or written
    StorageError,

    /// Internal error
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors. The core messages are already meant
/// for the desk, so they pass through unchanged.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidDateRange { .. } => ErrorCode::InvalidDates,
            CoreError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
            CoreError::RoomConflict { .. } => ErrorCode::RoomConflict,
            CoreError::RoomNotFound(_)
            | CoreError::ServiceNotFound(_)
            | CoreError::StayNotFound(_) => ErrorCode::NotFound,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts store errors to API errors.
///
/// The detailed error (paths, serde positions) goes to the log; the desk gets
/// a generic message.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io { path, source } => {
                tracing::error!(path = %path.display(), "Snapshot I/O failed: {}", source);
                ApiError::new(ErrorCode::StorageError, "Could not save or load bookings")
            }
            StoreError::Serialization(e) => {
                tracing::error!("Snapshot is corrupt: {}", e);
                ApiError::new(ErrorCode::StorageError, "Saved bookings are unreadable")
            }
            StoreError::UnsupportedVersion { found, supported } => {
                tracing::error!(found, supported, "Snapshot written by a newer version");
                ApiError::new(
                    ErrorCode::StorageError,
                    "Saved bookings come from a newer version of Albergo",
                )
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for front-desk commands.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use albergo_core::ValidationError;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: ApiError = CoreError::RoomNotFound("999".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Room not found: 999");

        let err: ApiError = CoreError::invalid_dates("invalid dates").into();
        assert_eq!(err.code, ErrorCode::InvalidDates);

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "first name".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_store_errors_hide_details() {
        let err: ApiError = StoreError::io(
            std::path::Path::new("/tmp/albergo.json"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        )
        .into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(!err.message.contains("/tmp"));
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Stay", "abc");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Stay not found: abc");
    }
}
