//! Shared error taxonomy for the quilt3 registry administration crates.

#![forbid(unsafe_code)]

/// Structured error payloads returned by the registry.
pub mod details;

use thiserror::Error;

pub use details::{InputError, OperationError};

/// Result type used across quilt3 admin crates.
pub type AdminResult<T> = Result<T, Quilt3AdminError>;

/// Raised when an operation names a bucket the registry does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("bucket not found")]
pub struct BucketNotFoundError;

/// Raised when an operation names a user the registry does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("user not found")]
pub struct UserNotFoundError;

/// Base error kind for every administrative operation.
#[derive(Debug, Error)]
pub enum Quilt3AdminError {
    /// Target bucket does not exist.
    #[error(transparent)]
    BucketNotFound(#[from] BucketNotFoundError),

    /// Target user does not exist.
    #[error(transparent)]
    UserNotFound(#[from] UserNotFoundError),

    /// Registry rejected one or more arguments.
    #[error("invalid input: {}", details::join_input_errors(.0))]
    InvalidInput(Vec<InputError>),

    /// Registry accepted the request but could not perform it.
    #[error("operation error: {0}")]
    Operation(OperationError),

    /// Underlying registry client failed before producing a result.
    #[error("registry client error: {0}")]
    Client(String),
}

impl Quilt3AdminError {
    /// Returns whether this error signals a missing bucket.
    #[must_use]
    pub fn is_bucket_not_found(&self) -> bool {
        matches!(self, Self::BucketNotFound(_))
    }

    /// Returns whether this error signals a missing user.
    #[must_use]
    pub fn is_user_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }

    /// Returns argument rejections, empty for every other kind.
    #[must_use]
    pub fn input_errors(&self) -> &[InputError] {
        match self {
            Self::InvalidInput(errors) => errors.as_slice(),
            _ => &[],
        }
    }

    /// Returns the registry operation failure, if that is what this is.
    #[must_use]
    pub fn operation_error(&self) -> Option<&OperationError> {
        match self {
            Self::Operation(error) => Some(error),
            _ => None,
        }
    }
}

impl From<OperationError> for Quilt3AdminError {
    fn from(value: OperationError) -> Self {
        Self::Operation(value)
    }
}
