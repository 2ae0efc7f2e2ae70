use quilt3_admin_core::{AdminResult, InputError, OperationError, Quilt3AdminError};

/// Result union returned by registry mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationResult<T> {
    /// Mutation applied.
    Success(T),
    /// Registry rejected the arguments.
    InvalidInput(Vec<InputError>),
    /// Registry could not perform the mutation.
    OperationError(OperationError),
}

impl<T> MutationResult<T> {
    /// Maps the success payload, keeping failures intact.
    pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> MutationResult<U> {
        match self {
            Self::Success(value) => MutationResult::Success(mapper(value)),
            Self::InvalidInput(errors) => MutationResult::InvalidInput(errors),
            Self::OperationError(error) => MutationResult::OperationError(error),
        }
    }

    /// Converts the union into the administrative error taxonomy.
    pub fn into_result(self) -> AdminResult<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::InvalidInput(errors) => Err(Quilt3AdminError::InvalidInput(errors)),
            Self::OperationError(error) => Err(Quilt3AdminError::Operation(error)),
        }
    }
}

/// Folds an administrative error back into the mutation union.
impl<T> From<Quilt3AdminError> for MutationResult<T> {
    fn from(value: Quilt3AdminError) -> Self {
        match value {
            Quilt3AdminError::InvalidInput(errors) => Self::InvalidInput(errors),
            Quilt3AdminError::Operation(error) => Self::OperationError(error),
            Quilt3AdminError::BucketNotFound(error) => {
                Self::OperationError(OperationError::new("BucketNotFound", error.to_string()))
            }
            Quilt3AdminError::UserNotFound(error) => {
                Self::OperationError(OperationError::new("UserNotFound", error.to_string()))
            }
            Quilt3AdminError::Client(message) => {
                Self::OperationError(OperationError::new("ClientError", message))
            }
        }
    }
}
