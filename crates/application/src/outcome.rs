use quilt3_admin_core::{AdminResult, UserNotFoundError};
use tracing::warn;

use crate::MutationResult;

/// Translates a mutation union, logging registry rejections.
pub(crate) fn handle_errors<T>(
    operation: &'static str,
    result: MutationResult<T>,
) -> AdminResult<T> {
    result.into_result().inspect_err(|error| {
        warn!(operation, error = %error, "registry rejected mutation");
    })
}

/// Same as [`handle_errors`] for mutations that report a missing user as `None`.
pub(crate) fn handle_user_mutation<T>(
    operation: &'static str,
    name: &str,
    result: Option<MutationResult<T>>,
) -> AdminResult<T> {
    let Some(result) = result else {
        warn!(operation, user = name, "registry user not found");
        return Err(UserNotFoundError.into());
    };

    handle_errors(operation, result)
}
