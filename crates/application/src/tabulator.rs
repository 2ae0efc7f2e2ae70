//! Tabulator table and open query operations.

use quilt3_admin_core::{AdminResult, BucketNotFoundError, Quilt3AdminError};
use quilt3_admin_domain::TabulatorTable;
use tracing::debug;

use crate::outcome::handle_errors;
use crate::{MutationResult, RegistryClient};

/// Registry operation error name reported for unknown buckets.
const BUCKET_NOT_FOUND: &str = "BucketNotFound";

/// Lists tabulator tables configured on a bucket.
pub async fn list_tables(
    client: &dyn RegistryClient,
    bucket_name: &str,
) -> AdminResult<Vec<TabulatorTable>> {
    client
        .bucket_tabulator_tables_list(bucket_name)
        .await?
        .ok_or_else(|| BucketNotFoundError.into())
}

/// Creates or replaces a table; `None` config deletes it.
pub async fn set_table(
    client: &dyn RegistryClient,
    bucket_name: &str,
    table_name: &str,
    config: Option<&str>,
) -> AdminResult<()> {
    debug!(
        bucket = bucket_name,
        table = table_name,
        delete = config.is_none(),
        "setting tabulator table"
    );
    let result = client
        .bucket_tabulator_table_set(bucket_name, table_name, config)
        .await?;
    handle_bucket_errors("tabulator.set_table", result)
}

/// Renames a table within its bucket.
pub async fn rename_table(
    client: &dyn RegistryClient,
    bucket_name: &str,
    table_name: &str,
    new_table_name: &str,
) -> AdminResult<()> {
    debug!(
        bucket = bucket_name,
        table = table_name,
        new_table = new_table_name,
        "renaming tabulator table"
    );
    let result = client
        .bucket_tabulator_table_rename(bucket_name, table_name, new_table_name)
        .await?;
    handle_bucket_errors("tabulator.rename_table", result)
}

/// Returns whether open query is enabled.
pub async fn get_open_query(client: &dyn RegistryClient) -> AdminResult<bool> {
    client.tabulator_get_open_query().await
}

/// Enables or disables open query.
pub async fn set_open_query(client: &dyn RegistryClient, enabled: bool) -> AdminResult<()> {
    let stored = client.tabulator_set_open_query(enabled).await?;
    debug!(enabled = stored, "updated tabulator open query");
    Ok(())
}

fn handle_bucket_errors(operation: &'static str, result: MutationResult<()>) -> AdminResult<()> {
    match handle_errors(operation, result) {
        Err(Quilt3AdminError::Operation(error)) if error.name == BUCKET_NOT_FOUND => {
            Err(BucketNotFoundError.into())
        }
        other => other,
    }
}
