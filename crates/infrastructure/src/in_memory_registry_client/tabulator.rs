use quilt3_admin_domain::validate_table_name;

use super::*;

fn bucket_not_found(bucket_name: &str) -> MutationResult<()> {
    MutationResult::OperationError(OperationError::new(
        "BucketNotFound",
        format!("bucket '{bucket_name}' is not configured"),
    ))
}

impl InMemoryRegistryClient {
    pub(super) async fn bucket_tabulator_tables_list_impl(
        &self,
        bucket_name: &str,
    ) -> Option<Vec<TabulatorTable>> {
        self.state.read().await.buckets.get(bucket_name).map(|tables| {
            tables
                .iter()
                .map(|(name, config)| TabulatorTable {
                    name: name.clone(),
                    config: config.clone(),
                })
                .collect()
        })
    }

    pub(super) async fn bucket_tabulator_table_set_impl(
        &self,
        bucket_name: &str,
        table_name: &str,
        config: Option<&str>,
    ) -> MutationResult<()> {
        let mut state = self.state.write().await;
        let Some(tables) = state.buckets.get_mut(bucket_name) else {
            return bucket_not_found(bucket_name);
        };

        if let Err(error) = validate_table_name(table_name) {
            return error.into();
        }

        match config {
            None => {
                tables.remove(table_name);
            }
            Some(config) if config.trim().is_empty() => {
                return MutationResult::InvalidInput(vec![InputError::new(
                    Some("config"),
                    "InvalidTableConfig",
                    "table config must not be blank; pass no config to delete the table",
                )]);
            }
            Some(config) => {
                tables.insert(table_name.to_owned(), config.to_owned());
            }
        }

        MutationResult::Success(())
    }

    pub(super) async fn bucket_tabulator_table_rename_impl(
        &self,
        bucket_name: &str,
        table_name: &str,
        new_table_name: &str,
    ) -> MutationResult<()> {
        let mut state = self.state.write().await;
        let Some(tables) = state.buckets.get_mut(bucket_name) else {
            return bucket_not_found(bucket_name);
        };

        if let Err(error) = validate_table_name(new_table_name) {
            return error.into();
        }

        if !tables.contains_key(table_name) {
            return MutationResult::OperationError(OperationError::new(
                "TableNotFound",
                format!("table '{table_name}' does not exist in bucket '{bucket_name}'"),
            ));
        }

        if table_name == new_table_name {
            return MutationResult::Success(());
        }

        if tables.contains_key(new_table_name) {
            return MutationResult::OperationError(OperationError::new(
                "TableExists",
                format!("table '{new_table_name}' already exists in bucket '{bucket_name}'"),
            ));
        }

        if let Some(config) = tables.remove(table_name) {
            tables.insert(new_table_name.to_owned(), config);
        }

        MutationResult::Success(())
    }
}
