use quilt3_admin_core::{AdminResult, InputError, Quilt3AdminError};
use serde::{Deserialize, Serialize};

/// Maximum accepted tabulator table name length.
pub const TABLE_NAME_MAX_LENGTH: usize = 128;

/// Named tabular view over objects in a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabulatorTable {
    /// Table name, unique within its bucket.
    pub name: String,
    /// YAML table definition.
    pub config: String,
}

/// Validates a tabulator table name: lowercase ASCII letters, digits, `_` and `-`.
pub fn validate_table_name(value: &str) -> AdminResult<()> {
    let valid = !value.is_empty()
        && value.len() <= TABLE_NAME_MAX_LENGTH
        && value.chars().all(|character| {
            character.is_ascii_lowercase() || character.is_ascii_digit() || "_-".contains(character)
        });

    if valid {
        return Ok(());
    }

    Err(Quilt3AdminError::InvalidInput(vec![InputError::new(
        Some("tableName"),
        "InvalidTableName",
        format!("table name '{value}' must match ^[a-z0-9_-]+$"),
    )]))
}

#[cfg(test)]
mod tests {
    use super::{TABLE_NAME_MAX_LENGTH, validate_table_name};

    #[test]
    fn table_name_rejects_uppercase() {
        assert!(validate_table_name("Orders").is_err());
        assert!(validate_table_name("").is_err());
        assert!(validate_table_name("orders_2024-q1").is_ok());
    }

    #[test]
    fn table_name_length_is_capped() {
        assert!(validate_table_name(&"a".repeat(TABLE_NAME_MAX_LENGTH)).is_ok());
        assert!(validate_table_name(&"a".repeat(TABLE_NAME_MAX_LENGTH + 1)).is_err());
    }
}
