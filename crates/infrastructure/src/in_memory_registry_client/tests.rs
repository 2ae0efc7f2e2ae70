use quilt3_admin_application::{MutationResult, RegistryClient, UserInput};
use quilt3_admin_core::Quilt3AdminError;
use quilt3_admin_domain::Role;

use super::InMemoryRegistryClient;
use crate::RegistrySeed;

const SEED: &str = r#"{
    "acting_user": "admin",
    "roles": [
        {"__typename": "ManagedRole", "id": "r-1", "name": "ReadWrite", "arn": "arn:aws:iam::000000000000:role/ReadWrite"},
        {"__typename": "ManagedRole", "id": "r-2", "name": "ReadOnly", "arn": "arn:aws:iam::000000000000:role/ReadOnly"},
        {"__typename": "UnmanagedRole", "id": "r-3", "name": "Audit", "arn": "arn:aws:iam::000000000000:role/Audit"}
    ],
    "users": [
        {"name": "admin", "email": "admin@example.com", "role": "ReadWrite", "is_admin": true},
        {"name": "sso-bot", "email": "bot@example.com", "role": "ReadOnly", "is_sso_only": true}
    ],
    "buckets": {
        "quilt-data": {"orders": "schema: []"},
        "empty-bucket": {}
    }
}"#;

fn seeded() -> InMemoryRegistryClient {
    RegistrySeed::from_json_str(SEED)
        .and_then(InMemoryRegistryClient::from_seed)
        .unwrap_or_else(|_| unreachable!())
}

fn user_input(name: &str, email: &str, role: &str, extra_roles: &[&str]) -> UserInput {
    UserInput {
        name: name.to_owned(),
        email: email.to_owned(),
        role: role.to_owned(),
        extra_roles: extra_roles.iter().map(|role| (*role).to_owned()).collect(),
    }
}

#[tokio::test]
async fn seed_populates_roles_users_and_buckets() {
    let registry = seeded();

    assert_eq!(registry.roles_list().await.unwrap_or_default().len(), 3);
    let users = registry.users_list().await.unwrap_or_default();
    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|user| user.name == "admin" && user.is_admin));

    let tables = registry
        .bucket_tabulator_tables_list("quilt-data")
        .await
        .unwrap_or_default()
        .unwrap_or_default();
    assert_eq!(tables.len(), 1);
    assert!(matches!(registry.bucket_tabulator_tables_list("nope").await, Ok(None)));
}

#[tokio::test]
async fn seed_rejects_unknown_role_reference() {
    let seed = RegistrySeed::from_json_str(
        r#"{"users": [{"name": "alice", "email": "alice@example.com", "role": "Missing"}]}"#,
    )
    .unwrap_or_else(|_| unreachable!());

    let result = InMemoryRegistryClient::from_seed(seed);

    assert!(matches!(result, Err(Quilt3AdminError::InvalidInput(_))));
}

#[tokio::test]
async fn seed_rejects_duplicate_user_names() {
    let seed = RegistrySeed::from_json_str(
        r#"{"users": [
            {"name": "a", "email": "a@example.com", "is_admin": true},
            {"name": "a", "email": "other@example.com"}
        ]}"#,
    )
    .unwrap_or_else(|_| unreachable!());

    let result = InMemoryRegistryClient::from_seed(seed);

    assert!(result.is_err_and(|error| error.input_errors()[0].name == "Conflict"));
}

#[tokio::test]
async fn seed_rejects_invalid_user_name() {
    let seed = RegistrySeed::from_json_str(
        r#"{"users": [{"name": "alice smith", "email": "alice@example.com"}]}"#,
    )
    .unwrap_or_else(|_| unreachable!());

    let result = InMemoryRegistryClient::from_seed(seed);

    assert!(result.is_err_and(|error| error.input_errors()[0].name == "InvalidUsername"));
}

#[tokio::test]
async fn seed_rejects_invalid_email() {
    let seed = RegistrySeed::from_json_str(
        r#"{"users": [{"name": "alice", "email": "alice@localhost"}]}"#,
    )
    .unwrap_or_else(|_| unreachable!());

    let result = InMemoryRegistryClient::from_seed(seed);

    assert!(result.is_err_and(|error| error.input_errors()[0].name == "InvalidEmail"));
}

#[tokio::test]
async fn seed_rejects_unknown_fields() {
    let result = RegistrySeed::from_json_str(r#"{"tables": {}}"#);

    assert!(matches!(result, Err(Quilt3AdminError::Client(_))));
}

#[tokio::test]
async fn create_user_collects_every_input_error() {
    let registry = seeded();

    let result = registry
        .user_create(user_input("admin", "not-an-email", "Missing", &["Gone"]))
        .await;

    let Ok(MutationResult::InvalidInput(errors)) = result else {
        panic!("expected invalid input");
    };
    let names: Vec<&str> = errors.iter().map(|error| error.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["InvalidEmail", "Conflict", "RoleDoesNotExist", "RoleDoesNotExist"]
    );
}

#[tokio::test]
async fn create_user_drops_active_role_from_extra_roles() {
    let registry = seeded();

    let result = registry
        .user_create(user_input(
            "alice",
            "alice@example.com",
            "ReadWrite",
            &["ReadWrite", "ReadOnly", "ReadOnly"],
        ))
        .await;

    let Ok(MutationResult::Success(user)) = result else {
        panic!("expected user to be created");
    };
    assert_eq!(user.role_names(), vec!["ReadWrite", "ReadOnly"]);
    assert!(user.is_active);
}

#[tokio::test]
async fn unknown_user_mutations_return_none() {
    let registry = seeded();

    assert!(matches!(registry.user_delete("ghost").await, Ok(None)));
    assert!(matches!(
        registry.user_set_admin("ghost", true).await,
        Ok(None)
    ));
    assert!(matches!(
        registry.user_remove_roles("ghost", &["ReadOnly"], None).await,
        Ok(None)
    ));
}

#[tokio::test]
async fn set_email_validates_before_storing() {
    let registry = seeded();

    let rejected = registry.user_set_email("admin", "broken").await;
    assert!(matches!(rejected, Ok(Some(MutationResult::InvalidInput(_)))));

    let stored = registry
        .user_get("admin")
        .await
        .unwrap_or_default()
        .map(|user| user.email);
    assert_eq!(stored.as_deref(), Some("admin@example.com"));
}

#[tokio::test]
async fn set_role_replaces_or_appends_extra_roles() {
    let registry = seeded();

    let appended = registry
        .user_add_roles("admin", &["Audit"])
        .await
        .unwrap_or_default();
    assert!(matches!(appended, Some(MutationResult::Success(_))));

    let replaced = registry
        .user_set_role("admin", "ReadOnly", &["ReadWrite"], false)
        .await;
    let Ok(Some(MutationResult::Success(user))) = replaced else {
        panic!("expected role update");
    };
    assert_eq!(user.role_names(), vec!["ReadOnly", "ReadWrite"]);

    let appended = registry
        .user_set_role("admin", "ReadOnly", &["Audit"], true)
        .await;
    let Ok(Some(MutationResult::Success(user))) = appended else {
        panic!("expected role update");
    };
    assert_eq!(user.role_names(), vec!["ReadOnly", "ReadWrite", "Audit"]);
}

#[tokio::test]
async fn remove_active_role_requires_fallback() {
    let registry = seeded();

    let result = registry.user_remove_roles("admin", &["ReadWrite"], None).await;
    let Ok(Some(MutationResult::OperationError(error))) = result else {
        panic!("expected operation error");
    };
    assert_eq!(error.name, "RoleRemovalWithoutFallback");

    let result = registry
        .user_remove_roles("admin", &["ReadWrite"], Some("ReadOnly"))
        .await;
    let Ok(Some(MutationResult::Success(user))) = result else {
        panic!("expected role removal");
    };
    assert_eq!(user.role.as_ref().map(Role::name), Some("ReadOnly"));
    assert!(user.extra_roles.is_empty());
}

#[tokio::test]
async fn remove_roles_rejects_fallback_being_removed() {
    let registry = seeded();
    let added = registry.user_add_roles("admin", &["ReadOnly"]).await;
    assert!(matches!(added, Ok(Some(MutationResult::Success(_)))));

    let result = registry
        .user_remove_roles("admin", &["ReadWrite", "ReadOnly"], Some("ReadOnly"))
        .await;

    let Ok(Some(MutationResult::InvalidInput(errors))) = result else {
        panic!("expected invalid fallback");
    };
    assert_eq!(errors[0].name, "InvalidFallback");
    let unchanged = registry.user_get("admin").await.unwrap_or_default();
    assert_eq!(
        unchanged.as_ref().map(|user| user.role_names()),
        Some(vec!["ReadWrite", "ReadOnly"])
    );
}

#[tokio::test]
async fn remove_roles_accepts_fallback_not_yet_held() {
    let registry = seeded();

    let result = registry
        .user_remove_roles("admin", &["ReadWrite"], Some("Audit"))
        .await;

    let Ok(Some(MutationResult::Success(user))) = result else {
        panic!("expected role removal");
    };
    assert_eq!(user.role_names(), vec!["Audit"]);
}

#[tokio::test]
async fn reset_password_refuses_sso_only_users() {
    let registry = seeded();

    let result = registry.user_reset_password("sso-bot").await;
    assert!(matches!(
        result,
        Ok(Some(MutationResult::OperationError(_)))
    ));

    let result = registry.user_reset_password("admin").await;
    assert!(matches!(result, Ok(Some(MutationResult::Success(())))));
    assert_eq!(registry.password_resets().await, vec!["admin".to_owned()]);
}

#[tokio::test]
async fn sso_config_records_acting_user_as_uploader() {
    let registry = seeded();

    let result = registry.sso_config_set(Some("provider: okta")).await;
    let Ok(MutationResult::Success(Some(config))) = result else {
        panic!("expected sso config to be stored");
    };
    assert_eq!(config.uploader.name, "admin");

    let removed = registry.sso_config_set(None).await;
    assert!(matches!(removed, Ok(MutationResult::Success(None))));
    assert!(matches!(registry.sso_config_get().await, Ok(None)));
}

#[tokio::test]
async fn sso_config_rejects_blank_text() {
    let registry = seeded();

    let result = registry.sso_config_set(Some("  \n")).await;

    let Ok(MutationResult::InvalidInput(errors)) = result else {
        panic!("expected invalid input");
    };
    assert_eq!(errors[0].name, "InvalidSsoConfig");
    assert!(matches!(registry.sso_config_get().await, Ok(None)));
}

#[tokio::test]
async fn sso_config_requires_acting_user() {
    let registry = InMemoryRegistryClient::new();

    let result = registry.sso_config_set(Some("provider: okta")).await;

    assert!(matches!(result, Ok(MutationResult::OperationError(_))));
}

#[tokio::test]
async fn table_set_reports_missing_bucket_and_bad_names() {
    let registry = seeded();

    let missing = registry
        .bucket_tabulator_table_set("nope", "orders", Some("schema: []"))
        .await;
    let Ok(MutationResult::OperationError(error)) = missing else {
        panic!("expected bucket not found");
    };
    assert_eq!(error.name, "BucketNotFound");

    let invalid = registry
        .bucket_tabulator_table_set("quilt-data", "Orders", Some("schema: []"))
        .await;
    assert!(matches!(invalid, Ok(MutationResult::InvalidInput(_))));
}

#[tokio::test]
async fn table_rename_moves_config() {
    let registry = seeded();

    let renamed = registry
        .bucket_tabulator_table_rename("quilt-data", "orders", "sales")
        .await;
    assert!(matches!(renamed, Ok(MutationResult::Success(()))));

    let tables = registry
        .bucket_tabulator_tables_list("quilt-data")
        .await
        .unwrap_or_default()
        .unwrap_or_default();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].name, "sales");
    assert_eq!(tables[0].config, "schema: []");
}

#[tokio::test]
async fn table_rename_refuses_to_overwrite() {
    let registry = seeded();
    let created = registry
        .bucket_tabulator_table_set("quilt-data", "sales", Some("schema: []"))
        .await;
    assert!(matches!(created, Ok(MutationResult::Success(()))));

    let result = registry
        .bucket_tabulator_table_rename("quilt-data", "orders", "sales")
        .await;

    let Ok(MutationResult::OperationError(error)) = result else {
        panic!("expected rename conflict");
    };
    assert_eq!(error.name, "TableExists");
}

#[tokio::test]
async fn table_set_rejects_blank_config() {
    let registry = seeded();

    let result = registry
        .bucket_tabulator_table_set("quilt-data", "orders", Some("   "))
        .await;

    let Ok(MutationResult::InvalidInput(errors)) = result else {
        panic!("expected invalid input");
    };
    assert_eq!(errors[0].name, "InvalidTableConfig");
    let tables = registry
        .bucket_tabulator_tables_list("quilt-data")
        .await
        .unwrap_or_default()
        .unwrap_or_default();
    assert_eq!(tables[0].config, "schema: []");
}

#[tokio::test]
async fn table_delete_of_missing_table_succeeds() {
    let registry = seeded();

    let result = registry
        .bucket_tabulator_table_set("empty-bucket", "ghost", None)
        .await;

    assert!(matches!(result, Ok(MutationResult::Success(()))));
}

#[tokio::test]
async fn table_rename_of_missing_table_fails() {
    let registry = seeded();

    let result = registry
        .bucket_tabulator_table_rename("quilt-data", "ghost", "sales")
        .await;

    let Ok(MutationResult::OperationError(error)) = result else {
        panic!("expected table not found");
    };
    assert_eq!(error.name, "TableNotFound");
}

#[tokio::test]
async fn table_rename_to_same_name_keeps_table() {
    let registry = seeded();

    let result = registry
        .bucket_tabulator_table_rename("quilt-data", "orders", "orders")
        .await;
    assert!(matches!(result, Ok(MutationResult::Success(()))));

    let tables = registry
        .bucket_tabulator_tables_list("quilt-data")
        .await
        .unwrap_or_default()
        .unwrap_or_default();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].name, "orders");
    assert_eq!(tables[0].config, "schema: []");
}

#[tokio::test]
async fn open_query_flag_is_stored() {
    let registry = seeded();

    assert!(matches!(registry.tabulator_get_open_query().await, Ok(false)));
    assert!(matches!(
        registry.tabulator_set_open_query(true).await,
        Ok(true)
    ));
    assert!(matches!(registry.tabulator_get_open_query().await, Ok(true)));
}
