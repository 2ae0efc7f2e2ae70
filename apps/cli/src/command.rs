use quilt3_admin::{
    InputError, Quilt3AdminError, RegistryClient, roles, sso_config, tabulator, users,
};
use serde_json::{Value, json};

pub const USAGE: &str = "\
usage: quilt3-admin-cli <namespace> <operation> [args...]

  roles list
  users list | get NAME | create NAME EMAIL ROLE [EXTRA_ROLE...] | delete NAME
  users set-email NAME EMAIL | set-admin NAME BOOL | set-active NAME BOOL
  users reset-password NAME | add-roles NAME ROLE... | set-role NAME ROLE [--append] [EXTRA_ROLE...]
  users remove-roles NAME [--fallback ROLE] ROLE...
  sso-config get | set TEXT | remove
  tabulator list-tables BUCKET | set-table BUCKET TABLE CONFIG | delete-table BUCKET TABLE
  tabulator rename-table BUCKET TABLE NEW_TABLE | get-open-query | set-open-query BOOL";

/// One administrative operation requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    RolesList,
    UsersList,
    UsersGet {
        name: String,
    },
    UsersCreate {
        name: String,
        email: String,
        role: String,
        extra_roles: Vec<String>,
    },
    UsersDelete {
        name: String,
    },
    UsersSetEmail {
        name: String,
        email: String,
    },
    UsersSetAdmin {
        name: String,
        admin: bool,
    },
    UsersSetActive {
        name: String,
        active: bool,
    },
    UsersResetPassword {
        name: String,
    },
    UsersSetRole {
        name: String,
        role: String,
        extra_roles: Vec<String>,
        append: bool,
    },
    UsersAddRoles {
        name: String,
        roles: Vec<String>,
    },
    UsersRemoveRoles {
        name: String,
        roles: Vec<String>,
        fallback: Option<String>,
    },
    SsoConfigGet,
    SsoConfigSet {
        config: Option<String>,
    },
    TabulatorListTables {
        bucket: String,
    },
    TabulatorSetTable {
        bucket: String,
        table: String,
        config: Option<String>,
    },
    TabulatorRenameTable {
        bucket: String,
        table: String,
        new_table: String,
    },
    TabulatorGetOpenQuery,
    TabulatorSetOpenQuery {
        enabled: bool,
    },
}

impl Command {
    /// Parses command-line arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Self, Quilt3AdminError> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let command = match args.as_slice() {
            ["roles", "list"] => Self::RolesList,
            ["users", "list"] => Self::UsersList,
            ["users", "get", name] => Self::UsersGet {
                name: (*name).to_owned(),
            },
            ["users", "create", name, email, role, extra_roles @ ..] => Self::UsersCreate {
                name: (*name).to_owned(),
                email: (*email).to_owned(),
                role: (*role).to_owned(),
                extra_roles: owned(extra_roles),
            },
            ["users", "delete", name] => Self::UsersDelete {
                name: (*name).to_owned(),
            },
            ["users", "set-email", name, email] => Self::UsersSetEmail {
                name: (*name).to_owned(),
                email: (*email).to_owned(),
            },
            ["users", "set-admin", name, admin] => Self::UsersSetAdmin {
                name: (*name).to_owned(),
                admin: parse_bool(admin)?,
            },
            ["users", "set-active", name, active] => Self::UsersSetActive {
                name: (*name).to_owned(),
                active: parse_bool(active)?,
            },
            ["users", "reset-password", name] => Self::UsersResetPassword {
                name: (*name).to_owned(),
            },
            ["users", "set-role", name, role, rest @ ..] => {
                let append = rest.first() == Some(&"--append");
                let extra_roles = if append { &rest[1..] } else { rest };
                Self::UsersSetRole {
                    name: (*name).to_owned(),
                    role: (*role).to_owned(),
                    extra_roles: owned(extra_roles),
                    append,
                }
            }
            ["users", "add-roles", name, roles @ ..] if !roles.is_empty() => Self::UsersAddRoles {
                name: (*name).to_owned(),
                roles: owned(roles),
            },
            ["users", "remove-roles", name, "--fallback", fallback, roles @ ..]
                if !roles.is_empty() =>
            {
                Self::UsersRemoveRoles {
                    name: (*name).to_owned(),
                    roles: owned(roles),
                    fallback: Some((*fallback).to_owned()),
                }
            }
            ["users", "remove-roles", name, roles @ ..]
                if !roles.is_empty() && !roles.contains(&"--fallback") =>
            {
                Self::UsersRemoveRoles {
                    name: (*name).to_owned(),
                    roles: owned(roles),
                    fallback: None,
                }
            }
            ["sso-config", "get"] => Self::SsoConfigGet,
            ["sso-config", "set", config] => Self::SsoConfigSet {
                config: Some((*config).to_owned()),
            },
            ["sso-config", "remove"] => Self::SsoConfigSet { config: None },
            ["tabulator", "list-tables", bucket] => Self::TabulatorListTables {
                bucket: (*bucket).to_owned(),
            },
            ["tabulator", "set-table", bucket, table, config] => Self::TabulatorSetTable {
                bucket: (*bucket).to_owned(),
                table: (*table).to_owned(),
                config: Some((*config).to_owned()),
            },
            ["tabulator", "delete-table", bucket, table] => Self::TabulatorSetTable {
                bucket: (*bucket).to_owned(),
                table: (*table).to_owned(),
                config: None,
            },
            ["tabulator", "rename-table", bucket, table, new_table] => {
                Self::TabulatorRenameTable {
                    bucket: (*bucket).to_owned(),
                    table: (*table).to_owned(),
                    new_table: (*new_table).to_owned(),
                }
            }
            ["tabulator", "get-open-query"] => Self::TabulatorGetOpenQuery,
            ["tabulator", "set-open-query", enabled] => Self::TabulatorSetOpenQuery {
                enabled: parse_bool(enabled)?,
            },
            _ => {
                return Err(invalid_command(format!(
                    "unrecognized command '{}'\n\n{USAGE}",
                    args.join(" ")
                )));
            }
        };

        Ok(command)
    }

    /// Runs the command and renders its result as JSON.
    pub async fn execute(&self, client: &dyn RegistryClient) -> Result<Value, Quilt3AdminError> {
        let output = match self {
            Self::RolesList => json!(roles::list(client).await?),
            Self::UsersList => json!(users::list(client).await?),
            Self::UsersGet { name } => json!(users::get(client, name).await?),
            Self::UsersCreate {
                name,
                email,
                role,
                extra_roles,
            } => json!(users::create(client, name, email, role, &borrowed(extra_roles)).await?),
            Self::UsersDelete { name } => {
                users::delete(client, name).await?;
                json!({ "deleted": name })
            }
            Self::UsersSetEmail { name, email } => {
                json!(users::set_email(client, name, email).await?)
            }
            Self::UsersSetAdmin { name, admin } => {
                json!(users::set_admin(client, name, *admin).await?)
            }
            Self::UsersSetActive { name, active } => {
                json!(users::set_active(client, name, *active).await?)
            }
            Self::UsersResetPassword { name } => {
                users::reset_password(client, name).await?;
                json!({ "password_reset": name })
            }
            Self::UsersSetRole {
                name,
                role,
                extra_roles,
                append,
            } => json!(
                users::set_role(client, name, role, &borrowed(extra_roles), *append).await?
            ),
            Self::UsersAddRoles { name, roles } => {
                json!(users::add_roles(client, name, &borrowed(roles)).await?)
            }
            Self::UsersRemoveRoles {
                name,
                roles,
                fallback,
            } => json!(
                users::remove_roles(client, name, &borrowed(roles), fallback.as_deref()).await?
            ),
            Self::SsoConfigGet => json!(sso_config::get(client).await?),
            Self::SsoConfigSet { config } => {
                json!(sso_config::set(client, config.as_deref()).await?)
            }
            Self::TabulatorListTables { bucket } => {
                json!(tabulator::list_tables(client, bucket).await?)
            }
            Self::TabulatorSetTable {
                bucket,
                table,
                config,
            } => {
                tabulator::set_table(client, bucket, table, config.as_deref()).await?;
                json!({ "bucket": bucket, "table": table, "deleted": config.is_none() })
            }
            Self::TabulatorRenameTable {
                bucket,
                table,
                new_table,
            } => {
                tabulator::rename_table(client, bucket, table, new_table).await?;
                json!({ "bucket": bucket, "table": new_table, "renamed_from": table })
            }
            Self::TabulatorGetOpenQuery => {
                let enabled = tabulator::get_open_query(client).await?;
                json!({ "open_query": enabled })
            }
            Self::TabulatorSetOpenQuery { enabled } => {
                tabulator::set_open_query(client, *enabled).await?;
                json!({ "open_query": enabled })
            }
        };

        Ok(output)
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn borrowed(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

fn parse_bool(value: &str) -> Result<bool, Quilt3AdminError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(invalid_command(format!(
            "expected a boolean, got '{value}'"
        ))),
    }
}

fn invalid_command(message: String) -> Quilt3AdminError {
    Quilt3AdminError::InvalidInput(vec![InputError::new(None, "InvalidCommand", message)])
}
