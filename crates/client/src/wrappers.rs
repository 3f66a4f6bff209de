//! The `Mathesar` client and its convenience wrappers.
//!
//! Wrappers resolve records by name as well as by id and make add/delete
//! calls idempotent on request:
//! - `*_add_ext(.., exists_ok)` looks the existing record up when the server
//!   reports that it already exists
//! - `*_delete_ext(.., missing_ok)` treats a missing record as deleted

use std::ops::Deref;

use tracing::debug;

use crate::client::{Client, ClientConfig};
use crate::error::{ClientError, ClientResult, RemoteErrorKind};
use crate::rpc::decode;
use crate::types::{CollaboratorInfo, ConfiguredRoleInfo, RoleInfo, UserDef, UserInfo};

/// Client for the Mathesar RPC API; typed stubs live on this type.
#[derive(Debug)]
pub struct Mathesar(Client);

impl Mathesar {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Client::new(config).map(Self)
    }

    /// Build a client and log in.
    pub async fn connect(config: &ClientConfig, username: &str, password: &str) -> ClientResult<Self> {
        let client = Self::new(config)?;
        client.login(username, password).await?;
        Ok(client)
    }

    pub fn into_inner(self) -> Client {
        self.0
    }
}

impl From<Client> for Mathesar {
    fn from(client: Client) -> Self {
        Self(client)
    }
}

impl Deref for Mathesar {
    type Target = Client;

    fn deref(&self) -> &Client {
        &self.0
    }
}

/// Everything `collaborators_full_add` needs to set a collaborator up from scratch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCollaborator {
    pub username: String,
    pub password: String,
    pub database_id: i64,
    pub is_superuser: bool,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub display_language: Option<String>,
    /// Database role name; defaults to `username`
    pub rolename: Option<String>,
    /// Database role password; defaults to `password`
    pub role_password: Option<String>,
}

/// Recover from `kind` with `fallback` when `enabled`.
async fn recover<T, F>(result: ClientResult<T>, kind: RemoteErrorKind, enabled: bool, fallback: F) -> ClientResult<T>
where
    F: Future<Output = ClientResult<T>>,
{
    match result {
        Err(err) if enabled && err.is_remote(kind) => {
            debug!(error = %err, "Recovering from remote error.");
            fallback.await
        }
        other => other,
    }
}

/// Treat `kind` as success when `enabled`.
fn tolerate(result: ClientResult<()>, kind: RemoteErrorKind, enabled: bool) -> ClientResult<()> {
    match result {
        Err(err) if enabled && err.is_remote(kind) => {
            debug!(error = %err, "Ignoring missing record.");
            Ok(())
        }
        other => other,
    }
}

/// Pick the entry by name when a name is given, otherwise by id. A name
/// match with a different id is a mismatch.
fn select<'a, T>(
    entries: &'a [T],
    what: &'static str,
    id: Option<i64>,
    name: Option<&str>,
    fields: impl Fn(&T) -> (i64, &str),
) -> ClientResult<Option<&'a T>> {
    let Some(name) = name else {
        return Ok(entries.iter().find(|entry| id == Some(fields(entry).0)));
    };
    let Some(entry) = entries.iter().find(|entry| fields(entry).1 == name) else {
        return Ok(None);
    };
    let (actual, _) = fields(entry);
    match id {
        Some(expected) if expected != actual => Err(ClientError::Mismatch {
            what,
            name: name.to_string(),
            expected,
            actual,
        }),
        _ => Ok(Some(entry)),
    }
}

impl Mathesar {
    // ========================================================================
    // Roles
    // ========================================================================

    /// Find a role of a database by name or OID.
    pub async fn roles_get(&self, database_id: i64, role_oid: Option<i64>, rolename: Option<&str>) -> ClientResult<RoleInfo> {
        if role_oid.is_none() && rolename.is_none() {
            return Err(ClientError::MissingSelector("role_oid or rolename"));
        }
        let roles = self.roles_list(database_id).await?;
        match select(&roles, "role OID", role_oid, rolename, |r| (r.oid, r.name.as_str()))? {
            Some(role) => Ok(role.clone()),
            None => Err(ClientError::not_found(
                RemoteErrorKind::UndefinedObject,
                match rolename {
                    Some(name) => format!("Role with name {name} does not exist"),
                    None => format!("Role with OID {} does not exist", role_oid.unwrap_or_default()),
                },
            )),
        }
    }

    /// Resolve a role OID; a bare OID is returned without a lookup.
    pub async fn roles_get_oid(&self, database_id: i64, role_oid: Option<i64>, rolename: Option<&str>) -> ClientResult<i64> {
        match (rolename, role_oid) {
            (Some(_), _) => self.roles_get(database_id, role_oid, rolename).await.map(|r| r.oid),
            (None, Some(oid)) => Ok(oid),
            (None, None) => Err(ClientError::MissingSelector("role_oid or rolename")),
        }
    }

    /// `roles.add`; with `exists_ok`, an existing role is returned instead.
    pub async fn roles_add_ext(
        &self,
        rolename: &str,
        database_id: i64,
        password: Option<String>,
        login: Option<bool>,
        exists_ok: bool,
    ) -> ClientResult<RoleInfo> {
        let added = self.roles_add(rolename.to_string(), database_id, password, login).await;
        recover(
            added,
            RemoteErrorKind::DuplicateObject,
            exists_ok,
            self.roles_get(database_id, None, Some(rolename)),
        )
        .await
    }

    /// `roles.delete` by OID or name; with `missing_ok`, a missing role is not an error.
    pub async fn roles_delete_ext(
        &self,
        database_id: i64,
        role_oid: Option<i64>,
        rolename: Option<&str>,
        missing_ok: bool,
    ) -> ClientResult<()> {
        let deleted = async {
            let oid = self.roles_get_oid(database_id, role_oid, rolename).await?;
            self.roles_delete(oid, database_id).await.map(drop)
        };
        tolerate(deleted.await, RemoteErrorKind::UndefinedObject, missing_ok)
    }

    // ========================================================================
    // Configured roles
    // ========================================================================

    /// Find a configured role of a server by name or id.
    pub async fn roles_configured_get(
        &self,
        server_id: i64,
        configured_role_id: Option<i64>,
        role_name: Option<&str>,
    ) -> ClientResult<ConfiguredRoleInfo> {
        if configured_role_id.is_none() && role_name.is_none() {
            return Err(ClientError::MissingSelector("configured_role_id or role_name"));
        }
        let roles = self.roles_configured_list(server_id).await?;
        match select(&roles, "configured role ID", configured_role_id, role_name, |r| {
            (r.id, r.name.as_str())
        })? {
            Some(role) => Ok(role.clone()),
            None => Err(ClientError::not_found(
                RemoteErrorKind::UndefinedObject,
                match role_name {
                    Some(name) => format!("Configured role with name {name} does not exist"),
                    None => format!(
                        "Configured role with ID {} does not exist",
                        configured_role_id.unwrap_or_default()
                    ),
                },
            )),
        }
    }

    /// Resolve a configured role id; a bare id is returned without a lookup.
    pub async fn roles_configured_get_id(
        &self,
        server_id: i64,
        configured_role_id: Option<i64>,
        rolename: Option<&str>,
    ) -> ClientResult<i64> {
        match (rolename, configured_role_id) {
            (Some(name), _) => {
                let roles = self.roles_configured_list(server_id).await?;
                select(&roles, "configured role ID", configured_role_id, Some(name), |r| {
                    (r.id, r.name.as_str())
                })?
                .map(|role| role.id)
                .ok_or_else(|| {
                    ClientError::not_found(
                        RemoteErrorKind::DoesNotExist,
                        "Configured Role matching query does not exist.",
                    )
                })
            }
            (None, Some(id)) => Ok(id),
            (None, None) => Err(ClientError::MissingSelector("configured_role_id or rolename")),
        }
    }

    /// `roles.configured.add`; with `exists_ok`, an existing configured role is returned instead.
    pub async fn roles_configured_add_ext(
        &self,
        server_id: i64,
        name: &str,
        password: &str,
        exists_ok: bool,
    ) -> ClientResult<ConfiguredRoleInfo> {
        let added = self
            .roles_configured_add(server_id, name.to_string(), password.to_string())
            .await;
        recover(
            added,
            RemoteErrorKind::IntegrityError,
            exists_ok,
            self.roles_configured_get(server_id, None, Some(name)),
        )
        .await
    }

    /// `roles.configured.delete` by id or name; with `missing_ok`, a missing role is not an error.
    pub async fn roles_configured_delete_ext(
        &self,
        server_id: i64,
        configured_role_id: Option<i64>,
        rolename: Option<&str>,
        missing_ok: bool,
    ) -> ClientResult<()> {
        let deleted = async {
            let id = self
                .roles_configured_get_id(server_id, configured_role_id, rolename)
                .await?;
            self.roles_configured_delete(id).await.map(drop)
        };
        tolerate(deleted.await, RemoteErrorKind::DoesNotExist, missing_ok)
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Find a user by username or id.
    pub async fn users_find(&self, user_id: Option<i64>, username: Option<&str>) -> ClientResult<UserInfo> {
        if user_id.is_none() && username.is_none() {
            return Err(ClientError::MissingSelector("user_id or username"));
        }
        let users = self.users_list().await?;
        select(&users, "user ID", user_id, username, |u| (u.id, u.username.as_str()))?
            .cloned()
            .ok_or_else(|| {
                ClientError::not_found(RemoteErrorKind::DoesNotExist, "User matching query does not exist.")
            })
    }

    /// Resolve a user id; a bare id is returned without a lookup.
    pub async fn users_get_id(&self, user_id: Option<i64>, username: Option<&str>) -> ClientResult<i64> {
        match (username, user_id) {
            (Some(_), _) => self.users_find(user_id, username).await.map(|u| u.id),
            (None, Some(id)) => Ok(id),
            (None, None) => Err(ClientError::MissingSelector("user_id or username")),
        }
    }

    /// `users.add`; with `exists_ok`, an existing user is returned instead.
    pub async fn users_add_ext(&self, user_def: UserDef, exists_ok: bool) -> ClientResult<UserInfo> {
        let username = user_def.username.clone();
        let added = self.users_add(user_def).await;
        recover(
            added,
            RemoteErrorKind::IntegrityError,
            exists_ok,
            self.users_find(None, Some(&username)),
        )
        .await
    }

    /// `users.delete` by id or username; with `missing_ok`, a missing user is not an error.
    pub async fn users_delete_ext(&self, user_id: Option<i64>, username: Option<&str>, missing_ok: bool) -> ClientResult<()> {
        let deleted = async {
            let id = self.users_get_id(user_id, username).await?;
            self.users_delete(id).await.map(drop)
        };
        tolerate(deleted.await, RemoteErrorKind::DoesNotExist, missing_ok)
    }

    // ========================================================================
    // Collaborators
    // ========================================================================

    /// Find a collaborator by id, or by the user it maps.
    pub async fn collaborators_get(
        &self,
        database_id: Option<i64>,
        collaborator_id: Option<i64>,
        user_id: Option<i64>,
        username: Option<&str>,
    ) -> ClientResult<CollaboratorInfo> {
        let user_id = match username {
            Some(_) => Some(self.users_get_id(user_id, username).await?),
            None => user_id,
        };
        if collaborator_id.is_none() && user_id.is_none() {
            return Err(ClientError::MissingSelector("collaborator_id, user_id or username"));
        }

        let collaborators = self.collaborators_list(database_id).await?;
        for info in collaborators {
            if user_id == Some(info.user_id) {
                return match collaborator_id {
                    Some(expected) if expected != info.id => Err(ClientError::Mismatch {
                        what: "collaborator ID",
                        name: username.map_or_else(|| info.user_id.to_string(), str::to_string),
                        expected,
                        actual: info.id,
                    }),
                    _ => Ok(info),
                };
            }
            if collaborator_id == Some(info.id) {
                return Ok(info);
            }
        }
        Err(ClientError::not_found(
            RemoteErrorKind::DoesNotExist,
            "Collaborator matching query does not exist.",
        ))
    }

    /// Resolve a collaborator id; a bare id is returned without a lookup.
    pub async fn collaborators_get_id(
        &self,
        database_id: Option<i64>,
        collaborator_id: Option<i64>,
        user_id: Option<i64>,
        username: Option<&str>,
    ) -> ClientResult<i64> {
        if user_id.is_none() && username.is_none() {
            return collaborator_id
                .ok_or(ClientError::MissingSelector("collaborator_id, user_id or username"));
        }
        self.collaborators_get(database_id, collaborator_id, user_id, username)
            .await
            .map(|info| info.id)
    }

    /// `collaborators.add` with user and configured role given by id or name;
    /// with `exists_ok`, an existing collaborator is returned instead.
    pub async fn collaborators_add_ext(
        &self,
        database_id: i64,
        user_id: Option<i64>,
        username: Option<&str>,
        configured_role_id: Option<i64>,
        rolename: Option<&str>,
        exists_ok: bool,
    ) -> ClientResult<CollaboratorInfo> {
        let user_id = self.users_get_id(user_id, username).await?;
        let configured_role_id = self
            .roles_configured_get_id(database_id, configured_role_id, rolename)
            .await?;
        let added = async {
            let value = self
                .collaborators_add(database_id, user_id, configured_role_id)
                .await?;
            decode::<CollaboratorInfo>(value)
        };
        recover(
            added.await,
            RemoteErrorKind::IntegrityError,
            exists_ok,
            self.collaborators_get(Some(database_id), None, Some(user_id), None),
        )
        .await
    }

    /// `collaborators.delete` by id or user; with `missing_ok`, a missing collaborator is not an error.
    pub async fn collaborators_delete_ext(
        &self,
        database_id: Option<i64>,
        collaborator_id: Option<i64>,
        username: Option<&str>,
        missing_ok: bool,
    ) -> ClientResult<()> {
        let deleted = async {
            let id = self
                .collaborators_get_id(database_id, collaborator_id, None, username)
                .await?;
            self.collaborators_delete(id).await.map(drop)
        };
        tolerate(deleted.await, RemoteErrorKind::DoesNotExist, missing_ok)
    }

    /// Create the database role, the configured role, the user and the
    /// collaborator mapping in one go.
    pub async fn collaborators_full_add(
        &self,
        new: &NewCollaborator,
        exists_ok: bool,
    ) -> ClientResult<CollaboratorInfo> {
        let rolename = new.rolename.as_deref().unwrap_or(&new.username);
        let role_password = new.role_password.as_deref().unwrap_or(&new.password);

        self.roles_add_ext(
            rolename,
            new.database_id,
            Some(role_password.to_string()),
            Some(true),
            exists_ok,
        )
        .await?;
        let configured = self
            .roles_configured_add_ext(new.database_id, rolename, role_password, exists_ok)
            .await?;
        let user = self
            .users_add_ext(
                UserDef {
                    username: new.username.clone(),
                    password: new.password.clone(),
                    is_superuser: new.is_superuser,
                    email: new.email.clone().map(Some),
                    full_name: new.full_name.clone().map(Some),
                    display_language: new.display_language.clone().map(Some),
                },
                exists_ok,
            )
            .await?;
        self.collaborators_add_ext(
            new.database_id,
            Some(user.id),
            None,
            Some(configured.id),
            None,
            exists_ok,
        )
        .await
    }

    /// Undo [`Mathesar::collaborators_full_add`]: collaborator, user,
    /// configured role, then database role.
    pub async fn collaborators_full_delete(
        &self,
        username: &str,
        database_id: i64,
        rolename: Option<&str>,
        missing_ok: bool,
    ) -> ClientResult<()> {
        let rolename = rolename.unwrap_or(username);
        self.collaborators_delete_ext(Some(database_id), None, Some(username), missing_ok)
            .await?;
        self.users_delete_ext(None, Some(username), missing_ok).await?;
        self.roles_configured_delete_ext(database_id, None, Some(rolename), missing_ok)
            .await?;
        self.roles_delete_ext(database_id, None, Some(rolename), missing_ok)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_select_prefers_name_and_checks_id() {
        fn fields(role: &(i64, String)) -> (i64, &str) {
            (role.0, role.1.as_str())
        }
        let roles = vec![(1, "alice".to_string()), (2, "bob".to_string())];

        assert_eq!(
            select(&roles, "role OID", None, Some("bob"), fields).unwrap(),
            Some(&roles[1])
        );
        assert_eq!(
            select(&roles, "role OID", Some(1), None, fields).unwrap(),
            Some(&roles[0])
        );
        assert_eq!(select(&roles, "role OID", Some(9), Some("carol"), fields).unwrap(), None);
        assert!(matches!(
            select(&roles, "role OID", Some(1), Some("bob"), fields),
            Err(ClientError::Mismatch { expected: 1, actual: 2, .. })
        ));
    }

    #[test]
    fn test_select_by_name_ignores_other_ids() {
        fn fields(role: &(i64, String)) -> (i64, &str) {
            (role.0, role.1.as_str())
        }
        let roles = vec![(1, "alice".to_string()), (2, "bob".to_string())];

        assert_eq!(select(&roles, "role OID", Some(1), Some("carol"), fields).unwrap(), None);
        assert_eq!(
            select(&roles, "role OID", Some(2), Some("bob"), fields).unwrap(),
            Some(&roles[1])
        );
    }

    #[test]
    fn test_tolerate_only_swallows_the_named_kind() {
        let missing = || Err(ClientError::not_found(RemoteErrorKind::DoesNotExist, "gone"));
        assert!(tolerate(missing(), RemoteErrorKind::DoesNotExist, true).is_ok());
        assert!(tolerate(missing(), RemoteErrorKind::DoesNotExist, false).is_err());
        assert!(tolerate(missing(), RemoteErrorKind::UndefinedObject, true).is_err());
    }
}
