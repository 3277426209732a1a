use serde::{Deserialize, Serialize};

/// Identifier of a role as issued by the API (a Mongo-style `_id`).
pub type RoleId = String;

/// Identifier of a user as issued by the API.
pub type UserId = String;

/// A user's profile as returned by the API.
///
/// Owned by the session store once fetched. A successful login or fetch replaces
/// the whole record; it is never patched field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub display_name: String,
    /// The [`Role`] id this user was registered with.
    pub role: RoleId,
}

impl UserRecord {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }
}

/// A role users can be registered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "_id")]
    pub id: RoleId,
    pub name: String,
}

/// Looks up the display name of `role_id`, falling back to `"Unknown"`.
pub fn role_name<'a>(roles: &'a [Role], role_id: &str) -> &'a str {
    roles
        .iter()
        .find(|role| role.id == role_id)
        .map(|role| role.name.as_str())
        .unwrap_or("Unknown")
}

/// Login form payload. Transient: never persisted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs and #[instrument] spans.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration form payload, sent as the body of `POST /api/v1/users`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub display_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: RoleId,
}

impl std::fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Body of a successful `POST /api/v1/auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserRecord,
    pub user_id: UserId,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Body of `GET /api/v1/roles`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleList {
    #[serde(default)]
    pub roles: Vec<Role>,
}
