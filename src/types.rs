use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Role identifier as issued by the authentication backend.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Moderator,
    User,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::Moderator => "ROLE_MODERATOR",
            Role::User => "ROLE_USER",
            Role::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ROLE_ADMIN" => Role::Admin,
            "ROLE_MODERATOR" => Role::Moderator,
            "ROLE_USER" => Role::User,
            _ => Role::Other(raw),
        }
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Role::from(raw.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed-in user as persisted by the login flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl Session {
    pub fn new(username: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            id: None,
            username: username.into(),
            email: None,
            roles: roles.into_iter().collect(),
            access_token: None,
            token_type: None,
        }
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Only admins see catalogue management and user administration.
pub fn is_admin(session: &Session) -> bool {
    session.has_role(&Role::Admin)
}

// Farmacia API collections. Only the length is consumed by the dashboard,
// the remaining fields are kept loose so schema drift never breaks a count.

/// A field whose JSON shape does not match decodes as `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicamento {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub precio: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub stock: Option<i64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Laboratorio {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub direccion: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub telefono: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdenCompra {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub fecha: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub estado: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub total: Option<f64>,
}
