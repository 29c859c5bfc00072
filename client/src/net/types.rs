//! Wire DTOs for the remote user directory API.
//!
//! DESIGN
//! ======
//! Field names mirror the remote JSON exactly (snake_case list fields,
//! camelCase mutation timestamps) so serde needs no custom mapping beyond the
//! loosely typed mutation `id`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Email + password body for `/login` and `/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful `/login` or `/register` answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// A user as listed by the remote API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
}

impl User {
    /// `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match on first name, last name and email.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.first_name.to_lowercase().contains(needle)
            || self.last_name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }
}

/// One page of `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserPage {
    pub data: Vec<User>,
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
}

/// `GET /users/{id}` wraps the record in `data`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserEnvelope {
    pub data: User,
}

/// Create/update payload. The remote API accepts `{name, job}` here rather
/// than the listed user shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserForm {
    pub name: String,
    pub job: String,
}

/// Profile edit payload sent to the generic user update endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

/// Echo returned by create and update calls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserMutation {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
}

/// Error body shape; the API uses `error`, some proxies use `message`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// First non-blank message, `error` before `message`.
    pub fn into_message(self) -> Option<String> {
        [self.error, self.message]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}

/// Locally held identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        Self { id: user.id, name: user.full_name(), email: user.email, avatar: user.avatar }
    }
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}
