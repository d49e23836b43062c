use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields consulted, in order, when looking for a human-readable user label.
const DISPLAY_FIELDS: [&str; 3] = ["name", "username", "email"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Login payload submitted to the authentication endpoint.
pub struct LoginRequest {
    /// Email address used as the login identifier.
    pub email: String,
    /// Plaintext password submitted by the client.
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Account creation payload.
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Password reset payload. The confirmation field never leaves the client.
pub struct ResetPasswordRequest {
    pub email: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// Authenticated user as returned by the backend.
///
/// The client treats the object as opaque: it only reads a display label and
/// the identifier used to attribute blog posts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Map<String, Value>);

impl UserProfile {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// First non-empty of `name`, `username` and `email`.
    pub fn display_name(&self) -> Option<&str> {
        DISPLAY_FIELDS
            .iter()
            .filter_map(|field| self.0.get(*field).and_then(Value::as_str))
            .find(|value| !value.is_empty())
    }

    /// Uppercased first character of the display name, used for the avatar.
    pub fn initial(&self) -> Option<char> {
        self.display_name()
            .and_then(|name| name.chars().next())
            .and_then(|c| c.to_uppercase().next())
    }

    /// Backend identifier (`_id`, falling back to `id`).
    pub fn id(&self) -> Option<String> {
        ["_id", "id"].iter().find_map(|field| match self.0.get(*field)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// The client's notion of the currently authenticated identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: UserProfile,
    /// Bearer credential; a session without one is still a valid login.
    pub token: Option<String>,
}

impl Session {
    /// An empty token counts as no token.
    pub fn new(user: UserProfile, token: Option<String>) -> Self {
        Self {
            user,
            token: token.filter(|token| !token.is_empty()),
        }
    }

    /// Build a session from a successful login response body.
    ///
    /// The backend answers either `{ user, token }` or the bare user object;
    /// in the latter case the whole body is the user.
    pub fn from_login_payload(payload: Value) -> Option<Self> {
        let Value::Object(mut body) = payload else {
            return None;
        };

        let token = match body.get("token") {
            Some(Value::String(token)) if !token.is_empty() => Some(token.clone()),
            _ => None,
        };

        let user = match body.remove("user") {
            Some(Value::Object(user)) => user,
            _ => body,
        };

        Some(Self {
            user: UserProfile(user),
            token,
        })
    }
}
