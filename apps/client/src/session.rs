use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{info, warn};

use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::auth::{LoginRequest, RegisterRequest, TokenResponse};
use crate::storage::{StateStorage, TOKEN_KEY, USER_KEY};

/// Closed role enumeration.
///
/// Raw role strings are normalized here, at the session boundary, and never
/// reach gating logic. Unknown strings collapse to `Student` (least
/// privilege).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Administrator,
    Operator,
}

impl Role {
    /// Collapses the historical wire aliases into the closed enum:
    /// "admin"/"administrador" are both Administrator, "estudiante" and
    /// "titulado" are both Student.
    pub fn normalize(raw: &str) -> Role {
        match raw.trim().to_lowercase().as_str() {
            "admin" | "administrador" | "administrator" => Role::Administrator,
            "operador" | "operator" => Role::Operator,
            _ => Role::Student,
        }
    }

    /// Canonical wire name used when the role is serialized back out.
    pub fn as_wire(self) -> &'static str {
        match self {
            Role::Student => "estudiante",
            Role::Administrator => "administrador",
            Role::Operator => "operador",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::normalize(&raw))
    }
}

/// Who the current user is. Wire names match the backend (`rol`,
/// `nombre_completo`); this is also the shape persisted under the `user`
/// storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    #[serde(rename = "rol")]
    pub role: Role,
    pub email: String,
    #[serde(rename = "nombre_completo")]
    pub full_name: Option<String>,
}

/// Token and identity, both-or-neither by construction: the store holds a
/// single `Option<Session>`, so no reader can ever observe a partial pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub identity: Identity,
}

/// Immutable view of the session for admission decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionView {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl SessionView {
    pub const ANONYMOUS: SessionView = SessionView {
        authenticated: false,
        role: None,
    };

    pub fn authenticated_as(role: Role) -> SessionView {
        SessionView {
            authenticated: true,
            role: Some(role),
        }
    }

    pub fn is_administrator(&self) -> bool {
        self.role == Some(Role::Administrator)
    }

    /// The elevated gate: administrator or operator.
    pub fn is_operator_or_administrator(&self) -> bool {
        matches!(self.role, Some(Role::Administrator) | Some(Role::Operator))
    }
}

/// Single source of truth for "who is logged in and with what role".
///
/// Mutations are guarded by one `RwLock` and never held across an await;
/// persistence writes both storage keys together and clears them together.
pub struct SessionStore {
    api: ApiClient,
    storage: Arc<StateStorage>,
    session: RwLock<Option<Session>>,
}

impl SessionStore {
    pub fn new(api: ApiClient, storage: Arc<StateStorage>) -> Self {
        SessionStore {
            api,
            storage,
            session: RwLock::new(None),
        }
    }

    /// Restores a persisted session at startup. Anything short of both keys
    /// present and a parseable identity is treated as "no session" and the
    /// leftovers are scrubbed; this never errors at boot.
    pub fn restore(&self) {
        let token = self.storage.get_item(TOKEN_KEY);
        let user = self.storage.get_item(USER_KEY);
        match (token, user) {
            (Some(token), Some(raw)) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    info!("Session restored for {} ({})", identity.email, identity.role);
                    *self.session.write() = Some(Session { token, identity });
                }
                Err(e) => {
                    warn!("Stored identity is unreadable ({e}); discarding session");
                    self.scrub_storage();
                }
            },
            (None, None) => {}
            _ => {
                warn!("Partial session found on disk; discarding");
                self.scrub_storage();
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let response: TokenResponse = self
            .api
            .post(
                "/api/auth/login",
                &LoginRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;
        self.set_session(response, email)
    }

    /// Same contract as `login`, against the registration endpoint. The role
    /// string is passed through raw ("estudiante", "titulado",
    /// "administrador"); the backend is the validator.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        rol: &str,
        full_name: Option<&str>,
    ) -> Result<(), ApiError> {
        let response: TokenResponse = self
            .api
            .post(
                "/api/auth/register",
                &RegisterRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                    rol: rol.to_string(),
                    nombre_completo: full_name.map(str::to_string),
                },
            )
            .await?;
        self.set_session(response, email)
    }

    /// Clears the session from memory and disk, unconditionally. Safe to
    /// call when already logged out, and from the 401 interceptor.
    pub fn logout(&self) {
        *self.session.write() = None;
        self.scrub_storage();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn is_administrator(&self) -> bool {
        self.view().is_administrator()
    }

    pub fn is_operator_or_administrator(&self) -> bool {
        self.view().is_operator_or_administrator()
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.token.clone())
    }

    pub fn snapshot(&self) -> Option<Session> {
        self.session.read().clone()
    }

    pub fn view(&self) -> SessionView {
        let guard = self.session.read();
        SessionView {
            authenticated: guard.is_some(),
            role: guard.as_ref().map(|s| s.identity.role),
        }
    }

    fn set_session(&self, response: TokenResponse, fallback_email: &str) -> Result<(), ApiError> {
        let identity = Identity {
            user_id: response.user_id,
            role: Role::normalize(&response.rol),
            email: response.email.unwrap_or_else(|| fallback_email.to_string()),
            full_name: response.nombre_completo,
        };
        let serialized = serde_json::to_string(&identity)?;
        info!("Session established for {} ({})", identity.email, identity.role);
        *self.session.write() = Some(Session {
            token: response.access_token.clone(),
            identity,
        });
        self.storage.set_item(TOKEN_KEY, &response.access_token)?;
        self.storage.set_item(USER_KEY, &serialized)?;
        Ok(())
    }

    fn scrub_storage(&self) {
        // Best effort: a failed delete must not block logout.
        if let Err(e) = self.storage.remove_item(TOKEN_KEY) {
            warn!("Could not remove stored token: {e}");
        }
        if let Err(e) = self.storage.remove_item(USER_KEY) {
            warn!("Could not remove stored identity: {e}");
        }
    }
}
