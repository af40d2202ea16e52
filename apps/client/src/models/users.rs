#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of the admin user listing (`GET /api/users/`).
#[derive(Debug, Clone, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub nombre_completo: Option<String>,
    pub rol: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tiene_perfil: bool,
    /// Short profile digest attached to the detail endpoint.
    #[serde(default)]
    pub perfil_resumen: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsersPage {
    #[serde(default)]
    pub usuarios: Vec<AdminUser>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
}

/// Query filters for the user listing.
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub page: u32,
    pub page_size: u32,
    pub role: Option<String>,
    pub search: Option<String>,
}

impl Default for UserListQuery {
    fn default() -> Self {
        UserListQuery {
            page: 1,
            page_size: 20,
            role: None,
            search: None,
        }
    }
}

/// Admin edit of another user (`PUT /api/users/{id}`); only `rol` and
/// `nombre_completo` are accepted server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_completo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminUserUpdated {
    pub message: Option<String>,
    pub user: UpdatedUserFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatedUserFields {
    pub id: String,
    pub email: Option<String>,
    pub nombre_completo: Option<String>,
    pub rol: Option<String>,
}

/// `GET /api/users/me/account`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    pub id: String,
    pub email: String,
    pub nombre_completo: Option<String>,
    pub rol: String,
    pub created_at: String,
}

/// Self-service account edit (`PUT /api/users/me`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_completo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}
