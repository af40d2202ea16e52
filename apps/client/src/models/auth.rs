#![allow(dead_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    /// Raw role string; the backend validates it ("estudiante", "titulado",
    /// "administrador"). Normalization into [`crate::session::Role`] happens
    /// only when the response comes back.
    pub rol: String,
    pub nombre_completo: Option<String>,
}

/// Response of `POST /api/auth/login` and `POST /api/auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_id: String,
    pub rol: String,
    pub email: Option<String>,
    pub nombre_completo: Option<String>,
}
