//! In-process mock backend for integration tests.
//!
//! Auth is token-driven: each seeded account logs in to a fixed token, and
//! protected handlers decide per token. `admin-token` sees everything,
//! `student-token` is forbidden from the admin surface, `expired-token`
//! gets 401 everywhere.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use client::config::Config;

#[derive(Clone, Default)]
pub struct MockState {
    /// Authorization header values observed by `/api/ml/model-info`.
    pub seen_auth: Arc<Mutex<Vec<Option<String>>>>,
    /// When set, the institutional-profiles listing answers 500 once.
    pub fail_profiles: Arc<AtomicBool>,
}

pub struct MockBackend {
    pub addr: SocketAddr,
    pub state: MockState,
}

impl MockBackend {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Config pointing the client at this backend, persisting state under
    /// the given directory.
    pub fn config(&self, state_dir: &std::path::Path) -> Config {
        Config {
            api_base_url: self.base_url(),
            state_path: state_dir
                .join("client-state.json")
                .to_string_lossy()
                .into_owned(),
            request_timeout_secs: 5,
            rust_log: "warn".to_string(),
        }
    }
}

pub async fn spawn_backend() -> MockBackend {
    let state = MockState::default();
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/ml/model-info", get(model_info))
        .route("/api/profile/me", get(profile_me))
        .route("/api/users/", get(list_users))
        .route("/api/admin/institutional-profiles", get(list_profiles))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend { addr, state }
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    let account = match (email, password) {
        ("admin@uni.bo", "admin123") => Some(("admin-token", "administrador", "Alma Quispe")),
        ("op@uni.bo", "op123") => Some(("operator-token", "operador", "Oscar Mamani")),
        ("ana@uni.bo", "ana123") => Some(("student-token", "estudiante", "Ana Flores")),
        ("expired@uni.bo", "old123") => Some(("expired-token", "estudiante", "Elsa Rojas")),
        _ => None,
    };

    match account {
        Some((token, rol, nombre)) => Json(json!({
            "access_token": token,
            "token_type": "bearer",
            "user_id": format!("uid-{rol}"),
            "rol": rol,
            "email": email,
            "nombre_completo": nombre
        }))
        .into_response(),
        None => detail(StatusCode::UNAUTHORIZED, "Credenciales incorrectas"),
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let rol = body["rol"].as_str().unwrap_or_default();
    if email == "taken@uni.bo" {
        return detail(StatusCode::BAD_REQUEST, "El email ya esta registrado");
    }
    if !matches!(rol, "estudiante" | "titulado" | "administrador") {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "Rol invalido");
    }
    Json(json!({
        "access_token": "fresh-token",
        "token_type": "bearer",
        "user_id": "uid-nuevo",
        "rol": rol,
        "email": email,
        "nombre_completo": body["nombre_completo"]
    }))
    .into_response()
}

async fn model_info(State(state): State<MockState>, headers: HeaderMap) -> Response {
    state.seen_auth.lock().unwrap().push(
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );
    Json(json!({
        "status": "loaded",
        "model_type": "Ridge Regression",
        "alpha": 0.01,
        "n_features": 18,
        "model_version": "v1",
        "is_ready": true
    }))
    .into_response()
}

async fn profile_me(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some("admin-token") | Some("student-token") | Some("operator-token") => Json(json!({
            "id": "7d3f2d1e-1111-4222-8333-444455556666",
            "usuario_id": "uid-estudiante",
            "gemini_extraction": {},
            "hard_skills": ["Python", "SQL"],
            "soft_skills": ["Comunicacion"],
            "education_level": "Licenciatura",
            "experience_years": 2.5,
            "languages": ["Espanol", "Ingles"],
            "cv_filename": "cv.pdf",
            "cv_uploaded_at": "2025-05-01T10:00:00Z",
            "is_complete": true,
            "completeness_score": 0.9,
            "created_at": "2025-04-01T09:00:00Z",
            "updated_at": "2025-05-01T10:00:00Z"
        }))
        .into_response(),
        Some("expired-token") => detail(StatusCode::UNAUTHORIZED, "Token expirado"),
        _ => detail(StatusCode::UNAUTHORIZED, "No autenticado"),
    }
}

async fn list_users(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some("admin-token") | Some("operator-token") => Json(json!({
            "usuarios": [{
                "id": "uid-estudiante",
                "email": "ana@uni.bo",
                "nombre_completo": "Ana Flores",
                "rol": "estudiante",
                "created_at": "2025-03-01T08:00:00Z",
                "tiene_perfil": true
            }],
            "total": 1,
            "page": 1,
            "page_size": 20
        }))
        .into_response(),
        Some("student-token") => detail(
            StatusCode::FORBIDDEN,
            "Acceso restringido a administradores",
        ),
        _ => detail(StatusCode::UNAUTHORIZED, "No autenticado"),
    }
}

async fn list_profiles(State(state): State<MockState>, headers: HeaderMap) -> Response {
    if state.fail_profiles.swap(false, Ordering::SeqCst) {
        return detail(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error consultando perfiles institucionales",
        );
    }
    match bearer(&headers) {
        Some("admin-token") | Some("operator-token") => Json(json!({
            "profiles": [{
                "id": "9a8b7c6d-1111-4222-8333-444455556666",
                "institution_name": "TechBolivia Startup",
                "sector": "Tecnologia",
                "description": "Empresa de desarrollo de software",
                "weights": {
                    "hard_skills": 0.40,
                    "soft_skills": 0.15,
                    "experience": 0.25,
                    "education": 0.10,
                    "languages": 0.10
                },
                "requirements": {
                    "min_experience_years": 1.0,
                    "required_skills": ["Python", "SQL"],
                    "preferred_skills": ["Docker"],
                    "required_education_level": "Licenciatura",
                    "required_languages": ["Ingles"]
                },
                "thresholds": { "apto": 0.70, "considerado": 0.50 },
                "is_active": true,
                "created_at": "2025-01-15T12:00:00Z",
                "updated_at": "2025-02-20T12:00:00Z",
                "created_by": "uid-administrador"
            }],
            "total": 1
        }))
        .into_response(),
        Some("student-token") => detail(
            StatusCode::FORBIDDEN,
            "Acceso restringido a administradores",
        ),
        _ => detail(StatusCode::UNAUTHORIZED, "No autenticado"),
    }
}
