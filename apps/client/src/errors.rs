use thiserror::Error;

/// Client-side error taxonomy.
///
/// The global interceptor in `http` handles only the session-level cases
/// (`Unauthorized`, `Forbidden`); everything else propagates to the feature
/// store that initiated the call, which records `detail_message()` and
/// re-raises so the caller can react.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No backend response at all (connection refused, DNS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// HTTP 401. By the time the caller sees this, the interceptor has
    /// already forced a logout and a redirect to the login screen.
    #[error("unauthorized: {detail}")]
    Unauthorized { detail: String },

    /// HTTP 403. Session is left intact; the interceptor has already
    /// redirected to the dashboard.
    #[error("forbidden: {detail}")]
    Forbidden { detail: String },

    /// Any other non-2xx response. `detail` is the backend's `detail`
    /// field verbatim, falling back to the raw body or status text.
    #[error("API error (status {status}): {detail}")]
    Api { status: u16, detail: String },

    /// A 2xx response whose body did not decode into the expected type.
    #[error("response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Local pre-network rejection (file type/size). No request was made.
    #[error("{0}")]
    InvalidFile(String),

    /// Durable-storage write failure while persisting session state.
    #[error("storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// The human-readable message feature stores record in their error slot.
    /// Backend-supplied detail strings pass through unchanged.
    pub fn detail_message(&self) -> String {
        match self {
            ApiError::Network(e) if e.is_timeout() => {
                "La solicitud excedio el tiempo de espera".to_string()
            }
            ApiError::Network(_) => "No se pudo conectar con el servidor".to_string(),
            ApiError::Unauthorized { detail } | ApiError::Forbidden { detail } => {
                if detail.is_empty() {
                    self.to_string()
                } else {
                    detail.clone()
                }
            }
            ApiError::Api { detail, .. } => detail.clone(),
            ApiError::InvalidFile(msg) => msg.clone(),
            ApiError::Parse(e) => format!("Respuesta invalida del servidor: {e}"),
            ApiError::Storage(msg) => msg.clone(),
        }
    }
}

/// Pulls the backend's error message out of a failure body.
///
/// FastAPI errors arrive as `{"detail": "..."}`; anything else degrades to
/// the raw body, then to the status text.
pub fn extract_detail(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Error desconocido")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_fastapi_body() {
        let body = r#"{"detail": "Perfil institucional no encontrado"}"#;
        assert_eq!(extract_detail(404, body), "Perfil institucional no encontrado");
    }

    #[test]
    fn test_extract_detail_non_json_body() {
        assert_eq!(extract_detail(502, "Bad Gateway from nginx"), "Bad Gateway from nginx");
    }

    #[test]
    fn test_extract_detail_empty_body_uses_status_text() {
        assert_eq!(extract_detail(500, ""), "Internal Server Error");
    }

    #[test]
    fn test_detail_message_passes_api_detail_verbatim() {
        let err = ApiError::Api {
            status: 422,
            detail: "Los pesos deben sumar 1.0 (actual: 0.950)".to_string(),
        };
        assert_eq!(err.detail_message(), "Los pesos deben sumar 1.0 (actual: 0.950)");
    }
}
