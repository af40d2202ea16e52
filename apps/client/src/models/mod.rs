//! Typed wire models mirroring the backend's JSON shapes.
//!
//! Field names follow the backend verbatim (Spanish where the backend is
//! Spanish: `rol`, `titulo`, `recomendaciones`). Side-car payloads the
//! client never interprets (`gemini_extraction`, `requisitos_especificos`)
//! stay `serde_json::Value`.

pub mod auth;
pub mod evaluation;
pub mod institutional;
pub mod ofertas;
pub mod profile;
pub mod recommendations;
pub mod users;
