#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::ofertas::Oferta;

/// One persisted recommendation against a job posting
/// (`GET /api/recommendations`).
#[derive(Debug, Clone, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub id: String,
    pub oferta_id: Uuid,
    pub oferta: Oferta,
    pub match_score: f64,
    /// "APTO" or "CONSIDERADO" — the generator drops anything below.
    pub clasificacion: String,
    #[serde(default)]
    pub scores_detalle: Value,
    #[serde(default)]
    pub fortalezas: Vec<String>,
    #[serde(default)]
    pub debilidades: Vec<String>,
    #[serde(default)]
    pub fue_vista: bool,
    pub vista_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsPage {
    #[serde(default)]
    pub recomendaciones: Vec<Recommendation>,
    #[serde(default)]
    pub total: u64,
    pub perfil_summary: Option<Value>,
}

/// `GET /api/recommendations/check-eligibility`.
#[derive(Debug, Clone, Deserialize)]
pub struct EligibilityCheck {
    pub eligible: bool,
    pub reason: Option<String>,
    pub action_required: Option<String>,
    #[serde(default)]
    pub profile_exists: bool,
    #[serde(default)]
    pub completeness_score: f64,
    #[serde(default)]
    pub missing_fields: Vec<String>,
}

/// `POST /api/ml/get-recommendations` — ad-hoc matching of an uploaded CV
/// against all active institutional profiles, no persistence.
#[derive(Debug, Clone, Serialize)]
pub struct MlRecommendationsRequest {
    pub cv_file: String,
    pub top_n: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MlRecommendation {
    pub rank: u32,
    pub institution_id: Uuid,
    pub institution_name: String,
    pub sector: String,
    pub match_score: f64,
    pub classification: String,
    pub main_strength: String,
    pub main_weakness: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CvSummary {
    pub name: Option<String>,
    pub education_level: Option<String>,
    #[serde(default)]
    pub total_experience_years: f64,
    #[serde(default)]
    pub top_skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MlRecommendationsResponse {
    #[serde(default)]
    pub recommendations: Vec<MlRecommendation>,
    #[serde(default)]
    pub total_evaluated: u64,
    pub cv_summary: Option<CvSummary>,
}
