#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// The user's professional profile as built from their CV
/// (`GET /api/profile/me`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalProfile {
    pub id: Uuid,
    pub usuario_id: String,
    #[serde(default)]
    pub gemini_extraction: Value,
    #[serde(default)]
    pub hard_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    pub education_level: Option<String>,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default)]
    pub languages: Vec<String>,
    pub cv_filename: Option<String>,
    pub cv_uploaded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub completeness_score: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a user may edit by hand (`PUT /api/profile/me`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}

/// `GET /api/profile/completeness`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileCompleteness {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub porcentaje: f64,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub missing_fields: Vec<String>,
    #[serde(default)]
    pub recomendaciones: Vec<String>,
}

/// `POST /api/profile/upload-cv`.
#[derive(Debug, Clone, Deserialize)]
pub struct CvUpload {
    pub message: String,
    pub perfil: ProfessionalProfile,
    #[serde(default)]
    pub extraction_summary: Value,
}

/// Read-only rendering of the profile (`GET /api/profile/preview`).
/// Shape varies with profile completeness; the client passes it through.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfilePreview {
    #[serde(flatten)]
    pub data: Value,
}
