#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dimension weights. The backend rejects sets that do not sum to ~1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weights {
    pub hard_skills: f64,
    pub soft_skills: f64,
    pub experience: f64,
    pub education: f64,
    pub languages: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(default)]
    pub min_experience_years: f64,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub required_education_level: Option<String>,
    #[serde(default)]
    pub required_languages: Vec<String>,
}

/// Classification cutoffs; `apto` must exceed `considerado`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    pub apto: f64,
    pub considerado: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstitutionalProfile {
    pub id: Uuid,
    pub institution_name: String,
    pub sector: String,
    pub description: Option<String>,
    pub weights: Weights,
    #[serde(default)]
    pub requirements: Requirements,
    pub thresholds: Thresholds,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstitutionalProfileList {
    #[serde(default)]
    pub profiles: Vec<InstitutionalProfile>,
    #[serde(default)]
    pub total: u64,
}

/// Body for create and update. On update all fields are optional
/// server-side, so `None`s are simply omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstitutionalProfilePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<Weights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// `GET /api/admin/sectors`.
#[derive(Debug, Clone, Deserialize)]
pub struct SectorList {
    #[serde(default)]
    pub sectors: Vec<String>,
}
