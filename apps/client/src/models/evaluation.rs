#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Per-dimension scores, each in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvScores {
    pub hard_skills_score: f64,
    pub soft_skills_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub languages_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub feature: String,
    pub contribution: f64,
}

/// `POST /api/ml/evaluate-cv`. The CV travels base64-encoded in the body.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRequest {
    pub cv_file: String,
    pub institutional_profile_id: Uuid,
}

/// Result of evaluating a CV against one institutional profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CvEvaluation {
    pub match_score: f64,
    /// "APTO", "CONSIDERADO" or "NO_APTO".
    pub classification: String,
    pub cv_scores: CvScores,
    #[serde(default)]
    pub top_strengths: Vec<FeatureContribution>,
    #[serde(default)]
    pub top_weaknesses: Vec<FeatureContribution>,
    #[serde(default)]
    pub institutional_profile: Value,
    #[serde(default)]
    pub gemini_extraction: Value,
    pub evaluation_id: Option<Uuid>,
}

/// One row of `GET /api/ml/user-evaluations`.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationSummary {
    pub id: Option<Uuid>,
    pub institution_name: Option<String>,
    pub match_score: f64,
    pub classification: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationHistory {
    #[serde(default)]
    pub evaluations: Vec<EvaluationSummary>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrainingMetrics {
    pub r2_score: f64,
    pub mae: f64,
    pub rmse: f64,
    pub accuracy: Option<f64>,
}

/// `GET /api/ml/model-info`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    /// "loaded" or "not_loaded".
    pub status: String,
    pub model_type: String,
    pub alpha: Option<f64>,
    pub training_metrics: Option<TrainingMetrics>,
    #[serde(default)]
    pub n_features: u32,
    #[serde(default)]
    pub model_version: String,
    #[serde(default)]
    pub is_ready: bool,
}
