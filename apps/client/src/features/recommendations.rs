use parking_lot::RwLock;
use serde_json::Value;
use tracing::warn;

use crate::errors::ApiError;
use crate::files::{encode_base64, validate_cv_file};
use crate::http::ApiClient;
use crate::models::recommendations::{
    CvSummary, EligibilityCheck, MlRecommendation, MlRecommendationsRequest,
    MlRecommendationsResponse, Recommendation, RecommendationsPage,
};

#[derive(Debug, Clone, Default)]
pub struct RecommendationsState {
    /// Persisted profile-based recommendations (`GET /api/recommendations`).
    pub recommendations: Vec<Recommendation>,
    pub perfil_summary: Option<Value>,
    pub eligibility: Option<EligibilityCheck>,
    /// Ad-hoc CV-file recommendations (`POST /api/ml/get-recommendations`).
    pub ml_recommendations: Vec<MlRecommendation>,
    pub cv_summary: Option<CvSummary>,
    pub stats: Option<Value>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Filters for the profile-based recommendation listing.
#[derive(Debug, Clone, Default)]
pub struct RecommendationQuery {
    pub top_n: Option<u32>,
    pub tipo: Option<String>,
    pub sector: Option<String>,
    pub recalcular: bool,
}

pub struct RecommendationsStore {
    api: ApiClient,
    state: RwLock<RecommendationsState>,
}

impl RecommendationsStore {
    pub fn new(api: ApiClient) -> Self {
        RecommendationsStore {
            api,
            state: RwLock::new(RecommendationsState::default()),
        }
    }

    pub fn snapshot(&self) -> RecommendationsState {
        self.state.read().clone()
    }

    /// Loads the user's persisted recommendations, gated by an eligibility
    /// pre-check. An ineligible profile short-circuits with an empty list
    /// and the reason stored; a *failed* eligibility check is treated as
    /// eligible (best effort).
    pub async fn load_mine(
        &self,
        query: &RecommendationQuery,
    ) -> Result<Vec<Recommendation>, ApiError> {
        self.begin();

        if let Some(check) = self.check_eligibility().await {
            if !check.eligible {
                let mut state = self.state.write();
                state.is_loading = false;
                return Ok(Vec::new());
            }
        }

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(top_n) = query.top_n {
            params.push(("top_n", top_n.to_string()));
        }
        if let Some(tipo) = &query.tipo {
            params.push(("tipo", tipo.clone()));
        }
        if let Some(sector) = &query.sector {
            params.push(("sector", sector.clone()));
        }
        if query.recalcular {
            params.push(("recalcular", "true".to_string()));
        }

        match self
            .api
            .get_with_query::<RecommendationsPage>("/api/recommendations", &params)
            .await
        {
            Ok(page) => {
                let mut state = self.state.write();
                state.recommendations = page.recomendaciones.clone();
                state.perfil_summary = page.perfil_summary;
                state.is_loading = false;
                Ok(page.recomendaciones)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Ad-hoc matching of a CV file against all active institutional
    /// profiles; nothing is persisted server-side.
    pub async fn from_cv(
        &self,
        filename: &str,
        bytes: &[u8],
        top_n: u32,
    ) -> Result<MlRecommendationsResponse, ApiError> {
        if let Err(err) = validate_cv_file(filename, bytes.len() as u64) {
            self.state.write().error = Some(err.detail_message());
            return Err(err);
        }

        self.begin();
        let request = MlRecommendationsRequest {
            cv_file: encode_base64(bytes),
            top_n,
        };
        match self
            .api
            .post::<_, MlRecommendationsResponse>("/api/ml/get-recommendations", &request)
            .await
        {
            Ok(response) => {
                let mut state = self.state.write();
                state.ml_recommendations = response.recommendations.clone();
                state.cv_summary = response.cv_summary.clone();
                state.is_loading = false;
                Ok(response)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn load_history(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<RecommendationsPage, ApiError> {
        self.begin();
        let query = [
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        match self
            .api
            .get_with_query::<RecommendationsPage>("/api/recommendations/history", &query)
            .await
        {
            Ok(page) => {
                let mut state = self.state.write();
                state.recommendations = page.recomendaciones.clone();
                state.is_loading = false;
                Ok(page)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn load_stats(&self) -> Result<Value, ApiError> {
        match self.api.get::<Value>("/api/recommendations/stats").await {
            Ok(stats) => {
                self.state.write().stats = Some(stats.clone());
                Ok(stats)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Best-effort: marks a recommendation viewed server-side and flips the
    /// local flag. A failure only logs — the expanded card still shows.
    pub async fn mark_viewed(&self, recommendation_id: &str) {
        let path = format!("/api/recommendations/{recommendation_id}/viewed");
        match self.api.post_empty::<Value>(&path).await {
            Ok(_) => {
                let mut state = self.state.write();
                if let Some(rec) = state
                    .recommendations
                    .iter_mut()
                    .find(|r| r.id == recommendation_id)
                {
                    rec.fue_vista = true;
                }
            }
            Err(err) => warn!(
                "Could not mark recommendation {recommendation_id} as viewed: {}",
                err.detail_message()
            ),
        }
    }

    pub fn reset(&self) {
        let mut state = self.state.write();
        state.recommendations.clear();
        state.ml_recommendations.clear();
        state.error = None;
    }

    /// Best-effort eligibility probe; `None` means the probe itself failed
    /// and the caller should proceed as if eligible.
    async fn check_eligibility(&self) -> Option<EligibilityCheck> {
        match self
            .api
            .get::<EligibilityCheck>("/api/recommendations/check-eligibility")
            .await
        {
            Ok(check) => {
                self.state.write().eligibility = Some(check.clone());
                Some(check)
            }
            Err(err) => {
                warn!("Eligibility check failed: {}", err.detail_message());
                None
            }
        }
    }

    fn begin(&self) {
        let mut state = self.state.write();
        state.is_loading = true;
        state.error = None;
    }

    fn fail(&self, err: ApiError) -> ApiError {
        let mut state = self.state.write();
        state.is_loading = false;
        state.error = Some(err.detail_message());
        err
    }
}
