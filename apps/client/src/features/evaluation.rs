use parking_lot::RwLock;
use tracing::warn;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::files::{encode_base64, validate_cv_file};
use crate::http::ApiClient;
use crate::models::evaluation::{
    CvEvaluation, EvaluationHistory, EvaluationRequest, EvaluationSummary, ModelInfo,
};

#[derive(Debug, Clone, Default)]
pub struct EvaluationState {
    pub current: Option<CvEvaluation>,
    pub history: Vec<EvaluationSummary>,
    pub history_total: u64,
    pub model_info: Option<ModelInfo>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Wraps `/api/ml/*`: CV evaluation against an institutional profile plus
/// evaluation history and model status.
pub struct EvaluationStore {
    api: ApiClient,
    state: RwLock<EvaluationState>,
}

impl EvaluationStore {
    pub fn new(api: ApiClient) -> Self {
        EvaluationStore {
            api,
            state: RwLock::new(EvaluationState::default()),
        }
    }

    pub fn snapshot(&self) -> EvaluationState {
        self.state.read().clone()
    }

    /// Validates the CV locally, embeds it base64 in the JSON body, and
    /// evaluates it against one institutional profile.
    pub async fn evaluate_cv(
        &self,
        filename: &str,
        bytes: &[u8],
        institutional_profile_id: Uuid,
    ) -> Result<CvEvaluation, ApiError> {
        if let Err(err) = validate_cv_file(filename, bytes.len() as u64) {
            self.state.write().error = Some(err.detail_message());
            return Err(err);
        }

        {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error = None;
            state.current = None;
        }

        let request = EvaluationRequest {
            cv_file: encode_base64(bytes),
            institutional_profile_id,
        };
        match self
            .api
            .post::<_, CvEvaluation>("/api/ml/evaluate-cv", &request)
            .await
        {
            Ok(evaluation) => {
                let mut state = self.state.write();
                state.current = Some(evaluation.clone());
                state.is_loading = false;
                Ok(evaluation)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn load_history(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<EvaluationHistory, ApiError> {
        self.begin();
        let query = [
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        match self
            .api
            .get_with_query::<EvaluationHistory>("/api/ml/user-evaluations", &query)
            .await
        {
            Ok(history) => {
                let mut state = self.state.write();
                state.history = history.evaluations.clone();
                state.history_total = history.total;
                state.is_loading = false;
                Ok(history)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Best-effort: model status is display garnish, a failure must not
    /// block the evaluation screen.
    pub async fn load_model_info(&self) -> Option<ModelInfo> {
        match self.api.get::<ModelInfo>("/api/ml/model-info").await {
            Ok(info) => {
                self.state.write().model_info = Some(info.clone());
                Some(info)
            }
            Err(err) => {
                warn!("Could not load model info: {}", err.detail_message());
                None
            }
        }
    }

    pub fn is_model_ready(&self) -> bool {
        self.state
            .read()
            .model_info
            .as_ref()
            .map(|info| info.is_ready || info.status == "loaded")
            .unwrap_or(false)
    }

    pub fn reset(&self) {
        let mut state = self.state.write();
        state.current = None;
        state.error = None;
    }

    pub fn reset_all(&self) {
        *self.state.write() = EvaluationState::default();
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
