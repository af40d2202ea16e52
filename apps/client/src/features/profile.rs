use parking_lot::RwLock;
use reqwest::multipart::{Form, Part};
use tracing::warn;

use crate::errors::ApiError;
use crate::files::validate_cv_file;
use crate::http::ApiClient;
use crate::models::profile::{
    CvUpload, ProfessionalProfile, ProfileCompleteness, ProfilePreview, ProfileUpdate,
};

#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub profile: Option<ProfessionalProfile>,
    pub completeness: Option<ProfileCompleteness>,
    pub preview: Option<ProfilePreview>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Wraps `/api/profile/*`: the user's own CV-derived profile.
pub struct ProfileStore {
    api: ApiClient,
    state: RwLock<ProfileState>,
}

impl ProfileStore {
    pub fn new(api: ApiClient) -> Self {
        ProfileStore {
            api,
            state: RwLock::new(ProfileState::default()),
        }
    }

    pub fn snapshot(&self) -> ProfileState {
        self.state.read().clone()
    }

    pub async fn load(&self) -> Result<ProfessionalProfile, ApiError> {
        self.begin();
        match self.api.get::<ProfessionalProfile>("/api/profile/me").await {
            Ok(profile) => {
                let mut state = self.state.write();
                state.profile = Some(profile.clone());
                state.is_loading = false;
                Ok(profile)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn update(&self, changes: &ProfileUpdate) -> Result<ProfessionalProfile, ApiError> {
        self.begin();
        match self
            .api
            .put::<_, ProfessionalProfile>("/api/profile/me", changes)
            .await
        {
            Ok(profile) => {
                let mut state = self.state.write();
                state.profile = Some(profile.clone());
                state.is_loading = false;
                Ok(profile)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Deletes the profile server-side and forgets it locally.
    pub async fn clear(&self) -> Result<(), ApiError> {
        self.begin();
        match self.api.delete("/api/profile/me").await {
            Ok(()) => {
                let mut state = self.state.write();
                state.profile = None;
                state.completeness = None;
                state.preview = None;
                state.is_loading = false;
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Best-effort enrichment; a failure is logged, never recorded as the
    /// store error.
    pub async fn load_completeness(&self) -> Option<ProfileCompleteness> {
        match self
            .api
            .get::<ProfileCompleteness>("/api/profile/completeness")
            .await
        {
            Ok(completeness) => {
                self.state.write().completeness = Some(completeness.clone());
                Some(completeness)
            }
            Err(err) => {
                warn!("Could not load profile completeness: {}", err.detail_message());
                None
            }
        }
    }

    pub async fn load_preview(&self) -> Result<ProfilePreview, ApiError> {
        self.begin();
        match self.api.get::<ProfilePreview>("/api/profile/preview").await {
            Ok(preview) => {
                let mut state = self.state.write();
                state.preview = Some(preview.clone());
                state.is_loading = false;
                Ok(preview)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Validates locally (PDF, <= 10 MB) before any network traffic, then
    /// posts the file as multipart form data.
    pub async fn upload_cv(&self, filename: &str, bytes: Vec<u8>) -> Result<CvUpload, ApiError> {
        if let Err(err) = validate_cv_file(filename, bytes.len() as u64) {
            self.state.write().error = Some(err.detail_message());
            return Err(err);
        }

        self.begin();
        let part = match Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")
        {
            Ok(part) => part,
            Err(e) => return Err(self.fail(ApiError::Network(e))),
        };
        let form = Form::new().part("file", part);

        match self
            .api
            .post_multipart::<CvUpload>("/api/profile/upload-cv", form)
            .await
        {
            Ok(upload) => {
                let mut state = self.state.write();
                state.profile = Some(upload.perfil.clone());
                state.is_loading = false;
                Ok(upload)
            }
            Err(err) => Err(self.fail(err)),
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
