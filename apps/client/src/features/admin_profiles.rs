use parking_lot::RwLock;
use tracing::warn;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::institutional::{
    InstitutionalProfile, InstitutionalProfileList, InstitutionalProfilePayload, SectorList,
};

#[derive(Debug, Clone, Default)]
pub struct AdminProfilesState {
    pub profiles: Vec<InstitutionalProfile>,
    pub current: Option<InstitutionalProfile>,
    pub sectors: Vec<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Admin CRUD over `/api/admin/institutional-profiles`.
///
/// Deletion is a soft delete server-side, so the local list mirrors that:
/// delete/activate flip `is_active` in place instead of removing rows.
pub struct AdminProfilesStore {
    api: ApiClient,
    state: RwLock<AdminProfilesState>,
}

impl AdminProfilesStore {
    pub fn new(api: ApiClient) -> Self {
        AdminProfilesStore {
            api,
            state: RwLock::new(AdminProfilesState::default()),
        }
    }

    pub fn snapshot(&self) -> AdminProfilesState {
        self.state.read().clone()
    }

    pub fn active_profiles(&self) -> Vec<InstitutionalProfile> {
        self.state
            .read()
            .profiles
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect()
    }

    pub fn has_active_profiles(&self) -> bool {
        self.state.read().profiles.iter().any(|p| p.is_active)
    }

    pub async fn load_profiles(
        &self,
        include_inactive: bool,
        sector: Option<&str>,
    ) -> Result<InstitutionalProfileList, ApiError> {
        self.begin();
        let mut params = vec![("include_inactive", include_inactive.to_string())];
        if let Some(sector) = sector {
            params.push(("sector", sector.to_string()));
        }

        match self
            .api
            .get_with_query::<InstitutionalProfileList>("/api/admin/institutional-profiles", &params)
            .await
        {
            Ok(list) => {
                let mut state = self.state.write();
                state.profiles = list.profiles.clone();
                state.is_loading = false;
                Ok(list)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn load_profile(&self, profile_id: Uuid) -> Result<InstitutionalProfile, ApiError> {
        self.begin();
        match self
            .api
            .get::<InstitutionalProfile>(&format!("/api/admin/institutional-profiles/{profile_id}"))
            .await
        {
            Ok(profile) => {
                let mut state = self.state.write();
                state.current = Some(profile.clone());
                state.is_loading = false;
                Ok(profile)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Creates a profile and prepends it to the cached list.
    pub async fn create(
        &self,
        payload: &InstitutionalProfilePayload,
    ) -> Result<InstitutionalProfile, ApiError> {
        self.begin();
        match self
            .api
            .post::<_, InstitutionalProfile>("/api/admin/institutional-profiles", payload)
            .await
        {
            Ok(profile) => {
                let mut state = self.state.write();
                state.profiles.insert(0, profile.clone());
                state.is_loading = false;
                Ok(profile)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Updates a profile and replaces it in place in the cached list.
    pub async fn update(
        &self,
        profile_id: Uuid,
        payload: &InstitutionalProfilePayload,
    ) -> Result<InstitutionalProfile, ApiError> {
        self.begin();
        match self
            .api
            .put::<_, InstitutionalProfile>(
                &format!("/api/admin/institutional-profiles/{profile_id}"),
                payload,
            )
            .await
        {
            Ok(profile) => {
                let mut state = self.state.write();
                if let Some(slot) = state.profiles.iter_mut().find(|p| p.id == profile_id) {
                    *slot = profile.clone();
                }
                if state.current.as_ref().map(|c| c.id) == Some(profile_id) {
                    state.current = Some(profile.clone());
                }
                state.is_loading = false;
                Ok(profile)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn soft_delete(&self, profile_id: Uuid) -> Result<(), ApiError> {
        self.begin();
        match self
            .api
            .delete(&format!("/api/admin/institutional-profiles/{profile_id}"))
            .await
        {
            Ok(()) => {
                self.set_active(profile_id, false);
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn activate(&self, profile_id: Uuid) -> Result<(), ApiError> {
        self.begin();
        match self
            .api
            .post_empty::<serde_json::Value>(&format!(
                "/api/admin/institutional-profiles/{profile_id}/activate"
            ))
            .await
        {
            Ok(_) => {
                self.set_active(profile_id, true);
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Best-effort: sector names only feed a filter dropdown.
    pub async fn load_sectors(&self) -> Vec<String> {
        match self.api.get::<SectorList>("/api/admin/sectors").await {
            Ok(list) => {
                self.state.write().sectors = list.sectors.clone();
                list.sectors
            }
            Err(err) => {
                warn!("Could not load sectors: {}", err.detail_message());
                Vec::new()
            }
        }
    }

    fn set_active(&self, profile_id: Uuid, active: bool) {
        let mut state = self.state.write();
        if let Some(profile) = state.profiles.iter_mut().find(|p| p.id == profile_id) {
            profile.is_active = active;
        }
        state.is_loading = false;
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
