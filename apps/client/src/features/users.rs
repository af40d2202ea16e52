use parking_lot::RwLock;
use serde_json::Value;
use tracing::warn;

use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::users::{AdminUser, AdminUserUpdate, AdminUserUpdated, UserListQuery, UsersPage};

#[derive(Debug, Clone, Default)]
pub struct UsersState {
    pub users: Vec<AdminUser>,
    pub total: u64,
    pub current: Option<AdminUser>,
    /// Full professional profile of the currently inspected user, when they
    /// have one and the enrichment fetch succeeded.
    pub current_profile: Option<Value>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Admin back office over `/api/users/*`.
pub struct UsersStore {
    api: ApiClient,
    state: RwLock<UsersState>,
}

impl UsersStore {
    pub fn new(api: ApiClient) -> Self {
        UsersStore {
            api,
            state: RwLock::new(UsersState::default()),
        }
    }

    pub fn snapshot(&self) -> UsersState {
        self.state.read().clone()
    }

    pub async fn load_users(&self, query: &UserListQuery) -> Result<UsersPage, ApiError> {
        self.begin();
        let mut params = vec![
            ("page", query.page.to_string()),
            ("page_size", query.page_size.to_string()),
        ];
        if let Some(role) = &query.role {
            params.push(("role", role.clone()));
        }
        if let Some(search) = &query.search {
            params.push(("search", search.clone()));
        }

        match self
            .api
            .get_with_query::<UsersPage>("/api/users/", &params)
            .await
        {
            Ok(page) => {
                let mut state = self.state.write();
                state.users = page.usuarios.clone();
                state.total = page.total;
                state.is_loading = false;
                Ok(page)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Loads one user's detail; when the user has a profile, enriches it
    /// with the full profile as a best-effort secondary fetch.
    pub async fn load_user(&self, user_id: &str) -> Result<AdminUser, ApiError> {
        {
            let mut state = self.state.write();
            state.is_loading = true;
            state.error = None;
            state.current = None;
            state.current_profile = None;
        }

        let user = match self
            .api
            .get::<AdminUser>(&format!("/api/users/{user_id}"))
            .await
        {
            Ok(user) => user,
            Err(err) => return Err(self.fail(err)),
        };

        let profile = if user.tiene_perfil {
            match self
                .api
                .get::<Value>(&format!("/api/users/{user_id}/profile"))
                .await
            {
                Ok(profile) => Some(profile),
                Err(err) => {
                    warn!(
                        "Could not fetch full profile for user {user_id}: {}",
                        err.detail_message()
                    );
                    None
                }
            }
        } else {
            None
        };

        let mut state = self.state.write();
        state.current = Some(user.clone());
        state.current_profile = profile;
        state.is_loading = false;
        Ok(user)
    }

    pub async fn update_user(
        &self,
        user_id: &str,
        changes: &AdminUserUpdate,
    ) -> Result<AdminUserUpdated, ApiError> {
        self.begin();
        match self
            .api
            .put::<_, AdminUserUpdated>(&format!("/api/users/{user_id}"), changes)
            .await
        {
            Ok(updated) => {
                let mut state = self.state.write();
                if let Some(current) = state.current.as_mut() {
                    if current.id == user_id {
                        if let Some(email) = updated.user.email.clone() {
                            current.email = email;
                        }
                        if updated.user.nombre_completo.is_some() {
                            current.nombre_completo = updated.user.nombre_completo.clone();
                        }
                        if let Some(rol) = updated.user.rol.clone() {
                            current.rol = rol;
                        }
                    }
                }
                state.is_loading = false;
                Ok(updated)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Deletes the user and prunes it from the cached listing.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.begin();
        match self.api.delete(&format!("/api/users/{user_id}")).await {
            Ok(()) => {
                let mut state = self.state.write();
                let before = state.users.len();
                state.users.retain(|u| u.id != user_id);
                if state.users.len() < before {
                    state.total = state.total.saturating_sub(1);
                }
                state.is_loading = false;
                Ok(())
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
