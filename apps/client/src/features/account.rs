use parking_lot::RwLock;
use serde_json::Value;

use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::users::{AccountInfo, AccountUpdate, PasswordChange};

#[derive(Debug, Clone, Default)]
pub struct AccountState {
    pub account: Option<AccountInfo>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// The user's own account settings (`/api/users/me*`).
pub struct AccountStore {
    api: ApiClient,
    state: RwLock<AccountState>,
}

impl AccountStore {
    pub fn new(api: ApiClient) -> Self {
        AccountStore {
            api,
            state: RwLock::new(AccountState::default()),
        }
    }

    pub fn snapshot(&self) -> AccountState {
        self.state.read().clone()
    }

    pub async fn load(&self) -> Result<AccountInfo, ApiError> {
        self.begin();
        match self.api.get::<AccountInfo>("/api/users/me/account").await {
            Ok(account) => {
                let mut state = self.state.write();
                state.account = Some(account.clone());
                state.is_loading = false;
                Ok(account)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn update(&self, changes: &AccountUpdate) -> Result<(), ApiError> {
        self.begin();
        match self.api.put::<_, Value>("/api/users/me", changes).await {
            Ok(_) => {
                let mut state = self.state.write();
                if let Some(account) = state.account.as_mut() {
                    if let Some(nombre) = &changes.nombre_completo {
                        account.nombre_completo = Some(nombre.clone());
                    }
                    if let Some(email) = &changes.email {
                        account.email = email.clone();
                    }
                }
                state.is_loading = false;
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        self.begin();
        let body = PasswordChange {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        match self
            .api
            .put::<_, Value>("/api/users/me/password", &body)
            .await
        {
            Ok(_) => {
                self.state.write().is_loading = false;
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
