use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::{extract_detail, ApiError};
use crate::session::SessionStore;

/// The navigation seam between the HTTP layer and the router.
pub trait Navigator: Send + Sync {
    fn push(&self, path: &str);
}

/// The single outbound gateway to the backend.
///
/// Attaches the bearer token to every request and centralizes failure
/// handling: 401 forces a logout and a login redirect, 403 redirects to the
/// dashboard without touching the session. Neither retries the request.
///
/// The session store and navigator are late-bound — the client is usable
/// before either exists, the interceptor side effects are simply no-ops
/// until `bind_session_store` / `bind_navigator` are called.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<RwLock<Option<Arc<SessionStore>>>>,
    navigator: Arc<RwLock<Option<Arc<dyn Navigator>>>>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");
        ApiClient {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session: Arc::new(RwLock::new(None)),
            navigator: Arc::new(RwLock::new(None)),
        }
    }

    pub fn bind_session_store(&self, store: Arc<SessionStore>) {
        *self.session.write() = Some(store);
    }

    pub fn bind_navigator(&self, navigator: Arc<dyn Navigator>) {
        *self.navigator.write() = Some(navigator);
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.http.get(self.url(path));
        self.dispatch(req).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let req = self.http.get(self.url(path)).query(query);
        self.dispatch(req).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = self.http.post(self.url(path)).json(body);
        self.dispatch(req).await
    }

    /// POST with no body, for action endpoints like `/activate`.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.http.post(self.url(path));
        self.dispatch(req).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let req = self.http.post(self.url(path)).multipart(form);
        self.dispatch(req).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = self.http.put(self.url(path)).json(body);
        self.dispatch(req).await
    }

    /// DELETE, discarding whatever body the backend returns.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let req = self.http.delete(self.url(path));
        let response = self.execute(req).await?;
        drop(response);
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Current bearer token, read from the bound session store. `None` when
    /// unbound or logged out.
    fn bearer(&self) -> Option<String> {
        self.session.read().as_ref().and_then(|store| store.token())
    }

    async fn dispatch<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let response = self.execute(req).await?;
        // Decode through serde_json so a malformed 2xx body surfaces as
        // Parse, not as a network error.
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ApiError::from)
    }

    async fn execute(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let req = match self.bearer() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        let response = req.send().await?;
        self.intercept(response).await
    }

    /// Response interceptor. Session-level failures (401/403) trigger their
    /// side effects exactly once, here; everything else passes through to
    /// the caller.
    async fn intercept(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let code = status.as_u16();
        let detail = extract_detail(code, &response.text().await.unwrap_or_default());

        match code {
            401 => {
                warn!("401 from backend; clearing session");
                let store = self.session.read().clone();
                if let Some(store) = store {
                    store.logout();
                }
                let nav = self.navigator.read().clone();
                if let Some(nav) = nav {
                    nav.push("/login");
                }
                Err(ApiError::Unauthorized { detail })
            }
            403 => {
                warn!("403 from backend; redirecting to dashboard");
                let nav = self.navigator.read().clone();
                if let Some(nav) = nav {
                    nav.push("/dashboard");
                }
                Err(ApiError::Forbidden { detail })
            }
            _ => {
                debug!("Backend error {code}: {detail}");
                Err(ApiError::Api {
                    status: code,
                    detail,
                })
            }
        }
    }
}
