use parking_lot::RwLock;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::http::ApiClient;
use crate::models::ofertas::{Oferta, OfertaFilters, OfertaList, OfertaPayload, OfertaStats};

#[derive(Debug, Clone, Default)]
pub struct OfertasState {
    pub ofertas: Vec<Oferta>,
    pub total: u64,
    pub current: Option<Oferta>,
    pub stats: Option<OfertaStats>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Admin CRUD over `/api/admin/ofertas` (job/internship postings).
/// Same soft-delete discipline as institutional profiles.
pub struct OfertasStore {
    api: ApiClient,
    state: RwLock<OfertasState>,
}

impl OfertasStore {
    pub fn new(api: ApiClient) -> Self {
        OfertasStore {
            api,
            state: RwLock::new(OfertasState::default()),
        }
    }

    pub fn snapshot(&self) -> OfertasState {
        self.state.read().clone()
    }

    pub async fn load_ofertas(&self, filters: &OfertaFilters) -> Result<OfertaList, ApiError> {
        self.begin();
        let mut params = vec![
            ("include_inactive", filters.include_inactive.to_string()),
            ("include_expired", filters.include_expired.to_string()),
        ];
        if let Some(tipo) = &filters.tipo {
            params.push(("tipo", tipo.clone()));
        }
        if let Some(sector) = &filters.sector {
            params.push(("sector", sector.clone()));
        }

        match self
            .api
            .get_with_query::<OfertaList>("/api/admin/ofertas", &params)
            .await
        {
            Ok(list) => {
                let mut state = self.state.write();
                state.ofertas = list.ofertas.clone();
                state.total = list.total;
                state.is_loading = false;
                Ok(list)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn load_oferta(&self, oferta_id: Uuid) -> Result<Oferta, ApiError> {
        self.begin();
        match self
            .api
            .get::<Oferta>(&format!("/api/admin/ofertas/{oferta_id}"))
            .await
        {
            Ok(oferta) => {
                let mut state = self.state.write();
                state.current = Some(oferta.clone());
                state.is_loading = false;
                Ok(oferta)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn create(&self, payload: &OfertaPayload) -> Result<Oferta, ApiError> {
        self.begin();
        match self
            .api
            .post::<_, Oferta>("/api/admin/ofertas", payload)
            .await
        {
            Ok(oferta) => {
                let mut state = self.state.write();
                state.ofertas.insert(0, oferta.clone());
                state.total += 1;
                state.is_loading = false;
                Ok(oferta)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn update(
        &self,
        oferta_id: Uuid,
        payload: &OfertaPayload,
    ) -> Result<Oferta, ApiError> {
        self.begin();
        match self
            .api
            .put::<_, Oferta>(&format!("/api/admin/ofertas/{oferta_id}"), payload)
            .await
        {
            Ok(oferta) => {
                let mut state = self.state.write();
                if let Some(slot) = state.ofertas.iter_mut().find(|o| o.id == oferta_id) {
                    *slot = oferta.clone();
                }
                if state.current.as_ref().map(|c| c.id) == Some(oferta_id) {
                    state.current = Some(oferta.clone());
                }
                state.is_loading = false;
                Ok(oferta)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn soft_delete(&self, oferta_id: Uuid) -> Result<(), ApiError> {
        self.begin();
        match self
            .api
            .delete(&format!("/api/admin/ofertas/{oferta_id}"))
            .await
        {
            Ok(()) => {
                self.set_active(oferta_id, false);
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn activate(&self, oferta_id: Uuid) -> Result<(), ApiError> {
        self.begin();
        match self
            .api
            .post_empty::<serde_json::Value>(&format!("/api/admin/ofertas/{oferta_id}/activate"))
            .await
        {
            Ok(_) => {
                self.set_active(oferta_id, true);
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn load_stats(&self) -> Result<OfertaStats, ApiError> {
        match self
            .api
            .get::<OfertaStats>("/api/admin/ofertas/stats/summary")
            .await
        {
            Ok(stats) => {
                self.state.write().stats = Some(stats.clone());
                Ok(stats)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    fn set_active(&self, oferta_id: Uuid, active: bool) {
        let mut state = self.state.write();
        if let Some(oferta) = state.ofertas.iter_mut().find(|o| o.id == oferta_id) {
            oferta.is_active = active;
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
