#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A job/internship posting (`/api/admin/ofertas`).
#[derive(Debug, Clone, Deserialize)]
pub struct Oferta {
    pub id: Uuid,
    pub institutional_profile_id: Option<Uuid>,
    /// Denormalized from the owning institutional profile for display.
    pub institution_name: Option<String>,
    pub sector: Option<String>,
    pub titulo: String,
    pub descripcion: Option<String>,
    /// "pasantia" or "empleo".
    pub tipo: String,
    /// "presencial", "remoto" or "hibrido".
    pub modalidad: Option<String>,
    pub ubicacion: Option<String>,
    #[serde(default)]
    pub requisitos_especificos: Value,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_cierre: Option<NaiveDate>,
    #[serde(default = "default_cupos")]
    pub cupos_disponibles: u32,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

fn default_cupos() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct OfertaList {
    #[serde(default)]
    pub ofertas: Vec<Oferta>,
    #[serde(default)]
    pub total: u64,
}

/// Query filters for the list endpoint.
#[derive(Debug, Clone, Default)]
pub struct OfertaFilters {
    pub include_inactive: bool,
    pub include_expired: bool,
    pub tipo: Option<String>,
    pub sector: Option<String>,
}

/// Body for create and update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OfertaPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institutional_profile_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modalidad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ubicacion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requisitos_especificos: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_cierre: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cupos_disponibles: Option<u32>,
}

/// `GET /api/admin/ofertas/stats/summary`. The backend assembles this
/// ad hoc, so it stays loosely typed.
#[derive(Debug, Clone, Deserialize)]
pub struct OfertaStats {
    #[serde(flatten)]
    pub data: Value,
}
