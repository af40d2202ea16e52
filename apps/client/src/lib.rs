//! Headless client for the CV-evaluation and institutional-matching
//! platform: session state, authorization gating, and per-feature stores
//! over the backend's REST surface.
//!
//! The backend (and its ML engine) is an external collaborator reached only
//! through [`http::ApiClient`]; everything here is client-side state.

pub mod app;
pub mod config;
pub mod errors;
pub mod features;
pub mod files;
pub mod http;
pub mod models;
pub mod router;
pub mod session;
pub mod storage;
