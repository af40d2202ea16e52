//! Per-feature state containers.
//!
//! Every store follows the same discipline: interior state behind one
//! `RwLock` with a loading flag and an error slot, snapshots cloned out,
//! actions that record the backend's detail message and re-raise. The lock
//! is never held across an await. Best-effort secondary fetches (marked in
//! their doc comments) log a warning instead of touching the error slot.
//!
//! Concurrent identical calls are not deduplicated; the last response to
//! resolve wins.

pub mod account;
pub mod admin_profiles;
pub mod evaluation;
pub mod ofertas;
pub mod profile;
pub mod recommendations;
pub mod users;
