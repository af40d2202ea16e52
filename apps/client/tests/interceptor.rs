mod common;

use std::sync::atomic::Ordering;

use client::app::bootstrap;
use client::errors::ApiError;
use client::models::users::UserListQuery;

use common::spawn_backend;

#[tokio::test]
async fn test_bearer_header_attached_only_when_authenticated() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let ctx = bootstrap(backend.config(dir.path()));

    // Anonymous call: no Authorization header.
    ctx.evaluation.load_model_info().await.unwrap();
    // Authenticated call: bearer token present.
    ctx.session.login("ana@uni.bo", "ana123").await.unwrap();
    ctx.evaluation.load_model_info().await.unwrap();

    let seen = backend.state.seen_auth.lock().unwrap().clone();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], None);
    assert_eq!(seen[1].as_deref(), Some("Bearer student-token"));
}

#[tokio::test]
async fn test_401_during_feature_load_logs_out_and_redirects_to_login() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let ctx = bootstrap(backend.config(dir.path()));

    // This account's token is rejected by every protected endpoint.
    ctx.session.login("expired@uni.bo", "old123").await.unwrap();
    assert!(ctx.session.is_authenticated());

    let err = ctx.profile.load().await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized { .. }));
    // Forced logout: session gone from memory and disk.
    assert!(!ctx.session.is_authenticated());
    assert!(ctx.session.token().is_none());
    assert!(ctx.storage.get_item("token").is_none());
    assert!(ctx.storage.get_item("user").is_none());
    // Redirected to login.
    assert_eq!(ctx.router.current_path(), "/login");
    // The in-flight store ended in a terminal error state, not silence.
    let state = ctx.profile.snapshot();
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some("Token expirado"));
    assert!(state.profile.is_none());
}

#[tokio::test]
async fn test_403_redirects_to_dashboard_without_clearing_session() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let ctx = bootstrap(backend.config(dir.path()));

    ctx.session.login("ana@uni.bo", "ana123").await.unwrap();

    let err = ctx
        .users
        .load_users(&UserListQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Forbidden { .. }));
    // Session survives a 403.
    assert!(ctx.session.is_authenticated());
    assert_eq!(ctx.session.token().as_deref(), Some("student-token"));
    assert_eq!(ctx.router.current_path(), "/dashboard");
    let state = ctx.users.snapshot();
    assert!(!state.is_loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Acceso restringido a administradores")
    );
}

#[tokio::test]
async fn test_500_records_detail_and_keeps_prior_items() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let ctx = bootstrap(backend.config(dir.path()));

    ctx.session.login("admin@uni.bo", "admin123").await.unwrap();

    ctx.admin_profiles.load_profiles(false, None).await.unwrap();
    assert_eq!(ctx.admin_profiles.snapshot().profiles.len(), 1);

    backend.state.fail_profiles.store(true, Ordering::SeqCst);
    let err = ctx
        .admin_profiles
        .load_profiles(false, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Api { status: 500, .. }));
    let state = ctx.admin_profiles.snapshot();
    assert_eq!(
        state.error.as_deref(),
        Some("Error consultando perfiles institucionales")
    );
    assert!(!state.is_loading);
    // The previously loaded list is left untouched.
    assert_eq!(state.profiles.len(), 1);
    assert_eq!(state.profiles[0].institution_name, "TechBolivia Startup");
    // And the session is intact: a 500 is not a session-level failure.
    assert!(ctx.session.is_authenticated());
}

#[tokio::test]
async fn test_invalid_file_is_rejected_before_any_network_call() {
    let backend = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let ctx = bootstrap(backend.config(dir.path()));

    ctx.session.login("ana@uni.bo", "ana123").await.unwrap();

    let err = ctx
        .profile
        .upload_cv("foto.png", b"\x89PNG".to_vec())
        .await
        .unwrap_err();

    // The mock has no upload route, so any request that slipped through
    // would have surfaced as `Api { status: 404 }` instead.
    assert!(matches!(err, ApiError::InvalidFile(_)));
    assert_eq!(err.detail_message(), "Solo se permiten archivos PDF");
    assert_eq!(
        ctx.profile.snapshot().error.as_deref(),
        Some("Solo se permiten archivos PDF")
    );
}
