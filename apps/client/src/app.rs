use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::features::account::AccountStore;
use crate::features::admin_profiles::AdminProfilesStore;
use crate::features::evaluation::EvaluationStore;
use crate::features::ofertas::OfertasStore;
use crate::features::profile::ProfileStore;
use crate::features::recommendations::RecommendationsStore;
use crate::features::users::UsersStore;
use crate::http::ApiClient;
use crate::router::Router;
use crate::session::SessionStore;
use crate::storage::StateStorage;

/// The wired object graph. Views (out of scope here) read stores through
/// this context; nothing in it is a process-wide global.
pub struct AppContext {
    pub config: Config,
    pub storage: Arc<StateStorage>,
    pub api: ApiClient,
    pub session: Arc<SessionStore>,
    pub router: Arc<Router>,
    pub profile: ProfileStore,
    pub evaluation: EvaluationStore,
    pub recommendations: RecommendationsStore,
    pub users: UsersStore,
    pub admin_profiles: AdminProfilesStore,
    pub ofertas: OfertasStore,
    pub account: AccountStore,
}

/// Two-phase startup wiring.
///
/// The `ApiClient` is constructed first and bound afterwards: the session
/// store needs the client to dispatch login calls, and the client needs the
/// store for bearer tokens and 401 handling. Until the binds happen the
/// interceptor side effects are no-ops, so the wiring order can never fail.
pub fn bootstrap(config: Config) -> AppContext {
    let storage = Arc::new(StateStorage::open(&config.state_path));
    let api = ApiClient::new(&config);

    let session = Arc::new(SessionStore::new(api.clone(), storage.clone()));
    session.restore();
    api.bind_session_store(session.clone());

    let router = Arc::new(Router::new(session.clone()));
    api.bind_navigator(router.clone());

    info!("Client wired against {}", config.api_base_url);

    AppContext {
        profile: ProfileStore::new(api.clone()),
        evaluation: EvaluationStore::new(api.clone()),
        recommendations: RecommendationsStore::new(api.clone()),
        users: UsersStore::new(api.clone()),
        admin_profiles: AdminProfilesStore::new(api.clone()),
        ofertas: OfertasStore::new(api.clone()),
        account: AccountStore::new(api.clone()),
        config,
        storage,
        api,
        session,
        router,
    }
}
