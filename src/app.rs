// ============================================================================
// APP CONTEXT - Cableado de la capa de sincronización de estado
// ============================================================================
// Nada de estado global ambiente: la raíz de la aplicación construye una
// única caché, una sesión y un cliente, y los inyecta por contexto.
// ============================================================================

use std::rc::Rc;

use crate::services::api_client::ApiClient;
use crate::services::navigation::BrowserNavigator;
use crate::state::interceptor::install_auth_interceptor;
use crate::state::query_cache::QueryCache;
use crate::state::session_state::SessionStore;
use crate::utils::storage::LocalStorageTokens;

#[derive(Clone)]
pub struct AppContext {
    pub cache: QueryCache,
    pub session: SessionStore,
    pub api: Rc<ApiClient>,
}

impl AppContext {
    /// Construye el contexto completo: sesión persistida en localStorage,
    /// caché única e interceptor de autenticación ya registrado
    pub fn bootstrap() -> Self {
        let session = SessionStore::new(Rc::new(LocalStorageTokens));
        let cache = QueryCache::new();
        install_auth_interceptor(&cache, &session, Rc::new(BrowserNavigator));
        let api = Rc::new(ApiClient::new(session.clone()));

        log::info!(
            "🧩 Contexto listo (sesión {})",
            if session.is_authenticated() { "activa" } else { "vacía" }
        );

        Self { cache, session, api }
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        self.cache.ptr_eq(&other.cache) && self.session.ptr_eq(&other.session)
    }
}
