// ============================================================================
// INTERCEPTOR DE AUTENTICACIÓN - Reset global de sesión ante 401/403
// ============================================================================
// Colgado de los hooks de error de la caché: cualquier query o mutación que
// falle con Auth tira la sesión y manda al login, venga de donde venga.
// ============================================================================

use std::rc::Rc;

use crate::error::ApiError;
use crate::state::query_cache::QueryCache;
use crate::state::session_state::SessionStore;

/// Ruta literal del login; un login correcto redirige a `/`
pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Frontera de navegación del núcleo (en el navegador: window.location)
pub trait Navigator {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}

/// Registra el interceptor en los hooks de error de la caché.
/// Ante `ApiError::Auth`: limpia el Session Store y navega a /login.
/// Idempotente: si ya estamos en /login no se navega de nuevo, así errores
/// de auth concurrentes producen una única redirección.
pub fn install_auth_interceptor(
    cache: &QueryCache,
    session: &SessionStore,
    navigator: Rc<dyn Navigator>,
) -> u64 {
    let session = session.clone();
    cache.on_error(move |error| {
        if !error.is_auth() {
            return;
        }
        log::warn!("🔒 fallo de autenticación ({}), cerrando sesión", error);
        session.clear();
        if navigator.current_path() != LOGIN_PATH {
            navigator.navigate(LOGIN_PATH);
        }
    })
}
