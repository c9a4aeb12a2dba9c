use web_sys::window;

use crate::state::interceptor::Navigator;

/// Navegación real del navegador sobre window.location.
/// `navigate` hace una carga completa, así el arranque reconstruye el
/// estado desde localStorage.
#[derive(Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn navigate(&self, path: &str) {
        match window() {
            Some(w) => {
                if w.location().set_href(path).is_err() {
                    log::error!("❌ No se pudo navegar a {}", path);
                }
            }
            None => log::error!("❌ window no disponible"),
        }
    }
}
