use web_sys::{window, Storage};

use crate::state::session_state::TokenStorage;
use crate::utils::constants::STORAGE_KEY_ACCESS_TOKEN;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Backend de persistencia del token sobre localStorage.
/// Sobrevive recargas completas dentro del mismo perfil del navegador.
pub struct LocalStorageTokens;

impl TokenStorage for LocalStorageTokens {
    fn load(&self) -> Option<String> {
        get_local_storage()?.get_item(STORAGE_KEY_ACCESS_TOKEN).ok()?
    }

    fn store(&self, token: &str) {
        match get_local_storage() {
            Some(storage) => {
                if storage.set_item(STORAGE_KEY_ACCESS_TOKEN, token).is_err() {
                    log::error!("❌ No se pudo guardar el token en localStorage");
                }
            }
            None => log::error!("❌ localStorage no disponible"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(STORAGE_KEY_ACCESS_TOKEN);
        }
    }
}
