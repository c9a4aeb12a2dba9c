// ============================================================================
// SESSION STORE - Token de acceso, única fuente de verdad de autenticación
// ============================================================================
// La presencia del token ES el estado "autenticado": ningún componente
// guarda un flag aparte. La persistencia va detrás de TokenStorage
// (localStorage en el navegador, memoria en tests y builds nativos).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Persistencia del token fuera del árbol de render
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// Backend en memoria, para tests y entornos sin localStorage
#[derive(Default)]
pub struct MemoryTokens {
    token: RefCell<Option<String>>,
}

impl TokenStorage for MemoryTokens {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[derive(Clone)]
pub struct SessionStore {
    token: Rc<RefCell<Option<String>>>,
    backend: Rc<dyn TokenStorage>,
}

impl SessionStore {
    /// Carga el token persistido (si existe) al arrancar
    pub fn new(backend: Rc<dyn TokenStorage>) -> Self {
        let token = backend.load().filter(|token| !token.is_empty());
        Self {
            token: Rc::new(RefCell::new(token)),
            backend,
        }
    }

    /// Lectura síncrona del token actual
    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    /// Sobrescribe el token; los requests que salgan a partir de ahora lo usan
    pub fn set_token(&self, value: &str) {
        if value.is_empty() {
            self.clear();
            return;
        }
        *self.token.borrow_mut() = Some(value.to_string());
        self.backend.store(value);
    }

    pub fn clear(&self) {
        *self.token.borrow_mut() = None;
        self.backend.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.token, &other.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_survives_a_new_store_over_the_same_backend() {
        let backend: Rc<dyn TokenStorage> = Rc::new(MemoryTokens::default());

        let session = SessionStore::new(backend.clone());
        assert!(!session.is_authenticated());

        session.set_token("jwt-abc");
        assert_eq!(session.token().as_deref(), Some("jwt-abc"));

        // "recarga": un store nuevo sobre el mismo backend ve el token
        let reloaded = SessionStore::new(backend);
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.token().as_deref(), Some("jwt-abc"));
    }

    #[test]
    fn clear_removes_token_everywhere() {
        let backend: Rc<dyn TokenStorage> = Rc::new(MemoryTokens::default());
        let session = SessionStore::new(backend.clone());

        session.set_token("jwt-abc");
        session.clear();

        assert!(!session.is_authenticated());
        assert!(backend.load().is_none());
        assert!(!SessionStore::new(backend).is_authenticated());
    }

    #[test]
    fn empty_token_means_logged_out() {
        let session = SessionStore::new(Rc::new(MemoryTokens::default()));
        session.set_token("jwt-abc");
        session.set_token("");
        assert!(!session.is_authenticated());
    }
}
