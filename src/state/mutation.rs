// ============================================================================
// MUTACIONES - Escrituras coordinadas con la caché
// ============================================================================
// Un registro efímero por operación (no se comparte por clave). Al resolver
// con éxito invalida los prefijos declarados por el llamador; al fallar deja
// la caché intacta y propaga el error por los hooks globales.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use crate::error::ApiError;
use crate::state::query_cache::{QueryCache, QueryKey};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationStatus {
    Idle,
    Pending,
    Success,
    Error,
}

/// Operación de escritura (crear/borrar/login) con su estado observable
#[derive(Clone)]
pub struct Mutation {
    cache: QueryCache,
    invalidates: Vec<QueryKey>,
    status: Rc<Cell<MutationStatus>>,
    last_error: Rc<RefCell<Option<ApiError>>>,
}

impl Mutation {
    /// `invalidates`: claves (exactas o prefijos) a invalidar si la
    /// operación tiene éxito
    pub fn new(cache: &QueryCache, invalidates: Vec<QueryKey>) -> Self {
        Self {
            cache: cache.clone(),
            invalidates,
            status: Rc::new(Cell::new(MutationStatus::Idle)),
            last_error: Rc::new(RefCell::new(None)),
        }
    }

    /// Ejecuta la operación exactamente una vez por invocación
    pub async fn run<T, F, Fut>(&self, operation: F) -> Result<T, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        self.status.set(MutationStatus::Pending);
        match operation().await {
            Ok(value) => {
                self.status.set(MutationStatus::Success);
                *self.last_error.borrow_mut() = None;
                for prefix in &self.invalidates {
                    self.cache.invalidate(prefix);
                }
                Ok(value)
            }
            Err(error) => {
                log::warn!("⚠️ mutación fallida: {}", error);
                self.status.set(MutationStatus::Error);
                *self.last_error.borrow_mut() = Some(error.clone());
                // las entradas existentes no se tocan; el error sí viaja
                // por los hooks (el interceptor decide si es global)
                self.cache.report_error(&error);
                Err(error)
            }
        }
    }

    pub fn status(&self) -> MutationStatus {
        self.status.get()
    }

    pub fn is_pending(&self) -> bool {
        self.status.get() == MutationStatus::Pending
    }

    pub fn last_error(&self) -> Option<ApiError> {
        self.last_error.borrow().clone()
    }
}
