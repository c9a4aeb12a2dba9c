// ============================================================================
// QUERY CACHE - Única fuente de verdad de los datos derivados del servidor
// ============================================================================
// Una sola caché por aplicación, compartida entre componentes:
// - claves estructurales (recurso + parámetros) con match por prefijo
// - coalescing: una sola petición en vuelo por clave
// - orden por inicio: sólo la petición más reciente puede escribir la entrada
// - invalidación selectiva + notificación síncrona a los suscriptores
// Mono-hilo cooperativo: ningún borrow cruza un .await.
// ============================================================================

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;

use crate::error::ApiError;
use crate::state::reactivity::SubscriberList;

/// Clave de query: lista ordenada de segmentos, igualdad estructural.
/// `["todos", "page=2"]` identifica la página 2 del listado.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(resource: &str) -> Self {
        Self(vec![resource.to_string()])
    }

    /// Añade un segmento `nombre=valor`
    pub fn param(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.0.push(format!("{}={}", name, value));
        self
    }

    /// Match por prefijo: `["todos"]` cubre todas las páginas del listado
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    Pending,
    Success,
    Error,
}

/// Instantánea de una entrada, tal como la ve un consumidor
#[derive(Debug)]
pub struct QueryResult<T> {
    pub data: Option<Rc<T>>,
    pub status: QueryStatus,
    pub error: Option<ApiError>,
    /// Datos de otra clave expuestos como valor transitorio (ver
    /// `snapshot_or_placeholder`)
    pub is_placeholder: bool,
    /// La entrada fue invalidada y espera re-fetch
    pub is_stale: bool,
}

impl<T> Clone for QueryResult<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            status: self.status,
            error: self.error.clone(),
            is_placeholder: self.is_placeholder,
            is_stale: self.is_stale,
        }
    }
}

impl<T> QueryResult<T> {
    fn idle() -> Self {
        Self {
            data: None,
            status: QueryStatus::Idle,
            error: None,
            is_placeholder: false,
            is_stale: false,
        }
    }

    /// ¿Debe el observador lanzar (o relanzar) la query?
    pub fn needs_fetch(&self) -> bool {
        matches!(self.status, QueryStatus::Idle) || self.is_stale
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, QueryStatus::Idle | QueryStatus::Pending)
    }
}

type SharedData = Rc<dyn Any>;
type FetchOutcome = Result<SharedData, ApiError>;

struct Entry {
    status: QueryStatus,
    data: Option<SharedData>,
    last_error: Option<ApiError>,
    invalidated: bool,
    /// Secuencia global en el momento de la última invalidación: un fetch
    /// arrancado antes no puede limpiar la marca de stale
    stale_since: u64,
    /// Secuencia del fetch en vuelo más reciente para esta clave
    latest_start: Option<u64>,
    waiters: Vec<oneshot::Sender<FetchOutcome>>,
}

impl Entry {
    fn new() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            last_error: None,
            invalidated: false,
            stale_since: 0,
            latest_start: None,
            waiters: Vec::new(),
        }
    }
}

/// Caché de queries compartida. Clonar comparte el mismo estado.
#[derive(Clone)]
pub struct QueryCache {
    entries: Rc<RefCell<HashMap<QueryKey, Entry>>>,
    listeners: Rc<RefCell<HashMap<QueryKey, Rc<SubscriberList<()>>>>>,
    error_hooks: Rc<SubscriberList<ApiError>>,
    next_seq: Rc<Cell<u64>>,
}

enum Plan {
    Hit,
    Join(oneshot::Receiver<FetchOutcome>),
    Run(u64),
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(HashMap::new())),
            listeners: Rc::new(RefCell::new(HashMap::new())),
            error_hooks: Rc::new(SubscriberList::new()),
            next_seq: Rc::new(Cell::new(0)),
        }
    }

    fn bump_seq(&self) -> u64 {
        let seq = self.next_seq.get() + 1;
        self.next_seq.set(seq);
        seq
    }

    // ------------------------------------------------------------------
    // Suscripciones
    // ------------------------------------------------------------------

    /// Registra interés en una clave; el callback se invoca de forma
    /// síncrona en cada transición terminal y en cada invalidación
    pub fn subscribe(&self, key: &QueryKey, callback: impl Fn() + 'static) -> u64 {
        let list = self
            .listeners
            .borrow_mut()
            .entry(key.clone())
            .or_insert_with(|| Rc::new(SubscriberList::new()))
            .clone();
        list.subscribe(move |_: &()| callback())
    }

    pub fn unsubscribe(&self, key: &QueryKey, id: u64) {
        let list = self.listeners.borrow().get(key).cloned();
        if let Some(list) = list {
            list.unsubscribe(id);
        }
    }

    /// Hook global de errores (queries y mutaciones); aquí se cuelga el
    /// interceptor de autenticación
    pub fn on_error(&self, hook: impl Fn(&ApiError) + 'static) -> u64 {
        self.error_hooks.subscribe(hook)
    }

    /// Propaga un error por los hooks globales (lo usan también las
    /// mutaciones: la caché nunca se traga un error)
    pub fn report_error(&self, error: &ApiError) {
        self.error_hooks.notify(error);
    }

    fn notify(&self, key: &QueryKey) {
        let list = self.listeners.borrow().get(key).cloned();
        if let Some(list) = list {
            list.notify(&());
        }
    }

    fn observed(&self, key: &QueryKey) -> bool {
        self.listeners
            .borrow()
            .get(key)
            .map_or(false, |list| !list.is_empty())
    }

    // ------------------------------------------------------------------
    // Lecturas
    // ------------------------------------------------------------------

    /// Estado actual de una clave, sin disparar ningún fetch
    pub fn snapshot<T: 'static>(&self, key: &QueryKey) -> QueryResult<T> {
        let entries = self.entries.borrow();
        match entries.get(key) {
            None => QueryResult::idle(),
            Some(entry) => QueryResult {
                data: entry.data.clone().and_then(downcast::<T>),
                status: entry.status,
                error: entry.last_error.clone(),
                is_placeholder: false,
                is_stale: entry.invalidated,
            },
        }
    }

    /// Como `snapshot`, pero mientras la clave nueva no tenga datos expone
    /// los de `previous` marcados como placeholder (navegación entre
    /// páginas sin parpadeo)
    pub fn snapshot_or_placeholder<T: 'static>(
        &self,
        key: &QueryKey,
        previous: &QueryKey,
    ) -> QueryResult<T> {
        let current = self.snapshot::<T>(key);
        if current.data.is_some()
            || matches!(current.status, QueryStatus::Success | QueryStatus::Error)
        {
            return current;
        }
        if key == previous {
            return current;
        }
        match self.snapshot::<T>(previous).data {
            Some(data) => QueryResult {
                data: Some(data),
                status: current.status,
                error: current.error,
                is_placeholder: true,
                is_stale: current.is_stale,
            },
            None => current,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Lee la clave, lanzando `fetch` sólo si hace falta:
    /// - entrada fresca (Success/Error sin invalidar) ⇒ cache hit, sin red
    /// - fetch en vuelo ⇒ se comparte su resolución (coalescing)
    /// - en otro caso ⇒ arranca un fetch numerado por orden de inicio
    pub async fn query<T, F, Fut>(&self, key: QueryKey, fetch: F) -> QueryResult<T>
    where
        T: 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        self.run_query(key, fetch, false).await
    }

    /// Variante que fuerza un refetch aunque la entrada esté fresca
    /// (refresh explícito del consumidor); supersede lo que haya en vuelo
    pub async fn refresh<T, F, Fut>(&self, key: QueryKey, fetch: F) -> QueryResult<T>
    where
        T: 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        self.run_query(key, fetch, true).await
    }

    async fn run_query<T, F, Fut>(&self, key: QueryKey, fetch: F, force: bool) -> QueryResult<T>
    where
        T: 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let plan = {
            let mut entries = self.entries.borrow_mut();
            let entry = entries.entry(key.clone()).or_insert_with(Entry::new);

            let fresh = !entry.invalidated
                && matches!(entry.status, QueryStatus::Success | QueryStatus::Error);
            if fresh && !force {
                Plan::Hit
            } else if entry.latest_start.is_some() && !entry.invalidated && !force {
                let (tx, rx) = oneshot::channel();
                entry.waiters.push(tx);
                Plan::Join(rx)
            } else {
                let seq = self.bump_seq();
                entry.latest_start = Some(seq);
                entry.status = QueryStatus::Pending;
                Plan::Run(seq)
            }
        };

        match plan {
            Plan::Hit => {
                log::debug!("📦 cache hit: {}", key);
                self.snapshot(&key)
            }
            Plan::Join(rx) => match rx.await {
                Ok(Ok(data)) => QueryResult {
                    data: downcast::<T>(data),
                    status: QueryStatus::Success,
                    error: None,
                    is_placeholder: false,
                    is_stale: false,
                },
                Ok(Err(error)) => QueryResult {
                    data: None,
                    status: QueryStatus::Error,
                    error: Some(error),
                    is_placeholder: false,
                    is_stale: false,
                },
                // el fetch compartido desapareció (reset global): leer lo que haya
                Err(_) => self.snapshot(&key),
            },
            Plan::Run(seq) => {
                log::debug!("🌐 fetch {} (seq {})", key, seq);
                let result = fetch().await;
                self.apply(&key, seq, result)
            }
        }
    }

    /// Aplica la resolución de un fetch. Sólo escribe la entrada si sigue
    /// siendo el fetch más reciente para la clave (orden por inicio);
    /// una respuesta superada se descarta sin notificar ni disparar hooks.
    fn apply<T: 'static>(
        &self,
        key: &QueryKey,
        seq: u64,
        result: Result<T, ApiError>,
    ) -> QueryResult<T> {
        let (snapshot, waiters, outcome) = {
            let mut entries = self.entries.borrow_mut();
            let entry = match entries.get_mut(key) {
                Some(entry) => entry,
                // la entrada desapareció (reset global): nadie espera esto
                None => return detached(result),
            };
            if entry.latest_start != Some(seq) {
                log::debug!("⏭️ respuesta superada descartada: {} (seq {})", key, seq);
                return detached(result);
            }

            entry.latest_start = None;
            // una invalidación posterior al arranque del fetch prevalece
            if seq > entry.stale_since {
                entry.invalidated = false;
            }

            let waiters = std::mem::take(&mut entry.waiters);
            match result {
                Ok(data) => {
                    let shared = Rc::new(data);
                    let shared_any: SharedData = shared.clone();
                    entry.status = QueryStatus::Success;
                    entry.data = Some(shared_any.clone());
                    entry.last_error = None;
                    let snapshot = QueryResult {
                        data: Some(shared),
                        status: QueryStatus::Success,
                        error: None,
                        is_placeholder: false,
                        is_stale: entry.invalidated,
                    };
                    (snapshot, waiters, Ok(shared_any))
                }
                Err(error) => {
                    entry.status = QueryStatus::Error;
                    entry.last_error = Some(error.clone());
                    // los datos previos se conservan: un fallo no borra nada
                    let snapshot = QueryResult {
                        data: entry.data.clone().and_then(downcast::<T>),
                        status: QueryStatus::Error,
                        error: Some(error.clone()),
                        is_placeholder: false,
                        is_stale: entry.invalidated,
                    };
                    (snapshot, waiters, Err(error))
                }
            }
        };

        let failure = outcome.as_ref().err().cloned();
        for waiter in waiters {
            let _ = waiter.send(outcome.clone());
        }

        self.notify(key);
        if let Some(error) = &failure {
            log::warn!("⚠️ query {} falló: {}", key, error);
            self.report_error(error);
        }

        snapshot
    }

    // ------------------------------------------------------------------
    // Invalidación
    // ------------------------------------------------------------------

    /// Marca como stale toda entrada cuya clave empiece por `prefix` y
    /// notifica a sus observadores (que relanzan la query). Las entradas
    /// asentadas sin observadores se descartan en vez de re-fetchearse.
    pub fn invalidate(&self, prefix: &QueryKey) {
        let stamp = self.bump_seq();
        let mut touched = Vec::new();
        {
            let mut entries = self.entries.borrow_mut();
            entries.retain(|key, entry| {
                if !key.starts_with(prefix) {
                    return true;
                }
                if !self.observed(key) && entry.latest_start.is_none() {
                    log::debug!("🗑️ entrada sin observadores descartada: {}", key);
                    return false;
                }
                entry.invalidated = true;
                entry.stale_since = stamp;
                touched.push(key.clone());
                true
            });
        }
        log::info!("♻️ invalidación de {}: {} entradas marcadas", prefix, touched.len());
        for key in touched {
            self.notify(&key);
        }
    }

    /// Reset global (cierre de sesión): vacía la caché por completo
    pub fn clear(&self) {
        let keys: Vec<QueryKey> = self.entries.borrow().keys().cloned().collect();
        self.entries.borrow_mut().clear();
        for key in keys {
            self.notify(&key);
        }
        log::info!("🧹 caché reiniciada");
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

fn downcast<T: 'static>(data: SharedData) -> Option<Rc<T>> {
    match data.downcast::<T>() {
        Ok(data) => Some(data),
        Err(_) => {
            log::error!("❌ tipo inesperado en la caché para esta clave");
            None
        }
    }
}

fn detached<T>(result: Result<T, ApiError>) -> QueryResult<T> {
    match result {
        Ok(data) => QueryResult {
            data: Some(Rc::new(data)),
            status: QueryStatus::Success,
            error: None,
            is_placeholder: false,
            is_stale: true,
        },
        Err(error) => QueryResult {
            data: None,
            status: QueryStatus::Error,
            error: Some(error),
            is_placeholder: false,
            is_stale: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::join;

    fn page_key(page: u32) -> QueryKey {
        QueryKey::new("todos").param("page", page)
    }

    fn counting_fetch(
        calls: &Rc<Cell<u32>>,
        value: &str,
    ) -> impl FnOnce() -> std::pin::Pin<Box<dyn Future<Output = Result<String, ApiError>>>> {
        let calls = calls.clone();
        let value = value.to_string();
        move || {
            calls.set(calls.get() + 1);
            Box::pin(async move { Ok(value) })
        }
    }

    #[test]
    fn fresh_entry_short_circuits() {
        let cache = QueryCache::new();
        let calls = Rc::new(Cell::new(0));
        block_on(async {
            let first = cache
                .query::<String, _, _>(page_key(1), counting_fetch(&calls, "page-1"))
                .await;
            assert_eq!(first.status, QueryStatus::Success);
            assert_eq!(first.data.as_deref().map(String::as_str), Some("page-1"));

            let second = cache
                .query::<String, _, _>(page_key(1), counting_fetch(&calls, "never"))
                .await;
            assert_eq!(second.data.as_deref().map(String::as_str), Some("page-1"));
        });
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn refresh_forces_a_refetch() {
        let cache = QueryCache::new();
        let calls = Rc::new(Cell::new(0));
        block_on(async {
            cache
                .query::<String, _, _>(page_key(1), counting_fetch(&calls, "v1"))
                .await;
            let refreshed = cache
                .refresh::<String, _, _>(page_key(1), counting_fetch(&calls, "v2"))
                .await;
            assert_eq!(refreshed.data.as_deref().map(String::as_str), Some("v2"));
        });
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn concurrent_queries_coalesce_into_one_fetch() {
        let cache = QueryCache::new();
        let calls = Rc::new(Cell::new(0u32));
        let (release, gate) = oneshot::channel::<()>();

        block_on(async {
            let first = cache.query::<String, _, _>(page_key(1), {
                let calls = calls.clone();
                move || async move {
                    calls.set(calls.get() + 1);
                    gate.await.ok();
                    Ok("shared".to_string())
                }
            });
            // segunda query con la misma clave antes de resolver la primera
            let second = cache.query::<String, _, _>(page_key(1), counting_fetch(&calls, "dup"));
            let driver = async move {
                release.send(()).ok();
            };

            let (first, second, _) = futures::join!(first, second, driver);
            assert_eq!(first.data.as_deref().map(String::as_str), Some("shared"));
            assert_eq!(second.data.as_deref().map(String::as_str), Some("shared"));
        });

        // exactamente una llamada de red
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn superseded_response_is_discarded() {
        let cache = QueryCache::new();
        let key = page_key(1);
        let (tx_old, rx_old) = oneshot::channel::<String>();
        let (tx_new, rx_new) = oneshot::channel::<String>();

        block_on(async {
            // fetch t1, queda en vuelo
            let old = cache.query::<String, _, _>(key.clone(), move || async move {
                rx_old.await.map_err(|_| ApiError::network("cancelado"))
            });

            let driver = {
                let cache = cache.clone();
                let key = key.clone();
                async move {
                    // la invalidación fuerza un fetch t2 que supersede a t1
                    cache.invalidate(&QueryKey::new("todos"));
                    tx_new.send("new".to_string()).ok();
                    let new = cache
                        .query::<String, _, _>(key.clone(), move || async move {
                            rx_new.await.map_err(|_| ApiError::network("cancelado"))
                        })
                        .await;
                    assert_eq!(new.data.as_deref().map(String::as_str), Some("new"));
                    // ahora resuelve t1, que llega tarde
                    tx_old.send("old".to_string()).ok();
                }
            };

            let (old, _) = join(old, driver).await;
            // el llamador de t1 recibe su propio resultado, pero marcado stale
            assert_eq!(old.data.as_deref().map(String::as_str), Some("old"));
            assert!(old.is_stale);
        });

        // la entrada refleja la respuesta del fetch arrancado más tarde
        let snapshot = cache.snapshot::<String>(&key);
        assert_eq!(snapshot.data.as_deref().map(String::as_str), Some("new"));
        assert_eq!(snapshot.status, QueryStatus::Success);
        assert!(!snapshot.is_stale);
    }

    #[test]
    fn invalidation_marks_observed_and_drops_unobserved() {
        let cache = QueryCache::new();
        let calls = Rc::new(Cell::new(0));
        block_on(async {
            cache
                .query::<String, _, _>(page_key(1), counting_fetch(&calls, "p1"))
                .await;
            cache
                .query::<String, _, _>(page_key(2), counting_fetch(&calls, "p2"))
                .await;
        });

        let notified = Rc::new(Cell::new(0u32));
        let id = cache.subscribe(&page_key(1), {
            let notified = notified.clone();
            move || notified.set(notified.get() + 1)
        });

        cache.invalidate(&QueryKey::new("todos"));

        // la observada queda stale con sus datos previos; la otra se descarta
        assert_eq!(notified.get(), 1);
        let observed = cache.snapshot::<String>(&page_key(1));
        assert!(observed.is_stale);
        assert_eq!(observed.data.as_deref().map(String::as_str), Some("p1"));
        assert_eq!(cache.snapshot::<String>(&page_key(2)).status, QueryStatus::Idle);

        // la siguiente observación re-fetchea
        block_on(async {
            let fresh = cache
                .query::<String, _, _>(page_key(1), counting_fetch(&calls, "p1v2"))
                .await;
            assert_eq!(fresh.data.as_deref().map(String::as_str), Some("p1v2"));
            assert!(!fresh.is_stale);
        });
        assert_eq!(calls.get(), 3);

        cache.unsubscribe(&page_key(1), id);
    }

    #[test]
    fn invalidation_during_flight_keeps_entry_stale() {
        let cache = QueryCache::new();
        let key = page_key(1);
        let (tx, rx) = oneshot::channel::<String>();

        block_on(async {
            let id = cache.subscribe(&key, || {});
            let pending = cache.query::<String, _, _>(key.clone(), move || async move {
                rx.await.map_err(|_| ApiError::network("cancelado"))
            });
            let driver = {
                let cache = cache.clone();
                async move {
                    cache.invalidate(&QueryKey::new("todos"));
                    tx.send("pre-invalidación".to_string()).ok();
                }
            };
            join(pending, driver).await;
            cache.unsubscribe(&key, id);
        });

        // el fetch arrancó antes de la invalidación: escribe datos pero no
        // puede limpiar la marca de stale
        let snapshot = cache.snapshot::<String>(&key);
        assert_eq!(snapshot.status, QueryStatus::Success);
        assert!(snapshot.is_stale);
    }

    #[test]
    fn failed_query_stores_error_and_fires_hooks() {
        let cache = QueryCache::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        cache.on_error({
            let seen = seen.clone();
            move |error: &ApiError| seen.borrow_mut().push(error.clone())
        });

        let calls = Rc::new(Cell::new(0));
        block_on(async {
            let failed = cache
                .query::<String, _, _>(page_key(1), || async {
                    Err(ApiError::from_status(500, "boom"))
                })
                .await;
            assert_eq!(failed.status, QueryStatus::Error);
            assert_eq!(failed.error, Some(ApiError::from_status(500, "boom")));

            // el error también es cacheable: no se reintenta solo
            let again = cache
                .query::<String, _, _>(page_key(1), counting_fetch(&calls, "nope"))
                .await;
            assert_eq!(again.status, QueryStatus::Error);
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn waiters_share_a_failed_resolution() {
        let cache = QueryCache::new();
        let (release, gate) = oneshot::channel::<()>();

        block_on(async {
            let first = cache.query::<String, _, _>(page_key(1), move || async move {
                gate.await.ok();
                Err(ApiError::from_status(503, "mantenimiento"))
            });
            let second =
                cache.query::<String, _, _>(page_key(1), || async { Ok("dup".to_string()) });
            let driver = async move {
                release.send(()).ok();
            };

            let (first, second, _) = futures::join!(first, second, driver);
            assert_eq!(first.status, QueryStatus::Error);
            assert_eq!(second.status, QueryStatus::Error);
            assert_eq!(second.error, Some(ApiError::from_status(503, "mantenimiento")));
        });
    }

    #[test]
    fn placeholder_exposes_previous_page_while_pending() {
        let cache = QueryCache::new();
        let calls = Rc::new(Cell::new(0));
        let (tx, rx) = oneshot::channel::<String>();

        block_on(async {
            cache
                .query::<String, _, _>(page_key(1), counting_fetch(&calls, "p1"))
                .await;

            let next = cache.query::<String, _, _>(page_key(2), move || async move {
                rx.await.map_err(|_| ApiError::network("cancelado"))
            });
            let driver = {
                let cache = cache.clone();
                async move {
                    let transitional =
                        cache.snapshot_or_placeholder::<String>(&page_key(2), &page_key(1));
                    assert!(transitional.is_placeholder);
                    assert_eq!(transitional.status, QueryStatus::Pending);
                    assert_eq!(
                        transitional.data.as_deref().map(String::as_str),
                        Some("p1")
                    );
                    tx.send("p2".to_string()).ok();
                }
            };
            join(next, driver).await;

            let settled = cache.snapshot_or_placeholder::<String>(&page_key(2), &page_key(1));
            assert!(!settled.is_placeholder);
            assert_eq!(settled.data.as_deref().map(String::as_str), Some("p2"));
        });
    }

    #[test]
    fn clear_empties_everything() {
        let cache = QueryCache::new();
        let calls = Rc::new(Cell::new(0));
        block_on(async {
            cache
                .query::<String, _, _>(page_key(1), counting_fetch(&calls, "p1"))
                .await;
        });
        cache.clear();
        assert_eq!(cache.snapshot::<String>(&page_key(1)).status, QueryStatus::Idle);
    }
}
