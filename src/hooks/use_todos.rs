// ============================================================================
// USE TODOS - Listado paginado + mutaciones de crear/borrar
// ============================================================================
// El hook es un consumidor más de la caché: se suscribe a la clave de su
// página, relanza la query cuando la entrada queda stale y expone la página
// anterior como placeholder mientras llega la nueva.
// ============================================================================

use std::rc::Rc;

use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::AppContext;
use crate::error::ApiError;
use crate::models::{TodoCreate, TodosResponse};
use crate::services::api_client::ApiClient;
use crate::state::mutation::Mutation;
use crate::state::query_cache::{QueryCache, QueryKey, QueryResult};
use crate::utils::constants::PER_PAGE;
use crate::utils::pagination::to_offset;

fn todos_key(page: u32) -> QueryKey {
    QueryKey::new("todos").param("page", page)
}

fn spawn_fetch(cache: QueryCache, api: Rc<ApiClient>, page: u32, force: bool) {
    spawn_local(async move {
        let window = to_offset(page, PER_PAGE);
        let key = todos_key(page);
        let fetch = move || async move { api.read_todos(window.skip, window.limit).await };
        if force {
            cache.refresh::<TodosResponse, _, _>(key, fetch).await;
        } else {
            cache.query::<TodosResponse, _, _>(key, fetch).await;
        }
    });
}

pub struct UseTodosHandle {
    /// Estado actual de la página observada (puede ser placeholder)
    pub list: QueryResult<TodosResponse>,
    pub refresh: Callback<()>,
    pub create: Callback<TodoCreate>,
    pub creating: bool,
    pub create_error: Option<ApiError>,
    pub delete: Callback<Uuid>,
    pub deleting: bool,
    pub delete_error: Option<ApiError>,
    pub dismiss_errors: Callback<()>,
}

#[hook]
pub fn use_todos(page: u32) -> UseTodosHandle {
    let ctx = use_context::<AppContext>().expect("AppContext no provisto");
    let last_page = use_mut_ref(|| page);
    let snapshot = use_state(|| {
        ctx.cache
            .snapshot_or_placeholder::<TodosResponse>(&todos_key(page), &todos_key(page))
    });

    // Suscripción por página + primer disparo
    {
        let ctx = ctx.clone();
        let snapshot = snapshot.clone();
        let last_page = last_page.clone();
        use_effect_with(page, move |&page| {
            let key = todos_key(page);
            let prev_key = todos_key(*last_page.borrow());
            *last_page.borrow_mut() = page;

            let refresh_view = {
                let cache = ctx.cache.clone();
                let api = ctx.api.clone();
                let key = key.clone();
                Rc::new(move || {
                    let snap = cache.snapshot_or_placeholder::<TodosResponse>(&key, &prev_key);
                    // Idle o stale: relanzar; si ya hay fetch en vuelo la
                    // caché lo coalescea sola
                    if snap.needs_fetch() {
                        spawn_fetch(cache.clone(), api.clone(), page, false);
                    }
                    snapshot.set(snap);
                })
            };

            let subscription = ctx.cache.subscribe(&key, {
                let refresh_view = refresh_view.clone();
                move || refresh_view()
            });
            refresh_view();

            let cache = ctx.cache.clone();
            move || cache.unsubscribe(&key, subscription)
        });
    }

    let refresh = {
        let ctx = ctx.clone();
        Callback::from(move |_: ()| {
            spawn_fetch(ctx.cache.clone(), ctx.api.clone(), page, true);
        })
    };

    let creating = use_state(|| false);
    let create_error = use_state(|| None::<ApiError>);
    let create = {
        let ctx = ctx.clone();
        let creating = creating.clone();
        let create_error = create_error.clone();
        Callback::from(move |input: TodoCreate| {
            let api = ctx.api.clone();
            let creating = creating.clone();
            let create_error = create_error.clone();
            // crear invalida la página actual (clave exacta)
            let mutation = Mutation::new(&ctx.cache, vec![todos_key(page)]);
            creating.set(true);
            spawn_local(async move {
                let result = mutation.run(|| async { api.create_todo(&input).await }).await;
                creating.set(false);
                match result {
                    Ok(created) => {
                        log::info!("✅ Todo creado: {}", created.title);
                        create_error.set(None);
                    }
                    Err(error) => create_error.set(Some(error)),
                }
            });
        })
    };

    let deleting = use_state(|| false);
    let delete_error = use_state(|| None::<ApiError>);
    let delete = {
        let ctx = ctx.clone();
        let deleting = deleting.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |id: Uuid| {
            let api = ctx.api.clone();
            let deleting = deleting.clone();
            let delete_error = delete_error.clone();
            // borrar invalida el listado completo (prefijo "todos")
            let mutation = Mutation::new(&ctx.cache, vec![QueryKey::new("todos")]);
            deleting.set(true);
            spawn_local(async move {
                let result = mutation.run(|| async { api.delete_todo(&id).await }).await;
                deleting.set(false);
                match result {
                    Ok(_) => delete_error.set(None),
                    Err(error) => delete_error.set(Some(error)),
                }
            });
        })
    };

    let dismiss_errors = {
        let create_error = create_error.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |_: ()| {
            create_error.set(None);
            delete_error.set(None);
        })
    };

    UseTodosHandle {
        list: (*snapshot).clone(),
        refresh,
        create,
        creating: *creating,
        create_error: (*create_error).clone(),
        delete,
        deleting: *deleting,
        delete_error: (*delete_error).clone(),
        dismiss_errors,
    }
}
