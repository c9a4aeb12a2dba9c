use wasm_bindgen::JsValue;
use web_sys::window;
use yew::prelude::*;

use super::{AddTodoForm, PaginationControls, TodoTable};
use crate::hooks::{use_auth, use_todos};
use crate::models::Todo;
use crate::utils::constants::PER_PAGE;
use crate::utils::pagination::page_from_search;

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn push_page_url(page: u32) {
    if let Some(win) = window() {
        if let Ok(history) = win.history() {
            let _ = history.push_state_with_url(
                &JsValue::NULL,
                "",
                Some(&format!("?page={}", page)),
            );
        }
    }
}

#[function_component(TodosPage)]
pub fn todos_page() -> Html {
    // la página entra ya validada desde la frontera de routing (?page=N)
    let page = use_state(|| page_from_search(&current_search()));
    let todos = use_todos(*page);
    let auth = use_auth();

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: u32| {
            push_page_url(next);
            page.set(next);
        })
    };

    let items: Vec<Todo> = todos
        .list
        .data
        .as_ref()
        .map(|list| list.data.iter().take(PER_PAGE as usize).cloned().collect())
        .unwrap_or_default();
    let count = todos.list.data.as_ref().map_or(0, |list| list.count);

    html! {
        <div class="todos-page">
            <header class="todos-header">
                <h1>{"Gestión de Todos"}</h1>
                <div class="todos-actions">
                    <button class="refresh-button" onclick={todos.refresh.reform(|_| ())}>
                        {"Actualizar"}
                    </button>
                    <button class="logout-button" onclick={auth.logout.reform(|_| ())}>
                        {"Salir"}
                    </button>
                </div>
            </header>

            <AddTodoForm
                on_create={todos.create.clone()}
                creating={todos.creating}
                error={todos.create_error.clone()}
                dismiss={todos.dismiss_errors.clone()}
            />

            <TodoTable
                items={items}
                loading={todos.list.is_loading()}
                is_placeholder={todos.list.is_placeholder}
                query_error={todos.list.error.clone()}
                on_delete={todos.delete.clone()}
                deleting={todos.deleting}
                delete_error={todos.delete_error.clone()}
            />

            <PaginationControls page={*page} count={count} on_page_change={on_page_change} />
        </div>
    }
}
