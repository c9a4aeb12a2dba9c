use chrono::NaiveDateTime;
use uuid::Uuid;
use yew::prelude::*;

use crate::error::ApiError;
use crate::models::Todo;

#[derive(Properties, PartialEq)]
pub struct TodoTableProps {
    pub items: Vec<Todo>,
    pub loading: bool,
    /// Datos de otra página mostrados mientras llega la actual
    pub is_placeholder: bool,
    pub query_error: Option<ApiError>,
    pub on_delete: Callback<Uuid>,
    pub deleting: bool,
    pub delete_error: Option<ApiError>,
}

fn format_due(due: &Option<NaiveDateTime>) -> String {
    match due {
        Some(due) => due.format("%d/%m/%Y %H:%M").to_string(),
        None => "N/A".to_string(),
    }
}

#[function_component(TodoTable)]
pub fn todo_table(props: &TodoTableProps) -> Html {
    if props.items.is_empty() {
        if let Some(error) = &props.query_error {
            return html! {
                <div class="todos-error">
                    { format!("No se pudo cargar el listado: {}", error.message()) }
                </div>
            };
        }
        if props.loading {
            return html! { <div class="todos-loading">{"Cargando..."}</div> };
        }
        return html! { <div class="todos-empty">{"Todavía no tienes ninguna tarea"}</div> };
    }

    html! {
        <>
            if let Some(error) = &props.delete_error {
                <p class="form-error">
                    { format!("No se pudo borrar: {}", error.message()) }
                </p>
            }

            <table class={classes!("todos-table", props.is_placeholder.then_some("placeholder"))}>
                <thead>
                    <tr>
                        <th>{"Título"}</th>
                        <th>{"Descripción"}</th>
                        <th>{"Vence"}</th>
                        <th>{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.items.iter().map(|todo| {
                        let on_delete = props.on_delete.clone();
                        let id = todo.id;
                        html! {
                            <tr key={todo.id.to_string()}>
                                <td>{ &todo.title }</td>
                                <td class={classes!(todo.description.is_none().then_some("muted"))}>
                                    { todo.description.clone().unwrap_or_else(|| "N/A".to_string()) }
                                </td>
                                <td>{ format_due(&todo.due_time) }</td>
                                <td>
                                    <button
                                        class="delete-button"
                                        disabled={props.deleting}
                                        onclick={Callback::from(move |_| on_delete.emit(id))}
                                    >
                                        {"Borrar"}
                                    </button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </>
    }
}
