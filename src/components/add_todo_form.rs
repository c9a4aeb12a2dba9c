use chrono::NaiveDateTime;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::error::ApiError;
use crate::models::TodoCreate;

#[derive(Properties, PartialEq)]
pub struct AddTodoFormProps {
    pub on_create: Callback<TodoCreate>,
    pub creating: bool,
    pub error: Option<ApiError>,
    pub dismiss: Callback<()>,
}

#[function_component(AddTodoForm)]
pub fn add_todo_form(props: &AddTodoFormProps) -> Html {
    let title_ref = use_node_ref();
    let description_ref = use_node_ref();
    let due_ref = use_node_ref();

    // el error de creación se oculta solo pasados unos segundos
    {
        let dismiss = props.dismiss.clone();
        use_effect_with(props.error.clone(), move |error| {
            let timeout = error
                .as_ref()
                .map(|_| Timeout::new(6_000, move || dismiss.emit(())));
            move || drop(timeout)
        });
    }

    let on_submit = {
        let title_ref = title_ref.clone();
        let description_ref = description_ref.clone();
        let due_ref = due_ref.clone();
        let on_create = props.on_create.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(title_input), Some(description_input), Some(due_input)) = (
                title_ref.cast::<HtmlInputElement>(),
                description_ref.cast::<HtmlTextAreaElement>(),
                due_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let title = title_input.value().trim().to_string();
            if title.is_empty() {
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message("El título es obligatorio");
                }
                return;
            }

            let description = description_input.value().trim().to_string();
            // el input datetime-local entrega "YYYY-MM-DDTHH:MM"
            let due_time =
                NaiveDateTime::parse_from_str(&due_input.value(), "%Y-%m-%dT%H:%M").ok();

            on_create.emit(TodoCreate {
                title,
                description: (!description.is_empty()).then_some(description),
                due_time,
            });

            title_input.set_value("");
            description_input.set_value("");
            due_input.set_value("");
        })
    };

    html! {
        <form class="add-todo-form" onsubmit={on_submit}>
            <div class="form-group">
                <input
                    type="text"
                    name="title"
                    placeholder="Título"
                    ref={title_ref}
                    required=true
                />
            </div>

            <div class="form-group">
                <textarea
                    name="description"
                    placeholder="Descripción (opcional)"
                    ref={description_ref}
                />
            </div>

            <div class="form-group">
                <input
                    type="datetime-local"
                    name="due_time"
                    ref={due_ref}
                />
            </div>

            if let Some(error) = &props.error {
                <p class="form-error">
                    { format!("No se pudo crear: {}", error.message()) }
                </p>
            }

            <button type="submit" class="add-button" disabled={props.creating}>
                { if props.creating { "Creando..." } else { "Añadir" } }
            </button>
        </form>
    }
}
