use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let auth = use_auth();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let login = auth.login.clone();
        let reset_error = auth.reset_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let username = username_input.value();
                let password = password_input.value();

                // Validate fields
                if username.is_empty() || password.is_empty() {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message("Por favor, completa todos los campos");
                    }
                    return;
                }

                reset_error.emit(());
                login.emit((username, password));
            }
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"✅"}</div>
                    </div>
                    <h1>{"Todos Manager"}</h1>
                    <p>{"Inicia sesión para ver tus tareas"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Email"}</label>
                        <input
                            type="email"
                            id="username"
                            name="username"
                            placeholder="Ingresa tu email"
                            ref={username_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Ingresa tu contraseña"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    if let Some(error) = &auth.error {
                        <p class="form-error">{ error.message().to_string() }</p>
                    }

                    <button type="submit" class="login-button" disabled={auth.pending}>
                        { if auth.pending { "Entrando..." } else { "Entrar" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
