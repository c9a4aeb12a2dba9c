use yew::prelude::*;

use super::{LoginScreen, TodosPage};
use crate::app::AppContext;
use crate::services::navigation::BrowserNavigator;
use crate::state::interceptor::{Navigator, HOME_PATH, LOGIN_PATH};

#[function_component(App)]
pub fn app() -> Html {
    // el contexto se construye una sola vez y vive lo que viva la pestaña
    let context = use_state(AppContext::bootstrap);
    let context = (*context).clone();
    let logged_in = context.session.is_authenticated();

    // Guardia de ruta: sin sesión sólo se puede estar en /login,
    // y con sesión /login redirige a la raíz
    use_effect_with(logged_in, move |&logged_in| {
        let path = BrowserNavigator.current_path();
        if !logged_in && path != LOGIN_PATH {
            BrowserNavigator.navigate(LOGIN_PATH);
        } else if logged_in && path == LOGIN_PATH {
            BrowserNavigator.navigate(HOME_PATH);
        }
        || ()
    });

    html! {
        <ContextProvider<AppContext> context={context}>
            if logged_in {
                <TodosPage />
            } else {
                <LoginScreen />
            }
        </ContextProvider<AppContext>>
    }
}
