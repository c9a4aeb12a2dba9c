// ============================================================================
// USE AUTH - Login / logout sobre el Session Store
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::AppContext;
use crate::error::ApiError;
use crate::services::navigation::BrowserNavigator;
use crate::state::interceptor::{Navigator, HOME_PATH, LOGIN_PATH};
use crate::state::mutation::Mutation;

pub struct UseAuthHandle {
    pub is_logged_in: bool,
    pub pending: bool,
    pub error: Option<ApiError>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    pub reset_error: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let ctx = use_context::<AppContext>().expect("AppContext no provisto");
    let pending = use_state(|| false);
    let error = use_state(|| None::<ApiError>);

    let login = {
        let ctx = ctx.clone();
        let pending = pending.clone();
        let error = error.clone();
        Callback::from(move |(username, password): (String, String)| {
            let api = ctx.api.clone();
            let session = ctx.session.clone();
            let pending = pending.clone();
            let error = error.clone();
            let mutation = Mutation::new(&ctx.cache, Vec::new());
            pending.set(true);
            spawn_local(async move {
                let result = mutation
                    .run(|| async { api.login(&username, &password).await })
                    .await;
                pending.set(false);
                match result {
                    Ok(token) => {
                        session.set_token(&token.access_token);
                        error.set(None);
                        log::info!("✅ Sesión iniciada");
                        // el login correcto vuelve a la raíz
                        BrowserNavigator.navigate(HOME_PATH);
                    }
                    Err(e) => {
                        log::error!("❌ Login fallido: {}", e);
                        error.set(Some(e));
                    }
                }
            });
        })
    };

    let logout = {
        let ctx = ctx.clone();
        Callback::from(move |_: ()| {
            log::info!("👋 Cierre de sesión");
            ctx.session.clear();
            // la caché muere con la sesión
            ctx.cache.clear();
            BrowserNavigator.navigate(LOGIN_PATH);
        })
    };

    let reset_error = {
        let error = error.clone();
        Callback::from(move |_: ()| error.set(None))
    };

    UseAuthHandle {
        is_logged_in: ctx.session.is_authenticated(),
        pending: *pending,
        error: (*error).clone(),
        login,
        logout,
        reset_error,
    }
}
