// ============================================================================
// TODOS MANAGER - CLIENTE PWA (RUST + WASM)
// ============================================================================
// Capa de sincronización de estado cliente-servidor:
// - state: caché de queries, mutaciones, sesión e interceptor de errores
// - services: SOLO comunicación con el backend (gloo-net) y navegación
// - hooks/components: capa de vista (yew) que consume la caché
// Los módulos de núcleo compilan también en nativo para poder testearlos
// con `cargo test` sin navegador.
// ============================================================================

pub mod error;
pub mod models;
pub mod state;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod hooks;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    // Panic hook para poder depurar desde la consola del navegador
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("🚀 Todos Manager - arranque del cliente");

    yew::Renderer::<components::App>::new().render();
}
