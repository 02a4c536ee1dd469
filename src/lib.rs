// ============================================================================
// FLEET TRACKER - CONSOLA DE OPERACIONES (RUST PURO)
// ============================================================================
// - Views: funciones que llenan las tablas del DOM
// - Maps: carga del script de Google y render de flota/rutas
// - Services: SOLO comunicación HTTP con el backend Flask
// - State: estado compartido con Rc<RefCell>
// - Models: estructuras espejo del JSON del backend
// ============================================================================

mod app;
mod config;
mod dom;
mod maps;
mod models;
mod services;
mod state;
mod utils;
mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::default());
    log::info!("🚌 Fleet Tracker - Consola de operaciones (Rust puro)");

    // Crear la app y correr los inicializadores registrados
    let app = App::new();
    app.start();

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}
