// ============================================================================
// MAPS LOADER - Carga asíncrona del script de Google Maps
// ============================================================================
// La API key vive en el backend; se pide por HTTP y se inyecta un <script>
// con callback JSONP. La carga se expone como future: el callback global
// resuelve la promesa y el evento "error" del <script> la rechaza, así el
// arranque del mapa puede esperar (await) en vez de engancharse a un global.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlScriptElement;
use crate::dom::{document, window};
use crate::maps::renderer::init_fleet_map;
use crate::maps::MapError;
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::utils::constants::MAPS_READY_CALLBACK;

/// URL del script de Google Maps con la key y el callback de carga
pub fn maps_script_url(api_key: &str) -> String {
    format!(
        "https://maps.googleapis.com/maps/api/js?key={}&callback={}",
        api_key, MAPS_READY_CALLBACK
    )
}

/// Detectar si google.maps ya está disponible (recarga en caliente, script manual)
fn maps_already_loaded() -> bool {
    let Some(window) = window() else {
        return false;
    };
    let google = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("google"))
        .unwrap_or(JsValue::UNDEFINED);
    if google.is_undefined() || google.is_null() {
        return false;
    }
    let maps = js_sys::Reflect::get(&google, &JsValue::from_str("maps"))
        .unwrap_or(JsValue::UNDEFINED);
    !maps.is_undefined() && !maps.is_null()
}

/// Inyectar el script de Google Maps y esperar a que termine de cargar
pub async fn ensure_maps_loaded(api_key: &str) -> Result<(), MapError> {
    if maps_already_loaded() {
        log::debug!("🗺️ google.maps ya estaba cargado, no se inyecta script");
        return Ok(());
    }

    let window = window().ok_or_else(|| MapError::ScriptLoad("no window".to_string()))?;
    let document = document().ok_or_else(|| MapError::ScriptLoad("no document".to_string()))?;
    let head = document
        .head()
        .ok_or_else(|| MapError::ScriptLoad("no <head>".to_string()))?;

    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|e| MapError::ScriptLoad(describe_js_value(&e)))?
        .dyn_into()
        .map_err(|_| MapError::ScriptLoad("created element is not a <script>".to_string()))?;
    script.set_src(&maps_script_url(api_key));
    let _ = script.set_attribute("async", "true");

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        // El callback global de la URL resuelve la promesa cuando Google termina
        if js_sys::Reflect::set(
            window.as_ref(),
            &JsValue::from_str(MAPS_READY_CALLBACK),
            resolve.as_ref(),
        )
        .is_err()
        {
            let _ = reject.call1(
                &JsValue::NULL,
                &JsValue::from_str("could not install ready callback"),
            );
            return;
        }

        let _ = script.add_event_listener_with_callback("error", &reject);

        if head.append_child(&script).is_err() {
            let _ = reject.call1(
                &JsValue::NULL,
                &JsValue::from_str("could not append script to <head>"),
            );
        }
    });

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| MapError::ScriptLoad(describe_js_value(&e)))
}

/// Pedir la key al backend, cargar el script y levantar el mapa de flota
/// Cada paso que falla corta la cadena con log; el resto de la página sigue
pub fn bootstrap_map(state: &AppState) {
    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();

        let api_key = match api.fetch_maps_key().await {
            Ok(key) => key,
            Err(e) => {
                log::error!("❌ No se pudo obtener la API key de Google Maps: {}", e);
                return;
            }
        };

        if let Err(e) = ensure_maps_loaded(&api_key).await {
            log::error!("❌ El script de Google Maps no cargó: {}", e);
            return;
        }

        if let Err(e) = init_fleet_map(&state) {
            log::error!("❌ No se pudo inicializar el mapa de flota: {}", e);
        }
    });
}

/// Texto legible para un JsValue de error (evento, excepción o string)
fn describe_js_value(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_url_carries_key_and_callback() {
        let url = maps_script_url("AIza-test");
        assert_eq!(
            url,
            "https://maps.googleapis.com/maps/api/js?key=AIza-test&callback=__fleetMapsReady"
        );
    }
}
