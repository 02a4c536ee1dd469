// ============================================================================
// ROUTE INSPECTOR - Ruta detallada bajo demanda
// ============================================================================
// Al click en un marcador se pide /api/route y se recalcula el primer tramo
// con DirectionsService sobre un overlay nuevo. Última petición gana: si el
// operador clickea dos buses seguidos, ambas respuestas se dibujan y la más
// reciente queda encima; el overlay anterior del mismo bus se despega.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use crate::maps::renderer::driving_request;
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::utils::constants::DIRECTIONS_STATUS_OK;
use crate::utils::gmaps_ffi as gmaps;
use crate::utils::gmaps_ffi::lat_lng_literal;

/// Aviso cuando la respuesta no trae ninguna ruta
pub const NO_ROUTE_MESSAGE: &str = "No route found";

/// Aviso cuando DirectionsService rechaza el recálculo
pub fn directions_failure_message(status: &str) -> String {
    format!("Could not display directions due to: {}", status)
}

/// Pedir la ruta detallada de un bus y dibujarla sobre el mapa
pub fn show_route(state: &AppState, bus_id: i64) {
    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        let route = match api.fetch_bus_route(bus_id).await {
            Ok(route) => route,
            Err(e) => {
                log::error!("❌ No se pudo obtener la ruta del bus {}: {}", bus_id, e);
                return;
            }
        };

        log::debug!(
            "🧭 Respuesta de ruta para bus {}: {} rutas",
            bus_id,
            route.routes.len()
        );

        let Some((start, end)) = route.first_leg() else {
            log::warn!("⚠️ Respuesta sin tramos para bus {}", bus_id);
            state.notify(NO_ROUTE_MESSAGE);
            return;
        };
        let origin = lat_lng_literal(start.lat, start.lng);
        let destination = lat_lng_literal(end.lat, end.lng);

        let Some(map_handle) = state.with_map(|map| map.map_handle()) else {
            log::error!("❌ Ruta pedida para bus {} antes de instalar el mapa", bus_id);
            return;
        };

        // Servicio y overlay frescos por consulta, ligados al mapa actual
        let service = gmaps::DirectionsService::new();
        let overlay = gmaps::DirectionsRenderer::new(&js_sys::Object::new().into());
        overlay.set_map(map_handle.as_ref());
        state.with_map(|map| map.track_inspector_overlay(bus_id, overlay.clone()));

        let request = driving_request(&origin, &destination);
        let state_for_status = state.clone();
        let callback = Closure::wrap(Box::new(move |result: JsValue, status: JsValue| {
            let status = status.as_string().unwrap_or_default();
            if status == DIRECTIONS_STATUS_OK {
                overlay.set_directions(&result);
            } else {
                log::error!("❌ Directions rechazó la ruta del bus {}: {}", bus_id, status);
                state_for_status.notify(&directions_failure_message(&status));
            }
        }) as Box<dyn FnMut(JsValue, JsValue)>);
        service.route(&request, callback.as_ref().unchecked_ref());
        callback.forget();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_route_message_is_verbatim() {
        assert_eq!(NO_ROUTE_MESSAGE, "No route found");
    }

    #[test]
    fn test_directions_failure_message_includes_status() {
        assert_eq!(
            directions_failure_message("ZERO_RESULTS"),
            "Could not display directions due to: ZERO_RESULTS"
        );
    }
}
