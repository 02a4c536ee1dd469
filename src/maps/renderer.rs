// ============================================================================
// FLEET MAP RENDERER - Mapa de flota sobre google.maps
// ============================================================================
// Construye el mapa centrado en el campus, un marcador por bus y un
// DirectionsRenderer propio por bus (si compartieran uno, cada setDirections
// pisaría la ruta anterior). Todos los handles quedan en colecciones
// indexadas por bus para poder reemplazar uno sin redibujar el resto.
// ============================================================================

use std::collections::HashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::get_element_by_id;
use crate::maps::MapError;
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::utils::constants::{DIRECTIONS_STATUS_OK, MAP_CONTAINER_ID, TRAVEL_MODE_DRIVING};
use crate::utils::gmaps_ffi as gmaps;
use crate::utils::gmaps_ffi::{lat_lng_literal, set_prop};

/// Mapa de flota con sus overlays, indexados por bus
pub struct FleetMap {
    map: gmaps::Map,
    directions: gmaps::DirectionsService,
    markers: HashMap<i64, gmaps::Marker>,
    route_overlays: HashMap<i64, gmaps::DirectionsRenderer>,
    inspector_overlays: HashMap<i64, gmaps::DirectionsRenderer>,
}

impl FleetMap {
    /// Crear el mapa centrado en el campus, con su marcador fijo
    pub fn new(container: &Element) -> Self {
        let options = js_sys::Object::new();
        set_prop(&options, "zoom", &JsValue::from_f64(CONFIG.map_config.default_zoom));
        set_prop(&options, "center", &depot_position());
        let map = gmaps::Map::new(container, &options.into());

        let marker_options = js_sys::Object::new();
        set_prop(&marker_options, "position", &depot_position());
        set_prop(&marker_options, "map", map.as_ref());
        set_prop(&marker_options, "icon", &depot_icon());
        set_prop(
            &marker_options,
            "title",
            &JsValue::from_str(&CONFIG.map_config.depot_label),
        );
        let _campus_marker = gmaps::Marker::new(&marker_options.into());

        Self {
            map,
            directions: gmaps::DirectionsService::new(),
            markers: HashMap::new(),
            route_overlays: HashMap::new(),
            inspector_overlays: HashMap::new(),
        }
    }

    /// Handle del google.maps.Map para módulos que dibujan encima
    pub fn map_handle(&self) -> gmaps::Map {
        self.map.clone()
    }

    /// Buses dibujados hasta ahora
    pub fn bus_count(&self) -> usize {
        self.markers.len()
    }

    /// Marcador + ruta al campus para un bus
    /// El click del marcador abre la ruta detallada vía inspector
    pub fn add_bus(&mut self, state: &AppState, bus_id: i64, lat: f64, lng: f64) {
        let position = lat_lng_literal(lat, lng);

        let marker_options = js_sys::Object::new();
        set_prop(&marker_options, "position", &position);
        set_prop(&marker_options, "map", self.map.as_ref());
        set_prop(&marker_options, "icon", &bus_icon());
        set_prop(
            &marker_options,
            "title",
            &JsValue::from_str(&bus_marker_title(bus_id)),
        );
        let marker = gmaps::Marker::new(&marker_options.into());

        let renderer_options = js_sys::Object::new();
        set_prop(&renderer_options, "map", self.map.as_ref());
        set_prop(&renderer_options, "suppressMarkers", &JsValue::TRUE);
        set_prop(&renderer_options, "polylineOptions", &route_polyline_options());
        let overlay = gmaps::DirectionsRenderer::new(&renderer_options.into());

        let request = driving_request(&position, &depot_position());
        let overlay_for_directions = overlay.clone();
        let directions_callback = Closure::wrap(Box::new(move |result: JsValue, status: JsValue| {
            let status = status.as_string().unwrap_or_default();
            if status == DIRECTIONS_STATUS_OK {
                overlay_for_directions.set_directions(&result);
            } else {
                log::warn!("⚠️ Sin ruta al campus para bus {}: {}", bus_id, status);
            }
        }) as Box<dyn FnMut(JsValue, JsValue)>);
        self.directions
            .route(&request, directions_callback.as_ref().unchecked_ref());
        directions_callback.forget();

        let state_for_click = state.clone();
        let click_callback = Closure::wrap(Box::new(move |_event: JsValue| {
            crate::maps::inspector::show_route(&state_for_click, bus_id);
        }) as Box<dyn FnMut(JsValue)>);
        marker.add_listener("click", click_callback.as_ref().unchecked_ref());
        click_callback.forget();

        self.markers.insert(bus_id, marker);
        self.route_overlays.insert(bus_id, overlay);
    }

    /// Registrar el overlay de inspección de un bus
    /// Si ya había uno para ese bus, se despega del mapa antes de soltarlo
    pub fn track_inspector_overlay(&mut self, bus_id: i64, overlay: gmaps::DirectionsRenderer) {
        if let Some(previous) = self.inspector_overlays.insert(bus_id, overlay) {
            previous.set_map(&JsValue::NULL);
        }
    }
}

/// Título del marcador de un bus
pub fn bus_marker_title(bus_id: i64) -> String {
    format!("Bus ID: {}", bus_id)
}

/// Request de Directions entre dos puntos, siempre conduciendo
pub fn driving_request(origin: &JsValue, destination: &JsValue) -> JsValue {
    let request = js_sys::Object::new();
    set_prop(&request, "origin", origin);
    set_prop(&request, "destination", destination);
    set_prop(&request, "travelMode", &JsValue::from_str(TRAVEL_MODE_DRIVING));
    request.into()
}

/// Posición del campus como literal {lat, lng}
pub fn depot_position() -> JsValue {
    lat_lng_literal(CONFIG.map_config.depot_lat, CONFIG.map_config.depot_lng)
}

fn depot_icon() -> JsValue {
    let icon = js_sys::Object::new();
    let size = CONFIG.ui_config.depot_icon_size as f64;
    set_prop(&icon, "url", &JsValue::from_str(&CONFIG.ui_config.depot_icon_url));
    set_prop(&icon, "scaledSize", gmaps::Size::new(size, size).as_ref());
    icon.into()
}

fn bus_icon() -> JsValue {
    let icon = js_sys::Object::new();
    let size = CONFIG.ui_config.bus_icon_size as f64;
    let anchor = CONFIG.ui_config.bus_icon_anchor as f64;
    set_prop(&icon, "url", &JsValue::from_str(&CONFIG.ui_config.bus_icon_url));
    set_prop(&icon, "scaledSize", gmaps::Size::new(size, size).as_ref());
    // Centrar el icono sobre la coordenada
    set_prop(&icon, "anchor", gmaps::Point::new(anchor, anchor).as_ref());
    icon.into()
}

fn route_polyline_options() -> JsValue {
    let options = js_sys::Object::new();
    set_prop(
        &options,
        "strokeColor",
        &JsValue::from_str(&CONFIG.ui_config.route_color),
    );
    set_prop(
        &options,
        "strokeOpacity",
        &JsValue::from_f64(CONFIG.ui_config.route_opacity),
    );
    set_prop(
        &options,
        "strokeWeight",
        &JsValue::from_f64(CONFIG.ui_config.route_weight as f64),
    );
    options.into()
}

/// Construir el mapa en su contenedor e instalarlo en el estado global
/// Se llama cuando el script de Google ya terminó de cargar
pub fn init_fleet_map(state: &AppState) -> Result<(), MapError> {
    let container = get_element_by_id(MAP_CONTAINER_ID)
        .ok_or_else(|| MapError::MissingContainer(MAP_CONTAINER_ID.to_string()))?;

    state.set_map(FleetMap::new(&container));
    log::info!(
        "🗺️ Mapa de flota listo, centrado en {}",
        CONFIG.map_config.depot_label
    );

    populate_buses(state.clone());
    Ok(())
}

/// Pedir posiciones y dibujar la flota
/// Un registro sin coordenadas se salta con warning, el resto se dibuja igual
fn populate_buses(state: AppState) {
    spawn_local(async move {
        let api = ApiClient::new();
        let buses = match api.fetch_bus_locations().await {
            Ok(buses) => buses,
            Err(e) => {
                log::error!("❌ No se pudieron cargar las posiciones de la flota: {}", e);
                return;
            }
        };

        for bus in &buses {
            let Some((lat, lng)) = bus.coordinates() else {
                log::warn!("⚠️ Bus {} sin coordenadas completas, se salta", bus.id);
                continue;
            };
            state.with_map(|map| map.add_bus(&state, bus.id, lat, lng));
        }

        let plotted = state.with_map(|map| map.bus_count()).unwrap_or(0);
        log::info!("🚌 {} de {} buses en el mapa", plotted, buses.len());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_marker_title_format() {
        assert_eq!(bus_marker_title(7), "Bus ID: 7");
    }
}
