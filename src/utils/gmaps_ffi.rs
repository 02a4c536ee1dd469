// ============================================================================
// GOOGLE MAPS FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para el namespace google.maps - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Clone)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(container: &Element, options: &JsValue) -> Map;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &Marker, event_name: &str, handler: &js_sys::Function);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type Size;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(width: f64, height: f64) -> Size;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type Point;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(x: f64, y: f64) -> Point;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type DirectionsService;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new() -> DirectionsService;

    #[wasm_bindgen(method)]
    pub fn route(this: &DirectionsService, request: &JsValue, callback: &js_sys::Function);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    #[derive(Clone)]
    pub type DirectionsRenderer;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(options: &JsValue) -> DirectionsRenderer;

    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &DirectionsRenderer, map: &JsValue);

    #[wasm_bindgen(method, js_name = setDirections)]
    pub fn set_directions(this: &DirectionsRenderer, directions: &JsValue);
}

/// Helper: literal {lat, lng} tal como lo espera la API de Google Maps
pub fn lat_lng_literal(lat: f64, lng: f64) -> JsValue {
    let obj = js_sys::Object::new();
    set_prop(&obj, "lat", &JsValue::from_f64(lat));
    set_prop(&obj, "lng", &JsValue::from_f64(lng));
    obj.into()
}

/// Helper: asignar una propiedad a un objeto de opciones
/// Reflect::set solo falla sobre no-objetos, que aquí nunca pasamos
pub fn set_prop(target: &js_sys::Object, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(target, &JsValue::from_str(key), value);
}
