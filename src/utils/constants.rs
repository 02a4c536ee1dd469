/// URL base del backend Flask
/// Configurada en tiempo de compilación:
/// - Por defecto: cadena vacía = mismo origen que la página servida
/// - Despliegue separado: via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// ID del contenedor del mapa en index.html
pub const MAP_CONTAINER_ID: &str = "map";

/// ID del tbody de la tabla de flota
pub const FLEET_TABLE_BODY_ID: &str = "fleet-table-body";

/// ID del tbody de la tabla de reasignaciones pendientes
pub const PENDING_TABLE_BODY_ID: &str = "pending-actions-body";

/// Nombre del callback global que la API de Google Maps invoca al terminar de cargar
pub const MAPS_READY_CALLBACK: &str = "__fleetMapsReady";

/// Estado que DirectionsService reporta cuando la ruta se calculó bien
pub const DIRECTIONS_STATUS_OK: &str = "OK";

/// Modo de viaje para todas las rutas de la flota
pub const TRAVEL_MODE_DRIVING: &str = "DRIVING";
