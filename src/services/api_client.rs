// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;
use crate::models::bus::{BusDetails, BusLocation};
use crate::models::pending::PendingAction;
use crate::models::route::RouteResponse;
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Obtener la API key de Google Maps guardada en el servidor
    pub async fn fetch_maps_key(&self) -> Result<String, String> {
        let url = format!("{}/api/google-maps-key", self.base_url);

        log::info!("🔑 Pidiendo API key de Google Maps al backend");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        let key_response = response.json::<MapsKeyResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;
        Ok(key_response.api_key)
    }

    /// Posiciones actuales de toda la flota
    pub async fn fetch_bus_locations(&self) -> Result<Vec<BusLocation>, String> {
        let url = format!("{}/api/bus-locations", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        let locations = response.json::<Vec<BusLocation>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("🚌 Posiciones recibidas: {} buses", locations.len());

        Ok(locations)
    }

    /// Fichas completas de la flota para la tabla de estado
    pub async fn fetch_bus_details(&self) -> Result<Vec<BusDetails>, String> {
        let url = format!("{}/api/bus-details", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response.json::<Vec<BusDetails>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Ruta precalculada de un bus hacia el campus
    pub async fn fetch_bus_route(&self, bus_id: i64) -> Result<RouteResponse, String> {
        let url = format!("{}/api/route?bus_id={}", self.base_url, bus_id);

        log::info!("🗺️ Pidiendo ruta del bus {}", bus_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response.json::<RouteResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Propuestas de reasignación esperando decisión del admin
    pub async fn fetch_pending_actions(&self) -> Result<Vec<PendingAction>, String> {
        let url = format!("{}/api/pending-actions", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        let actions = response.json::<Vec<PendingAction>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("📋 Propuestas pendientes: {}", actions.len());

        Ok(actions)
    }

    /// Registrar la decisión accept/deny sobre un bus concreto
    pub async fn send_bus_action(&self, bus_id: i64, action: &str) -> Result<BusActionResponse, String> {
        let url = format!("{}/api/bus-action/{}", self.base_url, bus_id);
        let request = BusActionRequest {
            action: action.to_string(),
        };

        log::info!("📨 Enviando acción '{}' para bus {}", action, bus_id);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let parsed = response.json::<BusActionResponse>().await;
        decode_post_response(response.ok(), parsed, response.status(), &response.status_text())
    }

    /// Aprobar o rechazar una propuesta de reasignación
    pub async fn send_admin_decision(
        &self,
        proposal: &PendingAction,
        approved: bool,
    ) -> Result<AdminActionResponse, String> {
        let url = format!("{}/api/admin-action", self.base_url);
        let request = AdminActionRequest::from_proposal(proposal, approved);

        log::info!(
            "🛂 Decisión admin: {} propuesta '{}' (bus {} → bus {})",
            if approved { "aprobar" } else { "rechazar" },
            proposal.action,
            proposal.current_bus_id,
            proposal.nearby_bus_id
        );

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let parsed = response.json::<AdminActionResponse>().await;
        decode_post_response(response.ok(), parsed, response.status(), &response.status_text())
    }
}

/// Decodificar la respuesta de un POST dando prioridad al body JSON
/// El backend también responde rechazos con status de error y body
/// {success, message} (404 si la propuesta quedó obsoleta, por ejemplo);
/// ese body llega al caller igual que uno con status 200. El status solo
/// manda cuando el body no trae el JSON esperado.
fn decode_post_response<T>(
    status_ok: bool,
    parsed: Result<T, gloo_net::Error>,
    status: u16,
    status_text: &str,
) -> Result<T, String> {
    match parsed {
        Ok(body) => Ok(body),
        Err(e) if status_ok => Err(format!("Parse error: {}", e)),
        Err(_) => Err(format!("HTTP {}: {}", status, status_text)),
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapsKeyResponse {
    api_key: String,
}

#[derive(serde::Serialize)]
struct BusActionRequest {
    action: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct BusActionResponse {
    pub success: bool,
}

#[derive(serde::Serialize)]
struct AdminActionRequest {
    current_bus_id: i64,
    nearby_bus_id: i64,
    action: String,
    approved: bool,
}

impl AdminActionRequest {
    fn from_proposal(proposal: &PendingAction, approved: bool) -> Self {
        Self {
            current_bus_id: proposal.current_bus_id,
            nearby_bus_id: proposal.nearby_bus_id,
            action: proposal.action.clone(),
            approved,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct AdminActionResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pending::BusSnapshot;
    use serde_json::json;

    fn sample_proposal() -> PendingAction {
        PendingAction {
            current_bus_id: 2,
            nearby_bus_id: 5,
            action: "Combination".to_string(),
            message: "Combine Bus 2 with Bus 5.".to_string(),
            current_bus_details: BusSnapshot {
                seating_capacity: 40,
                current_attendance: 10,
                location: "13.10,80.20".to_string(),
            },
            nearby_bus_details: BusSnapshot {
                seating_capacity: 50,
                current_attendance: 20,
                location: "13.11,80.21".to_string(),
            },
        }
    }

    #[test]
    fn test_bus_action_request_body() {
        let request = BusActionRequest {
            action: "accept".to_string(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({"action": "accept"}));
    }

    #[test]
    fn test_admin_action_request_body() {
        let request = AdminActionRequest::from_proposal(&sample_proposal(), true);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "current_bus_id": 2,
                "nearby_bus_id": 5,
                "action": "Combination",
                "approved": true
            })
        );
    }

    #[test]
    fn test_admin_action_request_denied_keeps_proposal_ids() {
        let request = AdminActionRequest::from_proposal(&sample_proposal(), false);
        assert_eq!(request.current_bus_id, 2);
        assert_eq!(request.nearby_bus_id, 5);
        assert!(!request.approved);
    }

    #[test]
    fn test_maps_key_response_is_camel_case() {
        let parsed: MapsKeyResponse = serde_json::from_str(r#"{"apiKey": "AIza-test"}"#).unwrap();
        assert_eq!(parsed.api_key, "AIza-test");
    }

    #[test]
    fn test_bus_action_response_ignores_extra_keys() {
        let parsed: BusActionResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(parsed.success);

        let parsed: BusActionResponse =
            serde_json::from_str(r#"{"success": false, "message": "Bus not found"}"#).unwrap();
        assert!(!parsed.success);
    }

    #[test]
    fn test_post_error_status_with_json_body_still_delivers_it() {
        // Flask responde la propuesta obsoleta con 404 y body {success, message};
        // ese mensaje tiene que llegar al operador igual que uno con 200
        let body: AdminActionResponse = serde_json::from_str(
            r#"{"success": false, "message": "Current bus with ID 2 not found."}"#,
        )
        .unwrap();

        let response = decode_post_response(false, Ok(body), 404, "NOT FOUND").unwrap();
        assert!(!response.success);
        assert_eq!(response.message, "Current bus with ID 2 not found.");
    }

    #[test]
    fn test_post_error_status_without_json_body_is_http_error() {
        // Un 404 de ruta desconocida trae HTML, no JSON; ahí manda el status
        let parsed: Result<AdminActionResponse, gloo_net::Error> =
            Err(gloo_net::Error::GlooError("body was not JSON".to_string()));

        let result = decode_post_response(false, parsed, 404, "NOT FOUND");
        assert_eq!(result.unwrap_err(), "HTTP 404: NOT FOUND");
    }

    #[test]
    fn test_post_ok_status_with_bad_body_is_parse_error() {
        let parsed: Result<BusActionResponse, gloo_net::Error> =
            Err(gloo_net::Error::GlooError("missing field success".to_string()));

        let result = decode_post_response(true, parsed, 200, "OK");
        assert_eq!(result.unwrap_err(), "Parse error: missing field success");
    }
}
