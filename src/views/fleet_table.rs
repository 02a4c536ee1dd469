// ============================================================================
// FLEET TABLE VIEW - Tabla de estado de la flota
// ============================================================================
// Una fila por bus con sus datos y los botones Accept/Deny. La decisión
// viaja por POST y el resultado que reporte el servidor se avisa al
// operador; un fallo de red se queda en el log.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, create_element, get_element_by_id, on_click, set_text_content, ElementBuilder};
use crate::models::bus::BusDetails;
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::utils::constants::FLEET_TABLE_BODY_ID;

/// Decisión del operador sobre un bus de la flota
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BusAction {
    Accept,
    Deny,
}

impl BusAction {
    /// Identificador que viaja en el body del POST
    pub fn as_str(self) -> &'static str {
        match self {
            BusAction::Accept => "accept",
            BusAction::Deny => "deny",
        }
    }

    /// Texto del botón
    pub fn label(self) -> &'static str {
        match self {
            BusAction::Accept => "Accept",
            BusAction::Deny => "Deny",
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            BusAction::Accept => "btn-accept",
            BusAction::Deny => "btn-deny",
        }
    }
}

/// Cargar /api/bus-details y llenar la tabla de flota
pub fn load_fleet_table(state: &AppState) {
    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.fetch_bus_details().await {
            Ok(buses) => {
                if let Err(e) = render_fleet_rows(&state, &buses) {
                    log::error!("❌ Error renderizando la tabla de flota: {:?}", e);
                }
            }
            Err(e) => log::error!("❌ No se pudieron cargar los detalles de la flota: {}", e),
        }
    });
}

/// Celdas de texto de una fila, en el orden de las columnas de la tabla
pub fn fleet_row_cells(bus: &BusDetails) -> [String; 5] {
    [
        bus.id.to_string(),
        bus.driver.clone(),
        bus.seating_capacity.to_string(),
        bus.current_attendance.to_string(),
        bus.location.clone(),
    ]
}

/// Mensaje del aviso tras registrar una decisión
pub fn decision_message(action: BusAction, bus_id: i64, success: bool) -> String {
    format!(
        "Action {} for bus {} was {}",
        action.as_str(),
        bus_id,
        if success { "successful" } else { "unsuccessful" }
    )
}

fn render_fleet_rows(state: &AppState, buses: &[BusDetails]) -> Result<(), JsValue> {
    let Some(table_body) = get_element_by_id(FLEET_TABLE_BODY_ID) else {
        log::error!("❌ No existe #{} en la página", FLEET_TABLE_BODY_ID);
        return Ok(());
    };

    for bus in buses {
        let row = render_fleet_row(state, bus)?;
        append_child(&table_body, &row)?;
    }

    log::info!("📋 Tabla de flota: {} buses", buses.len());
    Ok(())
}

fn render_fleet_row(state: &AppState, bus: &BusDetails) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?
        .attr("data-bus-id", &bus.id.to_string())?
        .build();

    for cell_text in fleet_row_cells(bus) {
        let cell = create_element("td")?;
        set_text_content(&cell, &cell_text);
        append_child(&row, &cell)?;
    }

    let actions_cell = ElementBuilder::new("td")?
        .child(decision_button(state, bus.id, BusAction::Accept)?)?
        .child(decision_button(state, bus.id, BusAction::Deny)?)?
        .build();
    append_child(&row, &actions_cell)?;

    Ok(row)
}

fn decision_button(state: &AppState, bus_id: i64, action: BusAction) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class(action.css_class())
        .text(action.label())
        .build();

    let state = state.clone();
    on_click(&button, move |_event| {
        submit_decision(state.clone(), bus_id, action);
    })?;

    Ok(button)
}

/// POST de la decisión y aviso con el resultado que reporta el servidor
fn submit_decision(state: AppState, bus_id: i64, action: BusAction) {
    spawn_local(async move {
        let api = ApiClient::new();
        match api.send_bus_action(bus_id, action.as_str()).await {
            Ok(response) => {
                state.notify(&decision_message(action, bus_id, response.success));
            }
            Err(e) => log::error!(
                "❌ La acción '{}' para bus {} no llegó al servidor: {}",
                action.as_str(),
                bus_id,
                e
            ),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bus() -> BusDetails {
        BusDetails {
            id: 4,
            driver: "Driver 4".to_string(),
            seating_capacity: 45,
            current_attendance: 38,
            location: "13.0500,80.2000".to_string(),
        }
    }

    #[test]
    fn test_fleet_row_cells_follow_column_order() {
        let cells = fleet_row_cells(&sample_bus());
        assert_eq!(
            cells,
            [
                "4".to_string(),
                "Driver 4".to_string(),
                "45".to_string(),
                "38".to_string(),
                "13.0500,80.2000".to_string(),
            ]
        );
    }

    #[test]
    fn test_decision_message_successful() {
        assert_eq!(
            decision_message(BusAction::Accept, 4, true),
            "Action accept for bus 4 was successful"
        );
    }

    #[test]
    fn test_decision_message_unsuccessful() {
        assert_eq!(
            decision_message(BusAction::Deny, 9, false),
            "Action deny for bus 9 was unsuccessful"
        );
    }

    #[test]
    fn test_bus_action_wire_ids_and_labels() {
        assert_eq!(BusAction::Accept.as_str(), "accept");
        assert_eq!(BusAction::Deny.as_str(), "deny");
        assert_eq!(BusAction::Accept.label(), "Accept");
        assert_eq!(BusAction::Deny.label(), "Deny");
    }
}
