use serde::{Deserialize, Serialize};

/// Propuesta de reasignación pendiente de aprobación (endpoint /api/pending-actions)
/// El monitor de asistencia genera "Reallocation" (bus lleno) o "Combination"
/// (bus con poca gente); el admin la aprueba o rechaza desde la tabla.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingAction {
    pub current_bus_id: i64,
    pub nearby_bus_id: i64,
    pub action: String,
    pub message: String,
    pub current_bus_details: BusSnapshot,
    pub nearby_bus_details: BusSnapshot,
}

/// Estado del bus embebido dentro de la propuesta
/// Mismo camelCase que BusDetails, pero congelado al momento de la propuesta.
/// La tabla identifica los buses por los ids de la propuesta, así que aquí
/// solo viajan capacidad, asistencia y ubicación.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusSnapshot {
    pub seating_capacity: u32,
    pub current_attendance: u32,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "current_bus_id": 2,
            "nearby_bus_id": 5,
            "action": "Reallocation",
            "message": "Reallocate students from Bus 2 to Bus 5.",
            "current_bus_details": {
                "id": 2,
                "driver": "Driver 2",
                "seatingCapacity": 40,
                "currentAttendance": 40,
                "location": "13.10,80.20",
                "phone": "+911111111111"
            },
            "nearby_bus_details": {
                "id": 5,
                "driver": "Driver 5",
                "seatingCapacity": 50,
                "currentAttendance": 12,
                "location": "13.11,80.21",
                "phone": "+912222222222"
            }
        }"#
    }

    #[test]
    fn test_pending_action_parses_nested_snapshots() {
        let action: PendingAction = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(action.current_bus_id, 2);
        assert_eq!(action.nearby_bus_id, 5);
        assert_eq!(action.action, "Reallocation");
        assert_eq!(action.current_bus_details.seating_capacity, 40);
        assert_eq!(action.nearby_bus_details.current_attendance, 12);
        assert_eq!(action.nearby_bus_details.location, "13.11,80.21");
    }

    #[test]
    fn test_snapshot_ignores_id_driver_and_phone() {
        // La tabla solo usa capacidad, asistencia y ubicación del snapshot
        let action: PendingAction = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(action.current_bus_details.seating_capacity, 40);
        assert_eq!(action.current_bus_details.location, "13.10,80.20");
    }
}
