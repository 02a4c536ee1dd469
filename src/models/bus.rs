use serde::{Deserialize, Serialize};

/// Posición reportada de un bus (endpoint /api/bus-locations)
/// Las coordenadas pueden faltar en registros corruptos del generador;
/// un registro incompleto se salta con warning, nunca tumba el mapa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusLocation {
    pub id: i64,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl BusLocation {
    /// Par (lat, lng) solo si ambas coordenadas vienen en el registro
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

/// Ficha completa de un bus (endpoint /api/bus-details)
/// El backend serializa en camelCase
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusDetails {
    pub id: i64,
    pub driver: String,
    pub seating_capacity: u32,
    pub current_attendance: u32,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_location_with_both_coordinates() {
        let json = r#"{"id": 3, "latitude": 13.05, "longitude": 80.21}"#;
        let bus: BusLocation = serde_json::from_str(json).unwrap();
        assert_eq!(bus.id, 3);
        assert_eq!(bus.coordinates(), Some((13.05, 80.21)));
    }

    #[test]
    fn test_bus_location_missing_longitude_is_not_plottable() {
        // Registro corrupto: trae "lang" en vez de "longitude"
        let json = r#"{"id": 7, "latitude": 13.05, "lang": 80.21}"#;
        let bus: BusLocation = serde_json::from_str(json).unwrap();
        assert_eq!(bus.latitude, Some(13.05));
        assert_eq!(bus.longitude, None);
        assert_eq!(bus.coordinates(), None);
    }

    #[test]
    fn test_bus_details_camel_case_and_extra_fields() {
        // El backend manda campos extra (latitude, phone...) que se ignoran
        let json = r#"{
            "id": 1,
            "driver": "Driver 1",
            "seatingCapacity": 40,
            "currentAttendance": 35,
            "location": "13.0382,80.0454",
            "latitude": 13.0382,
            "longitude": 80.0454,
            "phone": "+910000000000"
        }"#;
        let bus: BusDetails = serde_json::from_str(json).unwrap();
        assert_eq!(bus.driver, "Driver 1");
        assert_eq!(bus.seating_capacity, 40);
        assert_eq!(bus.current_attendance, 35);
        assert_eq!(bus.location, "13.0382,80.0454");
    }
}
