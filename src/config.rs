use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub map_config: MapConfig,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map_config: MapConfig::default(),
            ui_config: UIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub depot_lat: f64,
    pub depot_lng: f64,
    pub depot_label: String,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            depot_lat: 13.0382,
            depot_lng: 80.0454,
            depot_label: "RIT Chennai".to_string(),
            default_zoom: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub depot_icon_url: String,
    pub depot_icon_size: u32,
    pub bus_icon_url: String,
    pub bus_icon_size: u32,
    pub bus_icon_anchor: u32,
    pub route_color: String,
    pub route_opacity: f64,
    pub route_weight: u32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            depot_icon_url: "logo.png".to_string(),
            depot_icon_size: 30,
            bus_icon_url: "https://maps.google.com/mapfiles/kml/shapes/bus.png".to_string(),
            bus_icon_size: 32,
            bus_icon_anchor: 16,
            route_color: "#0000FF".to_string(),
            route_opacity: 0.8,
            route_weight: 3,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    /// Solo el punto de retorno y el estilo de ruta son configurables; los
    /// iconos van fijos porque el backend los sirve como assets estáticos
    pub fn from_env() -> Self {
        Self {
            map_config: MapConfig {
                depot_lat: option_env!("DEPOT_LAT")
                    .unwrap_or("13.0382").parse().unwrap_or(13.0382),
                depot_lng: option_env!("DEPOT_LNG")
                    .unwrap_or("80.0454").parse().unwrap_or(80.0454),
                depot_label: option_env!("DEPOT_LABEL")
                    .unwrap_or("RIT Chennai").to_string(),
                default_zoom: option_env!("MAP_DEFAULT_ZOOM")
                    .unwrap_or("10.0").parse().unwrap_or(10.0),
            },
            ui_config: UIConfig {
                route_color: option_env!("ROUTE_COLOR")
                    .unwrap_or("#0000FF").to_string(),
                ..UIConfig::default()
            },
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_depot_is_the_campus() {
        let config = MapConfig::default();
        assert_eq!(config.depot_lat, 13.0382);
        assert_eq!(config.depot_lng, 80.0454);
        assert_eq!(config.depot_label, "RIT Chennai");
        assert_eq!(config.default_zoom, 10.0);
    }

    #[test]
    fn test_default_icons_and_polyline_style() {
        let config = UIConfig::default();
        assert_eq!(config.depot_icon_url, "logo.png");
        assert_eq!(config.depot_icon_size, 30);
        assert_eq!(
            config.bus_icon_url,
            "https://maps.google.com/mapfiles/kml/shapes/bus.png"
        );
        assert_eq!(config.bus_icon_size, 32);
        assert_eq!(config.bus_icon_anchor, 16);
        assert_eq!(config.route_color, "#0000FF");
        assert_eq!(config.route_opacity, 0.8);
        assert_eq!(config.route_weight, 3);
    }

    #[test]
    fn test_global_config_is_accessible() {
        assert_eq!(CONFIG.map_config.default_zoom, 10.0);
    }
}
