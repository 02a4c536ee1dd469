// Módulo de mapas: carga del script de Google, render de flota y rutas bajo demanda

pub mod inspector;
pub mod loader;
pub mod renderer;

/// Error del mapa
#[derive(Debug, Clone)]
pub enum MapError {
    MissingContainer(String),
    ScriptLoad(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::MissingContainer(id) => write!(f, "Map container #{} not found", id),
            MapError::ScriptLoad(msg) => write!(f, "Maps script load failed: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_error_display() {
        let error = MapError::MissingContainer("map".to_string());
        assert_eq!(error.to_string(), "Map container #map not found");

        let error = MapError::ScriptLoad("script element fired error".to_string());
        assert_eq!(
            error.to_string(),
            "Maps script load failed: script element fired error"
        );
    }
}
