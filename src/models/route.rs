use serde::{Deserialize, Serialize};

/// Respuesta del endpoint /api/route, con la forma de la Directions API:
/// routes[0].legs[0] lleva los puntos que alimentan el recálculo en cliente
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteLeg {
    pub start_location: LatLng,
    pub end_location: LatLng,
}

/// Par de coordenadas con los nombres cortos que usa Google
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl RouteResponse {
    /// Primer tramo de la primera ruta, si existe
    pub fn first_leg(&self) -> Option<(&LatLng, &LatLng)> {
        let leg = self.routes.first()?.legs.first()?;
        Some((&leg.start_location, &leg.end_location))
    }
}
