pub mod bus;
pub mod pending;
pub mod route;

pub use bus::{BusDetails, BusLocation};
pub use pending::{BusSnapshot, PendingAction};
pub use route::{LatLng, Route, RouteLeg, RouteResponse};
