//! Airport catalog module
//!
//! Parses the GeoJSON airport list and picks the route endpoints from it.

use bevy::prelude::*;

pub mod loader;
pub mod selection;
pub mod types;

pub use loader::load_airports;
pub use selection::{RouteRng, RouteSelection, select_route};
pub use types::Airport;

/// Airports available for random route picks
#[derive(Resource, Deref, Default)]
pub struct AirportCatalog(pub Vec<Airport>);
