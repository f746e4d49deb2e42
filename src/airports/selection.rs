//! Choosing the departure and arrival airports

use anyhow::{anyhow, bail};
use bevy::prelude::Resource;
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::airports::Airport;
use crate::core::coordinates::GeoPoint;
use crate::flight::Route;

/// Draws attempted before giving up on finding a usable random pair.
const MAX_RANDOM_DRAWS: usize = 32;

/// How the route endpoints are chosen at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteSelection {
    /// Two airports drawn uniformly from the catalog
    #[default]
    Random,
    /// Narita to JFK
    NaritaJfk,
    Fixed {
        departure: FixedAirport,
        arrival: FixedAirport,
    },
}

impl RouteSelection {
    /// The Narita to JFK preset spelled out as a fixed pair.
    pub fn narita_jfk() -> Self {
        RouteSelection::Fixed {
            departure: FixedAirport {
                code: "RJAA".to_string(),
                longitude: 140.3918802566464,
                latitude: 35.77236075211366,
            },
            arrival: FixedAirport {
                code: "KJFK".to_string(),
                longitude: -73.79224242824078,
                latitude: 40.65119586398563,
            },
        }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, RouteSelection::Random)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedAirport {
    pub code: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl FixedAirport {
    pub fn to_airport(&self) -> anyhow::Result<Airport> {
        let location = GeoPoint::from_degrees(self.longitude, self.latitude)
            .map_err(|e| anyhow!("airport {}: {}", self.code, e))?;
        Ok(Airport::new(self.code.clone(), None, location))
    }
}

/// Seedable RNG used for random route picks.
#[derive(Resource)]
pub struct RouteRng(pub StdRng);

/// Build the route described by `selection`, flown at `radius`.
pub fn select_route(
    selection: &RouteSelection,
    catalog: &[Airport],
    rng: &mut impl Rng,
    radius: f64,
) -> anyhow::Result<Route> {
    match selection {
        RouteSelection::Fixed { departure, arrival } => {
            let route = Route::new(departure.to_airport()?, arrival.to_airport()?, radius)?;
            Ok(route)
        }
        RouteSelection::NaritaJfk => {
            select_route(&RouteSelection::narita_jfk(), catalog, rng, radius)
        }
        RouteSelection::Random => pick_random_route(catalog, rng, radius),
    }
}

fn pick_random_route(
    catalog: &[Airport],
    rng: &mut impl Rng,
    radius: f64,
) -> anyhow::Result<Route> {
    if catalog.len() < 2 {
        bail!(
            "random route needs at least two airports, catalog has {}",
            catalog.len()
        );
    }

    let mut last_error = None;
    for _ in 0..MAX_RANDOM_DRAWS {
        let departure = &catalog[rng.gen_range(0..catalog.len())];
        let arrival = &catalog[rng.gen_range(0..catalog.len())];
        if departure.location == arrival.location {
            continue;
        }
        match Route::new(departure.clone(), arrival.clone(), radius) {
            // Distinct coordinates can still name one place (±180° or a pole).
            Ok(route) if route.path.angle() == 0.0 => continue,
            Ok(route) => return Ok(route),
            Err(e) => last_error = Some(e),
        }
    }

    match last_error {
        Some(e) => Err(anyhow!("no usable random route after {} draws: {}", MAX_RANDOM_DRAWS, e)),
        None => Err(anyhow!(
            "no usable random route after {} draws: every pick was a single location",
            MAX_RANDOM_DRAWS
        )),
    }
}
