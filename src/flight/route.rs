//! A departure/arrival pair and the arc flown between them

use bevy::math::DVec3;

use crate::airports::Airport;
use crate::flight::arc::{ArcError, ArcPath};

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub departure: Airport,
    pub arrival: Airport,
    pub path: ArcPath,
}

impl Route {
    /// Build the route flown at `radius` from the globe centre.
    pub fn new(departure: Airport, arrival: Airport, radius: f64) -> Result<Self, ArcError> {
        let start = departure.location.to_cartesian(radius);
        let end = arrival.location.to_cartesian(radius);
        let path = ArcPath::new(start, end)?;
        Ok(Self {
            departure,
            arrival,
            path,
        })
    }

    /// Camera placement that frames both ends of the route.
    pub fn camera_position(&self, scale: f64) -> DVec3 {
        let dep = self.path.start();
        let arr = self.path.end();
        DVec3::new(dep.x * scale, arr.y * scale, dep.z * scale)
    }

    pub fn label(&self) -> String {
        format!("{} → {}", self.departure.code, self.arrival.code)
    }
}
