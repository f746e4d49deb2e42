//! Geographic coordinates
//!
//! Longitude/latitude pairs in degrees and the fixed mapping onto a sphere
//! centred at the origin with Y up. Longitude is offset by 180° so the
//! prime meridian lands on +X and the antimeridian on -X.

use bevy::math::DVec3;
use std::f64::consts::PI;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordError {
    #[error("invalid latitude: {0:?}")]
    Latitude(f64),
    #[error("invalid longitude: {0:?}")]
    Longitude(f64),
}

/// A point on the globe, stored in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    longitude: f64,
    latitude: f64,
}

impl GeoPoint {
    pub fn from_degrees(longitude: f64, latitude: f64) -> Result<Self, CoordError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordError::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordError::Longitude(longitude));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Position of this point on a sphere of `radius`.
    pub fn to_cartesian(&self, radius: f64) -> DVec3 {
        let lon_rad = (self.longitude + 180.0) / 360.0 * PI * 2.0;
        let lat_rad = self.latitude / 360.0 * PI * 2.0;
        let x = -radius * lat_rad.cos() * lon_rad.cos();
        let y = radius * lat_rad.sin();
        let z = radius * lat_rad.cos() * lon_rad.sin();
        DVec3::new(x, y, z)
    }

    /// Inverse of [`GeoPoint::to_cartesian`]; the radius is discarded.
    /// Returns `None` for the zero vector.
    pub fn from_cartesian(point: DVec3) -> Option<Self> {
        let n = point.try_normalize()?;
        let latitude = n.y.clamp(-1.0, 1.0).asin().to_degrees();
        let mut longitude = n.z.atan2(-n.x).to_degrees() - 180.0;
        if longitude < -180.0 {
            longitude += 360.0;
        }
        Some(Self {
            longitude,
            latitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_from_degrees_valid() {
        let p = GeoPoint::from_degrees(140.39, 35.77).unwrap();
        assert_eq!(p.longitude(), 140.39);
        assert_eq!(p.latitude(), 35.77);
    }

    #[test]
    fn test_from_degrees_boundary_values() {
        assert!(GeoPoint::from_degrees(180.0, 90.0).is_ok());
        assert!(GeoPoint::from_degrees(-180.0, -90.0).is_ok());
        assert!(GeoPoint::from_degrees(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_from_degrees_invalid() {
        assert_eq!(
            GeoPoint::from_degrees(0.0, 91.0),
            Err(CoordError::Latitude(91.0))
        );
        assert_eq!(
            GeoPoint::from_degrees(-181.0, 0.0),
            Err(CoordError::Longitude(-181.0))
        );
        assert!(GeoPoint::from_degrees(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::from_degrees(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_prime_meridian_maps_to_positive_x() {
        let p = GeoPoint::from_degrees(0.0, 0.0).unwrap().to_cartesian(3.0);
        assert!((p - DVec3::new(3.0, 0.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_quarter_meridians() {
        let east = GeoPoint::from_degrees(90.0, 0.0).unwrap().to_cartesian(1.0);
        assert!((east - DVec3::new(0.0, 0.0, -1.0)).length() < EPSILON);

        let west = GeoPoint::from_degrees(-90.0, 0.0).unwrap().to_cartesian(1.0);
        assert!((west - DVec3::new(0.0, 0.0, 1.0)).length() < EPSILON);
    }

    #[test]
    fn test_north_pole_is_up() {
        let p = GeoPoint::from_degrees(12.0, 90.0).unwrap().to_cartesian(2.0);
        assert!((p.y - 2.0).abs() < EPSILON);
        assert!(p.x.abs() < EPSILON && p.z.abs() < EPSILON);
    }

    #[test]
    fn test_radius_is_preserved() {
        let p = GeoPoint::from_degrees(-73.79, 40.65)
            .unwrap()
            .to_cartesian(3.2);
        assert!((p.length() - 3.2).abs() < EPSILON);
    }

    #[test]
    fn test_from_cartesian_inverts_mapping() {
        for (lon, lat) in [(140.39, 35.77), (-73.79, 40.65), (0.0, -45.0), (179.5, 10.0)] {
            let p = GeoPoint::from_degrees(lon, lat).unwrap();
            let back = GeoPoint::from_cartesian(p.to_cartesian(3.0)).unwrap();
            assert!((back.longitude() - lon).abs() < 1e-9, "lon {lon}");
            assert!((back.latitude() - lat).abs() < 1e-9, "lat {lat}");
        }
    }

    #[test]
    fn test_from_cartesian_zero_vector() {
        assert!(GeoPoint::from_cartesian(DVec3::ZERO).is_none());
    }
}
