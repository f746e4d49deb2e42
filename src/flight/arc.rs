//! Great-circle arcs between two points on a sphere
//!
//! An [`ArcPath`] rotates its start point about the normal of the plane
//! spanned by both endpoints. Rotation preserves length, so every
//! interpolated point stays on the sphere the endpoints were taken from.

use bevy::math::{DQuat, DVec3};
use thiserror::Error;

/// Below this `sin(angle)` the endpoints are treated as collinear.
const COLLINEAR_SIN: f64 = 1e-9;
/// Relative tolerance when comparing endpoint radii.
const RADIUS_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArcError {
    #[error("arc endpoint is the zero vector")]
    ZeroVector,
    #[error("arc endpoints are antipodal; the great circle is not unique")]
    Antipodal,
    #[error("arc endpoints lie on different spheres (|start| = {start}, |end| = {end})")]
    RadiusMismatch { start: f64, end: f64 },
}

/// The minor arc from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    start: DVec3,
    end: DVec3,
    axis: DVec3,
    angle: f64,
}

impl ArcPath {
    pub fn new(start: DVec3, end: DVec3) -> Result<Self, ArcError> {
        let start_len = start.length();
        let end_len = end.length();
        if start_len <= f64::EPSILON || end_len <= f64::EPSILON {
            return Err(ArcError::ZeroVector);
        }
        if (start_len - end_len).abs() > RADIUS_TOLERANCE * start_len.max(end_len) {
            return Err(ArcError::RadiusMismatch {
                start: start_len,
                end: end_len,
            });
        }

        let dot = (start / start_len).dot(end / end_len).clamp(-1.0, 1.0);
        let cross = start.cross(end);
        let sin = cross.length() / (start_len * end_len);

        let (axis, angle) = if sin < COLLINEAR_SIN {
            if dot < 0.0 {
                return Err(ArcError::Antipodal);
            }
            // Coincident endpoints: any axis works for a zero-angle rotation.
            ((start / start_len).any_orthonormal_vector(), 0.0)
        } else {
            (cross / cross.length(), dot.acos())
        };

        Ok(Self {
            start,
            end,
            axis,
            angle,
        })
    }

    pub fn start(&self) -> DVec3 {
        self.start
    }

    pub fn end(&self) -> DVec3 {
        self.end
    }

    /// Central angle between the endpoints in radians, within `[0, π)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn radius(&self) -> f64 {
        self.start.length()
    }

    /// Distance along the sphere surface from start to end.
    pub fn length(&self) -> f64 {
        self.radius() * self.angle
    }

    /// Position at `ratio` of the way along the arc.
    ///
    /// `0.0` is the start and `1.0` the end. Values outside `[0, 1]` keep
    /// rotating along the same great circle past the endpoints.
    pub fn interpolate(&self, ratio: f64) -> DVec3 {
        DQuat::from_axis_angle(self.axis, self.angle * ratio) * self.start
    }

    /// Central angle between the start and `point`.
    pub fn angle_to(&self, point: DVec3) -> f64 {
        self.start.angle_between(point)
    }

    /// `segments` evenly spaced samples from the start, followed by the end.
    pub fn points(&self, segments: usize) -> Vec<DVec3> {
        let mut points = Vec::with_capacity(segments + 1);
        for i in 0..segments {
            points.push(self.interpolate(i as f64 / segments as f64));
        }
        points.push(self.end);
        points
    }
}
