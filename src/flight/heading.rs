//! Heading derived from consecutive positions

use bevy::math::DVec3;

/// World axis the banking `up` vector is derived from.
pub const REFERENCE_AXIS: DVec3 = DVec3::Z;

const MIN_LENGTH_SQUARED: f64 = 1e-24;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heading {
    /// Displacement since the previous frame; not normalized.
    pub forward: DVec3,
    pub up: DVec3,
}

/// Heading of an object that moved from `previous` to `current`.
///
/// Returns `None` when there is no usable direction: the object did not
/// move, or it moved parallel to [`REFERENCE_AXIS`] so `up` vanishes. The
/// caller keeps its last orientation in that case.
pub fn compute_heading(previous: DVec3, current: DVec3) -> Option<Heading> {
    let forward = current - previous;
    if forward.length_squared() < MIN_LENGTH_SQUARED {
        return None;
    }
    let up = forward.cross(REFERENCE_AXIS);
    if up.length_squared() < MIN_LENGTH_SQUARED {
        return None;
    }
    Some(Heading { forward, up })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_along_x() {
        let heading =
            compute_heading(DVec3::new(0.0, 0.0, 1.0), DVec3::new(1.0, 0.0, 1.0)).unwrap();
        assert_eq!(heading.forward, DVec3::new(1.0, 0.0, 0.0));
        // (1, 0, 0) x (0, 0, 1)
        assert_eq!(heading.up, DVec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_forward_is_not_normalized() {
        let heading = compute_heading(DVec3::ZERO, DVec3::new(0.0, 3.0, 0.0)).unwrap();
        assert_eq!(heading.forward.length(), 3.0);
        assert_eq!(heading.up, DVec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_up_is_perpendicular_to_forward() {
        let heading =
            compute_heading(DVec3::new(1.0, 2.0, 3.0), DVec3::new(1.5, 1.7, 3.2)).unwrap();
        assert!(heading.forward.dot(heading.up).abs() < 1e-12);
        assert!(heading.up.dot(REFERENCE_AXIS).abs() < 1e-12);
    }

    #[test]
    fn test_no_movement_has_no_heading() {
        let p = DVec3::new(0.3, -1.2, 2.0);
        assert_eq!(compute_heading(p, p), None);
    }

    #[test]
    fn test_movement_along_reference_axis_has_no_heading() {
        assert_eq!(
            compute_heading(DVec3::new(1.0, 1.0, 0.0), DVec3::new(1.0, 1.0, 2.0)),
            None
        );
    }
}
