//! Axes, ground grid and globe bounding box helpers

use crate::core::config::AppConfig;
use crate::ui::UIState;
use crate::visualization::earth::Globe;
use bevy::math::Isometry3d;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

const GRID_CELLS: u32 = 10;
const GRID_SPACING: f32 = 1.0;
const GRID_COLOR: Color = Color::srgb(0.35, 0.35, 0.35);
const BOUNDS_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);

/// Draw world-space axes at this entity's transform
#[derive(Component)]
pub struct ShowAxes {
    pub length: f32,
}

pub fn draw_axes(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &ShowAxes)>,
    state: Res<UIState>,
) {
    if !state.show_axes {
        return;
    }
    for (&transform, axes) in &query {
        gizmos.axes(transform, axes.length);
    }
}

/// Grid on the XZ plane through the origin, plus the globe's bounding box.
pub fn draw_scene_helpers(
    mut gizmos: Gizmos,
    globes: Query<&Transform, With<Globe>>,
    config: Res<AppConfig>,
    state: Res<UIState>,
) {
    if !state.show_axes {
        return;
    }
    gizmos.grid(
        Isometry3d::from_rotation(ground_rotation()),
        UVec2::splat(GRID_CELLS),
        Vec2::splat(GRID_SPACING),
        GRID_COLOR,
    );

    let bounds = globe_bounds(config.globe.radius as f32);
    for transform in &globes {
        gizmos.primitive_3d(
            &bounds,
            Isometry3d::new(transform.translation, transform.rotation),
            BOUNDS_COLOR,
        );
    }
}

/// Gizmo grids lie in their local XY plane; tip it flat onto XZ.
fn ground_rotation() -> Quat {
    Quat::from_rotation_x(FRAC_PI_2)
}

fn globe_bounds(radius: f32) -> Cuboid {
    Cuboid::from_length(2.0 * radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_grid_lies_on_xz_plane() {
        let normal = ground_rotation() * Vec3::Z;
        assert!((normal.abs() - Vec3::Y).length() < 1e-6);
        assert!((ground_rotation() * Vec3::X - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_globe_bounds_touch_the_sphere() {
        let bounds = globe_bounds(3.0);
        assert_eq!(bounds.half_size, Vec3::splat(3.0));
    }
}
