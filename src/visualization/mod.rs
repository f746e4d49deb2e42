//! Visualization module
//!
//! Globe, airplane, route line, airport markers, lights, axes, ground grid
//! and globe bounding box.

use bevy::pbr::wireframe::WireframePlugin;
use bevy::prelude::*;

use crate::flight::FlightSet;

pub mod airplane;
pub mod axes;
pub mod earth;
pub mod lighting;
pub mod route;

pub use airplane::AirplanePlugin;
pub use axes::{ShowAxes, draw_axes, draw_scene_helpers};
pub use earth::EarthPlugin;
pub use route::RoutePlugin;

/// Plugin for the scene contents
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            WireframePlugin::default(),
            EarthPlugin,
            AirplanePlugin,
            RoutePlugin,
        ))
        .add_systems(Startup, (lighting::spawn_lights, spawn_origin_axes))
        .add_systems(
            Update,
            (draw_axes, draw_scene_helpers).in_set(FlightSet::Draw),
        );
    }
}

fn spawn_origin_axes(mut commands: Commands) {
    commands.spawn((
        Transform::default(),
        ShowAxes { length: 5.0 },
        Name::new("Origin Axes"),
    ));
}
