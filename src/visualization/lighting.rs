use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::core::config::{AppConfig, srgb};

/// Spawn the directional light and set the ambient term from config.
pub fn spawn_lights(mut commands: Commands, config: Res<AppConfig>) {
    let lights = &config.lights;

    commands.insert_resource(GlobalAmbientLight {
        color: srgb(lights.ambient_color),
        brightness: lights.ambient_brightness,
        ..default()
    });

    let [x, y, z] = lights.directional_position;
    commands.spawn((
        DirectionalLight {
            color: srgb(lights.directional_color),
            illuminance: lights.directional_illuminance,
            ..default()
        },
        Transform::from_xyz(x, y, z).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Directional Light"),
    ));
}
