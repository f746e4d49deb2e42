//! Airplane model
//!
//! The root entity is what the flight session moves. Its parts sit on a
//! child rotated so the cone's tip points along local +Z, which is the
//! direction of travel once the root looks back at its previous position.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::flight::FlightSession;
use crate::visualization::axes::ShowAxes;

/// Marker for the entity driven by the flight session
#[derive(Component)]
pub struct Airplane;

pub struct AirplanePlugin;

impl Plugin for AirplanePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_airplane);
    }
}

pub fn spawn_airplane(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    session: Res<FlightSession>,
) {
    let body = meshes.add(Cone {
        radius: 0.1,
        height: 0.4,
    });
    let wing = meshes.add(Cuboid::new(0.4, 0.2, 0.01));
    let tail = meshes.add(Cuboid::new(0.01, 0.1, 0.15));

    let body_material = materials.add(Color::srgb(0.6, 0.0, 0.0));
    let wing_material = materials.add(Color::srgb(0.0, 0.6, 0.0));
    let tail_material = materials.add(Color::srgb(0.0, 1.0, 1.0));

    let start = session.route().path.start().as_vec3();

    commands
        .spawn((
            Transform::from_translation(start),
            Visibility::default(),
            Airplane,
            ShowAxes { length: 0.6 },
            Name::new("Airplane"),
        ))
        .with_children(|plane| {
            plane
                .spawn((
                    Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                    Visibility::default(),
                ))
                .with_children(|parts| {
                    parts.spawn((Mesh3d(body), MeshMaterial3d(body_material)));
                    parts.spawn((
                        Mesh3d(wing),
                        MeshMaterial3d(wing_material),
                        Transform::from_xyz(0.0, -0.1, 0.0),
                    ));
                    parts.spawn((
                        Mesh3d(tail),
                        MeshMaterial3d(tail_material),
                        Transform::from_xyz(0.0, -0.15, -0.1),
                    ));
                });
        });
}
