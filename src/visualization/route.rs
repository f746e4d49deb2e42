//! Route line and airport markers

use bevy::prelude::*;

use crate::core::config::AppConfig;
use crate::flight::{FlightSession, FlightSet};

const MARKER_RADIUS: f32 = 0.1;
const ROUTE_COLOR: Color = Color::srgb(0.0, 1.0, 1.0);

pub struct RoutePlugin;

impl Plugin for RoutePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_airport_markers)
            .add_systems(
                Update,
                (sync_airport_markers, draw_route_system).in_set(FlightSet::Draw),
            );
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirportMarker {
    Departure,
    Arrival,
}

pub fn spawn_airport_markers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    session: Res<FlightSession>,
) {
    let mesh = meshes.add(Sphere::new(MARKER_RADIUS).mesh().uv(16, 8));
    let material = materials.add(Color::srgb(0.0, 0.6, 0.6));
    let path = &session.route().path;

    for (marker, position) in [
        (AirportMarker::Departure, path.start()),
        (AirportMarker::Arrival, path.end()),
    ] {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position.as_vec3()),
            marker,
        ));
    }
}

/// Move the markers when the session switches to a new route.
fn sync_airport_markers(
    session: Res<FlightSession>,
    mut last_revision: Local<u64>,
    mut markers: Query<(&AirportMarker, &mut Transform)>,
) {
    if session.revision() == *last_revision {
        return;
    }
    *last_revision = session.revision();

    let path = &session.route().path;
    for (marker, mut transform) in markers.iter_mut() {
        let position = match marker {
            AirportMarker::Departure => path.start(),
            AirportMarker::Arrival => path.end(),
        };
        transform.translation = position.as_vec3();
    }
}

/// Draw the great-circle route as a line strip.
pub fn draw_route_system(
    mut gizmos: Gizmos,
    session: Res<FlightSession>,
    config: Res<AppConfig>,
) {
    let points = session
        .route()
        .path
        .points(config.flight.route_segments)
        .into_iter()
        .map(|p| p.as_vec3());
    gizmos.linestrip(points, ROUTE_COLOR);
}
