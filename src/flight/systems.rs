//! Per-frame flight systems

use bevy::prelude::*;

use crate::flight::session::FlightSession;
use crate::visualization::airplane::Airplane;

/// Advance the session from the frame clock and move the airplane.
///
/// The airplane faces back toward where it was on the previous tick, so its
/// orientation trails the position by one frame. When no heading can be
/// derived the previous orientation is kept.
pub fn tick_flight_system(
    time: Res<Time>,
    mut session: ResMut<FlightSession>,
    mut planes: Query<&mut Transform, With<Airplane>>,
) {
    let frame = session.tick(&*time);
    let position = frame.position.as_vec3();

    for mut transform in planes.iter_mut() {
        transform.translation = position;
        if let Some(heading) = frame.heading
            && let Ok(up) = Dir3::new(heading.up.as_vec3())
        {
            transform.look_at(frame.previous.as_vec3(), up);
        }
    }
}
