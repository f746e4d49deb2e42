//! Flight module
//!
//! Great-circle interpolation, heading derivation and the session that
//! drives the airplane along its route every frame.

use bevy::prelude::*;

pub mod arc;
pub mod heading;
pub mod route;
pub mod session;
pub mod systems;

pub use route::Route;
pub use session::FlightSession;

/// Per-frame ordering: the session ticks and moves the airplane before
/// anything reads the airplane or session to draw.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Tick,
    Draw,
}

/// Plugin advancing the flight session and moving the airplane
pub struct FlightPlugin;

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (FlightSet::Tick, FlightSet::Draw).chain())
            .add_systems(
                Update,
                systems::tick_flight_system.in_set(FlightSet::Tick),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airports::Airport;
    use crate::core::config::FlightConfig;
    use crate::core::coordinates::GeoPoint;
    use crate::visualization::airplane::Airplane;

    #[derive(Resource, Default)]
    struct Observed(Vec<(Vec3, Vec3)>);

    fn observe_airplane(
        session: Res<FlightSession>,
        planes: Query<&Transform, With<Airplane>>,
        mut observed: ResMut<Observed>,
    ) {
        for transform in &planes {
            observed
                .0
                .push((transform.translation, session.state().position.as_vec3()));
        }
    }

    #[test]
    fn test_draw_set_sees_this_frames_airplane() {
        let route = Route::new(
            Airport::new("RJAA", None, GeoPoint::from_degrees(140.39, 35.77).unwrap()),
            Airport::new("KJFK", None, GeoPoint::from_degrees(-73.79, 40.65).unwrap()),
            3.2,
        )
        .unwrap();

        let mut app = App::new();
        app.add_plugins((MinimalPlugins, FlightPlugin))
            .insert_resource(FlightSession::new(route, &FlightConfig::default()))
            .init_resource::<Observed>()
            .add_systems(Update, observe_airplane.in_set(FlightSet::Draw));
        app.world_mut().spawn((Transform::default(), Airplane));

        for _ in 0..3 {
            app.update();
        }

        let observed = &app.world().resource::<Observed>().0;
        assert_eq!(observed.len(), 3);
        for (airplane, session) in observed {
            assert!((*airplane - *session).length() < 1e-4);
        }
    }
}
