//! Keyboard controls

use bevy::prelude::*;

use crate::airports::{AirportCatalog, RouteRng, select_route};
use crate::core::config::AppConfig;
use crate::flight::FlightSession;
use crate::ui::UIState;

/// `P` toggles timed/stepped progress, `Space` steps, `R` picks a new
/// random route, `X` toggles axes and `H` the HUD.
pub fn keyboard_controls_system(
    input: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<AppConfig>,
    catalog: Res<AirportCatalog>,
    mut rng: ResMut<RouteRng>,
    mut session: ResMut<FlightSession>,
    mut state: ResMut<UIState>,
) {
    if input.just_pressed(KeyCode::KeyP) {
        let mode = session.toggle_mode(&*time);
        info!("Progress mode: {}", mode.label());
    }

    if input.just_pressed(KeyCode::Space) && !session.step() {
        info!("Step ignored in timed mode; press P to switch to stepped mode");
    }

    if input.just_pressed(KeyCode::KeyR) {
        if config.flight.route.is_random() {
            match select_route(
                &config.flight.route,
                &catalog,
                &mut rng.0,
                config.route_radius(),
            ) {
                Ok(route) => {
                    info!("New route: {}", route.label());
                    session.set_route(route, &*time);
                }
                Err(e) => warn!("Could not pick a new route: {}", e),
            }
        } else {
            info!("Route is fixed by configuration");
        }
    }

    if input.just_pressed(KeyCode::KeyX) {
        state.show_axes = !state.show_axes;
    }
    if input.just_pressed(KeyCode::KeyH) {
        state.show_hud = !state.show_hud;
    }
}
