//! UI module
//!
//! HUD text and keyboard controls.

use bevy::prelude::*;

pub mod controls;
pub mod hud;
pub mod state;

pub use state::UIState;

use crate::flight::FlightSet;

/// Plugin for HUD and input handling
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UIState>()
            .add_systems(Startup, hud::spawn_hud)
            .add_systems(
                Update,
                (
                    controls::keyboard_controls_system.before(FlightSet::Tick),
                    hud::update_hud_system.in_set(FlightSet::Draw),
                ),
            );
    }
}
