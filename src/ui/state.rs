//! UI state management

use bevy::prelude::*;

/// Main UI state resource
#[derive(Resource)]
pub struct UIState {
    pub show_axes: bool,
    pub show_hud: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            show_axes: true,
            show_hud: true,
        }
    }
}
