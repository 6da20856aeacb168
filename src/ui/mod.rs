//! Overlay UI module
//!
//! Fixed on-screen controls rendered with egui: back control, directory
//! toggle and list, the selected body's label and a version tag.

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub mod systems;

pub use systems::overlay_ui;

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, overlay_ui);
    }
}
