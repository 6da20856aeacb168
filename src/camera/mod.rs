//! Camera rig module
//!
//! Wraps the pure rig state machine in an ECS system that reads the selection
//! state, samples the focused body's world transform and drives the pan-orbit
//! camera pose.

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCameraSystemSet;

pub mod rig;
pub mod systems;

pub use rig::CameraRig;
pub use systems::drive_camera_rig;

/// Marker for the scene's main 3D camera.
#[derive(Component)]
pub struct MainCamera;

pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>().add_systems(
            Update,
            // Run after the pan-orbit controller so the rig eases from the
            // user-rotated pose; input and easing compose additively.
            drive_camera_rig.after(PanOrbitCameraSystemSet),
        );
    }
}
