//! Orbital body module
//!
//! Spawns the sun, planets, rings, moons and orbit guides from the catalog and
//! advances their orbit angles every tick.

use bevy::prelude::*;

pub mod components;
pub mod systems;

pub use components::{Anchor, BodySphere};
pub use systems::{advance_moons, advance_orbits, handle_body_clicks, spawn_bodies};

pub struct BodyPlugin;

impl Plugin for BodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bodies).add_systems(
            Update,
            (
                handle_body_clicks,
                advance_orbits.after(handle_body_clicks),
                advance_moons,
            ),
        );
    }
}
