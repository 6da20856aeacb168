//! Components for orbital bodies

use bevy::prelude::*;

/// Rotating pivot at the scene center; the body's sphere hangs off it at the
/// orbit radius, so spinning the pivot orbits the body.
#[derive(Component)]
pub struct OrbitPivot {
    /// Current orbit angle in radians.
    pub angle: f32,
    /// Radians added per tick while the body is not selected.
    pub speed: f32,
}

/// Rotating pivot centered on a parent body, carrying one moon. Moons advance
/// unconditionally: selection never freezes them.
#[derive(Component)]
pub struct MoonPivot {
    pub angle: f32,
    pub speed: f32,
}

/// Catalog id of the body this entity belongs to. Present on both the pivot
/// and the clickable sphere.
#[derive(Component, Clone, Copy)]
pub struct BodyId(pub &'static str);

/// Marker for the clickable sphere mesh; its entity is the focus handle
/// registered for the body.
#[derive(Component)]
pub struct BodySphere;

/// Marker for the anchor body's sphere (the non-orbiting center).
#[derive(Component)]
pub struct Anchor;
