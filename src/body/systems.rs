//! Body spawning and per-tick orbit updates

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::picking::events::{Click, Pointer};
use bevy::prelude::*;

use crate::body::components::{Anchor, BodyId, BodySphere, MoonPivot, OrbitPivot};
use crate::catalog::{BodyCatalog, BodyRecord, RingTilt};
use crate::selection::{BodyRegistry, SelectionState};

/// Spawn every catalog body as a pivot-plus-sphere hierarchy, then fill the
/// id -> sphere registry from the resulting entity ids. Two-phase setup: all
/// handles exist before anything can look them up, so directory selection has
/// no ordering dependency on render timing.
pub fn spawn_bodies(
    mut commands: Commands,
    catalog: Res<BodyCatalog>,
    mut registry: ResMut<BodyRegistry>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let guide_material = materials.add(StandardMaterial {
        base_color: Color::WHITE.with_alpha(0.2),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    for record in &catalog.bodies {
        let pivot = commands
            .spawn((
                Transform::IDENTITY,
                Visibility::default(),
                OrbitPivot {
                    angle: 0.0,
                    speed: record.angular_speed,
                },
                BodyId(record.id),
                Name::new(record.id),
            ))
            .id();

        let mut sphere = commands.spawn((
            Mesh3d(meshes.add(Sphere::new(record.body_radius).mesh().uv(64, 32))),
            MeshMaterial3d(materials.add(sphere_material(record))),
            Transform::from_xyz(record.orbit_radius, 0.0, 0.0),
            BodyId(record.id),
            BodySphere,
        ));
        if record.is_anchor() {
            sphere.insert(Anchor);
        }
        let sphere = sphere.id();
        commands.entity(pivot).add_child(sphere);
        registry.register(record.id, sphere);

        if let Some(ring) = &record.ring {
            let tilt = match ring.tilt {
                RingTilt::Flat => -FRAC_PI_2,
                RingTilt::Vertical => FRAC_PI_2,
                RingTilt::Degrees(degrees) => degrees.to_radians(),
            };
            let ring_entity = commands
                .spawn((
                    Mesh3d(meshes.add(
                        Annulus::new(ring.inner_radius, ring.outer_radius)
                            .mesh()
                            .resolution(64),
                    )),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: ring.color.with_alpha(0.5),
                        alpha_mode: AlphaMode::Blend,
                        double_sided: true,
                        cull_mode: None,
                        ..default()
                    })),
                    Transform::from_xyz(record.orbit_radius, 0.0, 0.0)
                        .with_rotation(Quat::from_rotation_x(tilt)),
                ))
                .id();
            commands.entity(pivot).add_child(ring_entity);
        }

        for moon in &record.moons {
            let moon_pivot = commands
                .spawn((
                    Transform::from_xyz(record.orbit_radius, 0.0, 0.0),
                    Visibility::default(),
                    MoonPivot {
                        angle: 0.0,
                        speed: moon.angular_speed,
                    },
                ))
                .id();
            commands.entity(pivot).add_child(moon_pivot);

            let moon_sphere = commands
                .spawn((
                    Mesh3d(meshes.add(Sphere::new(moon.body_radius).mesh().uv(32, 16))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: moon.color,
                        ..default()
                    })),
                    Transform::from_xyz(moon.orbit_radius, 0.0, 0.0),
                ))
                .id();
            commands.entity(moon_pivot).add_child(moon_sphere);
        }

        // Orbit guide: a thin static annulus in the ecliptic plane.
        if !record.is_anchor() {
            commands.spawn((
                Mesh3d(meshes.add(
                    Annulus::new(record.orbit_radius - 0.05, record.orbit_radius + 0.05)
                        .mesh()
                        .resolution(64),
                )),
                MeshMaterial3d(guide_material.clone()),
                Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
                Name::new(format!("{} orbit guide", record.id)),
            ));
        }
    }

    info!("spawned {} bodies", catalog.bodies.len());
}

fn sphere_material(record: &BodyRecord) -> StandardMaterial {
    if record.is_anchor() {
        // The anchor doubles as the scene's light source; make it glow.
        StandardMaterial {
            base_color: record.color,
            emissive: record.color.to_linear() * 5.0,
            ..default()
        }
    } else {
        StandardMaterial {
            base_color: record.color,
            ..default()
        }
    }
}

/// Advance each body's orbit angle by its own speed, except the selected body,
/// whose pivot is frozen so the camera can hold a stable focus point. The
/// anchor has speed 0 and never rotates in any state.
pub fn advance_orbits(
    selection: Res<SelectionState>,
    mut pivots: Query<(&mut OrbitPivot, &mut Transform, &BodyId)>,
) {
    for (mut pivot, mut transform, id) in &mut pivots {
        if pivot.speed == 0.0 || selection.selected_id == Some(id.0) {
            continue;
        }
        pivot.angle = (pivot.angle + pivot.speed) % TAU;
        transform.rotation = Quat::from_rotation_y(pivot.angle);
    }
}

/// Moons advance unconditionally, even while their parent is selected.
pub fn advance_moons(mut pivots: Query<(&mut MoonPivot, &mut Transform)>) {
    for (mut pivot, mut transform) in &mut pivots {
        pivot.angle = (pivot.angle + pivot.speed) % TAU;
        transform.rotation = Quat::from_rotation_y(pivot.angle);
    }
}

/// A click on a body's sphere selects it; this is the only way selection
/// changes from the 3D view. Clicks on guides, rings or stars carry no
/// [`BodyId`] and fall through.
pub fn handle_body_clicks(
    mut clicks: EventReader<Pointer<Click>>,
    spheres: Query<&BodyId, With<BodySphere>>,
    mut selection: ResMut<SelectionState>,
) {
    for click in clicks.read() {
        if let Ok(id) = spheres.get(click.target) {
            selection.select_body(Some(click.target), id.0);
        }
    }
}
