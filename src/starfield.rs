//! Static star backdrop
//!
//! A shell of small unlit spheres scattered around the scene. Purely visual;
//! no behavior.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

const STAR_COUNT: usize = 1000;
const SHELL_INNER_RADIUS: f32 = 250.0;
const SHELL_OUTER_RADIUS: f32 = 350.0;
const STAR_RADIUS: f32 = 0.35;

pub struct StarfieldPlugin;

impl Plugin for StarfieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_starfield);
    }
}

fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(STAR_RADIUS).mesh().uv(6, 4));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    let mut rng = rand::thread_rng();
    for _ in 0..STAR_COUNT {
        // Uniform direction on the sphere, uniform depth within the shell.
        let z: f32 = rng.gen_range(-1.0..1.0);
        let theta: f32 = rng.gen_range(0.0..TAU);
        let radius: f32 = rng.gen_range(SHELL_INNER_RADIUS..SHELL_OUTER_RADIUS);
        let planar = (1.0 - z * z).sqrt();
        let position = radius * Vec3::new(planar * theta.cos(), planar * theta.sin(), z);

        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position),
        ));
    }
}
