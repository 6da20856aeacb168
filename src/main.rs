use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod body;
mod camera;
mod catalog;
mod selection;
mod starfield;
mod ui;

use body::BodyPlugin;
use camera::rig::{OVERVIEW_POSITION, OVERVIEW_TARGET};
use camera::{CameraRigPlugin, MainCamera};
use catalog::BodyCatalog;
use selection::SelectionPlugin;
use starfield::StarfieldPlugin;
use ui::OverlayPlugin;

// Setup scene and camera
fn setup(mut commands: Commands) {
    // Fill light so the night sides of the planets stay readable.
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });

    // The sun sits at the origin and lights the whole scene.
    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: 5_000_000.0,
            range: 600.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
        Name::new("Sun light"),
    ));

    // Rotate-only orbit camera: pan and zoom are disabled so every body stays
    // reachable through clicks and the directory rather than manual zooming.
    commands.spawn((
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: 50.0_f32.to_radians(),
            far: 2000.0,
            ..default()
        }),
        PanOrbitCamera {
            focus: OVERVIEW_TARGET,
            radius: Some(OVERVIEW_POSITION.length()),
            yaw: Some(0.0),
            pitch: Some(0.0),
            pan_sensitivity: 0.0,
            zoom_sensitivity: 0.0,
            force_update: true,
            ..default()
        },
        MainCamera,
        Transform::from_translation(OVERVIEW_POSITION).looking_at(OVERVIEW_TARGET, Vec3::Y),
    ));
}

fn main() -> anyhow::Result<()> {
    let catalog = BodyCatalog::standard();
    catalog.validate()?;

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Solar System Portfolio".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.add_plugins(EguiPlugin::default());
    app.add_plugins(PanOrbitCameraPlugin);
    app.add_plugins(MeshPickingPlugin);

    app.insert_resource(catalog);
    app.add_plugins(SelectionPlugin);
    app.add_plugins(BodyPlugin);
    app.add_plugins(CameraRigPlugin);
    app.add_plugins(OverlayPlugin);
    app.add_plugins(StarfieldPlugin);
    app.add_systems(Startup, setup);

    app.run();
    Ok(())
}
