//! ECS glue for the camera rig

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::body::{Anchor, BodySphere};
use crate::camera::MainCamera;
use crate::camera::rig::{CameraRig, FocusTarget, Pose};
use crate::selection::SelectionState;

/// Per-tick camera update. Samples the focused body's live world position,
/// advances the rig state machine and writes the eased pose back to the
/// camera. The pan-orbit controller's spherical state is kept in sync so free
/// rotation resumes seamlessly from wherever the rig left the camera.
pub fn drive_camera_rig(
    mut rig: ResMut<CameraRig>,
    mut selection: ResMut<SelectionState>,
    spheres: Query<(&GlobalTransform, Option<&Anchor>), With<BodySphere>>,
    mut camera: Query<(&mut Transform, &mut PanOrbitCamera), With<MainCamera>>,
) {
    let Ok((mut transform, mut pan_orbit)) = camera.single_mut() else {
        return;
    };

    let focus = selection.focus_handle.and_then(|handle| {
        spheres.get(handle).ok().map(|(world, anchor)| FocusTarget {
            world_position: world.translation(),
            is_anchor: anchor.is_some(),
        })
    });

    let pose = Pose {
        position: transform.translation,
        target: pan_orbit.focus,
    };
    let tick = rig.tick(pose, focus, selection.reset_requested);
    if tick.reset_done {
        selection.reset_requested = false;
        debug!("camera reset complete, back to overview");
    }
    if !tick.driven {
        return;
    }

    transform.translation = tick.pose.position;
    transform.look_at(tick.pose.target, Vec3::Y);

    let offset = tick.pose.position - tick.pose.target;
    let radius = offset.length().max(f32::EPSILON);
    let yaw = offset.x.atan2(offset.z);
    let pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();
    pan_orbit.focus = tick.pose.target;
    pan_orbit.target_focus = tick.pose.target;
    pan_orbit.radius = Some(radius);
    pan_orbit.target_radius = radius;
    pan_orbit.yaw = Some(yaw);
    pan_orbit.target_yaw = yaw;
    pan_orbit.pitch = Some(pitch);
    pan_orbit.target_pitch = pitch;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::rig::{OVERVIEW_POSITION, RESET_THRESHOLD, RigMode};
    use crate::selection::BodyRegistry;
    use bevy::transform::TransformPlugin;

    fn rig_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, TransformPlugin));
        app.init_resource::<SelectionState>();
        app.init_resource::<BodyRegistry>();
        app.init_resource::<CameraRig>();
        app.add_systems(Update, drive_camera_rig);
        app.world_mut().spawn((
            Transform::from_xyz(0.0, 0.0, 150.0).looking_at(Vec3::ZERO, Vec3::Y),
            PanOrbitCamera::default(),
            MainCamera,
        ));
        app
    }

    fn spawn_sphere(app: &mut App, position: Vec3, anchor: bool) -> Entity {
        let transform = Transform::from_translation(position);
        let mut entity = app.world_mut().spawn((transform, GlobalTransform::from(transform), BodySphere));
        if anchor {
            entity.insert(Anchor);
        }
        entity.id()
    }

    fn camera_position(app: &mut App) -> Vec3 {
        let mut query = app.world_mut().query_filtered::<&Transform, With<MainCamera>>();
        query.single(app.world()).unwrap().translation
    }

    #[test]
    fn directory_selection_converges_to_body_standoff() {
        let mut app = rig_app();
        let saturn = spawn_sphere(&mut app, Vec3::new(62.0, 0.0, 0.0), false);
        app.world_mut()
            .resource_mut::<BodyRegistry>()
            .register("Saturn", saturn);

        {
            let world = app.world_mut();
            world.resource_scope(|world, mut selection: Mut<SelectionState>| {
                let registry = world.resource::<BodyRegistry>();
                selection.menu_open = true;
                selection.select_from_directory(registry, "Saturn");
            });
        }
        assert_eq!(
            app.world().resource::<SelectionState>().selected_id,
            Some("Saturn")
        );
        assert!(!app.world().resource::<SelectionState>().menu_open);

        for _ in 0..500 {
            app.update();
        }
        assert_eq!(app.world().resource::<CameraRig>().mode, RigMode::Focusing);
        let position = camera_position(&mut app);
        assert!(position.distance(Vec3::new(62.0, 0.0, 10.0)) < 0.1);
    }

    #[test]
    fn go_back_from_anchor_returns_to_overview() {
        let mut app = rig_app();
        let sun = spawn_sphere(&mut app, Vec3::ZERO, true);
        app.world_mut()
            .resource_mut::<SelectionState>()
            .select_body(Some(sun), "Sun");

        for _ in 0..300 {
            app.update();
        }
        // Anchor standoff is larger than the regular one.
        assert!(camera_position(&mut app).distance(Vec3::new(0.0, 0.0, 30.0)) < 0.5);

        app.world_mut().resource_mut::<SelectionState>().go_back();
        for _ in 0..500 {
            app.update();
        }
        let selection = app.world().resource::<SelectionState>();
        assert!(!selection.reset_requested);
        assert_eq!(selection.selected_id, None);
        assert_eq!(app.world().resource::<CameraRig>().mode, RigMode::Overview);
        assert!(camera_position(&mut app).distance(OVERVIEW_POSITION) < RESET_THRESHOLD);
    }

    #[test]
    fn stale_focus_handle_is_ignored() {
        let mut app = rig_app();
        // Handle pointing at a despawned entity: the rig must idle, not panic.
        let ghost = app.world_mut().spawn_empty().id();
        app.world_mut().entity_mut(ghost).despawn();
        app.world_mut()
            .resource_mut::<SelectionState>()
            .select_body(Some(ghost), "Mars");

        for _ in 0..10 {
            app.update();
        }
        assert!(camera_position(&mut app).distance(OVERVIEW_POSITION) < 0.001);
    }
}
