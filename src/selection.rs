//! Selection state and the id -> entity registry
//!
//! Single source of truth for which body is selected. Both entry points (a
//! click in the 3D view, a directory menu choice) funnel into
//! [`SelectionState::select_body`]; the camera rig and the orbit systems only
//! read this state.

use bevy::prelude::*;
use std::collections::HashMap;

/// Maps each body id to its live sphere entity, the focus handle used by the
/// camera rig. Populated once after all bodies are spawned (two-phase setup),
/// never deregistered: its lifetime equals the session's.
#[derive(Resource, Default)]
pub struct BodyRegistry {
    handles: HashMap<&'static str, Entity>,
}

impl BodyRegistry {
    pub fn register(&mut self, id: &'static str, handle: Entity) {
        self.handles.insert(id, handle);
    }

    pub fn get(&self, id: &str) -> Option<Entity> {
        self.handles.get(id).copied()
    }
}

/// Mutable session state: which body is selected and whether the camera is
/// easing back to the overview pose. Discarded when the session ends.
#[derive(Resource, Default)]
pub struct SelectionState {
    pub selected_id: Option<&'static str>,
    pub focus_handle: Option<Entity>,
    pub menu_open: bool,
    pub reset_requested: bool,
}

impl SelectionState {
    /// Select a body, closing the directory menu. Silent no-op when no handle
    /// is given; a click can in principle fire before a handle exists.
    pub fn select_body(&mut self, handle: Option<Entity>, id: &'static str) {
        let Some(handle) = handle else {
            return;
        };
        self.selected_id = Some(id);
        self.focus_handle = Some(handle);
        self.menu_open = false;
        info!("selected body {id}");
    }

    /// Directory entry point: resolve the handle by id. Unknown ids are a
    /// silent no-op.
    pub fn select_from_directory(&mut self, registry: &BodyRegistry, id: &'static str) {
        self.select_body(registry.get(id), id);
    }

    /// Clear the selection and ask the camera rig to ease back to overview.
    pub fn go_back(&mut self) {
        self.selected_id = None;
        self.focus_handle = None;
        self.reset_requested = true;
    }

    /// Flips the directory menu; never touches the selection.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectionState>()
            .init_resource::<BodyRegistry>();
    }
}
