//! egui overlay systems

use bevy::prelude::*;
use bevy_egui::egui::Color32;
use bevy_egui::{EguiContexts, egui};

use crate::body::BodySphere;
use crate::camera::MainCamera;
use crate::catalog::BodyCatalog;
use crate::selection::{BodyRegistry, SelectionState};

const VERSION_LABEL: &str = concat!("Version ", env!("CARGO_PKG_VERSION"));

/// Renders the fixed overlay controls and the selected body's label.
pub fn overlay_ui(
    mut contexts: EguiContexts,
    mut selection: ResMut<SelectionState>,
    registry: Res<BodyRegistry>,
    catalog: Res<BodyCatalog>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    spheres: Query<&GlobalTransform, With<BodySphere>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    // Back control, fixed top-left.
    egui::Area::new(egui::Id::new("back_control"))
        .fixed_pos(egui::pos2(10.0, 10.0))
        .show(ctx, |ui| {
            if ui.button(egui::RichText::new("←").size(24.0)).clicked() {
                selection.go_back();
            }
        });

    // Directory toggle, fixed top-right.
    let toggle_label = if selection.menu_open {
        "✕ Close"
    } else {
        "☰ Directory"
    };
    egui::Area::new(egui::Id::new("directory_toggle"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
        .show(ctx, |ui| {
            if ui.button(toggle_label).clicked() {
                selection.toggle_menu();
            }
        });

    // Directory list: one entry per catalog body (moons excluded), the
    // selected entry highlighted.
    if selection.menu_open {
        egui::Window::new("Planets")
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 50.0))
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                for body in &catalog.bodies {
                    let highlighted = selection.selected_id == Some(body.id);
                    if ui.selectable_label(highlighted, body.id).clicked() {
                        selection.select_from_directory(&registry, body.id);
                    }
                }
            });
    }

    // Version tag, bottom-left. Informational only.
    egui::Area::new(egui::Id::new("version_label"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(10.0, -10.0))
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(VERSION_LABEL)
                    .size(12.0)
                    .color(Color32::GRAY),
            );
        });

    draw_selected_label(ctx, &selection, &catalog, &camera, &spheres);
}

/// Title (falling back to the body id) and optional description, drawn at the
/// selected body's projected screen position. Re-projected every tick, so the
/// label tracks the body and always faces the viewer.
fn draw_selected_label(
    ctx: &egui::Context,
    selection: &SelectionState,
    catalog: &BodyCatalog,
    camera: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    spheres: &Query<&GlobalTransform, With<BodySphere>>,
) {
    let (Some(id), Some(handle)) = (selection.selected_id, selection.focus_handle) else {
        return;
    };
    let Some(record) = catalog.get(id) else {
        return;
    };
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(world) = spheres.get(handle) else {
        return;
    };
    let Ok(screen) = camera.world_to_viewport(camera_transform, world.translation()) else {
        // Behind the camera; nothing to draw this tick.
        return;
    };

    egui::Area::new(egui::Id::new("body_label"))
        .fixed_pos(egui::pos2(screen.x + 18.0, screen.y - 12.0))
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(record.title.unwrap_or(record.id))
                    .size(22.0)
                    .color(Color32::WHITE),
            );
            if let Some(text) = record.text {
                ui.label(egui::RichText::new(text).size(15.0).color(Color32::LIGHT_GRAY));
            }
        });
}
