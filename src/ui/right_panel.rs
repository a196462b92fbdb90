use crate::scene::SceneObject;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

pub(super) fn ui(
    commands: &mut Commands,
    ui_context: &mut EguiContexts,
    objects: &Query<(Entity, &SceneObject)>,
) {
    egui::SidePanel::right("side_panel")
        .default_width(300.0)
        .resizable(false)
        .show(ui_context.ctx_mut(), |ui| {
            ui.heading("Scene explorer");

            egui::ScrollArea::vertical()
                .max_height(400.0)
                .show(ui, |ui| {
                    for (entity, object) in objects.iter() {
                        ui.horizontal(|ui| {
                            ui.label(&object.name);
                            if ui.button("❌").clicked() {
                                commands.entity(entity).despawn_recursive();
                            }
                        });
                    }
                });
        });
}
