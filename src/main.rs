use crate::cli::CliArgs;
use crate::operation::{Operation, Operations};
use crate::styling::Theme;
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod cli;
mod import;
mod operation;
mod scene;
mod styling;
mod ui;

fn main() {
    let args = CliArgs::parse();
    let theme = Theme {
        dark_mode: !args.light_mode,
    };

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.55, 0.55, 0.55)))
        .insert_resource(args)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Mergium".to_owned(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_plugins(ui::UiPlugin)
        .add_plugins(styling::StylingPlugin)
        .add_plugins(operation::OperationsPlugin)
        .add_plugins(scene::ScenePlugin)
        .insert_resource(theme)
        .add_systems(Startup, setup_graphics)
        .add_systems(Startup, queue_cli_imports)
        .run();
}

fn setup_graphics(mut commands: Commands) {
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: false,
            ..Default::default()
        },
        transform: Transform {
            translation: Vec3::new(10.0, 2.0, 10.0),
            rotation: Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4),
            ..Default::default()
        },
        ..Default::default()
    });

    commands.spawn(Camera3dBundle {
        transform: Transform::from_matrix(
            Mat4::look_at_rh(Vec3::new(-6.0, 6.0, 2.0), Vec3::ZERO, Vec3::Y).inverse(),
        ),
        ..Default::default()
    });
}

/// Archives named on the command line go through the same queueing operation
/// as the dialog, so they get the same validation and notifications.
fn queue_cli_imports(
    cli: Res<CliArgs>,
    mut operations: ResMut<Operations>,
    mut ui_state: ResMut<ui::UiState>,
) {
    if cli.import.is_empty() {
        return;
    }

    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    operations.push(Operation::QueueArchiveFiles {
        base_dir,
        files: cli.import.clone(),
    });

    if cli.run_import {
        operations.push(Operation::ImportQueuedArchives);
    } else {
        // Leave the preloaded selection up for review, like any other add.
        ui_state.import_dialog_open = true;
    }
}
