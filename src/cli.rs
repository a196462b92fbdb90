use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Archive to queue for import at startup. May be repeated.
    #[arg(long, value_name = "FILE")]
    pub import: Vec<PathBuf>,
    /// Run the queued import immediately instead of waiting for the dialog.
    #[arg(long, default_value_t = false)]
    pub run_import: bool,
    /// Start with the light theme.
    #[arg(long, default_value_t = false)]
    pub light_mode: bool,
}
