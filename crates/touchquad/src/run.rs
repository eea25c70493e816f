use anyhow::Result;
use renderer::{run_windowed, LibrarySource, ShaderEntryPoints, ViewConfig};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let config = ViewConfig {
        entry_points: ShaderEntryPoints {
            vertex: cli.vertex_entry,
            fragment: cli.fragment_entry,
        },
        surface_size: cli.size,
        window_title: cli.title,
        library_source: cli
            .library
            .map(LibrarySource::File)
            .unwrap_or(LibrarySource::Embedded),
    };

    tracing::info!(
        vertex = %config.entry_points.vertex,
        fragment = %config.entry_points.fragment,
        width = config.surface_size.0,
        height = config.surface_size.1,
        "starting quad view"
    );

    run_windowed(config)
}
