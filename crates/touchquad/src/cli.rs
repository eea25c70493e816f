use std::path::PathBuf;

use clap::Parser;
use renderer::{DEFAULT_FRAGMENT_ENTRY, DEFAULT_VERTEX_ENTRY};

#[derive(Parser, Debug)]
#[command(
    name = "touchquad",
    author,
    version,
    about = "Touch-driven full-screen shader quad preview"
)]
pub struct Cli {
    /// Vertex entry point to resolve in the shader library.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_VERTEX_ENTRY)]
    pub vertex_entry: String,

    /// Fragment entry point to resolve in the shader library.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_FRAGMENT_ENTRY)]
    pub fragment_entry: String,

    /// Window size (e.g. `1280x720`).
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_size, default_value = "960x640")]
    pub size: (u32, u32),

    /// WGSL file to use instead of the embedded shader library.
    #[arg(long, value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// Window title.
    #[arg(long, default_value = "touchquad")]
    pub title: String,
}

pub fn parse() -> Cli {
    Cli::parse()
}

fn parse_size(value: &str) -> Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{value}`"))?;
    let width: u32 = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid width in `{value}`"))?;
    let height: u32 = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid height in `{value}`"))?;
    if width == 0 || height == 0 {
        return Err(format!("size must be non-zero, got `{value}`"));
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_embedded_library() {
        let cli = Cli::try_parse_from(["touchquad"]).expect("defaults parse");
        assert_eq!(cli.vertex_entry, DEFAULT_VERTEX_ENTRY);
        assert_eq!(cli.fragment_entry, DEFAULT_FRAGMENT_ENTRY);
        assert_eq!(cli.size, (960, 640));
        assert!(cli.library.is_none());
    }

    #[test]
    fn parses_explicit_entry_points_and_size() {
        let cli = Cli::try_parse_from([
            "touchquad",
            "--fragment-entry",
            "fs_scope",
            "--size",
            "1280x720",
        ])
        .expect("arguments parse");
        assert_eq!(cli.fragment_entry, "fs_scope");
        assert_eq!(cli.size, (1280, 720));
    }

    #[test]
    fn rejects_malformed_sizes() {
        assert!(Cli::try_parse_from(["touchquad", "--size", "1280"]).is_err());
        assert!(Cli::try_parse_from(["touchquad", "--size", "0x720"]).is_err());
        assert!(Cli::try_parse_from(["touchquad", "--size", "axb"]).is_err());
    }
}
