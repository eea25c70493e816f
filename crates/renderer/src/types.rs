use std::path::PathBuf;

/// Default vertex entry point shipped by the embedded shader library.
pub const DEFAULT_VERTEX_ENTRY: &str = "vs_main";

/// Default fragment entry point shipped by the embedded shader library.
pub const DEFAULT_FRAGMENT_ENTRY: &str = "fs_main";

/// Names of the shader entry points resolved at pipeline build time.
///
/// Both names must exist in the shader library handed to the view; pipeline
/// construction fails recoverably when either does not resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderEntryPoints {
    /// Vertex stage entry point name.
    pub vertex: String,
    /// Fragment stage entry point name.
    pub fragment: String,
}

impl Default for ShaderEntryPoints {
    fn default() -> Self {
        Self {
            vertex: DEFAULT_VERTEX_ENTRY.to_owned(),
            fragment: DEFAULT_FRAGMENT_ENTRY.to_owned(),
        }
    }
}

/// Where the shader library comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LibrarySource {
    /// The WGSL module compiled into the crate.
    #[default]
    Embedded,
    /// A WGSL file loaded from disk at construction time.
    File(PathBuf),
}

/// Immutable configuration passed to the view at start-up.
#[derive(Clone, Debug)]
pub struct ViewConfig {
    /// Entry points to resolve in the shader library.
    pub entry_points: ShaderEntryPoints,
    /// Initial window size in physical pixels.
    pub surface_size: (u32, u32),
    /// Title of the preview window.
    pub window_title: String,
    /// Shader library to build the pipeline from.
    pub library_source: LibrarySource,
}

impl Default for ViewConfig {
    /// Provides a 960x640 window running the embedded library's defaults.
    fn default() -> Self {
        Self {
            entry_points: ShaderEntryPoints::default(),
            surface_size: (960, 640),
            window_title: "touchquad".to_owned(),
            library_source: LibrarySource::Embedded,
        }
    }
}
