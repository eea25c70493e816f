use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};

/// Vertex-stage argument table shared with `shaders/library.wgsl`.
///
/// Slots 0 and 1 carry the vertex attribute streams; 2 through 4 are the
/// per-frame uniforms. The WGSL side declares the same indices, so changing
/// one without the other breaks pipeline validation.
pub mod slots {
    /// Vertex buffer slot for quad positions.
    pub const POSITION_BUFFER: u32 = 0;
    /// Vertex buffer slot for per-vertex colors.
    pub const COLOR_BUFFER: u32 = 1;
    /// Uniform binding for elapsed time in seconds.
    pub const ELAPSED_BINDING: u32 = 2;
    /// Uniform binding for the viewport resolution in physical pixels.
    pub const RESOLUTION_BINDING: u32 = 3;
    /// Uniform binding for the last touch position in physical pixels.
    pub const TOUCH_BINDING: u32 = 4;
}

/// WGSL source of the library compiled into the crate.
pub const DEFAULT_LIBRARY_WGSL: &str = include_str!("shaders/library.wgsl");

/// A compiled collection of named shader entry points.
///
/// Created once at construction time; the pipeline builder resolves entry
/// points against it by name.
pub struct ShaderLibrary {
    module: wgpu::ShaderModule,
}

impl ShaderLibrary {
    /// Compiles the WGSL library shipped with the crate.
    pub fn embedded(device: &wgpu::Device) -> Result<Self> {
        Self::from_wgsl(device, DEFAULT_LIBRARY_WGSL, "embedded shader library")
    }

    /// Compiles a WGSL library read from disk.
    pub fn from_file(device: &wgpu::Device, path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read shader library at {}", path.display()))?;
        Self::from_wgsl(device, &source, "shader library")
    }

    /// Hands WGSL source to the device, capturing validation failures.
    pub fn from_wgsl(device: &wgpu::Device, source: &str, label: &str) -> Result<Self> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(Cow::Owned(source.to_owned())),
        });
        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            anyhow::bail!("device rejected {label}: {error}");
        }
        Ok(Self { module })
    }

    /// Exposes the compiled module for pipeline construction.
    pub(crate) fn module(&self) -> &wgpu::ShaderModule {
        &self.module
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_library_declares_shipped_entry_points() {
        assert!(DEFAULT_LIBRARY_WGSL.contains("fn vs_main"));
        assert!(DEFAULT_LIBRARY_WGSL.contains("fn fs_main"));
        assert!(DEFAULT_LIBRARY_WGSL.contains("fn fs_scope"));
    }

    #[test]
    fn uniform_slots_match_wgsl_bindings() {
        for binding in [
            slots::ELAPSED_BINDING,
            slots::RESOLUTION_BINDING,
            slots::TOUCH_BINDING,
        ] {
            let declaration = format!("@group(0) @binding({binding})");
            assert!(
                DEFAULT_LIBRARY_WGSL.contains(&declaration),
                "library is missing {declaration}"
            );
        }
    }

    #[test]
    fn vertex_buffer_slots_match_wgsl_locations() {
        assert_eq!(slots::POSITION_BUFFER, 0);
        assert_eq!(slots::COLOR_BUFFER, 1);
        assert!(DEFAULT_LIBRARY_WGSL.contains("@location(0) position"));
        assert!(DEFAULT_LIBRARY_WGSL.contains("@location(1) color"));
    }
}
