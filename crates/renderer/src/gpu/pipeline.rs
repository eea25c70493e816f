use thiserror::Error;

use crate::library::{slots, ShaderLibrary};

use super::geometry;

/// Output pixel format fixed for color attachment 0.
pub(crate) const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Bgra8Unorm;

/// Raised when the device refuses to build the quad pipeline.
///
/// A one-time, fail-fast setup error; callers are expected to surface it
/// rather than retry.
#[derive(Debug, Error)]
pub enum PipelineBuildError {
    /// The device rejected the pipeline descriptor: an entry-point name did
    /// not resolve in the library, the shader signatures are incompatible,
    /// or the output format is unsupported.
    #[error("device rejected quad pipeline: {0}")]
    DeviceRejected(String),
}

/// The validated pipeline plus the uniform layout its bind group must match.
pub(crate) struct QuadPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub uniform_layout: wgpu::BindGroupLayout,
}

/// Builds the immutable pipeline configuration for the quad view.
///
/// Validation runs inside a device error scope so unresolved entry points
/// and rejected descriptors surface as [`PipelineBuildError`] instead of an
/// uncaptured device error.
pub(crate) fn build_pipeline(
    device: &wgpu::Device,
    library: &ShaderLibrary,
    vertex_entry: &str,
    fragment_entry: &str,
) -> Result<QuadPipeline, PipelineBuildError> {
    let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("quad uniform layout"),
        entries: &[
            uniform_entry(slots::ELAPSED_BINDING),
            uniform_entry(slots::RESOLUTION_BINDING),
            uniform_entry(slots::TOUCH_BINDING),
        ],
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("quad pipeline layout"),
        bind_group_layouts: &[&uniform_layout],
        push_constant_ranges: &[],
    });

    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("quad pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: library.module(),
            entry_point: Some(vertex_entry),
            buffers: &[geometry::position_layout(), geometry::color_layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        fragment: Some(wgpu::FragmentState {
            module: library.module(),
            entry_point: Some(fragment_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: COLOR_FORMAT,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        multiview: None,
        cache: None,
    });
    if let Some(error) = pollster::block_on(device.pop_error_scope()) {
        return Err(PipelineBuildError::DeviceRejected(error.to_string()));
    }

    Ok(QuadPipeline {
        pipeline,
        uniform_layout,
    })
}

fn uniform_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}
