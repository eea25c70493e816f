use std::time::{Duration, Instant};

use anyhow::{Context as AnyhowContext, Result};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use tracing::{debug, warn};
use winit::dpi::PhysicalSize;

use crate::library::{slots, ShaderLibrary};
use crate::types::{LibrarySource, ViewConfig};

use super::context::GpuContext;
use super::geometry::{QuadGeometry, VERTEX_COUNT};
use super::pipeline::{self, QuadPipeline};
use super::uniforms::{to_physical, FrameState, UniformBuffers};

/// The full-screen quad view.
///
/// Owns the command queue, the immutable pipeline configuration, the two
/// static geometry buffers, and the per-frame [`FrameState`]. Constructed
/// once; every redraw request runs the identical linear sequence in
/// [`QuadView::render`].
pub struct QuadView {
    context: GpuContext,
    pipeline: QuadPipeline,
    geometry: QuadGeometry,
    uniforms: UniformBuffers,
    frame_state: FrameState,
    scale: f32,
    frame_count: u64,
    frames_since_last_update: u32,
    last_fps_update: Instant,
    frames_per_second: f32,
}

impl QuadView {
    /// Acquires the GPU context, compiles the shader library, and builds the
    /// pipeline and static buffers.
    ///
    /// Environment failures (no adapter or device, unsupported surface
    /// format) and pipeline-build failures both surface as a recoverable
    /// `Err`; the caller decides severity.
    pub fn new<T>(
        target: &T,
        size: PhysicalSize<u32>,
        scale: f32,
        config: &ViewConfig,
    ) -> Result<Self>
    where
        T: HasDisplayHandle + HasWindowHandle,
    {
        let context = GpuContext::new(target, size)?;
        let library = match &config.library_source {
            LibrarySource::Embedded => ShaderLibrary::embedded(&context.device)?,
            LibrarySource::File(path) => ShaderLibrary::from_file(&context.device, path)?,
        };
        let pipeline = pipeline::build_pipeline(
            &context.device,
            &library,
            &config.entry_points.vertex,
            &config.entry_points.fragment,
        )
        .with_context(|| {
            format!(
                "failed to build pipeline for entry points `{}`/`{}`",
                config.entry_points.vertex, config.entry_points.fragment
            )
        })?;
        let geometry = QuadGeometry::new(&context.device);
        let uniforms = UniformBuffers::new(&context.device, &pipeline.uniform_layout);

        debug!(
            vertex = %config.entry_points.vertex,
            fragment = %config.entry_points.fragment,
            scale,
            "quad view ready"
        );

        Ok(Self {
            context,
            pipeline,
            geometry,
            uniforms,
            frame_state: FrameState::new(),
            scale,
            frame_count: 0,
            frames_since_last_update: 0,
            last_fps_update: Instant::now(),
            frames_per_second: 60.0,
        })
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.context.size
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// View size in view-local (logical) units.
    pub fn logical_size(&self) -> (f32, f32) {
        (
            self.context.size.width as f32 / self.scale,
            self.context.size.height as f32 / self.scale,
        )
    }

    /// Current per-frame state, exposed for the embedding caller.
    pub fn frame_state(&self) -> FrameState {
        self.frame_state
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.context.resize(new_size);
    }

    /// Refreshes the display scale after a monitor change.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Overwrites the last known touch position, in view-local coordinates.
    ///
    /// Last write wins; the next frame reads the value as a uniform.
    pub fn set_touch(&mut self, position: (f32, f32)) {
        self.frame_state.last_touch = position;
    }

    /// Records and submits one frame.
    ///
    /// Acquires the presentable surface before anything else: when the
    /// surface is unavailable the frame is skipped with the timer untouched
    /// and nothing submitted, and the caller sees the surface error.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let acquire_start = Instant::now();
        let frame = self.context.surface.get_current_texture()?;
        let acquire_duration = acquire_start.elapsed();
        let frame_budget = Duration::from_secs_f32(1.0 / self.frames_per_second.max(1.0));
        if acquire_duration > frame_budget {
            warn!(
                "acquiring frame took {}ms, over the frame budget of {}ms (at {} FPS)",
                acquire_duration.as_millis(),
                frame_budget.as_millis(),
                self.frames_per_second.round(),
            );
        }

        self.frame_state.advance();
        self.uniforms.write(
            &self.context.queue,
            self.frame_state.elapsed,
            to_physical(self.logical_size(), self.scale),
            to_physical(self.frame_state.last_touch, self.scale),
        );

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("quad encoder"),
                });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("quad pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render_pass.set_pipeline(&self.pipeline.pipeline);
            render_pass.set_bind_group(0, &self.uniforms.bind_group, &[]);
            render_pass.set_vertex_buffer(
                slots::POSITION_BUFFER,
                self.geometry.positions.slice(..),
            );
            render_pass.set_vertex_buffer(slots::COLOR_BUFFER, self.geometry.colors.slice(..));
            render_pass.draw(0..VERTEX_COUNT, 0..1);
        }
        self.context.queue.submit(std::iter::once(encoder.finish()));
        frame.present();

        self.frame_count += 1;
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let since_update = now.saturating_duration_since(self.last_fps_update);
        if since_update >= Duration::from_secs(1) {
            self.frames_per_second =
                self.frames_since_last_update as f32 / since_update.as_secs_f32();
            self.frames_since_last_update = 0;
            self.last_fps_update = now;
            debug!(
                fps = self.frames_per_second.round(),
                frame_count = self.frame_count,
                elapsed = self.frame_state.elapsed,
                "render stats"
            );
        }

        Ok(())
    }
}
