use std::sync::Arc;

use anyhow::{anyhow, Result};
use tracing::{error, trace};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{Event, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

use crate::gpu::QuadView;
use crate::input::TouchTracker;
use crate::types::ViewConfig;

/// Opens a window hosting the quad view and runs until it is closed.
///
/// The host display driver paces frames: each presented frame requests the
/// next redraw, and Fifo presentation blocks on vsync. Input events are
/// routed through a [`TouchTracker`] into the view's last-touch slot.
pub fn run_windowed(config: ViewConfig) -> Result<()> {
    let event_loop =
        EventLoop::new().map_err(|err| anyhow!("failed to create event loop: {err}"))?;

    let window_size = PhysicalSize::new(config.surface_size.0, config.surface_size.1);
    let window = WindowBuilder::new()
        .with_title(&config.window_title)
        .with_inner_size(window_size)
        .build(&event_loop)
        .map_err(|err| anyhow!("failed to create window: {err}"))?;
    let window = Arc::new(window);

    let mut scale = window.scale_factor();
    let mut view = QuadView::new(
        window.as_ref(),
        window.inner_size(),
        scale as f32,
        &config,
    )?;
    let mut tracker = TouchTracker::new();

    let run_result = event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                elwt.exit();
            }
            WindowEvent::Touch(touch) => {
                let local = to_local(touch.location, scale);
                if let Some(point) = tracker.handle_touch(touch.phase, touch.id, local) {
                    view.set_touch(point);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(point) = tracker.handle_cursor_moved(to_local(position, scale)) {
                    view.set_touch(point);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    if let Some(point) = tracker.handle_mouse_button(state) {
                        view.set_touch(point);
                    }
                }
            }
            WindowEvent::Resized(new_size) => {
                view.resize(new_size);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                scale = scale_factor;
                view.set_scale(scale as f32);
            }
            WindowEvent::RedrawRequested => match view.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    view.resize(view.size());
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    error!("surface out of memory; exiting");
                    elwt.exit();
                }
                Err(err) => {
                    trace!("skipping frame: {err:?}");
                }
            },
            _ => {}
        },
        Event::AboutToWait => {
            window.request_redraw();
        }
        _ => {}
    });

    run_result.map_err(|err| anyhow!("window event loop error: {err}"))
}

fn to_local(position: PhysicalPosition<f64>, scale: f64) -> (f32, f32) {
    let logical = position.to_logical::<f32>(scale);
    (logical.x, logical.y)
}
