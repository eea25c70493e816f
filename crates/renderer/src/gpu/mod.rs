//! GPU orchestration for the quad view.
//!
//! - `context` owns wgpu instance/device/surface wiring and reconfigures the
//!   swapchain when the window resizes.
//! - `pipeline` resolves the named entry points against the shader library
//!   and validates the immutable pipeline configuration.
//! - `geometry` holds the two static six-vertex buffers.
//! - `uniforms` owns the per-frame mutable state and writes the three small
//!   uniforms straight through the queue each frame.
//! - `state` glues everything together and exposes the `QuadView` API used
//!   by `window` and embedding callers.

mod context;
mod geometry;
mod pipeline;
mod state;
mod uniforms;

pub use pipeline::PipelineBuildError;
pub use state::QuadView;
pub use uniforms::{FrameState, ELAPSED_INCREMENT};
