//! Touch-driven full-screen shader quad view built on `wgpu`.
//!
//! The crate glues a winit window, a wgpu pipeline, and a small per-frame
//! uniform upload together. The overall flow is:
//!
//! ```text
//!   CLI / embedding caller
//!          │ ViewConfig
//!          ▼
//!   run_windowed ──▶ QuadView ──▶ winit event loop ──▶ render()
//!          ▲                                  │
//!          │ touch / cursor events            └─▶ uniforms (time,
//!          └── TouchTracker ─▶ set_touch()        resolution, touch)
//! ```
//!
//! `QuadView` owns all GPU resources (surface, device, pipeline, the two
//! static vertex buffers) plus the only mutable state: an elapsed-time
//! accumulator and the last known touch position. Every frame binds the
//! pipeline, uploads three small uniforms, and draws the six-vertex quad.

mod gpu;
mod input;
mod library;
mod types;
mod window;

pub use gpu::{FrameState, PipelineBuildError, QuadView, ELAPSED_INCREMENT};
pub use input::TouchTracker;
pub use library::{slots, ShaderLibrary, DEFAULT_LIBRARY_WGSL};
pub use types::{
    LibrarySource, ShaderEntryPoints, ViewConfig, DEFAULT_FRAGMENT_ENTRY, DEFAULT_VERTEX_ENTRY,
};
pub use window::run_windowed;
