use bytemuck::{Pod, Zeroable};

use crate::library::slots;

/// Time step added to the elapsed accumulator once per rendered frame.
pub const ELAPSED_INCREMENT: f32 = 0.025;

/// The only mutable data in the view.
///
/// Owned by the event-loop thread: the redraw callback reads and advances it
/// while the input callbacks overwrite `last_touch`, and winit delivers both
/// on the same thread, so no synchronization is involved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    /// Elapsed-time accumulator in seconds, advanced by a fixed step.
    pub elapsed: f32,
    /// Last known touch position in view-local (logical) coordinates.
    /// Overwritten on touch-begin and touch-move; never cleared.
    pub last_touch: (f32, f32),
}

impl FrameState {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            last_touch: (0.0, 0.0),
        }
    }

    /// Advances the timer by one frame.
    ///
    /// Clamps back to zero before the accumulator could leave the finite
    /// range; not a cycle-accurate wraparound.
    pub fn advance(&mut self) {
        self.elapsed += ELAPSED_INCREMENT;
        if self.elapsed >= f32::MAX - ELAPSED_INCREMENT {
            self.elapsed = 0.0;
        }
    }
}

impl Default for FrameState {
    fn default() -> Self {
        Self::new()
    }
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct ElapsedUniform {
    seconds: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Vec2Uniform {
    value: [f32; 2],
}

/// Converts a view-local coordinate pair into physical pixels.
pub(crate) fn to_physical(value: (f32, f32), scale: f32) -> [f32; 2] {
    [value.0 * scale, value.1 * scale]
}

/// The three per-frame uniform buffers and their shared bind group.
pub(crate) struct UniformBuffers {
    elapsed: wgpu::Buffer,
    resolution: wgpu::Buffer,
    touch: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl UniformBuffers {
    pub(crate) fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout) -> Self {
        let elapsed = create_uniform_buffer(device, "elapsed uniform", &ElapsedUniform {
            seconds: 0.0,
        });
        let resolution = create_uniform_buffer(device, "resolution uniform", &Vec2Uniform {
            value: [0.0, 0.0],
        });
        let touch = create_uniform_buffer(device, "touch uniform", &Vec2Uniform {
            value: [0.0, 0.0],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quad uniform bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: slots::ELAPSED_BINDING,
                    resource: elapsed.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: slots::RESOLUTION_BINDING,
                    resource: resolution.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: slots::TOUCH_BINDING,
                    resource: touch.as_entire_binding(),
                },
            ],
        });

        Self {
            elapsed,
            resolution,
            touch,
            bind_group,
        }
    }

    /// Writes the current frame's uniform values through the queue.
    pub(crate) fn write(
        &self,
        queue: &wgpu::Queue,
        elapsed: f32,
        resolution: [f32; 2],
        touch: [f32; 2],
    ) {
        queue.write_buffer(
            &self.elapsed,
            0,
            bytemuck::bytes_of(&ElapsedUniform { seconds: elapsed }),
        );
        queue.write_buffer(
            &self.resolution,
            0,
            bytemuck::bytes_of(&Vec2Uniform { value: resolution }),
        );
        queue.write_buffer(
            &self.touch,
            0,
            bytemuck::bytes_of(&Vec2Uniform { value: touch }),
        );
    }
}

fn create_uniform_buffer<T: Pod>(device: &wgpu::Device, label: &str, initial: &T) -> wgpu::Buffer {
    use wgpu::util::DeviceExt;

    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::bytes_of(initial),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn elapsed_accumulates_a_fixed_step_per_frame() {
        let mut state = FrameState::new();
        for _ in 0..400 {
            state.advance();
        }
        assert!((state.elapsed - 400.0 * ELAPSED_INCREMENT).abs() < 1e-3);
    }

    #[test]
    fn elapsed_resets_before_overflowing() {
        let mut state = FrameState::new();
        state.elapsed = f32::MAX;
        state.advance();
        assert_eq!(state.elapsed, 0.0);

        // A full cycle through the guard never produces a non-finite value.
        state.elapsed = f32::MAX - 1.0;
        state.advance();
        assert!(state.elapsed.is_finite());
    }

    #[test]
    fn frame_state_starts_at_origin() {
        let state = FrameState::new();
        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.last_touch, (0.0, 0.0));
    }

    #[test]
    fn uniform_records_are_tightly_packed() {
        assert_eq!(size_of::<ElapsedUniform>(), 4);
        assert_eq!(align_of::<ElapsedUniform>(), 4);
        assert_eq!(size_of::<Vec2Uniform>(), 8);
    }

    #[test]
    fn physical_coordinates_scale_with_display_density() {
        assert_eq!(to_physical((800.0, 600.0), 2.0), [1600.0, 1200.0]);
        assert_eq!(to_physical((12.5, 40.0), 1.0), [12.5, 40.0]);
        assert_eq!(to_physical((100.0, 50.0), 1.5), [150.0, 75.0]);
    }
}
