use wgpu::util::DeviceExt;

/// Number of vertices issued per frame: two triangles forming a quad.
pub(crate) const VERTEX_COUNT: u32 = 6;

/// Two triangles covering the full viewport in normalized device coordinates.
pub(crate) const QUAD_POSITIONS: [[f32; 4]; 6] = [
    [-1.0, -1.0, 0.0, 1.0],
    [1.0, -1.0, 0.0, 1.0],
    [-1.0, 1.0, 0.0, 1.0],
    [-1.0, 1.0, 0.0, 1.0],
    [1.0, -1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
];

// black
pub(crate) const QUAD_COLORS: [[f32; 3]; 6] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0],
];

const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x4];
const COLOR_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

/// The two immutable vertex buffers backing the quad.
///
/// Element `i` of each buffer describes the same logical vertex; neither
/// buffer is resized or written after creation.
pub(crate) struct QuadGeometry {
    pub positions: wgpu::Buffer,
    pub colors: wgpu::Buffer,
}

impl QuadGeometry {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        let positions = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad positions"),
            contents: bytemuck::cast_slice(&QUAD_POSITIONS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let colors = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad colors"),
            contents: bytemuck::cast_slice(&QUAD_COLORS),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self { positions, colors }
    }
}

pub(crate) fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRIBUTES,
    }
}

pub(crate) fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &COLOR_ATTRIBUTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_and_color_buffers_pair_six_vertices() {
        assert_eq!(QUAD_POSITIONS.len(), 6);
        assert_eq!(QUAD_COLORS.len(), QUAD_POSITIONS.len());
        assert_eq!(VERTEX_COUNT as usize, QUAD_POSITIONS.len());
    }

    #[test]
    fn quad_covers_exactly_the_ndc_square() {
        for [x, y, z, w] in QUAD_POSITIONS {
            assert!(x == -1.0 || x == 1.0);
            assert!(y == -1.0 || y == 1.0);
            assert_eq!(z, 0.0);
            assert_eq!(w, 1.0);
        }
        for corner in [[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0]] {
            assert!(
                QUAD_POSITIONS
                    .iter()
                    .any(|[x, y, ..]| [*x, *y] == corner),
                "corner {corner:?} is not part of the quad"
            );
        }
    }

    #[test]
    fn colors_start_black() {
        assert!(QUAD_COLORS.iter().flatten().all(|channel| *channel == 0.0));
    }

    #[test]
    fn buffer_contents_are_stride_times_count() {
        assert_eq!(std::mem::size_of_val(&QUAD_POSITIONS), 16 * 6);
        assert_eq!(std::mem::size_of_val(&QUAD_COLORS), 12 * 6);
    }

    #[test]
    fn vertex_layouts_match_element_strides() {
        assert_eq!(position_layout().array_stride, 16);
        assert_eq!(color_layout().array_stride, 12);
    }
}
