use bezier_path::BezierSegment;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Zeroable, bytemuck::Pod)]
pub struct LineVertexUnit {
    pub position: [f32; 3],
    pub color: [u8; 4],
}

/// Line strip approximating one segment's curve.
#[derive(Debug, Clone, PartialEq)]
pub struct PathLine {
    segment_index: usize,
    vertices: Vec<LineVertexUnit>,
}

impl PathLine {
    pub fn new(segment_index: usize, segment: &BezierSegment, samples: usize, color: [f32; 4]) -> Self {
        let color = color.map(|v| (v.clamp(0f32, 1f32) * (0xffu32 as f32)) as u8);
        let vertices = segment
            .sample(samples)
            .into_iter()
            .map(|point| LineVertexUnit {
                position: point.into(),
                color,
            })
            .collect();
        Self {
            segment_index,
            vertices,
        }
    }

    pub fn segment_index(&self) -> usize {
        self.segment_index
    }

    pub fn vertices(&self) -> &[LineVertexUnit] {
        &self.vertices
    }

    pub fn num_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[test]
fn test_path_line_vertices() {
    use cgmath::Vector3;

    let segment = BezierSegment::from_points(
        [
            Vector3::new(0f32, 0f32, 0f32),
            Vector3::new(1f32, 0f32, 0f32),
            Vector3::new(2f32, 0f32, 0f32),
            Vector3::new(3f32, 0f32, 0f32),
        ],
        0,
        30,
    )
    .unwrap();
    let line = PathLine::new(2, &segment, 3, [1f32, 0f32, 0f32, 1f32]);
    assert_eq!(2, line.segment_index());
    assert_eq!(4, line.num_vertices());
    assert_eq!([0f32, 0f32, 0f32], line.vertices()[0].position);
    assert_eq!([3f32, 0f32, 0f32], line.vertices()[3].position);
    assert_eq!([255u8, 0u8, 0u8, 255u8], line.vertices()[1].color);
    assert_eq!(4 * 16, line.as_bytes().len());
}
