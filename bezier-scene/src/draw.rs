use cgmath::Matrix4;

use crate::model::ModelId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub model: ModelId,
    pub transform: Matrix4<f32>,
    /// Uniform color, `None` for models carrying per-vertex colors.
    pub color: Option<[f32; 4]>,
}

impl DrawCommand {
    pub fn uniform(&self) -> DrawUniform {
        DrawUniform {
            transform: self.transform.into(),
            color: self.color.unwrap_or([1f32, 1f32, 1f32, 1f32]),
        }
    }
}

/// Column-major transform and color as laid out for a uniform buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Zeroable, bytemuck::Pod)]
pub struct DrawUniform {
    pub transform: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl DrawUniform {
    pub const FLOAT_COUNT: usize = 20;
}

/// The graphics binding layer that issues the actual draw call.
pub trait DrawTarget {
    fn draw(&mut self, command: &DrawCommand);
}

impl DrawTarget for Vec<DrawCommand> {
    fn draw(&mut self, command: &DrawCommand) {
        self.push(*command);
    }
}

/// Packs commands into one contiguous float slice for upload.
pub fn pack_uniforms(commands: &[DrawCommand]) -> Vec<f32> {
    let uniforms = commands
        .iter()
        .map(DrawCommand::uniform)
        .collect::<Vec<_>>();
    bytemuck::cast_slice::<DrawUniform, f32>(&uniforms).to_vec()
}

#[test]
fn test_pack_uniforms() {
    use cgmath::Vector3;

    let commands = [
        DrawCommand {
            model: ModelId::Sphere,
            transform: Matrix4::from_translation(Vector3::new(1f32, 2f32, 3f32)),
            color: Some([1f32, 0f32, 0f32, 1f32]),
        },
        DrawCommand {
            model: ModelId::CubeX,
            transform: Matrix4::from_scale(2f32),
            color: None,
        },
    ];
    let packed = pack_uniforms(&commands);
    assert_eq!(2 * DrawUniform::FLOAT_COUNT, packed.len());
    assert_eq!(&[1f32, 2f32, 3f32, 1f32], &packed[12..16]);
    assert_eq!(&[1f32, 0f32, 0f32, 1f32], &packed[16..20]);
    assert_eq!(2f32, packed[20]);
    assert_eq!(&[1f32; 4], &packed[36..40]);
}
