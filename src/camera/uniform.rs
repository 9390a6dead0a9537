use super::GlCamera;
use crate::session::FrameMatrices;

/// Matrices laid out for a uniform buffer, column-major
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub mvp: [[f32; 4]; 4],
    pub projection_view: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<&GlCamera> for CameraUniform {
    fn from(camera: &GlCamera) -> Self {
        Self {
            mvp: camera.mvp().into(),
            projection_view: camera.projection_view().into(),
        }
    }
}

impl From<&FrameMatrices> for CameraUniform {
    fn from(frame: &FrameMatrices) -> Self {
        Self {
            mvp: frame.mvp.into(),
            projection_view: frame.projection_view.into(),
        }
    }
}
