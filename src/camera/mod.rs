pub mod controller;
pub mod gl_camera;
pub mod state;
pub mod uniform;

pub use controller::CameraController;
pub use gl_camera::GlCamera;
pub use state::{ModelPose, OrbitPosition, Sensitivity};
pub use uniform::CameraUniform;

// sensitivity coefficients for translating gestures to model's movements
pub const SCALE_TO_Z_TRANSLATION: f32 = 20.0;
pub const ROTATION_DIVISOR: f32 = 1000.0;
pub const XY_TRANSLATION_FACTOR: f32 = 10.0;

/// Distance kept between the orbit polar angle and π/2
pub const POLAR_CLAMP_MARGIN: f32 = 0.001;
