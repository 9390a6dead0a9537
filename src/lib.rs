//! Camera and model-transform core for a gesture-driven model viewer.
//!
//! [`camera::GlCamera`] keeps the model pose and the orbit position and derives
//! the MVP matrix, [`session::ViewerSession`] routes [`gesture::Gesture`]s to it.

pub mod camera;
pub mod error;
pub mod gesture;
pub mod replay;
pub mod session;
pub mod settings;

pub const CONFY_APP_NAME: &str = "modelview-rs";

pub use camera::{CameraController, CameraUniform, GlCamera};
pub use error::ViewerError;
pub use gesture::Gesture;
pub use session::{FrameMatrices, ViewerSession};
pub use settings::ViewerSettings;
