use nalgebra_glm as glm;

use crate::camera::GlCamera;
use crate::gesture::Gesture;
use crate::settings::ViewerSettings;

/// Matrices the renderer reads once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub mvp: glm::Mat4,
    pub projection_view: glm::Mat4,
    pub orbit_view_projection: glm::Mat4,
    pub orbit_eye: glm::Vec3,
}

/// A viewing session: owns the camera and remembers the default pose that a
/// double tap goes back to.
pub struct ViewerSession {
    camera: GlCamera,
    default_pose: [f32; 6],
    viewport: Option<(u32, u32)>,
}

impl ViewerSession {
    pub fn new(settings: &ViewerSettings) -> Self {
        let mut camera = GlCamera::with_sensitivity(
            settings.fov_degrees,
            settings.eye_z,
            settings.near_plane,
            settings.far_plane,
            settings.sensitivity,
        );
        camera.set_model_position(&settings.default_pose);
        log::debug!(
            "Session created: fov={} eye_z={} near={} far={}",
            settings.fov_degrees,
            settings.eye_z,
            settings.near_plane,
            settings.far_plane
        );

        Self {
            camera,
            default_pose: settings.default_pose,
            viewport: None,
        }
    }

    pub fn camera(&self) -> &GlCamera {
        &self.camera
    }

    pub fn default_pose(&self) -> &[f32; 6] {
        &self.default_pose
    }

    pub fn viewport(&self) -> Option<(u32, u32)> {
        self.viewport
    }

    /// Called when the surface is created or the device orientation changes
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("Ignoring degenerate viewport {}x{}", width, height);
            return;
        }
        self.viewport = Some((width, height));
        self.camera.set_aspect_ratio(width as f32 / height as f32);
        log::debug!("Viewport set to {}x{}", width, height);
    }

    /// Reset model's position
    pub fn double_tap_action(&mut self) {
        self.camera.set_model_position(&self.default_pose);
    }

    /// Rotate the view when the user scrolls with one finger
    pub fn scroll_action(&mut self, distance_x: f32, distance_y: f32) {
        self.camera.rotate(distance_x, distance_y);
    }

    /// Pinch-zoom
    pub fn scale_action(&mut self, scale_factor: f32) {
        self.camera.scale(scale_factor);
    }

    /// Two-finger drag moves the model in x-y
    pub fn move_action(&mut self, distance_x: f32, distance_y: f32) {
        self.camera.translate(distance_x, distance_y);
    }

    pub fn apply(&mut self, gesture: &Gesture) {
        log::trace!("Applying gesture {:?}", gesture);
        match *gesture {
            Gesture::Scroll { dx, dy } => self.scroll_action(dx, dy),
            Gesture::Scale { factor } => self.scale_action(factor),
            Gesture::Move { dx, dy } => self.move_action(dx, dy),
            Gesture::DoubleTap => self.double_tap_action(),
            Gesture::Resize { width, height } => self.set_viewport(width, height),
        }
    }

    pub fn frame(&self) -> FrameMatrices {
        if self.viewport.is_none() {
            log::warn!("Reading frame matrices before the viewport is known");
        }
        FrameMatrices {
            mvp: self.camera.mvp(),
            projection_view: self.camera.projection_view(),
            orbit_view_projection: self.camera.orbit_view_projection(),
            orbit_eye: self.camera.orbit_eye(),
        }
    }
}
