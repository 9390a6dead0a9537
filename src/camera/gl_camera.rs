use nalgebra_glm as glm;

use super::state::{ModelPose, OrbitPosition, Sensitivity};

/// Fixed-view camera that places the model with six degrees of freedom and
/// keeps a separate orbit position for free-look rendering.
///
/// MVP = Projection * View * (Translation * Rotation)
#[derive(Debug, Clone)]
pub struct GlCamera {
    fov_degrees: f32,
    near_plane: f32,
    far_plane: f32,
    eye_z: f32,
    sensitivity: Sensitivity,

    view_matrix: glm::Mat4,
    projection_view_matrix: glm::Mat4,
    translation_matrix: glm::Mat4,
    rotation_matrix: glm::Mat4,
    model_matrix: glm::Mat4,
    mvp_matrix: glm::Mat4,

    pose: ModelPose,
    orbit: OrbitPosition,
}

impl GlCamera {
    /// Camera at `(0, 0, eye_z)` looking toward `(0, 0, -1)` with +Y up.
    ///
    /// Projection stays identity until [`GlCamera::set_aspect_ratio`] is called,
    /// so the MVP is meaningless before that.
    pub fn new(fov_degrees: f32, eye_z: f32, near_plane: f32, far_plane: f32) -> Self {
        Self::with_sensitivity(
            fov_degrees,
            eye_z,
            near_plane,
            far_plane,
            Sensitivity::default(),
        )
    }

    pub fn with_sensitivity(
        fov_degrees: f32,
        eye_z: f32,
        near_plane: f32,
        far_plane: f32,
        sensitivity: Sensitivity,
    ) -> Self {
        let view_matrix = fixed_view(eye_z);

        Self {
            fov_degrees,
            near_plane,
            far_plane,
            eye_z,
            sensitivity,
            view_matrix,
            projection_view_matrix: glm::Mat4::identity(),
            translation_matrix: glm::Mat4::identity(),
            rotation_matrix: glm::Mat4::identity(),
            model_matrix: glm::Mat4::identity(),
            mvp_matrix: glm::Mat4::identity(),
            pose: ModelPose::default(),
            orbit: OrbitPosition::default(),
        }
    }

    /// Use the display's aspect ratio to compute the projection matrix.
    ///
    /// A zero aspect ratio or coincident near/far planes leave the previous
    /// projection in place.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if aspect.abs() <= f32::EPSILON {
            log::warn!("Ignoring zero aspect ratio");
            return;
        }
        if (self.far_plane - self.near_plane).abs() <= f32::EPSILON {
            log::warn!(
                "Ignoring aspect ratio {}: near and far planes coincide at {}",
                aspect,
                self.near_plane
            );
            return;
        }

        let projection = glm::perspective(
            aspect,
            self.fov_degrees.to_radians(),
            self.near_plane,
            self.far_plane,
        );
        self.projection_view_matrix = projection * self.view_matrix;
        self.compute_mvp();
    }

    /// Absolute set of all six degrees of freedom
    pub fn set_model_pose(&mut self, x: f32, y: f32, z: f32, pitch: f32, yaw: f32, roll: f32) {
        self.apply_pose(ModelPose::new(x, y, z, pitch, yaw, roll));
    }

    /// Same as [`GlCamera::set_model_pose`] with `[x, y, z, pitch, yaw, roll]`
    pub fn set_model_position(&mut self, pose: &[f32; 6]) {
        self.apply_pose(ModelPose::from_vector(pose));
    }

    fn apply_pose(&mut self, pose: ModelPose) {
        self.pose = pose;
        self.rotation_matrix = pose.rotation_matrix();
        self.compute_mvp();
    }

    /// One-finger drag: moves the orbit azimuth and polar angle.
    /// The model quaternion is left alone.
    pub fn rotate(&mut self, distance_x: f32, distance_y: f32) {
        let divisor = self.sensitivity.rotation_divisor;
        self.orbit.rotate_by(-distance_x / divisor, -distance_y / divisor);
        self.compute_mvp();
    }

    /// Pinch: pushes or pulls the orbit eye along its radius
    pub fn scale(&mut self, scale_factor: f32) {
        self.orbit
            .zoom_by(-self.sensitivity.scale_to_z_translation * (scale_factor - 1.0));
        self.compute_mvp();
    }

    /// Two-finger drag: displaces the model in x-y
    pub fn translate(&mut self, distance_x: f32, distance_y: f32) {
        let factor = self.sensitivity.xy_translation_factor;
        self.pose.translation.x += factor * distance_x;
        self.pose.translation.y += factor * distance_y;
        self.compute_mvp();
    }

    fn compute_mvp(&mut self) {
        self.translation_matrix = self.pose.translation_matrix();
        self.model_matrix = self.translation_matrix * self.rotation_matrix;
        self.mvp_matrix = self.projection_view_matrix * self.model_matrix;
    }

    pub fn mvp(&self) -> glm::Mat4 {
        self.mvp_matrix
    }

    pub fn projection_view(&self) -> glm::Mat4 {
        self.projection_view_matrix
    }

    pub fn rotation_matrix(&self) -> glm::Mat4 {
        self.rotation_matrix
    }

    pub fn translation_matrix(&self) -> glm::Mat4 {
        self.translation_matrix
    }

    pub fn model_matrix(&self) -> glm::Mat4 {
        self.model_matrix
    }

    pub fn view_matrix(&self) -> glm::Mat4 {
        self.view_matrix
    }

    /// `(theta, phi, radius)`
    pub fn orbit_position(&self) -> glm::Vec3 {
        self.orbit.as_vec3()
    }

    pub fn orbit(&self) -> &OrbitPosition {
        &self.orbit
    }

    pub fn pose(&self) -> &ModelPose {
        &self.pose
    }

    pub fn translation(&self) -> glm::Vec3 {
        self.pose.translation
    }

    pub fn quaternion(&self) -> glm::Qua<f32> {
        self.pose.quaternion
    }

    pub fn eye_z(&self) -> f32 {
        self.eye_z
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    pub fn sensitivity(&self) -> &Sensitivity {
        &self.sensitivity
    }

    /// Eye position derived from the orbit's spherical coordinates
    pub fn orbit_eye(&self) -> glm::Vec3 {
        self.orbit.eye()
    }

    /// Free-look view from the orbit eye toward the model's x-y offset
    pub fn orbit_view(&self) -> glm::Mat4 {
        let target = glm::vec3(self.pose.translation.x, self.pose.translation.y, 0.0);
        glm::look_at(&self.orbit_eye(), &target, &glm::vec3(0.0, 1.0, 0.0))
    }

    /// Projection-view composed with the orbit view, used for the skybox pass
    pub fn orbit_view_projection(&self) -> glm::Mat4 {
        self.projection_view_matrix * self.orbit_view()
    }
}

impl Default for GlCamera {
    fn default() -> Self {
        Self::new(45.0, 0.0, 1.0, 2000.0)
    }
}

fn fixed_view(eye_z: f32) -> glm::Mat4 {
    glm::look_at(
        &glm::vec3(0.0, 0.0, eye_z), // camera location in world space
        &glm::vec3(0.0, 0.0, -1.0), // where the camera is pointed
        &glm::vec3(0.0, 1.0, 0.0), // camera is pointing up
    )
}
