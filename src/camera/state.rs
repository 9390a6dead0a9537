use std::f32::consts::{FRAC_PI_2, TAU};

use nalgebra::UnitQuaternion;
use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};

use super::{POLAR_CLAMP_MARGIN, ROTATION_DIVISOR, SCALE_TO_Z_TRANSLATION, XY_TRANSLATION_FACTOR};

/// Gesture-to-motion coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sensitivity {
    /// Orbit radius change per unit of pinch scale
    pub scale_to_z_translation: f32,
    /// Drag distance that maps to one radian of orbit rotation
    pub rotation_divisor: f32,
    /// Model displacement per unit of two-finger drag
    pub xy_translation_factor: f32,
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self {
            scale_to_z_translation: SCALE_TO_Z_TRANSLATION,
            rotation_divisor: ROTATION_DIVISOR,
            xy_translation_factor: XY_TRANSLATION_FACTOR,
        }
    }
}

/// Six degrees of freedom of the model: x-y-z offsets and an orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPose {
    pub translation: glm::Vec3,
    pub quaternion: glm::Qua<f32>,
}

impl ModelPose {
    pub fn new(x: f32, y: f32, z: f32, pitch: f32, yaw: f32, roll: f32) -> Self {
        Self {
            translation: glm::vec3(x, y, z),
            quaternion: quat_from_euler(pitch, yaw, roll),
        }
    }

    /// Pose from `[x, y, z, pitch, yaw, roll]`
    pub fn from_vector(pose: &[f32; 6]) -> Self {
        let [x, y, z, pitch, yaw, roll] = *pose;
        Self::new(x, y, z, pitch, yaw, roll)
    }

    pub fn translation_matrix(&self) -> glm::Mat4 {
        glm::translation(&self.translation)
    }

    pub fn rotation_matrix(&self) -> glm::Mat4 {
        glm::quat_to_mat4(&self.quaternion)
    }
}

impl Default for ModelPose {
    fn default() -> Self {
        Self {
            translation: glm::vec3(0.0, 0.0, 0.0),
            quaternion: glm::quat_identity(),
        }
    }
}

/// Quaternion from Euler angles: pitch about X, yaw about Y, roll about Z.
///
/// Same composition as glm's `quat(vec3(pitch, yaw, roll))`, i.e.
/// `qz(roll) * qy(yaw) * qx(pitch)`.
pub fn quat_from_euler(pitch: f32, yaw: f32, roll: f32) -> glm::Qua<f32> {
    // nalgebra names the X, Y, Z angles roll, pitch, yaw
    UnitQuaternion::from_euler_angles(pitch, yaw, roll).into_inner()
}

/// Spherical coordinates of the free-look eye
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPosition {
    /// Azimuth, kept in `[0, 2π)`
    pub theta: f32,
    /// Polar angle, kept in `[0, π/2)`
    pub phi: f32,
    pub radius: f32,
}

impl OrbitPosition {
    pub fn new(theta: f32, phi: f32, radius: f32) -> Self {
        Self { theta, phi, radius }
    }

    /// Apply angle increments, wrapping the azimuth and clamping the polar angle
    pub fn rotate_by(&mut self, d_theta: f32, d_phi: f32) {
        self.theta = wrap_azimuth(self.theta + d_theta);
        self.phi = clamp_polar(self.phi + d_phi);
    }

    pub fn zoom_by(&mut self, d_radius: f32) {
        self.radius += d_radius;
    }

    /// Cartesian eye position for this orbit
    pub fn eye(&self) -> glm::Vec3 {
        glm::vec3(
            self.radius * self.theta.cos(),
            self.radius * self.phi.sin(),
            self.radius * self.theta.sin() * self.phi.cos(),
        )
    }

    pub fn as_vec3(&self) -> glm::Vec3 {
        glm::vec3(self.theta, self.phi, self.radius)
    }
}

impl Default for OrbitPosition {
    fn default() -> Self {
        Self::new(FRAC_PI_2, 0.0, 100.0)
    }
}

pub(crate) fn wrap_azimuth(theta: f32) -> f32 {
    let wrapped = theta.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

pub(crate) fn clamp_polar(phi: f32) -> f32 {
    if phi >= FRAC_PI_2 {
        FRAC_PI_2 - POLAR_CLAMP_MARGIN
    } else if phi < 0.0 {
        0.0
    } else {
        phi
    }
}
