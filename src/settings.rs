use crate::CONFY_APP_NAME;
use crate::camera::Sensitivity;
use crate::error::ViewerError;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub fov_degrees: f32,
    pub eye_z: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    /// `[x, y, z, pitch, yaw, roll]` restored on double tap
    pub default_pose: [f32; 6],
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub sensitivity: Sensitivity,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            eye_z: 0.0,
            near_plane: 1.0,
            far_plane: 2000.0,
            default_pose: [0.0; 6],
            viewport_width: 1280,
            viewport_height: 720,
            sensitivity: Sensitivity::default(),
        }
    }
}

impl ViewerSettings {
    pub fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            log::warn!("Falling back to default camera settings: {}", e);
            Self::default()
        })
    }

    pub fn try_load() -> Result<Self, ViewerError> {
        Ok(confy::load(CONFY_APP_NAME, "camera")?)
    }

    pub fn save(&self) {
        if let Err(e) = confy::store(CONFY_APP_NAME, "camera", self) {
            log::warn!("Failed to save camera settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{ROTATION_DIVISOR, SCALE_TO_Z_TRANSLATION, XY_TRANSLATION_FACTOR};

    #[test]
    fn test_defaults_match_reference_camera() {
        let settings = ViewerSettings::default();
        assert_eq!(settings.fov_degrees, 45.0);
        assert_eq!(settings.eye_z, 0.0);
        assert_eq!(settings.near_plane, 1.0);
        assert_eq!(settings.far_plane, 2000.0);
        assert_eq!(
            settings.sensitivity.scale_to_z_translation,
            SCALE_TO_Z_TRANSLATION
        );
        assert_eq!(settings.sensitivity.rotation_divisor, ROTATION_DIVISOR);
        assert_eq!(
            settings.sensitivity.xy_translation_factor,
            XY_TRANSLATION_FACTOR
        );
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let json = r#"{"fov_degrees": 60.0, "sensitivity": {"rotation_divisor": 500.0}}"#;
        let settings: ViewerSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.fov_degrees, 60.0);
        assert_eq!(settings.far_plane, 2000.0);
        assert_eq!(settings.sensitivity.rotation_divisor, 500.0);
        assert_eq!(
            settings.sensitivity.xy_translation_factor,
            XY_TRANSLATION_FACTOR
        );
    }
}
