use serde::{Deserialize, Serialize};

/// Input reported by the gesture layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gesture {
    /// One-finger drag, rotates the orbit
    Scroll { dx: f32, dy: f32 },
    /// Pinch, 1.0 means no change
    Scale { factor: f32 },
    /// Two-finger drag, displaces the model
    Move { dx: f32, dy: f32 },
    /// Resets the model to its default pose
    DoubleTap,
    /// Render surface size changed
    Resize { width: u32, height: u32 },
}

impl Gesture {
    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Scroll { .. } => "scroll",
            Gesture::Scale { .. } => "scale",
            Gesture::Move { .. } => "move",
            Gesture::DoubleTap => "double_tap",
            Gesture::Resize { .. } => "resize",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_json_shape() {
        let json = serde_json::to_string(&Gesture::Move { dx: 1.5, dy: -2.0 }).unwrap();
        assert_eq!(json, r#"{"kind":"move","dx":1.5,"dy":-2.0}"#);

        let tap: Gesture = serde_json::from_str(r#"{"kind":"double_tap"}"#).unwrap();
        assert_eq!(tap, Gesture::DoubleTap);
        assert_eq!(tap.name(), "double_tap");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(serde_json::from_str::<Gesture>(r#"{"kind":"swipe"}"#).is_err());
    }
}
