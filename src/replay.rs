use std::path::Path;

use serde::Serialize;

use crate::error::ViewerError;
use crate::gesture::Gesture;
use crate::session::{FrameMatrices, ViewerSession};

/// Serializable snapshot of one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub gesture: Option<&'static str>,
    pub mvp: [[f32; 4]; 4],
    pub projection_view: [[f32; 4]; 4],
    pub orbit_view_projection: [[f32; 4]; 4],
    pub orbit_eye: [f32; 3],
    pub translation: [f32; 3],
    /// `[theta, phi, radius]`
    pub orbit: [f32; 3],
}

impl FrameReport {
    pub fn capture(session: &ViewerSession, gesture: Option<&Gesture>) -> Self {
        let frame: FrameMatrices = session.frame();
        let camera = session.camera();
        Self {
            gesture: gesture.map(Gesture::name),
            mvp: frame.mvp.into(),
            projection_view: frame.projection_view.into(),
            orbit_view_projection: frame.orbit_view_projection.into(),
            orbit_eye: frame.orbit_eye.into(),
            translation: camera.translation().into(),
            orbit: camera.orbit_position().into(),
        }
    }
}

pub fn parse_script(text: &str) -> Result<Vec<Gesture>, ViewerError> {
    Ok(serde_json::from_str(text)?)
}

/// Load a JSON array of gestures
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<Gesture>, ViewerError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        ViewerError::new("script-read")
            .with_arg("path", path.display())
            .push_std(e)
    })?;
    let gestures = parse_script(&text).map_err(|e| {
        ViewerError::new("script-parse")
            .with_arg("path", path.display())
            .push_viewer(e)
    })?;
    log::info!("Loaded {} gestures from {}", gestures.len(), path.display());
    Ok(gestures)
}

/// Apply every gesture in order, capturing the frame after each one
pub fn replay(session: &mut ViewerSession, gestures: &[Gesture]) -> Vec<FrameReport> {
    gestures
        .iter()
        .map(|gesture| {
            session.apply(gesture);
            FrameReport::capture(session, Some(gesture))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ViewerSettings;

    const SCRIPT: &str = r#"[
        {"kind": "resize", "width": 800, "height": 600},
        {"kind": "move", "dx": 2.0, "dy": 1.0},
        {"kind": "scale", "factor": 1.25},
        {"kind": "scroll", "dx": 0.0, "dy": -100.0},
        {"kind": "double_tap"}
    ]"#;

    #[test]
    fn test_parse_script() {
        let gestures = parse_script(SCRIPT).unwrap();
        assert_eq!(gestures.len(), 5);
        assert_eq!(
            gestures[0],
            Gesture::Resize {
                width: 800,
                height: 600
            }
        );
        assert_eq!(gestures[4], Gesture::DoubleTap);
    }

    #[test]
    fn test_parse_script_reports_json_error() {
        let err = parse_script(r#"[{"kind": "scale"}]"#).unwrap_err();
        assert_eq!(err.key, "json-error");
    }

    #[test]
    fn test_replay_reports_each_step() {
        let gestures = parse_script(SCRIPT).unwrap();
        let mut session = ViewerSession::new(&ViewerSettings::default());
        let reports = replay(&mut session, &gestures);

        assert_eq!(reports.len(), 5);
        assert_eq!(reports[1].gesture, Some("move"));
        assert_eq!(reports[1].translation, [20.0, 10.0, 0.0]);
        assert!((reports[2].orbit[2] - 95.0).abs() < 1e-5);
        assert!((reports[3].orbit[1] - 0.1).abs() < 1e-6);
        // double tap resets the pose and leaves the orbit alone
        assert_eq!(reports[4].translation, [0.0, 0.0, 0.0]);
        assert_eq!(reports[4].orbit, reports[3].orbit);
    }

    #[test]
    fn test_load_missing_script() {
        let err = load_script("/nonexistent/gestures.json").unwrap_err();
        assert_eq!(err.key, "script-read");
        assert_eq!(
            err.args.get("path").map(String::as_str),
            Some("/nonexistent/gestures.json")
        );
    }
}
