use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use winit::event::{ElementState, MouseButton, MouseScrollDelta, Touch, TouchPhase, WindowEvent};

use crate::gesture::Gesture;

const DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(300);
const WHEEL_LINE_TO_SCALE: f32 = 0.1;
const WHEEL_PIXEL_TO_SCALE: f32 = 0.001;

/// Turns window events into camera gestures.
///
/// One pointer dragging rotates, two touches (or middle / shift+right mouse)
/// translate, pinch and wheel scale, a double tap resets.
pub struct CameraController {
    left_mouse_pressed: bool,
    middle_mouse_pressed: bool,
    right_mouse_pressed: bool,
    shift_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
    last_click: Option<Instant>,
    touches: BTreeMap<u64, (f64, f64)>,
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            left_mouse_pressed: false,
            middle_mouse_pressed: false,
            right_mouse_pressed: false,
            shift_pressed: false,
            last_mouse_pos: None,
            last_click: None,
            touches: BTreeMap::new(),
        }
    }

    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<Gesture> {
        match event {
            WindowEvent::Resized(size) => Some(Gesture::Resize {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::ModifiersChanged(modifiers) => {
                self.on_modifiers(modifiers.state().shift_key());
                None
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.on_mouse_button(*button, *state == ElementState::Pressed)
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.on_mouse_move((position.x, position.y))
            }
            WindowEvent::MouseWheel { delta, .. } => Some(self.on_wheel(*delta)),
            WindowEvent::Touch(touch) => self.on_touch(touch),
            WindowEvent::PinchGesture { delta, .. } => Some(self.on_pinch(*delta)),
            WindowEvent::DoubleTapGesture { .. } => Some(Gesture::DoubleTap),
            _ => None,
        }
    }

    /// Handle mouse button press/release; two quick left clicks reset the model
    pub fn on_mouse_button(&mut self, button: MouseButton, pressed: bool) -> Option<Gesture> {
        match button {
            MouseButton::Left => {
                self.left_mouse_pressed = pressed;
                if !pressed {
                    self.last_mouse_pos = None;
                    return None;
                }
                if self.register_click(Instant::now()) {
                    return Some(Gesture::DoubleTap);
                }
            }
            MouseButton::Middle => self.middle_mouse_pressed = pressed,
            MouseButton::Right => self.right_mouse_pressed = pressed,
            _ => {}
        }
        if !pressed {
            self.last_mouse_pos = None;
        }
        None
    }

    pub fn on_modifiers(&mut self, shift: bool) {
        self.shift_pressed = shift;
    }

    pub fn on_mouse_move(&mut self, position: (f64, f64)) -> Option<Gesture> {
        let should_pan =
            self.middle_mouse_pressed || (self.shift_pressed && self.right_mouse_pressed);
        let should_rotate = self.left_mouse_pressed;

        if !should_pan && !should_rotate {
            self.last_mouse_pos = None;
            return None;
        }

        let last = self.last_mouse_pos.replace(position)?;
        if should_pan {
            Some(move_gesture(last, position))
        } else {
            Some(scroll_gesture(last, position))
        }
    }

    pub fn on_wheel(&mut self, delta: MouseScrollDelta) -> Gesture {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => y * WHEEL_LINE_TO_SCALE,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * WHEEL_PIXEL_TO_SCALE,
        };
        Gesture::Scale {
            factor: 1.0 + amount,
        }
    }

    pub fn on_pinch(&mut self, delta: f64) -> Gesture {
        Gesture::Scale {
            factor: 1.0 + delta as f32,
        }
    }

    pub fn on_touch(&mut self, touch: &Touch) -> Option<Gesture> {
        let position = (touch.location.x, touch.location.y);
        match touch.phase {
            TouchPhase::Started => {
                self.touches.insert(touch.id, position);
                None
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.remove(&touch.id);
                None
            }
            TouchPhase::Moved => self.on_touch_moved(touch.id, position),
        }
    }

    /// Track a moving finger; one finger scrolls, two fingers move the centroid
    pub fn on_touch_moved(&mut self, id: u64, position: (f64, f64)) -> Option<Gesture> {
        let before = self.centroid();
        let slot = self.touches.get_mut(&id)?;
        let previous = std::mem::replace(slot, position);
        match self.touches.len() {
            1 => Some(scroll_gesture(previous, position)),
            2 => Some(move_gesture(before?, self.centroid()?)),
            _ => None,
        }
    }

    fn centroid(&self) -> Option<(f64, f64)> {
        if self.touches.is_empty() {
            return None;
        }
        let n = self.touches.len() as f64;
        let (sx, sy) = self
            .touches
            .values()
            .fold((0.0, 0.0), |(ax, ay), (x, y)| (ax + x, ay + y));
        Some((sx / n, sy / n))
    }

    pub(crate) fn register_click(&mut self, at: Instant) -> bool {
        match self.last_click {
            Some(last) if at.duration_since(last) <= DOUBLE_CLICK_INTERVAL => {
                self.last_click = None;
                true
            }
            _ => {
                self.last_click = Some(at);
                false
            }
        }
    }

    /// Forget drag and touch state, e.g. when the surface loses focus
    pub fn reset(&mut self) {
        self.left_mouse_pressed = false;
        self.middle_mouse_pressed = false;
        self.right_mouse_pressed = false;
        self.last_mouse_pos = None;
        self.last_click = None;
        self.touches.clear();
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

// scroll distances are "last minus current", as Android's scroll detector reports them
fn scroll_gesture(last: (f64, f64), current: (f64, f64)) -> Gesture {
    Gesture::Scroll {
        dx: (last.0 - current.0) as f32,
        dy: (last.1 - current.1) as f32,
    }
}

// model follows the fingers; screen y grows downward
fn move_gesture(last: (f64, f64), current: (f64, f64)) -> Gesture {
    Gesture::Move {
        dx: (current.0 - last.0) as f32,
        dy: (last.1 - current.1) as f32,
    }
}
