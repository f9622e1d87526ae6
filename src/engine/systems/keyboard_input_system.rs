use std::collections::HashSet;

use winit::event::{ ElementState, KeyEvent };
use winit::keyboard::{ KeyCode, PhysicalKey };

/// Per-axis camera input, each component in `-1.0..=1.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraControls {
    pub forward: f32,
    pub strafe: f32,
    pub vertical: f32,
    pub yaw: f32,
    pub pitch: f32,
}

/// Table movement input on the floor plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TableControls {
    pub x: f32,
    pub z: f32,
}

/// Tracks which keys are currently held. No edge triggering: consumers only
/// ever ask "is it down right now".
#[derive(Debug, Default)]
pub struct KeyboardInputSystem {
    pressed_keys: HashSet<KeyCode>,
}

impl KeyboardInputSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn receive_key_event(&mut self, key_event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = key_event.physical_key {
            match key_event.state {
                ElementState::Pressed => self.press(key_code),
                ElementState::Released => self.release(key_code),
            }
        }
    }

    pub fn press(&mut self, key_code: KeyCode) {
        if self.pressed_keys.insert(key_code) {
            log::trace!("Key pressed: {:?}", key_code);
        }
    }

    pub fn release(&mut self, key_code: KeyCode) {
        if self.pressed_keys.remove(&key_code) {
            log::trace!("Key released: {:?}", key_code);
        }
    }

    /// Drops every held key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    pub fn is_pressed(&self, key_code: KeyCode) -> bool {
        self.pressed_keys.contains(&key_code)
    }

    // +1 / -1 for one key of the pair, 0 for neither or both.
    fn axis(&self, positive: KeyCode, negative: KeyCode) -> f32 {
        match (self.is_pressed(positive), self.is_pressed(negative)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// W/S forward, D/A strafe, Q/E up/down, Right/Left yaw, Up/Down pitch.
    pub fn camera_controls(&self) -> CameraControls {
        CameraControls {
            forward: self.axis(KeyCode::KeyW, KeyCode::KeyS),
            strafe: self.axis(KeyCode::KeyD, KeyCode::KeyA),
            vertical: self.axis(KeyCode::KeyQ, KeyCode::KeyE),
            yaw: self.axis(KeyCode::ArrowRight, KeyCode::ArrowLeft),
            pitch: self.axis(KeyCode::ArrowUp, KeyCode::ArrowDown),
        }
    }

    /// L/J along X, K/I along Z.
    pub fn table_controls(&self) -> TableControls {
        TableControls {
            x: self.axis(KeyCode::KeyL, KeyCode::KeyJ),
            z: self.axis(KeyCode::KeyK, KeyCode::KeyI),
        }
    }
}
