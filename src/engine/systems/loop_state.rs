use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Lifecycle of the render loop. `Closing` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Running,
    Closing,
}

impl LoopState {
    pub fn on_close_requested(&mut self) {
        if *self == LoopState::Running {
            log::info!("Closing");
        }
        *self = LoopState::Closing;
    }

    /// Escape press closes; every other key leaves the state alone.
    pub fn on_key(&mut self, key_code: KeyCode, state: ElementState) {
        if key_code == KeyCode::Escape && state == ElementState::Pressed {
            self.on_close_requested();
        }
    }

    pub fn should_render(&self) -> bool {
        *self == LoopState::Running
    }

    pub fn is_closing(&self) -> bool {
        *self == LoopState::Closing
    }
}
