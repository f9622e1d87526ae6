pub mod frame_clock;
pub mod keyboard_input_system;
pub mod loop_state;

pub use frame_clock::FrameClock;
pub use keyboard_input_system::{ CameraControls, KeyboardInputSystem, TableControls };
pub use loop_state::LoopState;
