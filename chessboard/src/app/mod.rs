pub mod input_buffer;
pub mod state;

pub use input_buffer::InputBuffer;
pub use state::{AppState, UiState};
