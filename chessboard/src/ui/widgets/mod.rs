pub mod board;
pub mod controls_panel;
pub mod game_info_panel;

pub use board::{BoardGeometry, BoardWidget};
pub use controls_panel::ControlsPanel;
pub use game_info_panel::GameInfoPanel;
