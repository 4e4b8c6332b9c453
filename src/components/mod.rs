pub mod app;
pub mod controls_panel;
pub mod game_view;
pub mod piece_view;
pub mod ruler;
pub mod solved_overlay;
pub mod stats_panel;

pub use app::App;
