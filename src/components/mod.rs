pub mod app;
pub mod city_info;
pub mod feedback_line;
pub mod game_view;
pub mod guess_input;
pub mod map_view;
pub mod round_controls;
pub mod startup_error;

pub use app::App;
