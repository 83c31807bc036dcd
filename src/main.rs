mod components;
mod config;
mod error;
mod logging;
mod map;
mod model;
mod state;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
