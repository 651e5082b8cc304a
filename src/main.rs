use yew::prelude::*;
use log::{info, Level};

mod alerts;
mod carousel;
mod config;
mod schedule;
mod course {
    pub mod binding;
    pub mod loader;
    pub mod model;
    pub mod render;
}
mod components {
    pub mod contact;
    pub mod header;
    pub mod widgets;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
