use log::info;
use yew::prelude::*;

mod config;
mod content;
mod navigation;
mod styles;
mod theme;
#[cfg(test)]
mod test_support;
mod components {
    pub mod hover;
    pub mod icon;
    pub mod team_member;
    pub mod tile;
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

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
