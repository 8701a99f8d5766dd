use yew::prelude::*;
use log::info;

mod config;
mod dom;
mod booking {
    pub mod form;
    pub mod modal;
    pub mod validation;
}
mod components {
    pub mod booking_form;
    pub mod faq;
    pub mod nav;
}
mod pages {
    pub mod home;
}
mod scroll {
    pub mod anchor;
    pub mod reveal;
    pub mod spy;
}

use pages::home::Home;


#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting HomeFix Pro frontend");
    yew::Renderer::<App>::new().render();
}
