use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod hooks;
mod controllers {
    pub mod carousel;
    pub mod contact_form;
    pub mod scroll_header;
}
mod components {
    pub mod content_wrapper;
    pub mod header;
}
mod sections {
    pub mod about;
    pub mod awards;
    pub mod contact;
    pub mod hero;
    pub mod projects;
    pub mod why_invest;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::header::Header;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
