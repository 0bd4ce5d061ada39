use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod i18n;
mod preferences;
mod lead {
    pub mod analytics;
    pub mod catalog;
    pub mod flow;
    pub mod form;
    pub mod submission;
    pub mod wizard;
}
mod components {
    pub mod carousel;
    pub mod floating_contact;
    pub mod footer;
    pub mod form_fields;
    pub mod header;
    pub mod hero_lead_form;
    pub mod lead_form;
    pub mod projects;
    pub mod reviews;
}
mod pages {
    pub mod apply;
    pub mod landing;
    pub mod not_found;
    pub mod termsprivacy;
}

use pages::{
    apply::Apply,
    landing::Landing,
    not_found::NotFound,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
};
use preferences::{apply_to_document, Preferences};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[at("/apply")]
    Apply,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::Apply => {
            info!("Rendering Apply page");
            html! { <Apply /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let preferences = use_reducer(Preferences::from_browser);

    {
        let deps = (preferences.language(), preferences.theme());
        use_effect_with_deps(
            |(language, theme)| {
                apply_to_document(*language, *theme);
                || ()
            },
            deps,
        );
    }

    html! {
        <ContextProvider<UseReducerHandle<Preferences>> context={preferences}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<UseReducerHandle<Preferences>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
