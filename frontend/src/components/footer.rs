use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::i18n::use_translator;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let tr = use_translator();
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <p class="footer-name">
                        {config::SITE_NAME}
                        <span class="logo-company">{format!(" by {}", config::SITE_COMPANY)}</span>
                    </p>
                    <p class="footer-tagline">{tr.t("footer.tagline")}</p>
                </div>
                <div class="legal-links">
                    <Link<Route> to={Route::Privacy}>{tr.t("footer.privacy")}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{tr.t("footer.terms")}</Link<Route>>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. {}", year, config::SITE_NAME, tr.t("footer.rights"))}</p>
            </div>
        </footer>
    }
}
