use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::Header;
use crate::i18n::use_translator;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let tr = use_translator();

    html! {
        <>
            <Header />
            <div class="not-found">
                <h1>{"404"}</h1>
                <h2>{tr.t("common.notFoundTitle")}</h2>
                <p>{tr.t("common.notFoundText")}</p>
                <Link<Route> to={Route::Home} classes="primary-button">{tr.t("common.backToHome")}</Link<Route>>
            </div>
        </>
    }
}
