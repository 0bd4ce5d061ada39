use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::lead_form::LeadFormView;
use crate::config;
use crate::i18n::use_translator;
use crate::lead::submission::{LeadDestination, LeadSource};

/// Standalone sign-up page whose form goes to the enrollment API instead of
/// the webhook.
#[function_component(Apply)]
pub fn apply() -> Html {
    let tr = use_translator();

    html! {
        <main class="apply-page">
            <Header />
            <section class="form-section" id={config::LEAD_FORM_ANCHOR}>
                <div class="section-header">
                    <h1>{tr.t("apply.title")}</h1>
                    <p>{tr.t("apply.description")}</p>
                </div>
                <div class="form-card">
                    <LeadFormView destination={LeadDestination::Enrollment} source={LeadSource::ApplyPage} />
                </div>
            </section>
            <Footer />
        </main>
    }
}
