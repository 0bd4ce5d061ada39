use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config;
use crate::i18n::use_translator;

/// Smooth-scrolls to the single-page lead form. Does nothing when the form
/// is not on the current page.
pub fn scroll_to_lead_form() {
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(config::LEAD_FORM_ANCHOR))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(FloatingContactButton)]
pub fn floating_contact_button() -> Html {
    let tr = use_translator();
    let onclick = Callback::from(|_: MouseEvent| scroll_to_lead_form());

    html! {
        <button class="floating-contact" aria-label={tr.t("contact.floating")} {onclick}>
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    d="M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"
                />
            </svg>
        </button>
    }
}
