use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::config;
use crate::i18n::use_translator;
use crate::preferences::{Language, PreferenceChange, PreferencesContext, Theme};
use crate::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let tr = use_translator();
    let prefs = use_context::<PreferencesContext>();
    let (_, scroll_y) = use_window_scroll();

    let (language, theme) = prefs
        .as_ref()
        .map(|p| (p.language(), p.theme()))
        .unwrap_or_default();

    let toggle_language = {
        let prefs = prefs.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(prefs) = &prefs {
                prefs.dispatch(PreferenceChange::ToggleLanguage);
            }
        })
    };
    let toggle_theme = Callback::from(move |_: MouseEvent| {
        if let Some(prefs) = &prefs {
            prefs.dispatch(PreferenceChange::ToggleTheme);
        }
    });

    html! {
        <header class={classes!("site-header", (scroll_y > 10.0).then(|| "scrolled"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="site-logo">
                    <span class="logo-mark">
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <path stroke-linecap="round" stroke-linejoin="round" d="M13 10V3L4 14h7v7l9-11h-7z" />
                        </svg>
                    </span>
                    <span class="logo-text">
                        {config::SITE_NAME}
                        <span class="logo-company">{format!(" by {}", config::SITE_COMPANY)}</span>
                    </span>
                </Link<Route>>

                <div class="header-actions">
                    <button
                        class="language-toggle"
                        title={tr.t("header.switchLanguage")}
                        onclick={toggle_language}
                    >
                        <span class={classes!((language == Language::Es).then(|| "active"))}>{"ES"}</span>
                        <span class="separator">{"/"}</span>
                        <span class={classes!((language == Language::En).then(|| "active"))}>{"EN"}</span>
                    </button>
                    <button
                        class="theme-toggle"
                        title={tr.t("header.switchTheme")}
                        onclick={toggle_theme}
                    >
                        { if theme == Theme::Dark { "☀" } else { "☾" } }
                    </button>
                </div>
            </div>
        </header>
    }
}
