use yew::prelude::*;

use crate::components::floating_contact::{scroll_to_lead_form, FloatingContactButton};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero_lead_form::HeroLeadForm;
use crate::components::lead_form::LeadFormView;
use crate::components::projects::ProjectsSection;
use crate::components::reviews::ReviewsSection;
use crate::config;
use crate::i18n::use_translator;

const BENEFITS: [(&str, &str); 6] = [
    ("speed", "⚡"),
    ("price", "€"),
    ("quality", "✦"),
    ("team", "👥"),
    ("communication", "💬"),
    ("iterations", "↻"),
];

const PROCESS_STEPS: [&str; 4] = ["step1", "step2", "step3", "step4"];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="landing">
            <Header />
            <HeroSection />
            <BenefitsSection />
            <ProcessSection />
            <MvpInfoSection />
            <ProjectsSection />
            <ReviewsSection />
            <FormSection />
            <Footer />
            <FloatingContactButton />
        </main>
    }
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    let tr = use_translator();

    html! {
        <section class="hero">
            <div class="hero-content">
                <div class="hero-copy">
                    <span class="hero-badge">{tr.t("hero.badge")}</span>
                    <h1>
                        {tr.t("hero.title")}{" "}
                        <em>{tr.t("hero.titleMvp")}</em>{" "}
                        {tr.t("hero.titleReady")}{" "}
                        <br />
                        {tr.t("hero.titleIn")}{" "}
                        <em>{tr.t("hero.titleWeek")}</em>
                    </h1>
                    <p class="hero-description">{tr.t("hero.description")}</p>
                    <ul class="hero-features">
                        <li>{tr.t("hero.feature1")}</li>
                        <li>{tr.t("hero.feature2")}</li>
                        <li>{tr.t("hero.feature3")}</li>
                    </ul>
                </div>
                <HeroLeadForm />
            </div>
        </section>
    }
}

#[function_component(BenefitsSection)]
fn benefits_section() -> Html {
    let tr = use_translator();

    html! {
        <section class="benefits-section">
            <div class="section-header">
                <h2>{tr.t("benefits.title")}</h2>
                <p>{tr.t("benefits.description")}</p>
            </div>
            <div class="benefits-grid">
                { for BENEFITS.iter().map(|(key, icon)| html! {
                    <div class="benefit-card">
                        <span class="benefit-icon">{*icon}</span>
                        <h3>{tr.t(&format!("benefits.{}.title", key))}</h3>
                        <p>{tr.t(&format!("benefits.{}.description", key))}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(ProcessSection)]
fn process_section() -> Html {
    let tr = use_translator();

    html! {
        <section class="process-section">
            <div class="section-header">
                <h2>{tr.t("process.title")}</h2>
                <p>{tr.t("process.description")}</p>
            </div>
            <ol class="process-steps">
                { for PROCESS_STEPS.iter().enumerate().map(|(i, key)| html! {
                    <li class="process-step">
                        <span class="step-number">{i + 1}</span>
                        <span class="step-duration">{tr.t(&format!("process.{}.duration", key))}</span>
                        <h3>{tr.t(&format!("process.{}.title", key))}</h3>
                        <p>{tr.t(&format!("process.{}.description", key))}</p>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(MvpInfoSection)]
fn mvp_info_section() -> Html {
    let tr = use_translator();

    html! {
        <section class="mvp-info-section">
            <div class="section-header">
                <span class="section-eyebrow">{tr.t("mvpInfo.subtitle")}</span>
                <h2>{tr.t("mvpInfo.title")}</h2>
                <p>{tr.t("mvpInfo.description")}</p>
            </div>
            <div class="mvp-info-grid">
                <div class="info-card included">
                    <h3>{tr.t("mvpInfo.whatIs")}</h3>
                    <ul>
                        { for tr.t_array("mvpInfo.benefits").into_iter().map(|item| html! { <li>{item}</li> }) }
                    </ul>
                </div>
                <div class="info-card">
                    <h3>{tr.t("mvpInfo.notIncluded")}</h3>
                    <p>{tr.t("mvpInfo.notIncludedDesc")}</p>
                </div>
                <div class="info-card">
                    <h3>{tr.t("mvpInfo.fullProduct")}</h3>
                    <p>{tr.t("mvpInfo.fullProductDesc")}</p>
                </div>
            </div>
            <button class="link-button" onclick={Callback::from(|_: MouseEvent| scroll_to_lead_form())}>
                {tr.t("mvpInfo.cta")}
            </button>
        </section>
    }
}

#[function_component(FormSection)]
fn form_section() -> Html {
    let tr = use_translator();

    html! {
        <section class="form-section" id={config::LEAD_FORM_ANCHOR}>
            <div class="section-header">
                <h2>
                    {tr.t("form.title")}{" "}
                    <span class="highlight">{tr.t("form.titleHighlight")}</span>
                </h2>
                <p>{tr.t("form.description")}</p>
            </div>
            <div class="form-card">
                <LeadFormView />
            </div>
        </section>
    }
}
