use yew::prelude::*;

use crate::components::carousel::{use_carousel, CarouselAction, CarouselDots};
use crate::components::floating_contact::scroll_to_lead_form;
use crate::i18n::{use_translator, Localized};

pub struct Project {
    pub title: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub description: Localized,
    pub technologies: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "FitTrack App",
        image: "/images/projects/fitness.png",
        category: "Mobile App",
        description: Localized {
            es: "Aplicación móvil de seguimiento fitness con planes personalizados, tracking de ejercicios y métricas de progreso en tiempo real.",
            en: "Mobile fitness tracking app with personalized plans, exercise tracking and real-time progress metrics.",
        },
        technologies: &["React Native", "Node.js", "MongoDB", "Firebase"],
    },
    Project {
        title: "FiTec",
        image: "/images/projects/fint-tech-project.png",
        category: "Fintech",
        description: Localized {
            es: "Plataforma fintech de gestión financiera con análisis de gastos en tiempo real, integración bancaria y herramientas de ahorro automatizado.",
            en: "Fintech financial management platform with real-time expense analysis, bank integration and automated savings tools.",
        },
        technologies: &["Next.js", "Stripe", "PostgreSQL", "AWS"],
    },
    Project {
        title: "NFT Market",
        image: "/images/projects/nfts.png",
        category: "Web3",
        description: Localized {
            es: "Marketplace descentralizado de NFTs con soporte para múltiples blockchains, subastas en tiempo real y sistema de royalties para creadores.",
            en: "Decentralized NFT marketplace with multi-chain support, real-time auctions and creator royalty system.",
        },
        technologies: &["React", "Solidity", "Web3.js", "IPFS"],
    },
];

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    let tr = use_translator();
    let carousel = use_carousel(PROJECTS.len(), None);
    let Some((prev, current, next)) = carousel.visible() else {
        return html! {};
    };

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };
    let on_select = {
        let carousel = carousel.clone();
        Callback::from(move |i: usize| carousel.dispatch(CarouselAction::GoTo(i)))
    };

    let card = |index: usize, position: &'static str| {
        let project = &PROJECTS[index];
        html! {
            <article class={classes!("project-card", position)}>
                <div class="project-image">
                    <img src={project.image} alt={project.title} loading="lazy" />
                    <span class="project-category">{project.category}</span>
                </div>
                <div class="project-body">
                    <h3>{project.title}</h3>
                    <p>{project.description.get(tr.language())}</p>
                    <div class="tech-list">
                        { for project.technologies.iter().map(|tech| html! { <span class="tech">{*tech}</span> }) }
                    </div>
                </div>
            </article>
        }
    };

    html! {
        <section class="projects-section">
            <div class="section-header">
                <h2>{tr.t("projects.title")}</h2>
                <p>{tr.t("projects.subtitle")}</p>
            </div>
            <div class="carousel">
                <button class="carousel-arrow prev" aria-label={tr.t("projects.previous")} onclick={on_prev}>
                    {"‹"}
                </button>
                <div class="carousel-track">
                    { card(prev, "side") }
                    { card(current, "center") }
                    { card(next, "side") }
                </div>
                <button class="carousel-arrow next" aria-label={tr.t("projects.next")} onclick={on_next}>
                    {"›"}
                </button>
            </div>
            <CarouselDots
                len={carousel.len()}
                current={carousel.current()}
                label={tr.t("projects.goTo")}
                {on_select}
            />
            <div class="projects-cta">
                <p>{tr.t("projects.cta")}</p>
                <button class="primary-button" onclick={Callback::from(|_: MouseEvent| scroll_to_lead_form())}>
                    {tr.t("projects.ctaButton")}
                </button>
            </div>
        </section>
    }
}
