use yew::prelude::*;

use crate::components::carousel::{use_carousel, CarouselAction, CarouselDots};
use crate::config;
use crate::i18n::{use_translator, Localized};

pub struct Review {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub initials: &'static str,
    pub rating: u8,
    pub text: Localized,
}

pub const REVIEWS: &[Review] = &[
    Review {
        name: "Carlos Mendoza",
        role: "CEO",
        company: "FitTrack App",
        initials: "CM",
        rating: 5,
        text: Localized {
            es: "Increíble experiencia. Teníamos una idea para una app de fitness y en 7 días teníamos un MVP funcionando que pudimos mostrar a inversores. Conseguimos nuestra primera ronda de financiación gracias a eso.",
            en: "Incredible experience. We had an idea for a fitness app and in 7 days we had a working MVP that we could show to investors. We got our first funding round thanks to that.",
        },
    },
    Review {
        name: "Laura García",
        role: "Founder",
        company: "EcoMarket",
        initials: "LG",
        rating: 5,
        text: Localized {
            es: "Necesitábamos validar nuestra idea de marketplace sostenible rápidamente. El equipo de MVP Sprint entendió perfectamente lo que buscábamos y entregaron antes de tiempo. 100% recomendados.",
            en: "We needed to validate our sustainable marketplace idea quickly. The MVP Sprint team perfectly understood what we were looking for and delivered ahead of schedule. 100% recommended.",
        },
    },
    Review {
        name: "Miguel Ángel Torres",
        role: "CTO",
        company: "HealthConnect",
        initials: "MT",
        rating: 5,
        text: Localized {
            es: "Como CTO, soy muy exigente con la calidad del código. Me sorprendió gratamente ver que el MVP tenía una arquitectura sólida y escalable. Ya estamos trabajando con ellos en el producto completo.",
            en: "As a CTO, I'm very demanding about code quality. I was pleasantly surprised to see that the MVP had a solid and scalable architecture. We're already working with them on the full product.",
        },
    },
    Review {
        name: "Ana Belén Ruiz",
        role: "Product Manager",
        company: "TravelBuddy",
        initials: "AR",
        rating: 5,
        text: Localized {
            es: "La comunicación fue excelente durante todo el proceso. Cada día recibíamos actualizaciones y podíamos dar feedback. El resultado superó nuestras expectativas.",
            en: "Communication was excellent throughout the process. Every day we received updates and could give feedback. The result exceeded our expectations.",
        },
    },
    Review {
        name: "David Fernández",
        role: "Founder & CEO",
        company: "QuickPay Solutions",
        initials: "DF",
        rating: 5,
        text: Localized {
            es: "Teníamos dudas sobre si era posible hacer algo funcional en una semana. No solo lo hicieron, sino que incluyeron features que ni habíamos pedido pero que tenían todo el sentido. Profesionales de verdad.",
            en: "We had doubts about whether it was possible to make something functional in a week. Not only did they do it, but they included features we hadn't even asked for but made complete sense. True professionals.",
        },
    },
    Review {
        name: "Patricia López",
        role: "Marketing Director",
        company: "StyleBox",
        initials: "PL",
        rating: 5,
        text: Localized {
            es: "Desde marketing necesitábamos un MVP para testear el mercado antes de invertir en publicidad. MVP Sprint nos permitió validar nuestra propuesta de valor en tiempo récord. Ya tenemos los primeros 500 usuarios.",
            en: "From marketing, we needed an MVP to test the market before investing in advertising. MVP Sprint allowed us to validate our value proposition in record time. We already have the first 500 users.",
        },
    },
];

#[function_component(ReviewsSection)]
pub fn reviews_section() -> Html {
    let tr = use_translator();
    let carousel = use_carousel(REVIEWS.len(), Some(config::REVIEWS_INTERVAL_MS));
    let Some((prev, current, next)) = carousel.visible() else {
        return html! {};
    };

    let dispatch = |action: fn() -> CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(action()))
    };
    let on_select = {
        let carousel = carousel.clone();
        Callback::from(move |i: usize| carousel.dispatch(CarouselAction::GoTo(i)))
    };

    let card = |index: usize, position: &'static str| {
        let review = &REVIEWS[index];
        html! {
            <div class={classes!("review-card", position)}>
                <div class="review-stars">
                    { for (0..review.rating).map(|_| html! { <span class="star">{"★"}</span> }) }
                </div>
                <blockquote>{format!("\"{}\"", review.text.get(tr.language()))}</blockquote>
                <div class="review-author">
                    <span class="avatar">{review.initials}</span>
                    <div>
                        <p class="author-name">{review.name}</p>
                        <p class="author-role">{format!("{} · {}", review.role, review.company)}</p>
                    </div>
                </div>
            </div>
        }
    };

    html! {
        <section class="reviews-section">
            <div class="section-header">
                <h2>{tr.t("reviews.title")}</h2>
                <p>{tr.t("reviews.description")}</p>
            </div>
            <div
                class="carousel"
                onmouseenter={dispatch(|| CarouselAction::HoverStart)}
                onmouseleave={dispatch(|| CarouselAction::HoverEnd)}
            >
                <button class="carousel-arrow prev" aria-label={tr.t("reviews.previous")} onclick={dispatch(|| CarouselAction::Prev)}>
                    {"‹"}
                </button>
                <div class="carousel-track">
                    { card(prev, "side") }
                    { card(current, "center") }
                    { card(next, "side") }
                </div>
                <button class="carousel-arrow next" aria-label={tr.t("reviews.next")} onclick={dispatch(|| CarouselAction::Next)}>
                    {"›"}
                </button>
            </div>
            <CarouselDots
                len={carousel.len()}
                current={carousel.current()}
                label={tr.t("reviews.goTo")}
                {on_select}
            />
            <div class="trust-badges">
                <span class="badge">{tr.t("reviews.delivered")}</span>
                <span class="badge">{tr.t("reviews.satisfied")}</span>
                <span class="badge">{tr.t("reviews.rating")}</span>
            </div>
        </section>
    }
}
