use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::i18n::{use_translator, Translator};
use crate::Route;

/// Section names under a legal document, with whether the section also
/// carries a bullet list.
type SectionTable = [(&'static str, bool); 8];

const TERMS_SECTIONS: SectionTable = [
    ("section1", false),
    ("section2", false),
    ("section3", true),
    ("section4", false),
    ("section5", false),
    ("section6", false),
    ("section7", false),
    ("section8", false),
];

const PRIVACY_SECTIONS: SectionTable = [
    ("section1", false),
    ("section2", true),
    ("section3", true),
    ("section4", false),
    ("section5", false),
    ("section6", false),
    ("section7", false),
    ("section8", false),
];

fn legal_section(tr: &Translator, document: &str, section: &str, has_list: bool) -> Html {
    let prefix = format!("{}.{}", document, section);
    html! {
        <section>
            <h2>{tr.t(&format!("{}.title", prefix))}</h2>
            { for tr.t_array(&format!("{}.paragraphs", prefix)).into_iter().map(|p| html! { <p>{p}</p> }) }
            if has_list {
                <ul>
                    { for tr.t_array(&format!("{}.list", prefix)).into_iter().map(|item| html! { <li>{item}</li> }) }
                </ul>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct LegalDocumentProps {
    document: &'static str,
    sections: SectionTable,
}

#[function_component(LegalDocument)]
fn legal_document(props: &LegalDocumentProps) -> Html {
    let tr = use_translator();

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.document,
    );

    html! {
        <>
            <Header />
            <div class="legal-content">
                <Link<Route> to={Route::Home} classes="back-link">{format!("← {}", tr.t("common.backToHome"))}</Link<Route>>
                <h1>{tr.t(&format!("{}.title", props.document))}</h1>
                <p class="last-updated">
                    {format!("{}: {}", tr.t("common.lastUpdated"), tr.t("common.lastUpdatedDate"))}
                </p>
                { for props.sections.iter().map(|(section, has_list)| legal_section(&tr, props.document, section, *has_list)) }
                <div class="legal-links">
                    <Link<Route> to={Route::Terms}>{tr.t("footer.terms")}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Privacy}>{tr.t("footer.privacy")}</Link<Route>>
                </div>
            </div>
            <Footer />
        </>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms() -> Html {
    html! { <LegalDocument document="terms" sections={TERMS_SECTIONS} /> }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! { <LegalDocument document="privacy" sections={PRIVACY_SECTIONS} /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::Language;

    fn assert_document_resolves(document: &str, sections: &SectionTable) {
        for language in [Language::Es, Language::En] {
            let tr = Translator::new(language);
            let title = format!("{}.title", document);
            assert_ne!(tr.t(&title), title);
            for (section, has_list) in sections {
                let prefix = format!("{}.{}", document, section);
                assert!(!tr.t_array(&format!("{}.paragraphs", prefix)).is_empty(), "{} paragraphs", prefix);
                assert_eq!(
                    !tr.t_array(&format!("{}.list", prefix)).is_empty(),
                    *has_list,
                    "{} list flag",
                    prefix
                );
            }
        }
    }

    #[test]
    fn terms_sections_match_dictionary() {
        assert_document_resolves("terms", &TERMS_SECTIONS);
    }

    #[test]
    fn privacy_sections_match_dictionary() {
        assert_document_resolves("privacy", &PRIVACY_SECTIONS);
    }
}
