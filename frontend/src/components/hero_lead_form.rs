use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::form_fields::{budget_range_options, ConsentCheckbox, SelectField, TextAreaField, TextField};
use crate::components::lead_form::LeadFormSuccess;
use crate::i18n::{use_translator, Translator};
use crate::lead::analytics::track_lead;
use crate::lead::catalog::PRODUCT_TYPES;
use crate::lead::form::{Consent, Field};
use crate::lead::flow::{deliver, pending_submission};
use crate::lead::submission::{BrowserTransport, LeadDestination, LeadSource};
use crate::lead::wizard::{LeadWizard, Step, WizardAction};
use crate::Route;

#[function_component(HeroLeadForm)]
pub fn hero_lead_form() -> Html {
    let tr = use_translator();
    let wizard = use_reducer(LeadWizard::default);

    if wizard.is_submitted() {
        return html! { <LeadFormSuccess /> };
    }

    let step = wizard.step();
    let submitting = wizard.is_submitting();
    let can_proceed = wizard.can_proceed();

    let on_next = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(WizardAction::Next))
    };
    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| wizard.dispatch(WizardAction::Back))
    };
    let on_submit = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let pending = pending_submission(&*wizard, LeadSource::HeroMultistepForm, &tr);
            wizard.dispatch(WizardAction::BeginSubmit);
            let Some(submission) = pending else {
                return;
            };

            let wizard = wizard.clone();
            spawn_local(async move {
                let outcome = deliver(&BrowserTransport, LeadDestination::Webhook, &submission, track_lead).await;
                wizard.dispatch(WizardAction::FinishSubmit(outcome, tr));
            });
        })
    };

    html! {
        <div class="hero-form">
            <div class="step-progress">
                { for Step::ALL.iter().map(|s| html! {
                    <div class={classes!("step-bar", (s.number() <= step.number()).then(|| "done"))} />
                }) }
            </div>
            <p class="step-indicator">
                {format!("{} {} {} {}", tr.t("heroForm.step"), step.number(), tr.t("heroForm.of"), Step::ALL.len())}
            </p>
            <h3 class="step-title">{tr.t(step.title_key())}</h3>

            { step_body(step, &wizard, &tr) }

            if let Some(banner) = wizard.banner() {
                <div class="form-banner error">{banner}</div>
            }

            <div class="step-nav">
                if step.number() > 1 {
                    <button type="button" class="secondary-button" onclick={on_back} disabled={submitting}>
                        {tr.t("heroForm.back")}
                    </button>
                }
                if step.next().is_some() {
                    <button type="button" class="primary-button" onclick={on_next} disabled={!can_proceed}>
                        {tr.t("heroForm.next")}
                    </button>
                } else {
                    <button type="button" class="primary-button" onclick={on_submit} disabled={!can_proceed || submitting}>
                        { if submitting { tr.t("form.sending") } else { tr.t("heroForm.submit") } }
                    </button>
                }
            </div>
            if !can_proceed && !submitting {
                <p class="step-hint">{tr.t(step.hint_key())}</p>
            }
        </div>
    }
}

fn step_body(step: Step, wizard: &UseReducerHandle<LeadWizard>, tr: &Translator) -> Html {
    let values = &wizard.values;
    let disabled = wizard.is_submitting();
    let on_input = |field: Field| {
        let wizard = wizard.clone();
        Callback::from(move |value: String| wizard.dispatch(WizardAction::Edit(field, value)))
    };
    let on_consent = |consent: Consent| {
        let wizard = wizard.clone();
        Callback::from(move |checked: bool| wizard.dispatch(WizardAction::SetConsent(consent, checked)))
    };

    match step {
        Step::Contact => html! {
            <div class="step-fields">
                <TextField
                    id="heroContactName"
                    value={values.contact_name.clone()}
                    placeholder={tr.t("form.contactNamePlaceholder")}
                    on_input={on_input(Field::ContactName)}
                />
                <TextField
                    id="heroEmail"
                    input_type="email"
                    value={values.email.clone()}
                    placeholder={tr.t("form.emailPlaceholder")}
                    on_input={on_input(Field::Email)}
                />
                <TextField
                    id="heroPhone"
                    input_type="tel"
                    value={values.phone.clone()}
                    placeholder={tr.t("form.phonePlaceholder")}
                    on_input={on_input(Field::Phone)}
                />
            </div>
        },
        Step::Product => html! {
            <div class="step-fields">
                <div class="product-grid">
                    { for PRODUCT_TYPES.iter().map(|product| {
                        let selected = values.product_type == product.value;
                        let pick = on_input(Field::ProductType).reform(move |_: MouseEvent| product.value.to_string());
                        html! {
                            <button
                                type="button"
                                class={classes!("product-option", selected.then(|| "selected"))}
                                onclick={pick}
                            >
                                {tr.t(&product.label_key())}
                            </button>
                        }
                    }) }
                </div>
                <p class="field-note">{tr.t("heroForm.budgetOptional")}</p>
                <SelectField
                    id="heroBudgetRange"
                    value={values.budget_range.clone()}
                    placeholder={tr.t("form.budgetRangePlaceholder")}
                    options={budget_range_options(tr)}
                    on_change={on_input(Field::BudgetRange)}
                />
            </div>
        },
        Step::Project => html! {
            <div class="step-fields">
                <TextField
                    id="heroCompanyName"
                    value={values.company_name.clone()}
                    placeholder={tr.t("form.companyNamePlaceholder")}
                    on_input={on_input(Field::CompanyName)}
                />
                <TextAreaField
                    id="heroProjectDescription"
                    value={values.project_description.clone()}
                    placeholder={tr.t("form.projectDescriptionPlaceholder")}
                    on_input={on_input(Field::ProjectDescription)}
                />
            </div>
        },
        Step::Consent => html! {
            <div class="step-fields consents">
                <ConsentCheckbox
                    id="heroAcceptTerms"
                    checked={values.accept_terms}
                    text={tr.t("form.acceptTerms")}
                    link_text={tr.t("form.termsLink")}
                    link_to={Route::Terms}
                    {disabled}
                    on_toggle={on_consent(Consent::Terms)}
                />
                <ConsentCheckbox
                    id="heroAcceptPrivacy"
                    checked={values.accept_privacy}
                    text={tr.t("form.acceptPrivacy")}
                    link_text={tr.t("form.privacyLink")}
                    link_to={Route::Privacy}
                    {disabled}
                    on_toggle={on_consent(Consent::Privacy)}
                />
            </div>
        },
    }
}
