use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::i18n::use_translator;
use crate::lead::analytics::track_lead;
use crate::lead::catalog::{self, OTHER_PRODUCT_TYPE};
use crate::lead::flow::{deliver, pending_submission};
use crate::lead::form::{Consent, Field, LeadForm, LeadFormAction};
use crate::lead::submission::{BrowserTransport, LeadDestination, LeadSource};
use crate::components::form_fields::{
    budget_range_options, product_type_options, ConsentCheckbox, SelectField, TextAreaField, TextField,
};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    #[prop_or(LeadDestination::Webhook)]
    pub destination: LeadDestination,
    #[prop_or(LeadSource::LandingLeadForm)]
    pub source: LeadSource,
}

#[function_component(LeadFormView)]
pub fn lead_form_view(props: &LeadFormProps) -> Html {
    let tr = use_translator();
    let form = use_reducer(LeadForm::default);

    if form.is_submitted() {
        return html! { <LeadFormSuccess /> };
    }

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(LeadFormAction::Edit(field, value, tr)))
    };
    let on_blur = |field: Field| {
        let form = form.clone();
        Callback::from(move |_| form.dispatch(LeadFormAction::Blur(field, tr)))
    };
    let on_consent = |consent: Consent| {
        let form = form.clone();
        Callback::from(move |checked: bool| form.dispatch(LeadFormAction::SetConsent(consent, checked)))
    };

    let onsubmit = {
        let form = form.clone();
        let destination = props.destination;
        let source = props.source;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let pending = pending_submission(&*form, source, &tr);
            form.dispatch(LeadFormAction::BeginSubmit(tr));
            let Some(submission) = pending else {
                return;
            };

            let form = form.clone();
            spawn_local(async move {
                let outcome = deliver(&BrowserTransport, destination, &submission, track_lead).await;
                form.dispatch(LeadFormAction::FinishSubmit(outcome, tr));
            });
        })
    };

    let submitting = form.is_submitting();
    let values = &form.values;
    let error_of = |field: Field| form.visible_error(field).map(str::to_string);

    html! {
        <form class="lead-form" onsubmit={onsubmit} novalidate=true>
            <div class="form-row">
                <TextField
                    id={Field::CompanyName.name()}
                    label={tr.t("form.companyName")}
                    value={values.company_name.clone()}
                    placeholder={tr.t("form.companyNamePlaceholder")}
                    error={error_of(Field::CompanyName)}
                    disabled={submitting}
                    on_input={on_input(Field::CompanyName)}
                    on_blur={on_blur(Field::CompanyName)}
                />
                <TextField
                    id={Field::ContactName.name()}
                    label={tr.t("form.contactName")}
                    value={values.contact_name.clone()}
                    placeholder={tr.t("form.contactNamePlaceholder")}
                    error={error_of(Field::ContactName)}
                    disabled={submitting}
                    on_input={on_input(Field::ContactName)}
                    on_blur={on_blur(Field::ContactName)}
                />
            </div>
            <div class="form-row">
                <TextField
                    id={Field::Email.name()}
                    input_type="email"
                    label={tr.t("form.email")}
                    value={values.email.clone()}
                    placeholder={tr.t("form.emailPlaceholder")}
                    error={error_of(Field::Email)}
                    disabled={submitting}
                    on_input={on_input(Field::Email)}
                    on_blur={on_blur(Field::Email)}
                />
                <TextField
                    id={Field::Phone.name()}
                    input_type="tel"
                    label={tr.t("form.phone")}
                    value={values.phone.clone()}
                    placeholder={tr.t("form.phonePlaceholder")}
                    error={error_of(Field::Phone)}
                    disabled={submitting}
                    on_input={on_input(Field::Phone)}
                    on_blur={on_blur(Field::Phone)}
                />
            </div>
            <div class="form-row">
                <SelectField
                    id={Field::ProductType.name()}
                    label={tr.t("form.productType")}
                    value={values.product_type.clone()}
                    placeholder={tr.t("form.productTypePlaceholder")}
                    options={product_type_options(&tr)}
                    error={error_of(Field::ProductType)}
                    disabled={submitting}
                    on_change={on_input(Field::ProductType)}
                    on_blur={on_blur(Field::ProductType)}
                />
                if values.product_type == OTHER_PRODUCT_TYPE {
                    <TextField
                        id={Field::ProductTypeOther.name()}
                        value={values.product_type_other.clone()}
                        placeholder={tr.t("form.productTypeOtherPlaceholder")}
                        error={error_of(Field::ProductTypeOther)}
                        disabled={submitting}
                        on_input={on_input(Field::ProductTypeOther)}
                        on_blur={on_blur(Field::ProductTypeOther)}
                    />
                }
            </div>
            <SelectField
                id={Field::BudgetRange.name()}
                label={tr.t("form.budgetRange")}
                value={values.budget_range.clone()}
                placeholder={tr.t("form.budgetRangePlaceholder")}
                options={budget_range_options(&tr)}
                error={error_of(Field::BudgetRange)}
                disabled={submitting}
                on_change={on_input(Field::BudgetRange)}
                on_blur={on_blur(Field::BudgetRange)}
            />
            if let Some(amount) = values.estimated_budget() {
                <div class="budget-estimate">
                    <span class="estimate-label">{tr.t("form.estimatedBudget")}</span>
                    <span class="estimate-amount">{catalog::format_amount(amount, tr.language())}</span>
                    <p class="estimate-note">{tr.t("form.estimatedBudgetNote")}</p>
                </div>
            }
            <TextAreaField
                id={Field::ProjectDescription.name()}
                label={tr.t("form.projectDescription")}
                value={values.project_description.clone()}
                placeholder={tr.t("form.projectDescriptionPlaceholder")}
                disabled={submitting}
                on_input={on_input(Field::ProjectDescription)}
            />
            <div class="consents">
                <ConsentCheckbox
                    id="acceptTerms"
                    checked={values.accept_terms}
                    text={tr.t("form.acceptTerms")}
                    link_text={tr.t("form.termsLink")}
                    link_to={Route::Terms}
                    disabled={submitting}
                    on_toggle={on_consent(Consent::Terms)}
                />
                <ConsentCheckbox
                    id="acceptPrivacy"
                    checked={values.accept_privacy}
                    text={tr.t("form.acceptPrivacy")}
                    link_text={tr.t("form.privacyLink")}
                    link_to={Route::Privacy}
                    disabled={submitting}
                    on_toggle={on_consent(Consent::Privacy)}
                />
            </div>
            if let Some(banner) = form.banner() {
                <div class="form-banner error">{banner}</div>
            }
            <button type="submit" class="primary-button" disabled={submitting}>
                { if submitting { tr.t("form.submitting") } else { tr.t("form.submit") } }
            </button>
            <p class="submit-note">{tr.t("form.submitNote")}</p>
        </form>
    }
}

/// Shown in place of a form once the lead has been accepted.
#[function_component(LeadFormSuccess)]
pub fn lead_form_success() -> Html {
    let tr = use_translator();

    html! {
        <div class="lead-success">
            <div class="success-icon">{"✓"}</div>
            <h3>{tr.t("form.successTitle")}</h3>
            <p>{tr.t("form.successMessage")}</p>
            <p class="success-note">{tr.t("form.successMvpNote")}</p>
            <div class="review-offer">
                <h4>{tr.t("form.successReviewOffer")}</h4>
                <p>{tr.t("form.successReviewOfferText")}</p>
                <span class="offer-expiry">{tr.t("form.successReviewOfferExpiry")}</span>
            </div>
        </div>
    }
}
