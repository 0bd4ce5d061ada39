//! Lead form state and validation.

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use serde::Serialize;
use yew::prelude::*;

use crate::i18n::Translator;
use crate::lead::catalog::{self, OTHER_PRODUCT_TYPE};
use crate::lead::flow::SubmitFlow;
use crate::lead::submission::SubmitError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    CompanyName,
    ContactName,
    Email,
    Phone,
    ProductType,
    ProductTypeOther,
    BudgetRange,
    ProjectDescription,
}

impl Field {
    /// Fields that are always required, in display order.
    pub const REQUIRED: [Field; 6] = [
        Field::CompanyName,
        Field::ContactName,
        Field::Email,
        Field::Phone,
        Field::ProductType,
        Field::BudgetRange,
    ];

    /// Input id / JSON name.
    pub fn name(self) -> &'static str {
        match self {
            Field::CompanyName => "companyName",
            Field::ContactName => "contactName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::ProductType => "productType",
            Field::ProductTypeOther => "productTypeOther",
            Field::BudgetRange => "budgetRange",
            Field::ProjectDescription => "projectDescription",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consent {
    Terms,
    Privacy,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFormState {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub product_type: String,
    pub product_type_other: String,
    pub budget_range: String,
    pub project_description: String,
    pub accept_terms: bool,
    pub accept_privacy: bool,
}

impl LeadFormState {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::CompanyName => &self.company_name,
            Field::ContactName => &self.contact_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::ProductType => &self.product_type,
            Field::ProductTypeOther => &self.product_type_other,
            Field::BudgetRange => &self.budget_range,
            Field::ProjectDescription => &self.project_description,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::CompanyName => &mut self.company_name,
            Field::ContactName => &mut self.contact_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::ProductType => &mut self.product_type,
            Field::ProductTypeOther => &mut self.product_type_other,
            Field::BudgetRange => &mut self.budget_range,
            Field::ProjectDescription => &mut self.project_description,
        };
        *slot = value;
    }

    pub fn set_consent(&mut self, consent: Consent, checked: bool) {
        match consent {
            Consent::Terms => self.accept_terms = checked,
            Consent::Privacy => self.accept_privacy = checked,
        }
    }

    pub fn has_consent(&self) -> bool {
        self.accept_terms && self.accept_privacy
    }

    pub fn estimated_budget(&self) -> Option<u64> {
        catalog::estimate_budget(&self.product_type, &self.budget_range)
    }

    /// Required fields for the current selection; the free-text product type
    /// is only required when "other" is picked.
    pub fn required_fields(&self) -> Vec<Field> {
        let mut fields = Field::REQUIRED.to_vec();
        if self.product_type == OTHER_PRODUCT_TYPE {
            fields.push(Field::ProductTypeOther);
        }
        fields
    }
}

pub type FieldErrors = BTreeMap<Field, String>;

/// `local@domain.tld`: no whitespace, a single `@` and a dot inside the
/// domain with something on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn is_valid_phone(value: &str) -> bool {
    value.chars().count() >= 6
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+'))
}

/// Localized error for `value` in `field`, or `None` when it is valid.
/// The project description has no rules.
pub fn validate_field(field: Field, value: &str, tr: &Translator) -> Option<String> {
    let key = match field {
        Field::CompanyName if value.trim().is_empty() => "form.errorCompanyName",
        Field::ContactName if value.trim().is_empty() => "form.errorContactName",
        Field::Email if !is_valid_email(value) => "form.errorEmail",
        Field::Phone if !is_valid_phone(value) => "form.errorPhone",
        Field::ProductType if value.is_empty() => "form.errorProductType",
        Field::ProductTypeOther if value.trim().is_empty() => "form.errorProductTypeOther",
        Field::BudgetRange if value.is_empty() => "form.errorBudgetRange",
        _ => return None,
    };
    Some(tr.t(key))
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormRejection {
    Fields(FieldErrors),
    Consent,
}

/// Submit-time gate. Field errors are reported before missing consent.
pub fn validate_form(state: &LeadFormState, tr: &Translator) -> Result<(), FormRejection> {
    let errors: FieldErrors = state
        .required_fields()
        .into_iter()
        .filter_map(|field| validate_field(field, state.value(field), tr).map(|msg| (field, msg)))
        .collect();

    if !errors.is_empty() {
        return Err(FormRejection::Fields(errors));
    }
    if !state.has_consent() {
        return Err(FormRejection::Consent);
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// The single-page lead form: values, per-field errors and submission state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    pub values: LeadFormState,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    banner: Option<String>,
    status: SubmitStatus,
}

impl LeadForm {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.status == SubmitStatus::Submitted
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Error shown next to `field`; only once the user has left the field
    /// or tried to submit.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.touched.contains(&field) {
            self.errors.get(&field).map(String::as_str)
        } else {
            None
        }
    }

    fn revalidate(&mut self, field: Field, tr: &Translator) {
        match validate_field(field, self.values.value(field), tr) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn edit(&mut self, field: Field, value: String, tr: &Translator) {
        if self.status != SubmitStatus::Editing {
            return;
        }
        self.values.set(field, value);
        if self.touched.contains(&field) {
            self.revalidate(field, tr);
        }
        if field == Field::ProductType && self.values.product_type != OTHER_PRODUCT_TYPE {
            self.errors.remove(&Field::ProductTypeOther);
        }
    }

    pub fn set_consent(&mut self, consent: Consent, checked: bool) {
        if self.status != SubmitStatus::Editing {
            return;
        }
        self.values.set_consent(consent, checked);
        if self.values.has_consent() {
            self.banner = None;
        }
    }

    pub fn blur(&mut self, field: Field, tr: &Translator) {
        self.touched.insert(field);
        self.revalidate(field, tr);
    }

    /// Runs the submit-time gate. Returns `true` when the request should be
    /// sent; the form is then locked until [`LeadForm::finish_submit`].
    pub fn begin_submit(&mut self, tr: &Translator) -> bool {
        if self.status != SubmitStatus::Editing {
            return false;
        }
        self.banner = None;
        match validate_form(&self.values, tr) {
            Ok(()) => {
                self.errors.clear();
                self.status = SubmitStatus::Submitting;
                true
            }
            Err(FormRejection::Fields(errors)) => {
                self.touched.extend(self.values.required_fields());
                self.errors = errors;
                false
            }
            Err(FormRejection::Consent) => {
                self.errors.clear();
                self.banner = Some(tr.t("form.errorTerms"));
                false
            }
        }
    }

    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>, tr: &Translator) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        match outcome {
            Ok(()) => self.status = SubmitStatus::Submitted,
            Err(_) => {
                self.status = SubmitStatus::Editing;
                self.banner = Some(tr.t("form.errorGeneric"));
            }
        }
    }
}

impl SubmitFlow for LeadForm {
    fn values(&self) -> &LeadFormState {
        &self.values
    }

    fn ready_to_submit(&self, tr: &Translator) -> bool {
        self.status == SubmitStatus::Editing && validate_form(&self.values, tr).is_ok()
    }
}

pub enum LeadFormAction {
    Edit(Field, String, Translator),
    SetConsent(Consent, bool),
    Blur(Field, Translator),
    BeginSubmit(Translator),
    FinishSubmit(Result<(), SubmitError>, Translator),
}

impl Reducible for LeadForm {
    type Action = LeadFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LeadFormAction::Edit(field, value, tr) => next.edit(field, value, &tr),
            LeadFormAction::SetConsent(consent, checked) => next.set_consent(consent, checked),
            LeadFormAction::Blur(field, tr) => next.blur(field, &tr),
            LeadFormAction::BeginSubmit(tr) => {
                next.begin_submit(&tr);
            }
            LeadFormAction::FinishSubmit(outcome, tr) => next.finish_submit(outcome, &tr),
        }
        next.into()
    }
}
