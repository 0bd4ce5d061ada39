//! Four-step lead form used in the hero section.

use std::rc::Rc;

use yew::prelude::*;

use crate::i18n::Translator;
use crate::lead::flow::SubmitFlow;
use crate::lead::form::{Consent, Field, LeadFormState, SubmitStatus};
use crate::lead::submission::SubmitError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Contact,
    Product,
    Project,
    Consent,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Contact, Step::Product, Step::Project, Step::Consent];

    /// 1-based position shown in the progress indicator.
    pub fn number(self) -> usize {
        match self {
            Step::Contact => 1,
            Step::Product => 2,
            Step::Project => 3,
            Step::Consent => 4,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Contact => Some(Step::Product),
            Step::Product => Some(Step::Project),
            Step::Project => Some(Step::Consent),
            Step::Consent => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Contact => None,
            Step::Product => Some(Step::Contact),
            Step::Project => Some(Step::Product),
            Step::Consent => Some(Step::Project),
        }
    }

    pub fn title_key(self) -> &'static str {
        match self {
            Step::Contact => "heroForm.step1Title",
            Step::Product => "heroForm.step2Title",
            Step::Project => "heroForm.step3Title",
            Step::Consent => "heroForm.step4Title",
        }
    }

    /// Hint shown under the disabled "next" button.
    pub fn hint_key(self) -> &'static str {
        match self {
            Step::Contact => "heroForm.hint.contact",
            Step::Product => "heroForm.hint.product",
            Step::Project => "heroForm.hint.project",
            Step::Consent => "heroForm.hint.consent",
        }
    }

    pub fn is_satisfied(self, values: &LeadFormState) -> bool {
        match self {
            Step::Contact => !values.contact_name.trim().is_empty() && values.email.contains('@'),
            Step::Product => !values.product_type.is_empty(),
            Step::Project => !values.project_description.trim().is_empty(),
            Step::Consent => values.has_consent(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadWizard {
    pub values: LeadFormState,
    step: Step,
    status: SubmitStatus,
    banner: Option<String>,
}

impl LeadWizard {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.status == SubmitStatus::Submitted
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn can_proceed(&self) -> bool {
        self.status == SubmitStatus::Editing && self.step.is_satisfied(&self.values)
    }

    pub fn can_go_back(&self) -> bool {
        self.status == SubmitStatus::Editing && self.step.previous().is_some()
    }

    pub fn edit(&mut self, field: Field, value: String) {
        if self.status == SubmitStatus::Editing {
            self.values.set(field, value);
        }
    }

    /// Also drops a failure banner left by the previous attempt.
    pub fn set_consent(&mut self, consent: Consent, checked: bool) {
        if self.status == SubmitStatus::Editing {
            self.values.set_consent(consent, checked);
            self.banner = None;
        }
    }

    pub fn next(&mut self) {
        if !self.can_proceed() {
            return;
        }
        if let Some(step) = self.step.next() {
            self.step = step;
        }
    }

    pub fn back(&mut self) {
        if !self.can_go_back() {
            return;
        }
        if let Some(step) = self.step.previous() {
            self.step = step;
        }
    }

    fn can_submit(&self) -> bool {
        self.step == Step::Consent && self.can_proceed()
    }

    /// Returns `true` when the request should be sent.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.banner = None;
        self.status = SubmitStatus::Submitting;
        true
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

impl SubmitFlow for LeadWizard {
    fn values(&self) -> &LeadFormState {
        &self.values
    }

    fn ready_to_submit(&self, _tr: &Translator) -> bool {
        self.can_submit()
    }
}

pub enum WizardAction {
    Edit(Field, String),
    SetConsent(Consent, bool),
    Next,
    Back,
    BeginSubmit,
    FinishSubmit(Result<(), SubmitError>, Translator),
}

impl Reducible for LeadWizard {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WizardAction::Edit(field, value) => next.edit(field, value),
            WizardAction::SetConsent(consent, checked) => next.set_consent(consent, checked),
            WizardAction::Next => next.next(),
            WizardAction::Back => next.back(),
            WizardAction::BeginSubmit => {
                next.begin_submit();
            }
            WizardAction::FinishSubmit(outcome, tr) => next.finish_submit(outcome, &tr),
        }
        next.into()
    }
}
