//! Submit lifecycle shared by the single-page form and the hero wizard.

use crate::i18n::Translator;
use crate::lead::analytics::LeadEvent;
use crate::lead::form::LeadFormState;
use crate::lead::submission::{submit_lead, LeadDestination, LeadSource, LeadSubmission, LeadTransport, SubmitError};

pub trait SubmitFlow {
    fn values(&self) -> &LeadFormState;

    /// Whether `begin_submit` would accept the current state.
    fn ready_to_submit(&self, tr: &Translator) -> bool;
}

/// The lead to send for `state`, or `None` when a submit would be refused.
pub fn pending_submission<S: SubmitFlow>(state: &S, source: LeadSource, tr: &Translator) -> Option<LeadSubmission> {
    if !state.ready_to_submit(tr) {
        return None;
    }
    Some(LeadSubmission::new(state.values().clone(), source, tr.language()))
}

/// Sends `submission` and returns the outcome `finish_submit` expects.
/// `on_lead` gets the conversion event when the endpoint accepts the lead.
pub async fn deliver<F>(
    transport: &dyn LeadTransport,
    destination: LeadDestination,
    submission: &LeadSubmission,
    on_lead: F,
) -> Result<(), SubmitError>
where
    F: FnOnce(&LeadEvent),
{
    match submit_lead(transport, destination, submission).await {
        Ok(event) => {
            on_lead(&event);
            Ok(())
        }
        Err(e) => {
            log::error!("Lead submission from {} failed: {}", submission.source.tag(), e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::lead::form::{Consent, Field, LeadForm};
    use crate::lead::submission::MockLeadTransport;
    use crate::lead::wizard::LeadWizard;
    use crate::preferences::Language;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    fn tr() -> Translator {
        Translator::new(Language::Es)
    }

    fn filled_form() -> LeadForm {
        let tr = tr();
        let mut form = LeadForm::default();
        for (field, value) in [
            (Field::CompanyName, "Acme"),
            (Field::ContactName, "Ana"),
            (Field::Email, "ana@acme.io"),
            (Field::Phone, "+34 600 123 456"),
            (Field::ProductType, "saas"),
            (Field::BudgetRange, "3k_6k"),
        ] {
            form.edit(field, value.to_string(), &tr);
        }
        form.set_consent(Consent::Terms, true);
        form.set_consent(Consent::Privacy, true);
        form
    }

    fn wizard_ready() -> LeadWizard {
        let mut wizard = LeadWizard::default();
        wizard.edit(Field::ContactName, "Ana".into());
        wizard.edit(Field::Email, "a@b.c".into());
        wizard.next();
        wizard.edit(Field::ProductType, "web_app".into());
        wizard.next();
        wizard.edit(Field::ProjectDescription, "Booking tool".into());
        wizard.next();
        wizard.set_consent(Consent::Terms, true);
        wizard.set_consent(Consent::Privacy, true);
        wizard
    }

    #[test]
    fn form_submission_runs_to_success() {
        let tr = tr();
        let mut form = filled_form();
        let submission = pending_submission(&form, LeadSource::LandingLeadForm, &tr).unwrap();
        assert!(form.begin_submit(&tr));

        let mut transport = MockLeadTransport::new();
        transport.expect_post_json().times(1).returning(|url, body| {
            assert_eq!(url, config::lead_webhook_url());
            assert_eq!(body["companyName"], "Acme");
            Ok(200)
        });

        let mut tracked = None;
        let outcome = block_on(deliver(&transport, LeadDestination::Webhook, &submission, |event| {
            tracked = Some(event.clone())
        }));
        form.finish_submit(outcome, &tr);

        assert!(form.is_submitted());
        assert_eq!(tracked, Some(LeadEvent::new("saas", Some(5_400))));
    }

    #[test]
    fn refused_form_sends_nothing() {
        let tr = tr();
        let mut form = filled_form();
        form.set_consent(Consent::Privacy, false);

        assert_eq!(pending_submission(&form, LeadSource::LandingLeadForm, &tr), None);
        assert!(!form.begin_submit(&tr));
    }

    #[test]
    fn readiness_matches_begin_submit() {
        let tr = tr();
        let mut incomplete = filled_form();
        incomplete.edit(Field::Phone, "12".into(), &tr);
        let mut without_consent = filled_form();
        without_consent.set_consent(Consent::Terms, false);

        for form in [LeadForm::default(), incomplete, without_consent, filled_form()] {
            let ready = form.ready_to_submit(&tr);
            let mut attempt = form.clone();
            assert_eq!(ready, attempt.begin_submit(&tr));
            assert!(!attempt.ready_to_submit(&tr));
        }
    }

    #[test]
    fn wizard_failure_keeps_values_and_shows_banner() {
        let tr = tr();
        let mut wizard = wizard_ready();
        let submission = pending_submission(&wizard, LeadSource::HeroMultistepForm, &tr).unwrap();
        assert_eq!(submission.form, wizard.values);
        assert!(wizard.begin_submit());
        assert!(pending_submission(&wizard, LeadSource::HeroMultistepForm, &tr).is_none());

        let mut transport = MockLeadTransport::new();
        transport.expect_post_json().times(1).returning(|_, body| {
            assert_eq!(body["source"], "hero_multistep_form");
            Ok(500)
        });

        let mut tracked = false;
        let outcome = block_on(deliver(&transport, LeadDestination::Webhook, &submission, |_| tracked = true));
        assert!(matches!(outcome, Err(SubmitError::Rejected(500))));
        wizard.finish_submit(outcome, &tr);

        assert!(!tracked);
        assert!(!wizard.is_submitted());
        assert_eq!(wizard.values, submission.form);
        assert_eq!(wizard.banner(), Some(tr.t("form.errorGeneric").as_str()));
    }
}
