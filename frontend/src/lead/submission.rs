//! Sending a validated lead to one of the two intake endpoints.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config;
use crate::i18n::Translator;
use crate::lead::analytics::LeadEvent;
use crate::lead::catalog::{BudgetRange, ProductType};
use crate::lead::form::LeadFormState;
use crate::preferences::Language;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("lead endpoint answered with status {0}")]
    Rejected(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to encode lead payload: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadSource {
    HeroMultistepForm,
    LandingLeadForm,
    ApplyPage,
}

impl LeadSource {
    pub fn tag(self) -> &'static str {
        match self {
            LeadSource::HeroMultistepForm => "hero_multistep_form",
            LeadSource::LandingLeadForm => "landing_lead_form",
            LeadSource::ApplyPage => "apply_page",
        }
    }
}

/// Where a lead goes and what body it is sent with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadDestination {
    /// Automation webhook; gets the form plus derived fields.
    Webhook,
    /// Enrollment API; gets the raw form only.
    Enrollment,
}

impl LeadDestination {
    pub fn url(self) -> &'static str {
        match self {
            LeadDestination::Webhook => config::lead_webhook_url(),
            LeadDestination::Enrollment => config::ENROLLMENT_URL,
        }
    }

    pub fn build_payload(self, submission: &LeadSubmission) -> Result<Value, SubmitError> {
        let value = match self {
            LeadDestination::Webhook => serde_json::to_value(WebhookPayload::new(submission))?,
            LeadDestination::Enrollment => serde_json::to_value(&submission.form)?,
        };
        Ok(value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeadSubmission {
    pub form: LeadFormState,
    pub source: LeadSource,
    pub language: Language,
    pub submitted_at: DateTime<Utc>,
}

impl LeadSubmission {
    pub fn new(form: LeadFormState, source: LeadSource, language: Language) -> Self {
        Self {
            form,
            source,
            language,
            submitted_at: Utc::now(),
        }
    }

    pub fn conversion_event(&self) -> LeadEvent {
        LeadEvent::new(&self.form.product_type, self.form.estimated_budget())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookPayload<'a> {
    #[serde(flatten)]
    form: &'a LeadFormState,
    source: &'static str,
    estimated_budget: Option<u64>,
    product_type_label: String,
    budget_range_label: String,
    language: Language,
    submitted_at: String,
}

impl<'a> WebhookPayload<'a> {
    fn new(submission: &'a LeadSubmission) -> Self {
        let tr = Translator::new(submission.language);
        let form = &submission.form;
        let product_type_label = ProductType::find(&form.product_type)
            .map(|p| tr.t(&p.label_key()))
            .unwrap_or_default();
        let budget_range_label = BudgetRange::find(&form.budget_range)
            .map(|b| tr.t(&b.label_key()))
            .unwrap_or_default();

        Self {
            form,
            source: submission.source.tag(),
            estimated_budget: form.estimated_budget(),
            product_type_label,
            budget_range_label,
            language: submission.language,
            submitted_at: submission.submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Posts a JSON body and reports the HTTP status.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait LeadTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<u16, SubmitError>;
}

pub struct BrowserTransport;

#[async_trait(?Send)]
impl LeadTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<u16, SubmitError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        Ok(response.status())
    }
}

/// Sends `submission` to `destination`. Any 2xx is a success and yields the
/// conversion event to report; the response body is never read.
pub async fn submit_lead(
    transport: &dyn LeadTransport,
    destination: LeadDestination,
    submission: &LeadSubmission,
) -> Result<LeadEvent, SubmitError> {
    let body = destination.build_payload(submission)?;
    let status = transport.post_json(destination.url(), &body).await?;
    if (200..300).contains(&status) {
        log::info!("Lead from {} accepted ({})", submission.source.tag(), status);
        Ok(submission.conversion_event())
    } else {
        Err(SubmitError::Rejected(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    fn submission(language: Language) -> LeadSubmission {
        let form = LeadFormState {
            company_name: "Acme".into(),
            contact_name: "Ana".into(),
            email: "ana@acme.io".into(),
            phone: "600123456".into(),
            product_type: "marketplace".into(),
            budget_range: "under_3k".into(),
            accept_terms: true,
            accept_privacy: true,
            ..Default::default()
        };
        LeadSubmission {
            form,
            source: LeadSource::LandingLeadForm,
            language,
            submitted_at: Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn webhook_payload_adds_derived_fields() {
        let sub = submission(Language::En);
        let tr = Translator::new(Language::En);
        let body = LeadDestination::Webhook.build_payload(&sub).unwrap();

        assert_eq!(body["companyName"], "Acme");
        assert_eq!(body["acceptPrivacy"], true);
        assert_eq!(body["source"], "landing_lead_form");
        assert_eq!(body["estimatedBudget"], 3750);
        assert_eq!(body["productTypeLabel"], tr.t("productTypes.marketplace"));
        assert_eq!(body["budgetRangeLabel"], tr.t("budgetRanges.under_3k"));
        assert_eq!(body["language"], "en");
        assert_eq!(body["submittedAt"], "2024-03-05T09:30:00.000Z");
    }

    #[test]
    fn webhook_payload_without_selection_has_null_estimate_and_empty_labels() {
        let mut sub = submission(Language::Es);
        sub.form.product_type.clear();
        sub.form.budget_range.clear();
        let body = LeadDestination::Webhook.build_payload(&sub).unwrap();

        assert_eq!(body["estimatedBudget"], Value::Null);
        assert_eq!(body["productTypeLabel"], "");
        assert_eq!(body["budgetRangeLabel"], "");
    }

    #[test]
    fn enrollment_payload_is_the_raw_form() {
        let sub = submission(Language::Es);
        let body = LeadDestination::Enrollment.build_payload(&sub).unwrap();
        assert_eq!(body, serde_json::to_value(&sub.form).unwrap());
        assert!(body.get("source").is_none());
    }

    #[test]
    fn success_returns_conversion_event() {
        let mut transport = MockLeadTransport::new();
        transport
            .expect_post_json()
            .times(1)
            .returning(|url, body| {
                assert_eq!(url, config::lead_webhook_url());
                assert_eq!(body["source"], "landing_lead_form");
                Ok(201)
            });

        let event = block_on(submit_lead(&transport, LeadDestination::Webhook, &submission(Language::Es))).unwrap();
        assert_eq!(event, LeadEvent::new("marketplace", Some(3_750)));
    }

    #[test]
    fn enrollment_posts_to_enrollment_url() {
        let mut transport = MockLeadTransport::new();
        transport
            .expect_post_json()
            .times(1)
            .returning(|url, _| {
                assert_eq!(url, config::ENROLLMENT_URL);
                Ok(200)
            });

        assert!(block_on(submit_lead(&transport, LeadDestination::Enrollment, &submission(Language::Es))).is_ok());
    }

    #[test]
    fn server_error_is_rejected() {
        let mut transport = MockLeadTransport::new();
        transport.expect_post_json().times(1).returning(|_, _| Ok(500));

        let result = block_on(submit_lead(&transport, LeadDestination::Webhook, &submission(Language::Es)));
        assert!(matches!(result, Err(SubmitError::Rejected(500))));
    }

    #[test]
    fn network_failure_is_reported() {
        let mut transport = MockLeadTransport::new();
        transport
            .expect_post_json()
            .times(1)
            .returning(|_, _| Err(SubmitError::Network("connection refused".into())));

        let result = block_on(submit_lead(&transport, LeadDestination::Webhook, &submission(Language::Es)));
        assert!(matches!(result, Err(SubmitError::Network(_))));
    }

    #[test]
    fn redirect_status_is_not_success() {
        let mut transport = MockLeadTransport::new();
        transport.expect_post_json().returning(|_, _| Ok(302));

        let result = block_on(submit_lead(&transport, LeadDestination::Webhook, &submission(Language::Es)));
        assert!(matches!(result, Err(SubmitError::Rejected(302))));
    }
}
