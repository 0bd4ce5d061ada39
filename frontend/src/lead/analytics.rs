use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config;

#[wasm_bindgen]
extern "C" {
    // Meta pixel; `catch` turns a missing `window.fbq` into an Err.
    #[wasm_bindgen(js_namespace = window, js_name = fbq, catch)]
    fn fbq_track(command: &str, event: &str, params: JsValue) -> Result<(), JsValue>;
}

/// Parameters of the `Lead` conversion event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeadEvent {
    pub content_name: String,
    pub content_category: &'static str,
    pub value: u64,
    pub currency: &'static str,
}

impl LeadEvent {
    pub fn new(product_type: &str, estimated_budget: Option<u64>) -> Self {
        Self {
            content_name: product_type.to_string(),
            content_category: config::LEAD_CATEGORY,
            value: estimated_budget.unwrap_or(0),
            currency: config::LEAD_CURRENCY,
        }
    }
}

/// Best effort; does nothing when the pixel is not loaded.
pub fn track_lead(event: &LeadEvent) {
    let params = match serde_wasm_bindgen::to_value(event) {
        Ok(params) => params,
        Err(e) => {
            log::warn!("Could not encode Lead event: {}", e);
            return;
        }
    };
    if let Err(e) = fbq_track("track", "Lead", params) {
        log::debug!("Conversion pixel unavailable: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_estimate_reports_zero_value() {
        let event = LeadEvent::new("saas", None);
        assert_eq!(event.value, 0);
        assert_eq!(event.content_category, "MVP Request");
        assert_eq!(event.currency, "EUR");
    }

    #[test]
    fn serializes_pixel_field_names() {
        let value = serde_json::to_value(LeadEvent::new("ai_tool", Some(6_300))).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "content_name": "ai_tool",
                "content_category": "MVP Request",
                "value": 6300,
                "currency": "EUR"
            })
        );
    }
}
