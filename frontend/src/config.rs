
pub const SITE_NAME: &str = "MVP Sprint";
pub const SITE_COMPANY: &str = "Lathos";

// Element id the floating button and the promo links scroll to.
pub const LEAD_FORM_ANCHOR: &str = "lead-form";

pub const LANGUAGE_STORAGE_KEY: &str = "language";
pub const THEME_STORAGE_KEY: &str = "theme";

pub const REVIEWS_INTERVAL_MS: u32 = 5_000;

pub const ENROLLMENT_URL: &str = "https://ac-api.lathos.club/api/enroll_vsl";

pub const LEAD_CATEGORY: &str = "MVP Request";
pub const LEAD_CURRENCY: &str = "EUR";

#[cfg(debug_assertions)]
pub fn lead_webhook_url() -> &'static str {
    "http://localhost:3000/api/leads/echo"  // Echo route of the dev site server (backend, debug build)
}

#[cfg(not(debug_assertions))]
pub fn lead_webhook_url() -> &'static str {
    "https://hook.eu2.make.com/mvp-sprint-leads"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(debug_assertions)]
    #[test]
    fn debug_webhook_targets_local_site_server() {
        assert_eq!(lead_webhook_url(), "http://localhost:3000/api/leads/echo");
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn release_webhook_is_https() {
        assert!(lead_webhook_url().starts_with("https://"));
    }
}
