use gloo_net::http::Request;
use crate::config;
use crate::lead::model::{LeadRecord, RiskData};

pub const RATE_LIMIT_MESSAGE: &str =
    "Too many submissions. Please wait 60 seconds and try again.";
pub const VALIDATION_MESSAGE: &str =
    "Please check your inputs. Valid email and fleet size are required.";
pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again later.";
pub const NETWORK_MESSAGE: &str = "Network error";

#[derive(Clone, Debug, PartialEq)]
pub struct SubmitOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl SubmitOutcome {
    pub fn ok() -> Self {
        Self { success: true, error: None }
    }

    pub fn failure(message: &str) -> Self {
        Self { success: false, error: Some(message.to_string()) }
    }
}

/// Status-code to user-facing-outcome mapping for the lead POST.
pub fn outcome_for_status(status: u16) -> SubmitOutcome {
    match status {
        200..=299 => SubmitOutcome::ok(),
        429 => SubmitOutcome::failure(RATE_LIMIT_MESSAGE),
        422 => SubmitOutcome::failure(VALIDATION_MESSAGE),
        _ => SubmitOutcome::failure(GENERIC_MESSAGE),
    }
}

/// Preview lookup by DOT number. Any failure (non-2xx, transport, parse) is
/// swallowed into `None`; the wizard treats them all as "not found".
pub async fn fetch_risk_preview(dot_number: &str) -> Option<RiskData> {
    let url = format!(
        "{}/api/v1/leads/audit/preview/{}",
        config::get_backend_url(),
        dot_number.trim()
    );
    match Request::get(&url).send().await {
        Ok(response) if response.ok() => match response.json::<RiskData>().await {
            Ok(risk) => Some(risk),
            Err(e) => {
                gloo_console::error!("Failed to parse preview response:", e.to_string());
                None
            }
        },
        Ok(response) => {
            gloo_console::error!("Preview lookup failed with status:", response.status());
            None
        }
        Err(e) => {
            gloo_console::error!("Preview lookup network error:", e.to_string());
            None
        }
    }
}

/// Posts the completed record. Never retried here; the wizard surfaces the
/// error string and leaves retrying to the user.
pub async fn submit_lead(record: &LeadRecord) -> SubmitOutcome {
    let url = format!("{}/api/v1/leads/", config::get_backend_url());
    let request = match Request::post(&url)
        .header("Content-Type", "application/json")
        .json(record)
    {
        Ok(request) => request,
        Err(e) => {
            gloo_console::error!("Failed to serialize lead:", e.to_string());
            return SubmitOutcome::failure(GENERIC_MESSAGE);
        }
    };
    match request.send().await {
        Ok(response) => outcome_for_status(response.status()),
        Err(e) => {
            gloo_console::error!("Lead submit network error:", e.to_string());
            SubmitOutcome::failure(NETWORK_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_carry_no_error_string() {
        for status in [200u16, 201, 204] {
            let outcome = outcome_for_status(status);
            assert!(outcome.success);
            assert_eq!(outcome.error, None);
        }
    }

    #[test]
    fn rate_limit_maps_to_rate_limit_message() {
        let outcome = outcome_for_status(429);
        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some(RATE_LIMIT_MESSAGE));
    }

    #[test]
    fn validation_failure_maps_to_validation_message() {
        let outcome = outcome_for_status(422);
        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some(VALIDATION_MESSAGE));
    }

    #[test]
    fn other_failures_map_to_generic_message() {
        for status in [400u16, 404, 500, 503] {
            let outcome = outcome_for_status(status);
            assert!(!outcome.success);
            assert_eq!(outcome.error.as_deref(), Some(GENERIC_MESSAGE));
        }
    }
}
