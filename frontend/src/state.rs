use shared::{Field, HealthStatus, PredictionResponse, SubmitError, format_confidence};
use std::collections::HashMap;

pub const INVALID_BORDER: &str = "#f44";
pub const NEUTRAL_BORDER: &str = "#e0e0e0";

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub prediction_text: String,
    pub confidence_text: Option<String>,
}

impl From<&PredictionResponse> for ResultPanel {
    fn from(response: &PredictionResponse) -> Self {
        Self {
            prediction_text: response.prediction.clone(),
            confidence_text: response.confidence.map(format_confidence),
        }
    }
}

/// Everything the form renders that is not a raw control value.
#[derive(Debug, Default)]
pub struct FormState {
    busy: bool,
    result: Option<ResultPanel>,
    error_text: Option<String>,
    last_error: Option<SubmitError>,
    borders: HashMap<Field, &'static str>,
    scroll_pending: bool,
}

impl FormState {
    /// Returns false when a submission is already in flight.
    pub fn begin_submission(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.result = None;
        self.error_text = None;
        self.last_error = None;
        self.busy = true;
        true
    }

    pub fn complete(&mut self, outcome: Result<PredictionResponse, SubmitError>) {
        match outcome {
            Ok(response) => {
                self.result = Some(ResultPanel::from(&response));
                self.scroll_pending = true;
            }
            Err(err) => {
                if let SubmitError::HttpStatus {
                    detail: Some(detail),
                    ..
                } = &err
                {
                    log::error!("Error: {} ({})", err, detail);
                } else {
                    log::error!("Error: {}", err);
                }
                self.error_text = Some(err.user_message());
                self.last_error = Some(err);
            }
        }
        self.busy = false;
    }

    pub fn mark_invalid(&mut self, field: Field) {
        self.borders.insert(field, INVALID_BORDER);
    }

    pub fn clear_invalid(&mut self, field: Field) {
        self.borders.insert(field, NEUTRAL_BORDER);
    }

    /// Inline border colour for a field; `None` until the field has seen
    /// an invalid or input event.
    pub fn border_color(&self, field: Field) -> Option<&'static str> {
        self.borders.get(&field).copied()
    }

    /// Consumes a pending scroll-to-result request.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn submit_disabled(&self) -> bool {
        self.busy
    }

    pub fn loader_visible(&self) -> bool {
        self.busy
    }

    pub fn result(&self) -> Option<&ResultPanel> {
        self.result.as_ref()
    }

    pub fn result_visible(&self) -> bool {
        self.result.is_some()
    }

    pub fn confidence_visible(&self) -> bool {
        self.result
            .as_ref()
            .is_some_and(|r| r.confidence_text.is_some())
    }

    pub fn error_text(&self) -> Option<&str> {
        self.error_text.as_deref()
    }

    pub fn error_visible(&self) -> bool {
        self.error_text.is_some()
    }

    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }
}

/// What the startup probe learned about the prediction service.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendStatus {
    Checking,
    Ready,
    ModelMissing,
    Unreachable(String),
}

impl BackendStatus {
    pub fn from_probe(probe: Result<HealthStatus, SubmitError>) -> Self {
        match probe {
            Ok(health) if health.model_loaded => BackendStatus::Ready,
            Ok(health) => {
                log::warn!("Prediction service reports no model: {}", health.message);
                BackendStatus::ModelMissing
            }
            Err(err) => {
                log::warn!("Prediction service unreachable: {}", err);
                BackendStatus::Unreachable(err.to_string())
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            BackendStatus::Checking => "Checking prediction service...".to_string(),
            BackendStatus::Ready => "Prediction service is ready".to_string(),
            BackendStatus::ModelMissing => {
                "Prediction service is running but has no model loaded".to_string()
            }
            BackendStatus::Unreachable(reason) => {
                format!("Prediction service unreachable ({})", reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn response(confidence: Option<f64>) -> PredictionResponse {
        PredictionResponse {
            prediction: "Overweight_Level_II".into(),
            confidence,
            input_data: None,
        }
    }

    #[test]
    fn begin_enters_busy_and_hides_panels() {
        let mut state = FormState::default();
        state.complete(Err(SubmitError::Network("offline".into())));
        assert!(state.error_visible());

        assert!(state.begin_submission());
        assert!(state.is_busy());
        assert!(state.submit_disabled());
        assert!(state.loader_visible());
        assert!(!state.error_visible());
        assert!(!state.result_visible());
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn second_begin_while_busy_is_refused() {
        let mut state = FormState::default();
        assert!(state.begin_submission());
        assert!(!state.begin_submission());
    }

    #[test]
    fn success_shows_result_with_confidence() {
        let mut state = FormState::default();
        state.begin_submission();
        state.complete(Ok(response(Some(0.823))));

        assert!(state.result_visible());
        assert!(!state.error_visible());
        assert!(state.confidence_visible());
        assert_eq!(
            state.result(),
            Some(&ResultPanel {
                prediction_text: "Overweight_Level_II".into(),
                confidence_text: Some("82.3%".into()),
            })
        );
        assert!(!state.submit_disabled());
        assert!(!state.loader_visible());
    }

    #[test]
    fn missing_confidence_hides_confidence_panel() {
        let mut state = FormState::default();
        state.begin_submission();
        state.complete(Ok(response(None)));

        assert!(state.result_visible());
        assert!(!state.confidence_visible());
    }

    #[test]
    fn http_failure_shows_error_and_keeps_cause() {
        let mut state = FormState::default();
        state.begin_submission();
        state.complete(Err(SubmitError::HttpStatus {
            code: 500,
            detail: None,
        }));

        assert!(state.error_visible());
        assert!(!state.result_visible());
        assert!(state.error_text().unwrap().contains("status: 500"));
        assert!(matches!(
            state.last_error(),
            Some(SubmitError::HttpStatus { code: 500, .. })
        ));
        assert!(!state.submit_disabled());
        assert!(!state.loader_visible());
    }

    #[test]
    fn network_failure_leaves_busy_state() {
        let mut state = FormState::default();
        state.begin_submission();
        state.complete(Err(SubmitError::Network("TypeError: Failed to fetch".into())));

        assert!(!state.is_busy());
        assert!(!state.loader_visible());
        assert!(state.error_text().unwrap().ends_with("Error: TypeError: Failed to fetch"));
    }

    #[test]
    fn scroll_is_requested_once_after_success() {
        let mut state = FormState::default();
        assert!(!state.take_scroll_request());
        state.begin_submission();
        state.complete(Ok(response(Some(0.5))));
        assert!(state.take_scroll_request());
        assert!(!state.take_scroll_request());
    }

    #[test]
    fn invalid_then_input_resets_border() {
        let mut state = FormState::default();
        assert_eq!(state.border_color(Field::Age), None);

        state.mark_invalid(Field::Age);
        assert_eq!(state.border_color(Field::Age), Some(INVALID_BORDER));
        assert_eq!(state.border_color(Field::Weight), None);

        state.clear_invalid(Field::Age);
        assert_eq!(state.border_color(Field::Age), Some(NEUTRAL_BORDER));
    }

    #[test]
    fn probe_maps_health_to_status() {
        let health = |model_loaded| HealthStatus {
            message: "Obesity Classification API is running".into(),
            status: "healthy".into(),
            model_loaded,
        };
        assert_eq!(BackendStatus::from_probe(Ok(health(true))), BackendStatus::Ready);
        assert_eq!(
            BackendStatus::from_probe(Ok(health(false))),
            BackendStatus::ModelMissing
        );
        assert_eq!(
            BackendStatus::from_probe(Err(SubmitError::Network("refused".into()))),
            BackendStatus::Unreachable("refused".into())
        );
    }
}
