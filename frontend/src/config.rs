pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Deployment settings handed to the root component.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_url: String,
}

impl Settings {
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Uses `PREDICTION_API_URL` when it was set at build time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("PREDICTION_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.api_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/", self.api_url)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls() {
        let settings = Settings::default();
        assert_eq!(settings.predict_url(), "http://localhost:8000/predict");
        assert_eq!(settings.health_url(), "http://localhost:8000/");
    }

    #[test]
    fn strips_trailing_slash() {
        let settings = Settings::new("https://obesity-api.onrender.com/");
        assert_eq!(
            settings.predict_url(),
            "https://obesity-api.onrender.com/predict"
        );
    }
}
