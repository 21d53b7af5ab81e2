use crate::config::Settings;
use gloo_net::http::Request;
use shared::{
    FormValues, HealthStatus, PredictionRequest, PredictionResponse, SubmitError, decode_health,
    decode_prediction,
};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> Result<RawResponse, SubmitError>;
    async fn get(&self, url: &str) -> Result<RawResponse, SubmitError>;
}

/// Browser fetch through gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl GlooTransport {
    async fn read(response: gloo_net::http::Response) -> Result<RawResponse, SubmitError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Decode(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

impl HttpTransport for GlooTransport {
    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: String,
    ) -> Result<RawResponse, SubmitError> {
        let response = Request::post(url)
            .header("Content-Type", content_type)
            .body(body)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        Self::read(response).await
    }

    async fn get(&self, url: &str) -> Result<RawResponse, SubmitError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        Self::read(response).await
    }
}

pub struct PredictionClient<T> {
    settings: Settings,
    transport: T,
}

impl<T: HttpTransport> PredictionClient<T> {
    pub fn new(settings: Settings, transport: T) -> Self {
        Self {
            settings,
            transport,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, SubmitError> {
        let body =
            serde_json::to_string(request).map_err(|e| SubmitError::Encode(e.to_string()))?;
        let raw = self
            .transport
            .post(&self.settings.predict_url(), JSON_CONTENT_TYPE, body)
            .await?;
        decode_prediction(raw.status, &raw.body)
    }

    /// Coerces the captured form and sends it; nothing is sent when a
    /// field cannot be coerced.
    pub async fn submit(&self, values: &FormValues) -> Result<PredictionResponse, SubmitError> {
        let request = PredictionRequest::from_form(values)?;
        log::info!("Submitting prediction request: {:?}", request);
        self.predict(&request).await
    }

    pub async fn health(&self) -> Result<HealthStatus, SubmitError> {
        let raw = self.transport.get(&self.settings.health_url()).await?;
        decode_health(raw.status, &raw.body)
    }
}
