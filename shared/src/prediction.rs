use crate::error::SubmitError;
use crate::fields::{AlcoholIntake, Field, FormValues, Gender, HighCaloricFood};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub weight: f64,
    pub height: f64,
    pub age: i32,
    pub gender: Gender,
    pub main_meals: i32,
    pub high_caloric_food: HighCaloricFood,
    pub vegetable_intake: i32,
    pub alcohol_intake: AlcoholIntake,
}

impl PredictionRequest {
    /// Coerces the raw control values into a request.
    ///
    /// Range checks are left to the form's declarative constraints; this
    /// only rejects values that cannot be represented at all.
    pub fn from_form(values: &FormValues) -> Result<Self, SubmitError> {
        Ok(Self {
            weight: parse_float(values, Field::Weight)?,
            height: parse_float(values, Field::Height)?,
            age: parse_int(values, Field::Age)?,
            gender: parse_choice(values, Field::Gender)?,
            main_meals: parse_int(values, Field::MainMeals)?,
            high_caloric_food: parse_choice(values, Field::HighCaloricFood)?,
            vegetable_intake: parse_int(values, Field::VegetableIntake)?,
            alcohol_intake: parse_choice(values, Field::AlcoholIntake)?,
        })
    }
}

fn invalid(values: &FormValues, field: Field) -> SubmitError {
    SubmitError::InvalidField {
        field,
        value: values.get(field).to_string(),
    }
}

fn parse_float(values: &FormValues, field: Field) -> Result<f64, SubmitError> {
    // "NaN" and "inf" parse, but would serialize as null
    values
        .get(field)
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(values, field))
}

fn parse_int(values: &FormValues, field: Field) -> Result<i32, SubmitError> {
    values
        .get(field)
        .trim()
        .parse::<i32>()
        .map_err(|_| invalid(values, field))
}

fn parse_choice<T: FromStr>(values: &FormValues, field: Field) -> Result<T, SubmitError> {
    T::from_str(values.get(field)).map_err(|_| invalid(values, field))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    // Echo of the accepted input; informational, so kept untyped.
    #[serde(default)]
    pub input_data: Option<serde_json::Value>,
}

/// Body of the service's root endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn decode<T: serde::de::DeserializeOwned>(status: u16, body: &str) -> Result<T, SubmitError> {
    if !(200..300).contains(&status) {
        return Err(SubmitError::HttpStatus {
            code: status,
            detail: error_detail(body),
        });
    }
    serde_json::from_str(body).map_err(|e| SubmitError::Decode(e.to_string()))
}

/// Interprets a `/predict` reply. Any non-2xx status is a failure.
pub fn decode_prediction(status: u16, body: &str) -> Result<PredictionResponse, SubmitError> {
    decode(status, body)
}

pub fn decode_health(status: u16, body: &str) -> Result<HealthStatus, SubmitError> {
    decode(status, body)
}

/// Renders a [0, 1] score as a percentage with one decimal, e.g. `82.3%`.
///
/// Ties round up (`0.3125` gives `31.3%`); `{:.1}` alone would round them
/// to even.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", (confidence * 1000.0).round() / 10.0)
}
