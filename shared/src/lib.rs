pub mod error;
pub mod fields;
pub mod prediction;

pub use error::SubmitError;
pub use fields::{AlcoholIntake, Field, FormValues, Gender, HighCaloricFood, SelectOption};
pub use prediction::{
    HealthStatus, PredictionRequest, PredictionResponse, decode_health, decode_prediction,
    format_confidence,
};
