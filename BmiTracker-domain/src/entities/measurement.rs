use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Client-side validation errors for a measurement
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A form field did not hold a finite number
    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    /// A parsed value failed a range rule
    #[error("Validation error: {0}")]
    OutOfRange(String),
}

/// Raw form field values, exactly as typed into the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub weight: String,
    pub height: String,
}

impl FormSubmission {
    pub fn new(weight: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            height: height.into(),
        }
    }

    /// Parse and validate the fields into a measurement ready to send
    pub fn parse(&self) -> Result<MeasurementInput, ValidationError> {
        let weight = parse_field("weight", &self.weight)?;
        let height = parse_field("height", &self.height)?;
        MeasurementInput::new(weight, height)
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        }),
    }
}

/// A validated measurement. Serialises as the `POST /calculate` body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct MeasurementInput {
    /// Weight in kilograms
    #[validate(range(exclusive_min = 0.0, message = "Weight must be a positive number"))]
    pub weight: f64,

    /// Height in centimetres
    #[validate(range(exclusive_min = 0.0, message = "Height must be a positive number"))]
    pub height: f64,
}

impl MeasurementInput {
    /// Create a measurement, rejecting anything that is not strictly positive
    pub fn new(weight: f64, height: f64) -> Result<Self, ValidationError> {
        let input = Self { weight, height };
        input.check()?;
        Ok(input)
    }

    /// Run the range rules against the current values
    pub fn check(&self) -> Result<(), ValidationError> {
        // Range rules let NaN through
        if !self.weight.is_finite() || !self.height.is_finite() {
            return Err(ValidationError::OutOfRange(
                "Weight and height must be finite numbers".to_string(),
            ));
        }

        self.validate()
            .map_err(|errors| ValidationError::OutOfRange(describe(&errors)))
    }
}

/// Flatten validator output into one message, ordered by field name
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .iter()
        .map(|(field, errors)| {
            let error_msgs: Vec<String> = errors
                .iter()
                .map(|err| match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid {}", field),
                })
                .collect();
            format!("{}: {}", field, error_msgs.join(", "))
        })
        .collect::<Vec<String>>()
        .join("; ")
}
