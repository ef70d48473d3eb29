// Entities for the BMI Tracker client
// Everything that crosses the HTTP boundary or the page boundary lives here

pub mod measurement;
pub mod bmi;

pub use bmi::{BmiResult, HistoryEntry, ServerError};
pub use measurement::{FormSubmission, MeasurementInput, ValidationError};
