// BmiTracker client
//
// HTTP implementation of the BMI API and a terminal front end for the
// form controller.

pub mod config;
pub mod http;
pub mod console;

pub use config::{ClientConfig, ConfigError};
pub use http::HttpBmiApi;
