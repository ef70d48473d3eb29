pub mod api;
pub mod history;
pub mod controller;

// Services
// The remote API seam, the history projection and the form controller.

// Re-export service traits and the controller
pub use api::{ApiError, BmiApiTrait};
pub use controller::{FormController, Outcome, PageEvent};
pub use history::HistoryProjection;
