// BmiTracker Domain
// This crate contains the controller logic for the BMI Tracker page

// Entities exchanged with the server and the page
pub mod entities;

// Line chart model and chart widget abstraction
pub mod chart;

// Page abstraction rendered by the controller
pub mod view;

// Services: remote API seam, history projection and the form controller
pub mod services;

// Testing utilities - only available with mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;
