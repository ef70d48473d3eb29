//! Line chart model and the chart widget seam
//!
//! The controller never talks to a charting library directly. It builds a
//! [`LineChart`] and hands it to a [`ChartSlot`], which owns the single live
//! chart instance for the canvas.

pub mod model;
pub mod slot;

pub use model::{ChartSeries, LineChart, LineDataset};
pub use slot::{ChartBackendTrait, ChartError, ChartSlot};
