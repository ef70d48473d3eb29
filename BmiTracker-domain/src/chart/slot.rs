use thiserror::Error;
use tracing::{debug, error};

use super::model::LineChart;

/// Errors raised by a chart backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// The canvas could not be acquired
    #[error("Canvas unavailable: {0}")]
    CanvasUnavailable(String),

    /// The backend refused to build the chart
    #[error("Chart construction failed: {0}")]
    Construction(String),
}

/// A charting library bound to one canvas
pub trait ChartBackendTrait {
    /// Handle to a constructed chart instance
    type Chart;

    /// Construct and attach a new chart
    fn create(&mut self, chart: &LineChart) -> Result<Self::Chart, ChartError>;

    /// Detach a chart and release what it holds
    fn destroy(&mut self, chart: Self::Chart);
}

/// Owner of the single chart instance attached to a canvas.
///
/// Rendering always destroys the previous instance before creating the next
/// one, so at most one instance is attached at any time. A failed creation
/// leaves the slot empty.
pub struct ChartSlot<B: ChartBackendTrait> {
    backend: B,
    current: Option<B::Chart>,
}

impl<B: ChartBackendTrait> ChartSlot<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    /// Replace the current chart with one built from `chart`
    pub fn render(&mut self, chart: &LineChart) -> Result<(), ChartError> {
        if let Some(previous) = self.current.take() {
            debug!("Destroying previous chart instance");
            self.backend.destroy(previous);
        }

        match self.backend.create(chart) {
            Ok(instance) => {
                debug!(points = chart.values().len(), "Chart instance created");
                self.current = Some(instance);
                Ok(())
            }
            Err(e) => {
                error!("Failed to create chart: {}", e);
                Err(e)
            }
        }
    }

    /// Destroy the current chart, if any
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            self.backend.destroy(previous);
        }
    }

    /// The currently attached chart instance
    pub fn current(&self) -> Option<&B::Chart> {
        self.current.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
