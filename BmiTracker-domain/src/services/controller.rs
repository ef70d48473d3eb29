use tracing::{debug, error, info, warn};

use crate::chart::{ChartBackendTrait, ChartError, ChartSeries, ChartSlot, LineChart};
use crate::entities::{BmiResult, FormSubmission, ValidationError};
use crate::services::api::{ApiError, BmiApiTrait};
use crate::services::history::HistoryProjection;
use crate::view::BmiViewTrait;

/// Shown when the form holds anything but two positive numbers
pub const VALIDATION_MESSAGE: &str = "Please enter positive numbers for weight and height.";

/// Shown when the calculation request fails without a server message
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while calculating BMI.";

/// Events the page delivers to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The page finished loading
    Ready,
    /// The form was submitted
    Submit(FormSubmission),
}

/// What the controller did in response to an event
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// History was fetched and rendered
    HistoryLoaded { entries: usize },
    /// History could not be fetched; the page was left as it was
    HistoryUnavailable(ApiError),
    /// The server calculated a BMI and it is on display
    Calculated(BmiResult),
    /// The form failed local validation; nothing was sent
    Rejected(ValidationError),
    /// The calculation request failed; an error is on display
    Failed(ApiError),
}

/// Controller for the BMI page.
///
/// Wires the page-ready and form-submit events to the server and renders
/// the answers into the view and the chart. Every failure ends up as an
/// inline message or a log line; none of them is fatal.
pub struct FormController<A, V, B: ChartBackendTrait> {
    api: A,
    view: V,
    chart: ChartSlot<B>,
}

impl<A, V, B> FormController<A, V, B>
where
    A: BmiApiTrait,
    V: BmiViewTrait,
    B: ChartBackendTrait,
{
    pub fn new(api: A, view: V, backend: B) -> Self {
        Self {
            api,
            view,
            chart: ChartSlot::new(backend),
        }
    }

    /// Route a page event to its handler
    pub async fn dispatch(&mut self, event: PageEvent) -> Outcome {
        match event {
            PageEvent::Ready => self.initialize().await,
            PageEvent::Submit(submission) => self.submit_measurement(&submission).await,
        }
    }

    /// Initial history fetch when the page is ready
    pub async fn initialize(&mut self) -> Outcome {
        info!("Page ready, loading history");
        self.load_history().await
    }

    /// Validate the form, ask the server for a BMI and render the answer
    pub async fn submit_measurement(&mut self, submission: &FormSubmission) -> Outcome {
        self.view.hide_result();
        self.view.hide_error();

        let input = match submission.parse() {
            Ok(input) => input,
            Err(e) => {
                warn!("Rejected measurement: {}", e);
                self.view.show_error(VALIDATION_MESSAGE);
                return Outcome::Rejected(e);
            }
        };

        debug!(weight = input.weight, height = input.height, "Requesting BMI calculation");

        match self.api.calculate(&input).await {
            Ok(result) => {
                info!(bmi = result.bmi, category = %result.category, "BMI calculated");
                self.view.show_result(&result);
                self.load_history().await;
                Outcome::Calculated(result)
            }
            Err(e) => {
                match e.server_message() {
                    Some(message) => {
                        warn!("Server rejected calculation: {}", message);
                        self.view.show_error(message);
                    }
                    None => {
                        error!("Error calculating BMI: {}", e);
                        self.view.show_error(GENERIC_FAILURE_MESSAGE);
                    }
                }
                Outcome::Failed(e)
            }
        }
    }

    /// Fetch the history, replace the list and redraw the chart
    pub async fn load_history(&mut self) -> Outcome {
        let entries = match self.api.history().await {
            Ok(entries) => entries,
            Err(e) => {
                error!("Error fetching history: {}", e);
                return Outcome::HistoryUnavailable(e);
            }
        };

        debug!(entries = entries.len(), "History fetched");

        let projection = HistoryProjection::from_history(&entries);
        self.view.render_history(&projection.listing);

        // A chart failure is already logged by the slot; the list stays usable
        let _ = self.render_chart(projection.series);

        Outcome::HistoryLoaded {
            entries: entries.len(),
        }
    }

    /// Dispose of the current chart and draw a new line chart
    pub fn render_chart(&mut self, series: ChartSeries) -> Result<(), ChartError> {
        self.chart.render(&LineChart::bmi_over_time(series))
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn chart(&self) -> &ChartSlot<B> {
        &self.chart
    }

    pub fn chart_mut(&mut self) -> &mut ChartSlot<B> {
        &mut self.chart
    }
}
