// Testing utilities for the domain layer
// Available to this crate's tests and, with the "mock" feature, to other crates

use crate::chart::{ChartBackendTrait, ChartError, LineChart};
use crate::entities::BmiResult;
use crate::view::{BmiViewTrait, HistoryListing};

/// View that records what the page would show
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub result_visible: bool,
    pub bmi_text: Option<String>,
    pub category_text: Option<String>,
    pub category_color: Option<String>,
    pub error_visible: bool,
    pub error_text: Option<String>,
    pub history: Option<HistoryListing>,
    /// How many times the history list was replaced
    pub history_renders: usize,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BmiViewTrait for RecordingView {
    fn hide_result(&mut self) {
        self.result_visible = false;
    }

    fn show_result(&mut self, result: &BmiResult) {
        self.bmi_text = Some(result.bmi.to_string());
        self.category_text = Some(result.category.clone());
        self.category_color = Some(result.color.clone());
        self.result_visible = true;
    }

    fn hide_error(&mut self) {
        self.error_visible = false;
    }

    fn show_error(&mut self, message: &str) {
        self.error_text = Some(message.to_string());
        self.error_visible = true;
    }

    fn render_history(&mut self, listing: &HistoryListing) {
        self.history = Some(listing.clone());
        self.history_renders += 1;
    }
}

/// Chart instance produced by [`RecordingChartBackend`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedChart {
    pub id: usize,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Chart backend that counts instances attached to its canvas
#[derive(Debug, Default)]
pub struct RecordingChartBackend {
    created: usize,
    destroyed: usize,
    charts: Vec<LineChart>,
    fail_next: bool,
}

impl RecordingChartBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `create` call fail
    pub fn fail_next_create(&mut self) {
        self.fail_next = true;
    }

    pub fn created(&self) -> usize {
        self.created
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    /// Instances currently attached to the canvas
    pub fn attached(&self) -> usize {
        self.created - self.destroyed
    }

    /// Every chart description handed to `create`, failed ones included
    pub fn charts(&self) -> &[LineChart] {
        &self.charts
    }

    pub fn last_chart(&self) -> Option<&LineChart> {
        self.charts.last()
    }
}

impl ChartBackendTrait for RecordingChartBackend {
    type Chart = RecordedChart;

    fn create(&mut self, chart: &LineChart) -> Result<Self::Chart, ChartError> {
        self.charts.push(chart.clone());

        if std::mem::take(&mut self.fail_next) {
            return Err(ChartError::Construction(
                "backend configured to fail".to_string(),
            ));
        }

        self.created += 1;
        Ok(RecordedChart {
            id: self.created,
            labels: chart.labels.clone(),
            values: chart.values().to_vec(),
        })
    }

    fn destroy(&mut self, _chart: Self::Chart) {
        self.destroyed += 1;
    }
}
