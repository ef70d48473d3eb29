use std::io::{self, Write};

use tracing::debug;

use bmi_tracker_domain::chart::{ChartBackendTrait, ChartError, LineChart};

/// Widest bar drawn for the largest value
const BAR_WIDTH: usize = 40;

/// A chart drawn by [`TextChartBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChart {
    pub id: usize,
    /// Rows written for this chart, title included
    pub rows: usize,
}

/// Draws line charts as horizontal ASCII bars, one row per point
pub struct TextChartBackend<W: Write> {
    out: W,
    next_id: usize,
    attached: Option<usize>,
}

impl<W: Write> TextChartBackend<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            next_id: 1,
            attached: None,
        }
    }

    /// Id of the chart currently on the canvas
    pub fn attached(&self) -> Option<usize> {
        self.attached
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, chart: &LineChart) -> io::Result<usize> {
        let lines = render_rows(chart);
        for line in &lines {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(lines.len())
    }
}

/// Text rows for a chart: a title, then one bar per point
pub fn render_rows(chart: &LineChart) -> Vec<String> {
    if chart.values().is_empty() {
        return vec![format!("{}: (no data)", chart.dataset.label)];
    }

    let min = chart.y_min();
    let span = chart.y_max() - min;
    let label_width = chart.labels.iter().map(String::len).max().unwrap_or(0);

    let mut rows = vec![format!("{}:", chart.dataset.label)];
    for (label, value) in chart.labels.iter().zip(chart.values()) {
        let filled = if span > 0.0 {
            (((value - min) / span) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        rows.push(format!(
            "  {:<width$} |{} {}",
            label,
            "#".repeat(filled.min(BAR_WIDTH)),
            value,
            width = label_width
        ));
    }
    rows
}

impl<W: Write> ChartBackendTrait for TextChartBackend<W> {
    type Chart = TextChart;

    fn create(&mut self, chart: &LineChart) -> Result<Self::Chart, ChartError> {
        let rows = self
            .draw(chart)
            .map_err(|e| ChartError::CanvasUnavailable(e.to_string()))?;

        let id = self.next_id;
        self.next_id += 1;
        self.attached = Some(id);
        Ok(TextChart { id, rows })
    }

    fn destroy(&mut self, chart: Self::Chart) {
        debug!(id = chart.id, "Detaching text chart");
        if self.attached == Some(chart.id) {
            self.attached = None;
        }
    }
}
