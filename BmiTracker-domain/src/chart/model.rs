use serde::Serialize;

use crate::entities::HistoryEntry;

/// Dataset label shown in the chart legend
pub const DATASET_LABEL: &str = "BMI Over Time";
pub const BORDER_COLOR: &str = "rgba(75, 192, 192, 1)";
pub const BACKGROUND_COLOR: &str = "rgba(75, 192, 192, 0.2)";
pub const BORDER_WIDTH: u32 = 2;

/// Two parallel sequences derived from the history: x labels and y values
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Timestamps become labels and bmi values become points, in history order
    pub fn from_history(entries: &[HistoryEntry]) -> Self {
        let (labels, values) = entries
            .iter()
            .map(|entry| (entry.timestamp.clone(), entry.bmi))
            .unzip();
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Single line dataset with its styling
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub border_width: u32,
}

/// Everything a backend needs to draw the BMI line chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChart {
    pub labels: Vec<String>,
    pub dataset: LineDataset,
    pub responsive: bool,
    pub y_begin_at_zero: bool,
}

impl LineChart {
    /// The BMI-over-time chart for a series
    pub fn bmi_over_time(series: ChartSeries) -> Self {
        Self {
            labels: series.labels,
            dataset: LineDataset {
                label: DATASET_LABEL.to_string(),
                data: series.values,
                border_color: BORDER_COLOR.to_string(),
                background_color: BACKGROUND_COLOR.to_string(),
                border_width: BORDER_WIDTH,
            },
            responsive: true,
            y_begin_at_zero: true,
        }
    }

    /// The plotted values
    pub fn values(&self) -> &[f64] {
        &self.dataset.data
    }

    /// Lower bound of the y axis for the given data
    pub fn y_min(&self) -> f64 {
        let data_min = self.values().iter().copied().fold(f64::INFINITY, f64::min);
        match (data_min.is_finite(), self.y_begin_at_zero) {
            (false, _) => 0.0,
            (true, true) => data_min.min(0.0),
            (true, false) => data_min,
        }
    }

    /// Upper bound of the y axis for the given data
    pub fn y_max(&self) -> f64 {
        let data_max = self.values().iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if data_max.is_finite() {
            data_max
        } else {
            0.0
        }
    }
}
