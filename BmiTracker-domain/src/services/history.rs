use crate::chart::{ChartSeries, LineChart};
use crate::entities::HistoryEntry;
use crate::view::HistoryListing;

/// What a freshly fetched history turns into on the page
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryProjection {
    /// Items for the history list
    pub listing: HistoryListing,
    /// Parallel label/value sequences for the chart
    pub series: ChartSeries,
}

impl HistoryProjection {
    pub fn from_history(entries: &[HistoryEntry]) -> Self {
        Self {
            listing: HistoryListing::from_history(entries),
            series: ChartSeries::from_history(entries),
        }
    }

    /// The chart to draw for this history
    pub fn chart(&self) -> LineChart {
        LineChart::bmi_over_time(self.series.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_projection() {
        let projection = HistoryProjection::from_history(&[]);
        assert_eq!(projection.listing, HistoryListing::Placeholder);
        assert!(projection.series.is_empty());
        assert!(projection.chart().labels.is_empty());
    }

    #[test]
    fn test_projection_keeps_list_and_series_aligned() {
        let entries: Vec<HistoryEntry> = (0..10)
            .map(|i| {
                HistoryEntry::new(
                    18.0 + i as f64,
                    "Normal weight",
                    "#5cb85c",
                    &format!("2024-03-{:02} 08:00:00", 10 - i),
                )
            })
            .collect();

        let projection = HistoryProjection::from_history(&entries);
        assert_eq!(projection.listing.item_count(), 10);
        assert_eq!(projection.series.len(), 10);

        let timestamps: Vec<&str> = entries.iter().map(|e| e.timestamp.as_str()).collect();
        assert_eq!(projection.series.labels, timestamps);

        let bmis: Vec<f64> = entries.iter().map(|e| e.bmi).collect();
        assert_eq!(projection.chart().values(), bmis.as_slice());
    }
}
