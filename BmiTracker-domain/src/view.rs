//! The page the controller renders into
//!
//! A view owns the result panel, the error panel and the history list.
//! Implementations decide how those are drawn; the controller only decides
//! what they show.

use crate::entities::{BmiResult, HistoryEntry};

/// Text of the single item shown when there is no history
pub const HISTORY_PLACEHOLDER: &str = "No previous BMI results.";

/// Contents of the history list
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryListing {
    /// Nothing stored yet; show the placeholder item
    Placeholder,
    /// One item per entry, in server order
    Entries(Vec<HistoryEntry>),
}

impl HistoryListing {
    pub fn from_history(entries: &[HistoryEntry]) -> Self {
        if entries.is_empty() {
            HistoryListing::Placeholder
        } else {
            HistoryListing::Entries(entries.to_vec())
        }
    }

    /// Number of list items the page should show
    pub fn item_count(&self) -> usize {
        match self {
            HistoryListing::Placeholder => 1,
            HistoryListing::Entries(entries) => entries.len(),
        }
    }

    /// Plain-text rendering of each list item
    pub fn item_texts(&self) -> Vec<String> {
        match self {
            HistoryListing::Placeholder => vec![HISTORY_PLACEHOLDER.to_string()],
            HistoryListing::Entries(entries) => entries.iter().map(item_text).collect(),
        }
    }
}

fn item_text(entry: &HistoryEntry) -> String {
    format!(
        "BMI: {} Category: {} Date: {}",
        entry.bmi, entry.category, entry.timestamp
    )
}

/// Trait for the page the controller drives
pub trait BmiViewTrait {
    /// Hide the result panel
    fn hide_result(&mut self);

    /// Fill the result panel with bmi, category and colour, then show it
    fn show_result(&mut self, result: &BmiResult);

    /// Hide the error panel
    fn hide_error(&mut self);

    /// Put `message` in the error panel and show it
    fn show_error(&mut self, message: &str);

    /// Replace the whole history list
    fn render_history(&mut self, listing: &HistoryListing);
}
