//! Terminal front end
//!
//! Renders the page to any `Write` sink and turns input lines into page
//! events.

pub mod chart;
pub mod view;

pub use chart::{TextChart, TextChartBackend};
pub use view::ConsoleView;

use bmi_tracker_domain::entities::FormSubmission;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<weight> <height>`; missing fields are left empty
    Submit(FormSubmission),
    /// Reload the history
    Refresh,
    Quit,
    /// Blank line
    Nothing,
}

/// Interpret a line typed at the prompt
pub fn parse_command(line: &str) -> Command {
    let mut fields = line.split_whitespace();
    match fields.next() {
        None => Command::Nothing,
        Some("quit") | Some("exit") => Command::Quit,
        Some("history") | Some("refresh") => Command::Refresh,
        Some(weight) => {
            let height = fields.next().unwrap_or_default();
            Command::Submit(FormSubmission::new(weight, height))
        }
    }
}
