use std::io::Write;

use tracing::warn;

use bmi_tracker_domain::entities::BmiResult;
use bmi_tracker_domain::view::{BmiViewTrait, HistoryListing};

/// View that prints the page to a terminal.
///
/// Output is append-only, so hiding a panel only changes its state; showing
/// a panel prints it.
pub struct ConsoleView<W: Write> {
    out: W,
    result_visible: bool,
    error_visible: bool,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            result_visible: false,
            error_visible: false,
        }
    }

    pub fn result_visible(&self) -> bool {
        self.result_visible
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_lines(&mut self, lines: &[String]) {
        let written = lines
            .iter()
            .try_for_each(|line| writeln!(self.out, "{}", line))
            .and_then(|_| self.out.flush());

        if let Err(e) = written {
            warn!("Failed to write to console: {}", e);
        }
    }
}

impl<W: Write> BmiViewTrait for ConsoleView<W> {
    fn hide_result(&mut self) {
        self.result_visible = false;
    }

    fn show_result(&mut self, result: &BmiResult) {
        self.result_visible = true;
        self.write_lines(&[
            format!("Your BMI: {}", result.bmi),
            format!("Category: {} [{}]", result.category, result.color),
        ]);
    }

    fn hide_error(&mut self) {
        self.error_visible = false;
    }

    fn show_error(&mut self, message: &str) {
        self.error_visible = true;
        self.write_lines(&[format!("Error: {}", message)]);
    }

    fn render_history(&mut self, listing: &HistoryListing) {
        let mut lines = vec!["History:".to_string()];
        lines.extend(listing.item_texts().into_iter().map(|item| format!("  - {}", item)));
        self.write_lines(&lines);
    }
}
