use chrono::{Local, NaiveDate};

/// Running total of purchase receipts for the current trading session.
#[derive(Debug, Clone, PartialEq)]
pub struct GainTracker {
    opened_on: NaiveDate,
    total: f64,
}

impl Default for GainTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GainTracker {
    /// Starts a tracker at zero for today's local date.
    pub fn new() -> Self {
        Self::starting_on(Local::now().date_naive())
    }

    pub fn starting_on(opened_on: NaiveDate) -> Self {
        Self {
            opened_on,
            total: 0.0,
        }
    }

    pub fn add_gain(&mut self, amount: f64) {
        self.total += amount;
        tracing::debug!(amount, total = self.total, "gain recorded");
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn opened_on(&self) -> NaiveDate {
        self.opened_on
    }

    /// Bordered one-line summary. Each of the three rows ends with a newline.
    pub fn view_gain(&self) -> String {
        let line = format!("| Today's Total Gain: {:.2} |", self.total);
        let border = "=".repeat(line.chars().count());
        format!("{border}\n{line}\n{border}\n")
    }
}
