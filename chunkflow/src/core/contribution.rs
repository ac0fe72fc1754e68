//! Progress accumulated by a step across tasklet invocations.

use super::ExitStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Read/write counts and exit status for one running step.
///
/// The driver owns the contribution and lends it to each `execute` call.
/// Counts only ever grow; there is no way to decrement or reset them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepContribution {
    step_name: String,
    read_count: u64,
    write_count: u64,
    filter_count: u64,
    exit_status: ExitStatus,
}

impl StepContribution {
    /// Creates a contribution for the named step.
    #[must_use]
    pub fn new(step_name: impl Into<String>) -> Self {
        Self {
            step_name: step_name.into(),
            ..Default::default()
        }
    }

    /// The step this contribution belongs to.
    #[must_use]
    pub fn step_name(&self) -> &str {
        &self.step_name
    }

    /// Records one successfully read item.
    pub fn increment_read_count(&mut self) {
        self.read_count = self.read_count.saturating_add(1);
    }

    /// Records `count` successfully written items.
    pub fn increment_write_count(&mut self, count: u64) {
        self.write_count = self.write_count.saturating_add(count);
    }

    /// Records `count` items dropped on purpose by an item processor.
    pub fn increment_filter_count(&mut self, count: u64) {
        self.filter_count = self.filter_count.saturating_add(count);
    }

    /// Items read so far.
    #[must_use]
    pub fn read_count(&self) -> u64 {
        self.read_count
    }

    /// Items written so far.
    #[must_use]
    pub fn write_count(&self) -> u64 {
        self.write_count
    }

    /// Items filtered so far.
    #[must_use]
    pub fn filter_count(&self) -> u64 {
        self.filter_count
    }

    /// The current exit status.
    #[must_use]
    pub fn exit_status(&self) -> &ExitStatus {
        &self.exit_status
    }

    /// Replaces the exit status.
    pub fn set_exit_status(&mut self, status: ExitStatus) {
        self.exit_status = status;
    }
}

impl fmt::Display for StepContribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[StepContribution: step={}, read={}, written={}, filtered={}, exitStatus={}]",
            self.step_name, self.read_count, self.write_count, self.filter_count, self.exit_status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contribution_is_zeroed() {
        let contribution = StepContribution::new("load");
        assert_eq!(contribution.step_name(), "load");
        assert_eq!(contribution.read_count(), 0);
        assert_eq!(contribution.write_count(), 0);
        assert_eq!(contribution.filter_count(), 0);
        assert_eq!(contribution.exit_status(), &ExitStatus::executing());
    }

    #[test]
    fn test_counts_accumulate() {
        let mut contribution = StepContribution::new("load");
        contribution.increment_read_count();
        contribution.increment_read_count();
        contribution.increment_write_count(2);
        contribution.increment_write_count(0);
        contribution.increment_filter_count(1);

        assert_eq!(contribution.read_count(), 2);
        assert_eq!(contribution.write_count(), 2);
        assert_eq!(contribution.filter_count(), 1);
    }

    #[test]
    fn test_write_count_saturates() {
        let mut contribution = StepContribution::new("load");
        contribution.increment_write_count(u64::MAX);
        contribution.increment_write_count(5);
        assert_eq!(contribution.write_count(), u64::MAX);
    }

    #[test]
    fn test_set_exit_status() {
        let mut contribution = StepContribution::new("load");
        contribution.set_exit_status(ExitStatus::completed());
        assert_eq!(contribution.exit_status().exit_code, ExitStatus::COMPLETED);
    }

    #[test]
    fn test_display() {
        let mut contribution = StepContribution::new("load");
        contribution.increment_read_count();
        assert_eq!(
            contribution.to_string(),
            "[StepContribution: step=load, read=1, written=0, filtered=0, exitStatus=EXECUTING]"
        );
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut contribution = StepContribution::new("load");
        contribution.increment_write_count(3);

        let json = serde_json::to_value(&contribution).unwrap();
        assert_eq!(json["write_count"], 3);
        assert_eq!(json["exit_status"]["exit_code"], "EXECUTING");
    }
}
