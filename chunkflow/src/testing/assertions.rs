//! Test assertions for step contributions.

use crate::core::StepContribution;

/// Asserts the read and write counts of a contribution.
pub fn assert_counts(contribution: &StepContribution, read: u64, write: u64) {
    assert_eq!(
        (contribution.read_count(), contribution.write_count()),
        (read, write),
        "Expected (read, write) = ({}, {}), got {}",
        read,
        write,
        contribution
    );
}

/// Asserts the exit code of a contribution.
pub fn assert_exit_code(contribution: &StepContribution, expected: &str) {
    assert_eq!(
        contribution.exit_status().exit_code,
        expected,
        "Expected exit code {}, got {}",
        expected,
        contribution.exit_status()
    );
}

/// Asserts that counts in `after` never went below those in `before`.
pub fn assert_counts_not_decreased(before: &StepContribution, after: &StepContribution) {
    assert!(
        after.read_count() >= before.read_count()
            && after.write_count() >= before.write_count()
            && after.filter_count() >= before.filter_count(),
        "Counts decreased: before {}, after {}",
        before,
        after
    );
}
