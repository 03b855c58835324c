//! The pieces an editor (or the terminal binary) provides around the client.

use crate::job_status::JobSummary;

/// A list picker, e.g. an editor quick panel.
pub trait SelectionUi {
    /// Returns the index of the picked job, or `None` when the user cancelled.
    fn select(&mut self, jobs: &[JobSummary]) -> Option<usize>;
}

/// A read-only panel the command results are written to.
pub trait OutputSurface {
    fn show(&mut self, text: &str);
}
