use crate::host::{OutputSurface, SelectionUi};
use crate::integrations::{get_dashboard, get_job_detail, trigger_build};
use crate::job_status::JobSummary;
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// No server url is configured.
    Disabled,
    NoJobs,
    Cancelled,
    /// The text that went to the output surface.
    Shown(String),
}

pub fn is_enabled(settings: &Settings) -> bool {
    settings.is_configured()
}

/// List the jobs, then show the detail document of the picked one.
pub fn show_dashboard<U, O>(settings: &Settings, ui: &mut U, output: &mut O) -> CommandOutcome
where
    U: SelectionUi,
    O: OutputSurface,
{
    run_on_picked_job(settings, ui, output, get_job_detail)
}

/// List the jobs, then request a build of the picked one.
pub fn build_job<U, O>(settings: &Settings, ui: &mut U, output: &mut O) -> CommandOutcome
where
    U: SelectionUi,
    O: OutputSurface,
{
    run_on_picked_job(settings, ui, output, trigger_build)
}

fn run_on_picked_job<U, O, F>(
    settings: &Settings,
    ui: &mut U,
    output: &mut O,
    action: F,
) -> CommandOutcome
where
    U: SelectionUi,
    O: OutputSurface,
    F: FnOnce(&Settings, &str) -> String,
{
    if !is_enabled(settings) {
        return CommandOutcome::Disabled;
    }

    let jobs = get_dashboard(settings);
    if jobs.is_empty() {
        return CommandOutcome::NoJobs;
    }

    let job = match pick(ui, &jobs) {
        Some(job) => job,
        None => return CommandOutcome::Cancelled,
    };

    let text = action(settings, &job.name);
    output.show(&text);
    CommandOutcome::Shown(text)
}

fn pick<'a, U: SelectionUi>(ui: &mut U, jobs: &'a [JobSummary]) -> Option<&'a JobSummary> {
    let index = ui.select(jobs)?;
    let job = jobs.get(index);
    if job.is_none() {
        warn!(
            "--Jenkins--: Picked job #{} but only {} were listed.",
            index,
            jobs.len()
        );
    }
    job
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job_status::JobStatus;

    struct Picker(Option<usize>);

    impl SelectionUi for Picker {
        fn select(&mut self, _jobs: &[JobSummary]) -> Option<usize> {
            self.0
        }
    }

    #[derive(Default)]
    struct Panel(Vec<String>);

    impl OutputSurface for Panel {
        fn show(&mut self, text: &str) {
            self.0.push(text.to_string());
        }
    }

    #[test]
    fn commands_are_disabled_without_url() {
        let mut panel = Panel::default();
        let outcome = show_dashboard(&Settings::default(), &mut Picker(Some(0)), &mut panel);
        assert_eq!(outcome, CommandOutcome::Disabled);
        assert!(panel.0.is_empty());
    }

    #[test]
    fn unreachable_dashboard_lists_no_jobs() {
        let settings = Settings::with_url("not a url");
        let mut panel = Panel::default();
        assert_eq!(
            build_job(&settings, &mut Picker(Some(0)), &mut panel),
            CommandOutcome::NoJobs
        );
        assert!(panel.0.is_empty());
    }

    #[test]
    fn out_of_range_pick_is_ignored() {
        let jobs = vec![JobSummary {
            name: "app".to_string(),
            status: JobStatus::Success,
        }];
        assert!(pick(&mut Picker(Some(3)), &jobs).is_none());
        assert_eq!(pick(&mut Picker(Some(0)), &jobs), Some(&jobs[0]));
        assert!(pick(&mut Picker(None), &jobs).is_none());
    }
}
