#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

pub mod commands;
pub mod config_file;
pub mod diagnostics;
pub mod errors;
pub mod host;
pub mod integrations;
mod jenkins_response;
pub mod job_status;
mod network;
pub mod settings;

pub use commands::{build_job, is_enabled, show_dashboard, CommandOutcome};
pub use errors::{ConfigFileError, RequestError};
pub use host::{OutputSurface, SelectionUi};
pub use integrations::{
    fetch_dashboard, fetch_job_detail, get_dashboard, get_job_detail, request_build,
    trigger_build, ActionResult, JobDetail,
};
pub use job_status::{JobStatus, JobSummary};
pub use settings::{Settings, SettingsResolver};
