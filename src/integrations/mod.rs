pub mod job_actuator;
pub mod status_fetcher;

pub use self::job_actuator::{request_build, trigger_build, ActionResult};
pub use self::status_fetcher::{
    fetch_dashboard, fetch_job_detail, get_dashboard, get_job_detail, JobDetail,
};
