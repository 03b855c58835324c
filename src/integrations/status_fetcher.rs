use crate::diagnostics::debug_message;
use crate::errors::RequestError;
use crate::jenkins_response::JenkinsJobResponse;
use crate::job_status::JobSummary;
use crate::network::{endpoint_url, get_url_body, parse_body};
use crate::settings::Settings;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::fmt;

/// Lists every job on the dashboard. Any failure gives an empty list.
pub fn get_dashboard(settings: &Settings) -> Vec<JobSummary> {
    match fetch_dashboard(settings) {
        Ok(jobs) => jobs,
        Err(e) => {
            warn!(
                "--Jenkins--: Failed to retrieve any jobs from Jenkins. Details: {}",
                e
            );
            Vec::new()
        }
    }
}

/// Like `get_dashboard`, but reports why the listing failed.
pub fn fetch_dashboard(settings: &Settings) -> Result<Vec<JobSummary>, RequestError> {
    let url = endpoint_url(settings, &["api", "json"])?;
    let body = get_url_body(settings, &url)?;
    debug_message(settings, &body);

    let response: JenkinsJobResponse = parse_body(&url, &body)?;
    let jobs: Vec<JobSummary> = response
        .jobs
        .iter()
        .map(|job| JobSummary::new(&job.name, job.color()))
        .collect();

    info!("--Jenkins--: Retrieved {} jobs from {}.", jobs.len(), url);
    Ok(jobs)
}

/// Whatever `/job/{name}/api/json` returned. No schema is imposed on it.
#[derive(Clone, Debug, PartialEq)]
pub struct JobDetail(Value);

impl JobDetail {
    pub fn new(document: Value) -> JobDetail {
        JobDetail(canonical(document))
    }

    pub fn document(&self) -> &Value {
        &self.0
    }

    /// Sorted keys, four-space indentation.
    pub fn to_pretty_string(&self) -> String {
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        if self.0.serialize(&mut serializer).is_err() {
            return self.0.to_string();
        }
        String::from_utf8(buffer).unwrap_or_else(|_| self.0.to_string())
    }
}

impl fmt::Display for JobDetail {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_pretty_string())
    }
}

// Rebuilds objects in key order, whichever map backs serde_json::Value.
fn canonical(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, canonical(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonical).collect()),
        other => other,
    }
}

pub fn fetch_job_detail(settings: &Settings, job_name: &str) -> Result<JobDetail, RequestError> {
    let url = endpoint_url(settings, &["job", job_name, "api", "json"])?;
    let body = get_url_body(settings, &url)?;
    let document: Value = parse_body(&url, &body)?;
    Ok(JobDetail::new(document))
}

/// The pretty-printed job document, or the reason the request failed.
pub fn get_job_detail(settings: &Settings, job_name: &str) -> String {
    match fetch_job_detail(settings, job_name) {
        Ok(detail) => detail.to_pretty_string(),
        Err(e) => {
            warn!(
                "--Jenkins--: Failed to retrieve job {}. Details: {}",
                job_name, e
            );
            e.reason()
        }
    }
}
