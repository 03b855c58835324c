use crate::errors::RequestError;
use crate::network::{endpoint_url, post_form};
use crate::settings::Settings;
use std::fmt;

/// What the server answered to a build request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionResult {
    pub status_code: u16,
    /// Only set when the server refused the request.
    pub reason: Option<String>,
}

impl ActionResult {
    pub fn is_success(&self) -> bool {
        self.reason.is_none()
    }
}

impl fmt::Display for ActionResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HTTP Status Code: {}", self.status_code)?;
        if let Some(ref reason) = self.reason {
            write!(f, "\nHTTP Status Reason: {}", reason)?;
        }
        Ok(())
    }
}

/// Posts the build request. HTTP error codes are an `ActionResult`, only
/// failures without a response are an `Err`.
pub fn request_build(settings: &Settings, job_name: &str) -> Result<ActionResult, RequestError> {
    let url = endpoint_url(settings, &["job", job_name, "build"])?;

    match post_form(settings, &url, &[("token", settings.build_token.as_str())]) {
        Ok(status_code) => {
            info!("--Jenkins--: Build of {} requested, server answered {}.", job_name, status_code);
            Ok(ActionResult {
                status_code,
                reason: None,
            })
        }
        Err(RequestError::HttpStatus {
            status_code,
            reason,
            ..
        }) => {
            warn!(
                "--Jenkins--: Build of {} refused with code {} {}.",
                job_name, status_code, reason
            );
            Ok(ActionResult {
                status_code,
                reason: Some(reason),
            })
        }
        Err(e) => Err(e),
    }
}

pub fn trigger_build(settings: &Settings, job_name: &str) -> String {
    match request_build(settings, job_name) {
        Ok(result) => result.to_string(),
        Err(e) => {
            warn!(
                "--Jenkins--: Failed to request a build of {}. Details: {}",
                job_name, e
            );
            format!("HTTP Request Failed: {}", e.reason())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_shows_only_the_code() {
        let result = ActionResult {
            status_code: 201,
            reason: None,
        };
        assert!(result.is_success());
        assert_eq!(result.to_string(), "HTTP Status Code: 201");
    }

    #[test]
    fn refusal_shows_code_and_reason() {
        let result = ActionResult {
            status_code: 403,
            reason: Some("Forbidden".to_string()),
        };
        assert!(!result.is_success());
        assert_eq!(
            result.to_string(),
            "HTTP Status Code: 403\nHTTP Status Reason: Forbidden"
        );
    }

    #[test]
    fn unparseable_server_url_is_reported_as_text() {
        let settings = Settings::with_url("not a url");
        assert_eq!(
            trigger_build(&settings, "app"),
            "HTTP Request Failed: Unable to parse url: not a url"
        );
    }
}
