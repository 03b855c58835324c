use failure::Fail;
use std::error::Error as StdError;
use std::path::PathBuf;

#[derive(Debug, Fail)]
pub enum RequestError {
    #[fail(display = "Unable to parse url: {}", url)]
    InvalidUrl { url: String },

    #[fail(display = "HTTP call to {} failed: {}", url, reason)]
    Transport { url: String, reason: String },

    #[fail(display = "HTTP call to {} failed with code: {} {}", url, status_code, reason)]
    HttpStatus {
        url: String,
        status_code: u16,
        reason: String,
    },

    #[fail(display = "Unable to parse the Jenkins json response from {}: {}", url, reason)]
    Parse { url: String, reason: String },
}

impl RequestError {
    /// The short, human-readable reason, without the URL the request went to.
    pub fn reason(&self) -> String {
        match self {
            RequestError::InvalidUrl { url } => format!("Unable to parse url: {}", url),
            RequestError::Transport { reason, .. } => reason.clone(),
            RequestError::HttpStatus { reason, .. } => reason.clone(),
            RequestError::Parse { reason, .. } => {
                format!("Unable to parse the Jenkins json response: {}", reason)
            }
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            RequestError::HttpStatus { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    pub(crate) fn transport(url: &str, err: &reqwest::Error) -> RequestError {
        RequestError::Transport {
            url: url.to_string(),
            reason: describe_chain(err),
        }
    }
}

#[derive(Debug, Fail)]
pub enum ConfigFileError {
    #[fail(display = "Unable to read settings file {:?}: {}", path, reason)]
    Read { path: PathBuf, reason: String },

    #[fail(display = "Settings file {:?} is not valid TOML: {}", path, reason)]
    Parse { path: PathBuf, reason: String },

    #[fail(display = "Settings file {:?}: '{}' must be a table", path, key)]
    NotATable { path: PathBuf, key: String },
}

// reqwest hides the interesting part (connection refused, dns...) in the source chain.
fn describe_chain(err: &dyn StdError) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let inner_text = inner.to_string();
        if !description.contains(&inner_text) {
            description.push_str(": ");
            description.push_str(&inner_text);
        }
        source = inner.source();
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_reason_omits_url() {
        let err = RequestError::HttpStatus {
            url: "http://ci/job/app/api/json".to_string(),
            status_code: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.reason(), "Not Found");
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(
            err.to_string(),
            "HTTP call to http://ci/job/app/api/json failed with code: 404 Not Found"
        );
    }

    #[test]
    fn parse_reason_mentions_json() {
        let err = RequestError::Parse {
            url: "http://ci/api/json".to_string(),
            reason: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            err.reason(),
            "Unable to parse the Jenkins json response: expected value at line 1 column 1"
        );
        assert_eq!(err.status_code(), None);
    }
}
