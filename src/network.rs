use crate::diagnostics::debug_message;
use crate::errors::RequestError;
use crate::settings::Settings;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Url;
use std::time::Duration;

lazy_static! {
    // No client-wide timeout; `request_timeout` is applied per request.
    static ref HTTP_CLIENT: Result<Client, String> = Client::builder()
        .timeout(None::<Duration>)
        .build()
        .map_err(|e| format!("Unable to create the HTTP client: {}", e));
}

fn http_client(url: &Url) -> Result<&'static Client, RequestError> {
    HTTP_CLIENT
        .as_ref()
        .map_err(|reason| RequestError::Transport {
            url: url.to_string(),
            reason: reason.clone(),
        })
}

/// Joins `segments` onto the configured server url, percent-encoding each one,
/// so `endpoint_url(s, &["job", "my app", "build"])` gives `{base}/job/my%20app/build`.
pub fn endpoint_url(settings: &Settings, segments: &[&str]) -> Result<Url, RequestError> {
    let invalid = || RequestError::InvalidUrl {
        url: settings.jenkins_url.clone(),
    };

    let mut url = Url::parse(settings.jenkins_url.trim()).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

// Credentials and timeout come from the settings of each call.
fn prepare(settings: &Settings, request: RequestBuilder) -> RequestBuilder {
    let request = match settings.request_timeout {
        Some(timeout) => request.timeout(timeout),
        None => request,
    };
    match settings.jenkins_username {
        Some(ref username) => request.basic_auth(username, settings.jenkins_api_token.as_ref()),
        None => request,
    }
}

fn check_status(url: &Url, response: Response) -> Result<Response, RequestError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RequestError::HttpStatus {
            url: url.to_string(),
            status_code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        })
    }
}

/// GETs `url` and returns the response body of a 2xx response.
pub fn get_url_body(settings: &Settings, url: &Url) -> Result<String, RequestError> {
    debug_message(settings, &format!("GET: {}", url));

    let request = prepare(settings, http_client(url)?.get(url.clone()));
    let response = request
        .send()
        .map_err(|e| RequestError::transport(url.as_str(), &e))?;
    let response = check_status(url, response)?;

    response
        .text()
        .map_err(|e| RequestError::transport(url.as_str(), &e))
}

pub fn parse_body<T>(url: &Url, body: &str) -> Result<T, RequestError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str::<T>(body).map_err(|e| RequestError::Parse {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// POSTs a form-encoded body to `url` and returns the status of a 2xx response.
pub fn post_form(
    settings: &Settings,
    url: &Url,
    form: &[(&str, &str)],
) -> Result<u16, RequestError> {
    debug_message(settings, &format!("POST: {}", url));

    let request = prepare(settings, http_client(url)?.post(url.clone()));
    let response = request
        .form(form)
        .send()
        .map_err(|e| RequestError::transport(url.as_str(), &e))?;

    check_status(url, response).map(|response| response.status().as_u16())
}
