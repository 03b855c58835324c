//! Effective settings for the dashboard client and the resolver that rebuilds
//! them from the global and per-project layers.
//!
//! Lookups are made key by key: a project layer that only sets `jenkins_url`
//! still inherits `show_debug` from the global layer.

use std::time::Duration;
use toml::{Table, Value};

pub const SHOW_DEBUG: &str = "show_debug";
pub const JENKINS_URL: &str = "jenkins_url";
pub const BUILD_TOKEN: &str = "build_token";
pub const REQUEST_TIMEOUT_SECS: &str = "request_timeout_secs";
pub const JENKINS_USERNAME: &str = "jenkins_username";
pub const JENKINS_API_TOKEN: &str = "jenkins_api_token";

/// Token sent with every build request until a real credential is configured.
pub const DEFAULT_BUILD_TOKEN: &str = "1";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub jenkins_url: String,
    pub show_debug: bool,
    pub build_token: String,
    /// `None` leaves requests without an explicit timeout.
    pub request_timeout: Option<Duration>,
    pub jenkins_username: Option<String>,
    pub jenkins_api_token: Option<String>,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            jenkins_url: String::new(),
            show_debug: false,
            build_token: DEFAULT_BUILD_TOKEN.to_string(),
            request_timeout: None,
            jenkins_username: None,
            jenkins_api_token: None,
        }
    }
}

impl Settings {
    pub fn with_url(jenkins_url: &str) -> Settings {
        Settings {
            jenkins_url: jenkins_url.to_string(),
            ..Settings::default()
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.jenkins_url.trim().is_empty()
    }
}

/// Resolves every known key, project layer first, then global, then default.
pub fn resolve(global: &Table, project: &Table) -> Settings {
    let layers = [project, global];
    let defaults = Settings::default();

    Settings {
        jenkins_url: lookup(&layers, JENKINS_URL, Value::as_str)
            .map(str::to_string)
            .unwrap_or(defaults.jenkins_url),
        show_debug: lookup(&layers, SHOW_DEBUG, Value::as_bool)
            .unwrap_or(defaults.show_debug),
        build_token: lookup(&layers, BUILD_TOKEN, token_value)
            .unwrap_or(defaults.build_token),
        request_timeout: lookup(&layers, REQUEST_TIMEOUT_SECS, timeout_value).flatten(),
        jenkins_username: lookup(&layers, JENKINS_USERNAME, Value::as_str)
            .map(str::to_string),
        jenkins_api_token: lookup(&layers, JENKINS_API_TOKEN, Value::as_str)
            .map(str::to_string),
    }
}

fn lookup<'a, T, F>(layers: &[&'a Table], key: &str, extract: F) -> Option<T>
where
    F: Fn(&'a Value) -> Option<T>,
{
    for &layer in layers {
        if let Some(value) = layer.get(key) {
            match extract(value) {
                Some(extracted) => return Some(extracted),
                None => warn!(
                    "--Settings--: Ignoring '{}' = {}, it has the wrong type.",
                    key, value
                ),
            }
        }
    }
    None
}

// The editor plugin posted a bare integer token, so accept both forms.
fn token_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        _ => None,
    }
}

// Zero or negative seconds switch the timeout off.
fn timeout_value(value: &Value) -> Option<Option<Duration>> {
    value
        .as_integer()
        .map(|secs| {
            if secs > 0 {
                Some(Duration::from_secs(secs as u64))
            } else {
                None
            }
        })
}

pub type SettingsListener = Box<dyn FnMut(&Settings) + Send>;

/// Holds both settings layers and the settings resolved from them.
///
/// Listeners stay registered for the resolver's lifetime and are called every
/// time an update changes the effective settings.
pub struct SettingsResolver {
    global: Table,
    project: Table,
    current: Settings,
    listeners: Vec<SettingsListener>,
}

impl SettingsResolver {
    pub fn new(global: Table, project: Table) -> SettingsResolver {
        let current = resolve(&global, &project);
        SettingsResolver {
            global,
            project,
            current,
            listeners: Vec::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.current
    }

    pub fn resolve(&self) -> Settings {
        self.current.clone()
    }

    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&Settings) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Returns true when the effective settings changed.
    pub fn update_global(&mut self, global: Table) -> bool {
        self.global = global;
        self.refresh()
    }

    pub fn update_project(&mut self, project: Table) -> bool {
        self.project = project;
        self.refresh()
    }

    pub fn update(&mut self, global: Table, project: Table) -> bool {
        self.global = global;
        self.project = project;
        self.refresh()
    }

    fn refresh(&mut self) -> bool {
        let resolved = resolve(&self.global, &self.project);
        if resolved == self.current {
            return false;
        }

        debug!(
            "--Settings--: Effective settings changed, notifying {} listener(s).",
            self.listeners.len()
        );
        self.current = resolved;
        for listener in self.listeners.iter_mut() {
            listener(&self.current);
        }
        true
    }
}
