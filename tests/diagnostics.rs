//! Runs alone in its own test binary: it installs the process-wide logger.

use jenkins_dashboard::{get_dashboard, Settings};
use log::{Level, LevelFilter, Log, Metadata, Record};
use mockito::Server;
use std::sync::Mutex;

const PREFIX: &str = "[jenkins-dashboard] ";

struct RecordingLogger {
    messages: Mutex<Vec<(Level, String)>>,
}

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.messages
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger {
    messages: Mutex::new(Vec::new()),
};

fn take_diagnostics() -> Vec<(Level, String)> {
    LOGGER
        .messages
        .lock()
        .unwrap()
        .drain(..)
        .filter(|(_, message)| message.starts_with(PREFIX))
        .collect()
}

#[test]
fn debug_setting_gates_url_and_body_diagnostics() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let body = r#"{"jobs":[{"name":"app","color":"blue"}]}"#;
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api/json")
        .with_status(200)
        .with_body(body)
        .create();

    let debug_settings = Settings {
        show_debug: true,
        ..Settings::with_url(&server.url())
    };
    take_diagnostics();
    assert_eq!(get_dashboard(&debug_settings).len(), 1);

    let diagnostics = take_diagnostics();
    let expected = vec![
        (Level::Debug, format!("{}GET: {}/api/json", PREFIX, server.url())),
        (Level::Debug, format!("{}{}", PREFIX, body)),
    ];
    assert_eq!(diagnostics, expected);

    let quiet_settings = Settings::with_url(&server.url());
    assert_eq!(get_dashboard(&quiet_settings).len(), 1);
    assert!(take_diagnostics().is_empty());
}
