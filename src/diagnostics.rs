use crate::settings::Settings;

/// Diagnostic sink. Silent unless `show_debug` is set.
pub fn debug_message(settings: &Settings, msg: &str) {
    if settings.show_debug {
        debug!("[jenkins-dashboard] {}", msg);
    }
}
