//! Telemetry event names and the sink they are reported through.
//!
//! Transport is owned by the host; this integration only names the events.

/// Reported before the attach workflow is handed a resolved configuration.
pub const DEBUG_ATTACH_EVENT: &str = "debug/attach";

/// Reported before the launch workflow is handed a resolved configuration.
pub const DEBUG_LAUNCH_EVENT: &str = "debug/launch";

/// Reported when resolution rejects a missing or foreign configuration.
pub const CONFIG_NOT_FOUND_EVENT: &str = "debug/error/config_not_found";

pub trait TelemetryReporter: Send + Sync {
    fn send_event(&self, event: &str);
}

/// A reporter that forwards event names to the log facade, for hosts that
/// have no telemetry transport wired up.
pub struct LogTelemetryReporter;

impl TelemetryReporter for LogTelemetryReporter {
    fn send_event(&self, event: &str) {
        log::debug!("telemetry event: {event}");
    }
}
