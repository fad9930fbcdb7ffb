//! Debug configuration support for the Edge DevTools integration.
//!
//! The editor asks a registered [`DebugConfigurationProvider`] for default
//! launch entries when a project has none, and for a resolution step right
//! before a debug session starts. [`LaunchDebugProvider`] implements both on
//! top of host-supplied attach/launch callbacks, a telemetry sink and an
//! error-notification surface, so the whole flow stays testable without a
//! running editor.

mod host;
mod launch_config;
mod launch_debug_provider;
mod registry;
pub mod telemetry;

use std::sync::Arc;

pub use host::{CancellationToken, UserNotifier};
pub use launch_config::{LaunchConfig, LaunchConfigs, WORKSPACE_FOLDER_VARIABLE};
pub use launch_debug_provider::{AttachCallback, LaunchCallback, LaunchDebugProvider};
pub use registry::{DebugConfigurationProvider, DebugProviderName, DebugProviderRegistry};
pub use telemetry::{LogTelemetryReporter, TelemetryReporter};

/// Name of the settings store this integration keeps its state under.
pub const SETTINGS_STORE_NAME: &str = "edge-devtools";

/// The debug configuration `type` handled by this provider.
pub fn debug_provider_type() -> String {
    format!("{SETTINGS_STORE_NAME}.debug")
}

/// Registers `provider` with the host's provider registry. Called once from
/// the integration's activation point.
pub fn init<C>(registry: &DebugProviderRegistry, provider: LaunchDebugProvider<C>)
where
    C: Send + Sync + 'static,
{
    registry.add_provider(Arc::new(provider));
}
