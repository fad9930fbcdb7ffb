use std::{path::Path, sync::Arc};

use async_trait::async_trait;

use crate::{
    debug_provider_type,
    host::{CancellationToken, UserNotifier},
    registry::{DebugConfigurationProvider, DebugProviderName},
    telemetry::{self, TelemetryReporter},
    LaunchConfig,
};

/// Hands a resolved target to the attach workflow: `(context, via_config, target_url)`.
pub type AttachCallback<C> = Box<dyn Fn(&C, bool, Option<&str>) + Send + Sync>;

/// Hands a resolved target to the launch workflow: `(context, launch_url, browser_path)`.
pub type LaunchCallback<C> = Box<dyn Fn(&C, Option<&str>, Option<&str>) + Send + Sync>;

const NO_SUPPORTED_CONFIG_MESSAGE: &str = "No supported launch config was found.";

/// Resolves user-authored launch configurations into an attach or launch of
/// the devtools.
///
/// Constructed once per host session with fixed collaborator references and
/// an opaque host context `C` that is handed back to the workflow callbacks.
/// It holds no other state; every resolution is one-shot.
pub struct LaunchDebugProvider<C> {
    context: C,
    telemetry: Arc<dyn TelemetryReporter>,
    notifier: Arc<dyn UserNotifier>,
    attach: AttachCallback<C>,
    launch: LaunchCallback<C>,
}

impl<C> LaunchDebugProvider<C> {
    pub fn new(
        context: C,
        telemetry: Arc<dyn TelemetryReporter>,
        notifier: Arc<dyn UserNotifier>,
        attach: AttachCallback<C>,
        launch: LaunchCallback<C>,
    ) -> Self {
        Self {
            context,
            telemetry,
            notifier,
            attach,
            launch,
        }
    }
}

#[async_trait]
impl<C: Send + Sync> DebugConfigurationProvider for LaunchDebugProvider<C> {
    fn name(&self) -> DebugProviderName {
        DebugProviderName(debug_provider_type().into())
    }

    async fn provide_debug_configurations(
        &self,
        _folder: Option<&Path>,
        _token: Option<&CancellationToken>,
    ) -> Vec<LaunchConfig> {
        LaunchConfig::default_configurations()
    }

    async fn resolve_debug_configuration(
        &self,
        folder: Option<&Path>,
        config: Option<LaunchConfig>,
        _token: Option<&CancellationToken>,
    ) -> Option<LaunchConfig> {
        let Some(config) = config.filter(|config| config.debug_type == debug_provider_type())
        else {
            self.telemetry.send_event(telemetry::CONFIG_NOT_FOUND_EVENT);
            self.notifier.show_error_message(NO_SUPPORTED_CONFIG_MESSAGE);
            log::warn!(
                "rejected a launch config that is not of type {:?}",
                debug_provider_type()
            );
            return None;
        };

        let target_url = config.target_url(folder);
        match config.request.as_deref() {
            Some("attach") => {
                self.telemetry.send_event(telemetry::DEBUG_ATTACH_EVENT);
                (self.attach)(&self.context, true, Some(&target_url));
            }
            Some("launch") => {
                self.telemetry.send_event(telemetry::DEBUG_LAUNCH_EVENT);
                (self.launch)(
                    &self.context,
                    Some(&target_url),
                    config.chrome_path.as_deref(),
                );
            }
            // Other request kinds start no session and raise no error.
            _ => {}
        }

        None
    }
}
