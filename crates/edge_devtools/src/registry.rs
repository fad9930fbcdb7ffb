use std::{borrow::Borrow, collections::HashMap, path::Path, sync::Arc};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::{host::CancellationToken, LaunchConfig};

/// Identifier a configuration provider registers under, e.g. `edge-devtools.debug`.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct DebugProviderName(pub Arc<str>);

impl Borrow<str> for DebugProviderName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DebugProviderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// The editor-facing debug configuration extension point.
///
/// Hosts call `provide_debug_configurations` to seed a project that has no
/// launch entries yet, and `resolve_debug_configuration` right before a
/// session starts. Both may be awaited on the host's executor; neither holds
/// work across an await point.
#[async_trait]
pub trait DebugConfigurationProvider: Send + Sync {
    /// The configuration `type` this provider handles.
    fn name(&self) -> DebugProviderName;

    /// Returns the default configuration list offered when none exists.
    async fn provide_debug_configurations(
        &self,
        folder: Option<&Path>,
        token: Option<&CancellationToken>,
    ) -> Vec<LaunchConfig>;

    /// Validates `config` and hands it to the matching workflow.
    ///
    /// A `None` result tells the host that resolution was handled here and its
    /// default processing should not continue.
    async fn resolve_debug_configuration(
        &self,
        folder: Option<&Path>,
        config: Option<LaunchConfig>,
        token: Option<&CancellationToken>,
    ) -> Option<LaunchConfig>;
}

/// Keeps track of the debug configuration providers known to the host.
#[derive(Default)]
pub struct DebugProviderRegistry {
    providers: RwLock<HashMap<DebugProviderName, Arc<dyn DebugConfigurationProvider>>>,
}

impl DebugProviderRegistry {
    pub fn add_provider(&self, provider: Arc<dyn DebugConfigurationProvider>) {
        self.providers.write().insert(provider.name(), provider);
    }

    pub fn remove_provider(&self, name: &str) {
        self.providers.write().remove(name);
    }

    pub fn provider(&self, name: &str) -> Option<Arc<dyn DebugConfigurationProvider>> {
        self.providers.read().get(name).cloned()
    }

    pub fn provider_names(&self) -> Vec<DebugProviderName> {
        self.providers.read().keys().cloned().collect()
    }
}
