// Sources module: provider integrations and plugin URL dispatch

use std::sync::Arc;

use crate::config::Endpoints;
use crate::error::{Error, Result};

pub mod hangar;
pub mod http;
pub mod modrinth;
pub mod runtime;
pub mod source_trait;
pub mod spigot;

pub use hangar::HangarSource;
pub use modrinth::ModrinthSource;
pub use runtime::{Flavor, RuntimeStrategy};
pub use source_trait::{PluginSource, ResolvedArtifact};
pub use spigot::SpigotSource;

/// Registry for plugin sources
pub struct SourceRegistry {
    sources: Vec<Arc<dyn PluginSource>>,
}

impl SourceRegistry {
    pub fn new(endpoints: &Endpoints) -> Self {
        let mut registry = Self {
            sources: Vec::new(),
        };

        // Markers are tried in this order: spigot > hangar > modrinth
        registry.register(Arc::new(SpigotSource::new(&endpoints.spigot_api)));
        registry.register(Arc::new(HangarSource::new(&endpoints.hangar_api)));
        registry.register(Arc::new(ModrinthSource::new(&endpoints.modrinth_api)));

        registry
    }

    fn register(&mut self, source: Arc<dyn PluginSource>) {
        self.sources.push(source);
    }

    /// Find the source whose host marker appears in a plugin page URL
    pub fn classify(&self, url: &str) -> Result<&Arc<dyn PluginSource>> {
        self.sources
            .iter()
            .find(|source| source.matches(url))
            .ok_or_else(|| Error::UnsupportedSource(url.to_string()))
    }
}
