// Trait definition for plugin sources

use crate::error::Result;
use crate::server_type::ServerType;

/// A concrete file to download and the name to store it under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub download_url: String,
    pub file_name: String,
}

impl ResolvedArtifact {
    pub fn new(download_url: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            download_url: download_url.into(),
            file_name: file_name.into(),
        }
    }
}

/// Trait for plugin hosts (Spigot, Hangar, Modrinth)
#[async_trait::async_trait]
pub trait PluginSource: Send + Sync {
    /// Get the source name (e.g., "spigot", "hangar", "modrinth")
    fn name(&self) -> &'static str;

    /// Substring that identifies a plugin page URL of this host
    fn marker(&self) -> &'static str;

    /// Resolve a plugin page URL to its latest downloadable jar
    ///
    /// # Arguments
    /// * `url` - The plugin page URL, already known to contain `marker()`
    /// * `server_type` - The server the plugin will run on, used to pick a variant
    async fn resolve(&self, url: &str, server_type: &ServerType) -> Result<ResolvedArtifact>;

    fn matches(&self, url: &str) -> bool {
        url.contains(self.marker())
    }
}

/// Final non-empty path segment of a page URL, ignoring a trailing slash
pub fn last_path_segment(url: &str) -> Option<&str> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}
