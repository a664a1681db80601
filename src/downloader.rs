// Async entry point tying resolvers to the fetcher

use crate::config::Endpoints;
use crate::error::{Error, Result};
use crate::fetch;
use crate::result::DownloadResult;
use crate::server_type::ServerType;
use crate::sources::{Flavor, ResolvedArtifact, SourceRegistry};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Resolves and downloads server, proxy and plugin jars.
///
/// Cloning is cheap; clones share the same endpoints and plugin sources.
#[derive(Clone)]
pub struct Downloader {
    endpoints: Arc<Endpoints>,
    sources: Arc<SourceRegistry>,
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new(Endpoints::default())
    }
}

impl Downloader {
    pub fn new(endpoints: Endpoints) -> Self {
        let endpoints = endpoints.normalized();
        let sources = SourceRegistry::new(&endpoints);
        Self {
            endpoints: Arc::new(endpoints),
            sources: Arc::new(sources),
        }
    }

    /// Work out which file a runtime download would fetch, without fetching it
    pub async fn resolve_runtime(&self, flavor: Flavor, version: &str) -> Result<ResolvedArtifact> {
        let artifact = flavor.strategy(&self.endpoints).resolve(version).await?;
        debug!(
            "Resolved {} {} to {} ({})",
            flavor, version, artifact.file_name, artifact.download_url
        );
        Ok(artifact)
    }

    /// Download the given server or proxy flavor into `folder`
    pub async fn download_runtime(
        &self,
        flavor: Flavor,
        folder: &Path,
        version: &str,
    ) -> DownloadResult {
        match self.resolve_runtime(flavor, version).await {
            Ok(artifact) => fetch::fetch(folder, &artifact.download_url, &artifact.file_name).await,
            Err(e) => {
                warn!("Could not resolve {} {}: {}", flavor, version, e);
                DownloadResult::failed(e.to_string())
            }
        }
    }

    pub async fn paper(&self, folder: &Path, version: &str) -> DownloadResult {
        self.download_runtime(Flavor::Paper, folder, version).await
    }

    pub async fn waterfall(&self, folder: &Path, version: &str) -> DownloadResult {
        self.download_runtime(Flavor::Waterfall, folder, version).await
    }

    pub async fn velocity(&self, folder: &Path, version: &str) -> DownloadResult {
        self.download_runtime(Flavor::Velocity, folder, version).await
    }

    pub async fn folia(&self, folder: &Path, version: &str) -> DownloadResult {
        self.download_runtime(Flavor::Folia, folder, version).await
    }

    pub async fn spigot(&self, folder: &Path, version: &str) -> DownloadResult {
        self.download_runtime(Flavor::Spigot, folder, version).await
    }

    pub async fn craftbukkit(&self, folder: &Path, version: &str) -> DownloadResult {
        self.download_runtime(Flavor::Craftbukkit, folder, version).await
    }

    /// BungeeCord always resolves to the latest CI build; `version` is ignored
    pub async fn bungeecord(&self, folder: &Path, version: &str) -> DownloadResult {
        self.download_runtime(Flavor::Bungeecord, folder, version).await
    }

    pub async fn purpur(&self, folder: &Path, version: &str) -> DownloadResult {
        self.download_runtime(Flavor::Purpur, folder, version).await
    }

    pub async fn leaf(&self, folder: &Path, version: &str) -> DownloadResult {
        self.download_runtime(Flavor::Leaf, folder, version).await
    }

    pub async fn asp(&self, folder: &Path, version: &str) -> DownloadResult {
        self.download_runtime(Flavor::Asp, folder, version).await
    }

    pub async fn pufferfish(&self, folder: &Path, version: &str) -> DownloadResult {
        self.download_runtime(Flavor::Pufferfish, folder, version).await
    }

    /// Resolve a plugin page URL for the given server type
    pub async fn resolve_plugin(
        &self,
        url: &str,
        server_type: &ServerType,
    ) -> Result<ResolvedArtifact> {
        let source = self.sources.classify(url)?;
        debug!("Plugin URL {} handled by {}", url, source.name());
        source.resolve(url, server_type).await
    }

    /// Name the plugin file would be saved under, without downloading it
    pub async fn resolve_file_name(&self, url: &str, server_type: &ServerType) -> Result<String> {
        Ok(self.resolve_plugin(url, server_type).await?.file_name)
    }

    /// Download the plugin behind a Spigot, Hangar or Modrinth page URL
    ///
    /// Returns `Err` only for URLs of an unsupported host; every other
    /// failure is reported through the `DownloadResult`.
    pub async fn download_plugin(
        &self,
        folder: &Path,
        url: &str,
        server_type: &ServerType,
    ) -> Result<DownloadResult> {
        match self.resolve_plugin(url, server_type).await {
            Ok(artifact) => {
                Ok(fetch::fetch(folder, &artifact.download_url, &artifact.file_name).await)
            }
            Err(e @ Error::UnsupportedSource(_)) => Err(e),
            Err(e) => {
                warn!("Could not resolve plugin {}: {}", url, e);
                Ok(DownloadResult::failed(e.to_string()))
            }
        }
    }

    /// Run a runtime download on the tokio worker pool
    pub fn spawn_runtime(
        &self,
        flavor: Flavor,
        folder: PathBuf,
        version: String,
    ) -> JoinHandle<DownloadResult> {
        let downloader = self.clone();
        tokio::spawn(async move {
            downloader
                .download_runtime(flavor, &folder, &version)
                .await
        })
    }

    /// Run a plugin download on the tokio worker pool
    pub fn spawn_plugin(
        &self,
        folder: PathBuf,
        url: String,
        server_type: ServerType,
    ) -> JoinHandle<Result<DownloadResult>> {
        let downloader = self.clone();
        tokio::spawn(async move {
            downloader
                .download_plugin(&folder, &url, &server_type)
                .await
        })
    }
}
