// Hangar source implementation (PaperMC plugin repository)

use crate::error::{Error, Result};
use crate::server_type::ServerType;
use crate::sources::http;
use crate::sources::source_trait::{self, PluginSource, ResolvedArtifact};
use async_trait::async_trait;
use log::debug;

pub struct HangarSource {
    api: String,
}

impl HangarSource {
    pub fn new(api: impl Into<String>) -> Self {
        Self { api: api.into() }
    }

    /// Hangar platform to download for the given server
    ///
    /// Game servers other than Folia run the PAPER build; proxies and Folia
    /// use their own platform named after the loader.
    fn platform(server_type: &ServerType) -> String {
        if server_type.is_custom() || (!server_type.is_proxy() && !server_type.is_folia()) {
            "PAPER".to_string()
        } else {
            server_type.loader_name().to_uppercase()
        }
    }

    async fn latest_release(&self, project: &str) -> Result<String> {
        let url = format!("{}/{}/latestrelease", self.api, project);
        let version = http::fetch_text(&url).await?.trim().to_string();

        if version.is_empty() {
            return Err(Error::metadata(&url, "empty release version"));
        }
        Ok(version)
    }
}

#[async_trait]
impl PluginSource for HangarSource {
    fn name(&self) -> &'static str {
        "hangar"
    }

    fn marker(&self) -> &'static str {
        "hangar.papermc.io"
    }

    async fn resolve(&self, url: &str, server_type: &ServerType) -> Result<ResolvedArtifact> {
        let project = source_trait::last_path_segment(url)
            .ok_or_else(|| Error::invalid_url(url, "missing project name"))?;

        let version = self.latest_release(project).await?;
        let platform = Self::platform(server_type);
        debug!(
            "Hangar project {} latest release {} for platform {}",
            project, version, platform
        );

        Ok(ResolvedArtifact::new(
            format!(
                "{}/{}/versions/{}/{}/download",
                self.api, project, version, platform
            ),
            format!("{}-{}.jar", project, version),
        ))
    }
}
