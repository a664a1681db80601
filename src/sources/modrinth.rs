// Modrinth source implementation

use crate::error::{Error, Result};
use crate::server_type::ServerType;
use crate::sources::http;
use crate::sources::source_trait::{self, PluginSource, ResolvedArtifact};
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Version {
    #[serde(default)]
    pub version_number: String,
    #[serde(default)]
    pub game_versions: Vec<String>,
    #[serde(default)]
    pub loaders: Vec<String>,
    pub files: Vec<VersionFile>,
}

#[derive(Debug, Deserialize)]
pub struct VersionFile {
    pub filename: String,
    pub url: String,
}

impl Version {
    /// Every game version carries a letter ("1.21-pre1", "24w10a"), so the
    /// release only targets snapshots. An empty list counts as snapshot-only.
    fn is_snapshot_only(&self) -> bool {
        self.game_versions
            .iter()
            .all(|v| v.chars().any(|c| c.is_ascii_alphabetic()))
    }

    fn supports(&self, server_type: &ServerType) -> bool {
        server_type.is_custom()
            || self
                .loaders
                .iter()
                .any(|loader| loader == server_type.loader_name())
    }
}

/// First version (the API lists newest first) usable on the given server
fn select_version<'a>(versions: &'a [Version], server_type: &ServerType) -> Option<&'a Version> {
    versions
        .iter()
        .filter(|v| !v.is_snapshot_only())
        .find(|v| v.supports(server_type))
}

pub struct ModrinthSource {
    api: String,
}

impl ModrinthSource {
    pub fn new(api: impl Into<String>) -> Self {
        Self { api: api.into() }
    }
}

#[async_trait]
impl PluginSource for ModrinthSource {
    fn name(&self) -> &'static str {
        "modrinth"
    }

    fn marker(&self) -> &'static str {
        "modrinth.com/plugin"
    }

    async fn resolve(&self, url: &str, server_type: &ServerType) -> Result<ResolvedArtifact> {
        let project = source_trait::last_path_segment(url)
            .ok_or_else(|| Error::invalid_url(url, "missing project slug"))?;

        let versions_url = format!("{}/{}/version", self.api, project);
        let versions: Vec<Version> = http::fetch_json(&versions_url).await?;

        let version = select_version(&versions, server_type).ok_or_else(|| {
            Error::NoCompatibleVersion {
                project: project.to_string(),
                loader: server_type.to_string(),
            }
        })?;
        debug!(
            "Modrinth project {} selected version {} of {}",
            project,
            version.version_number,
            versions.len()
        );

        // Get the primary file
        let file = version.files.first().ok_or_else(|| {
            Error::metadata(
                &versions_url,
                format!("version '{}' has no files", version.version_number),
            )
        })?;

        Ok(ResolvedArtifact::new(file.url.clone(), file.filename.clone()))
    }
}
