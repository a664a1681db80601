// Spigot source implementation (via Spiget API)

use crate::error::{Error, Result};
use crate::server_type::ServerType;
use crate::sources::http;
use crate::sources::source_trait::{PluginSource, ResolvedArtifact};
use async_trait::async_trait;
use log::debug;
use regex::Regex;
use serde::Deserialize;

lazy_static::lazy_static! {
    /// Anything that is not a letter, number, punctuation or space separator,
    /// plus punctuation that is not allowed in file names
    static ref NAME_FILTER: Regex =
        Regex::new(r#"[^\p{L}\p{N}\p{P}\p{Z}]|[:/\\*?"<>|]"#).expect("valid name filter");
}

#[derive(Debug, Deserialize)]
struct Resource {
    name: String,
    versions: Vec<VersionRef>,
}

#[derive(Debug, Deserialize)]
struct VersionRef {
    id: i64,
}

pub struct SpigotSource {
    api: String,
}

impl SpigotSource {
    pub fn new(api: impl Into<String>) -> Self {
        Self { api: api.into() }
    }

    /// Read the resource id out of a `.../resources/<slug>.<id>/` page URL
    fn resource_id(url: &str) -> Result<&str> {
        url.split('.')
            .nth(3)
            .and_then(|segment| segment.split('/').next())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::invalid_url(url, "expected '.../resources/<name>.<id>/'"))
    }

    /// First word of the resource name, stripped of characters unfit for a file name
    fn clean_name(name: &str) -> String {
        NAME_FILTER
            .replace_all(name, "")
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string()
    }

    /// `{name}-{versionId}.jar`, using the resource id when nothing of the name survives
    fn file_name(resource_name: &str, id: &str, version_id: i64) -> String {
        let name = Self::clean_name(resource_name);
        let name = if name.is_empty() { id } else { name.as_str() };
        format!("{}-{}.jar", name, version_id)
    }
}

#[async_trait]
impl PluginSource for SpigotSource {
    fn name(&self) -> &'static str {
        "spigot"
    }

    fn marker(&self) -> &'static str {
        "spigotmc.org/resources"
    }

    async fn resolve(&self, url: &str, _server_type: &ServerType) -> Result<ResolvedArtifact> {
        let id = Self::resource_id(url)?;

        let resource_url = format!("{}/{}/", self.api, id);
        let resource: Resource = http::fetch_json(&resource_url).await?;

        let latest = resource
            .versions
            .last()
            .ok_or_else(|| Error::metadata(&resource_url, "resource has no versions"))?;
        debug!(
            "Spigot resource {} ('{}') latest version id {}",
            id, resource.name, latest.id
        );

        Ok(ResolvedArtifact::new(
            format!("{}/{}/download", self.api, id),
            Self::file_name(&resource.name, id, latest.id),
        ))
    }
}
