// Server and proxy runtime resolution

use crate::config::Endpoints;
use crate::error::{Error, Result};
use crate::sources::http;
use crate::sources::source_trait::ResolvedArtifact;
use log::debug;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Server or proxy software that can be downloaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Paper,
    Waterfall,
    Velocity,
    Folia,
    Spigot,
    Craftbukkit,
    Bungeecord,
    Purpur,
    Leaf,
    Asp,
    Pufferfish,
}

impl Flavor {
    pub const ALL: [Flavor; 11] = [
        Flavor::Paper,
        Flavor::Waterfall,
        Flavor::Velocity,
        Flavor::Folia,
        Flavor::Spigot,
        Flavor::Craftbukkit,
        Flavor::Bungeecord,
        Flavor::Purpur,
        Flavor::Leaf,
        Flavor::Asp,
        Flavor::Pufferfish,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Flavor::Paper => "paper",
            Flavor::Waterfall => "waterfall",
            Flavor::Velocity => "velocity",
            Flavor::Folia => "folia",
            Flavor::Spigot => "spigot",
            Flavor::Craftbukkit => "craftbukkit",
            Flavor::Bungeecord => "bungeecord",
            Flavor::Purpur => "purpur",
            Flavor::Leaf => "leaf",
            Flavor::Asp => "asp",
            Flavor::Pufferfish => "pufferfish",
        }
    }

    /// Pick the resolution strategy and endpoint for this flavor
    pub fn strategy(&self, endpoints: &Endpoints) -> RuntimeStrategy {
        match self {
            Flavor::Paper | Flavor::Waterfall | Flavor::Velocity | Flavor::Folia => {
                RuntimeStrategy::PaperMc {
                    base: endpoints.papermc.clone(),
                    project: self.name(),
                }
            }
            Flavor::Spigot => RuntimeStrategy::StaticMirror {
                base: endpoints.undefined_creations.clone(),
                project: "spigot",
            },
            Flavor::Craftbukkit => RuntimeStrategy::StaticMirror {
                base: endpoints.getbukkit.clone(),
                project: "craftbukkit",
            },
            Flavor::Bungeecord => RuntimeStrategy::Fixed {
                url: endpoints.bungeecord.clone(),
                file_name: "Bungeecord.jar",
            },
            Flavor::Purpur => RuntimeStrategy::Purpur {
                base: endpoints.purpur.clone(),
            },
            Flavor::Leaf => RuntimeStrategy::BuildIndex {
                base: endpoints.leaf.clone(),
                project: "leaf",
            },
            Flavor::Asp => RuntimeStrategy::SessionToken {
                base: endpoints.asp.clone(),
                file_name: "AdvancedSlimePaper.jar",
            },
            Flavor::Pufferfish => RuntimeStrategy::JenkinsArtifact {
                base: endpoints.pufferfish.clone(),
                job: "Pufferfish",
                file_name: "PufferFish.jar",
            },
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Flavor::ALL
            .into_iter()
            .find(|flavor| flavor.name() == lower)
            .ok_or_else(|| {
                format!(
                    "Unknown flavor '{}'. Supported flavors: {}",
                    s,
                    Flavor::ALL
                        .iter()
                        .map(|f| f.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

#[derive(Debug, Deserialize)]
struct BuildList {
    builds: Vec<u64>,
}

#[derive(Debug, Deserialize)]
struct JenkinsBuild {
    artifacts: Vec<JenkinsArtifact>,
}

#[derive(Debug, Deserialize)]
struct JenkinsArtifact {
    #[serde(rename = "relativePath")]
    relative_path: String,
}

#[derive(Debug, Deserialize)]
struct SessionRelease {
    id: String,
    files: Vec<SessionFile>,
}

#[derive(Debug, Deserialize)]
struct SessionFile {
    id: String,
    #[serde(rename = "fileName")]
    file_name: String,
}

/// How a provider family turns a version into a download URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeStrategy {
    /// PaperMC projects API: numbered builds per version
    PaperMc { base: String, project: &'static str },
    /// Jar named after the version on a plain file host
    StaticMirror { base: String, project: &'static str },
    /// Always the same URL, whatever the version
    Fixed { url: String, file_name: &'static str },
    /// Purpur's "latest" redirect
    Purpur { base: String },
    /// Fork API that lists numbered builds under `/versions/{version}`
    BuildIndex { base: String, project: &'static str },
    /// Jenkins job per version, first artifact of the last successful build
    JenkinsArtifact {
        base: String,
        job: &'static str,
        file_name: &'static str,
    },
    /// Lookup of a release id, then download of its server file by id
    SessionToken {
        base: String,
        file_name: &'static str,
    },
}

impl RuntimeStrategy {
    pub async fn resolve(&self, version: &str) -> Result<ResolvedArtifact> {
        match self {
            RuntimeStrategy::PaperMc { base, project } => {
                let versions_url = format!("{}/{}/versions/{}", base, project, version);
                let build = latest_build(&versions_url).await?;
                debug!("Latest {} build for {} is {}", project, version, build);

                Ok(ResolvedArtifact::new(
                    format!(
                        "{}/builds/{}/downloads/{}-{}-{}.jar",
                        versions_url, build, project, version, build
                    ),
                    format!("{}.jar", project),
                ))
            }
            RuntimeStrategy::StaticMirror { base, project } => Ok(ResolvedArtifact::new(
                format!("{}/{}-{}.jar", base, project, version),
                format!("{}.jar", project),
            )),
            RuntimeStrategy::Fixed { url, file_name } => {
                Ok(ResolvedArtifact::new(url.clone(), *file_name))
            }
            RuntimeStrategy::Purpur { base } => Ok(ResolvedArtifact::new(
                format!("{}/{}/latest/download", base, version),
                format!("Purpur-{}.jar", version),
            )),
            RuntimeStrategy::BuildIndex { base, project } => {
                let versions_url = format!("{}/versions/{}", base, version);
                let build = latest_build(&versions_url).await?;
                debug!("Latest {} build for {} is {}", project, version, build);

                let file_name = format!("{}-{}-{}.jar", project, version, build);
                Ok(ResolvedArtifact::new(
                    format!("{}/builds/{}/downloads/{}", versions_url, build, file_name),
                    file_name,
                ))
            }
            RuntimeStrategy::JenkinsArtifact {
                base,
                job,
                file_name,
            } => {
                let build_url = format!("{}/{}-{}/lastSuccessfulBuild", base, job, version);
                let api_url = format!("{}/api/json", build_url);
                let build: JenkinsBuild = http::fetch_json(&api_url).await?;

                let artifact = build
                    .artifacts
                    .first()
                    .ok_or_else(|| Error::metadata(&api_url, "build has no artifacts"))?;
                debug!("Using artifact {} of {}", artifact.relative_path, build_url);

                Ok(ResolvedArtifact::new(
                    format!("{}/artifact/{}", build_url, artifact.relative_path),
                    *file_name,
                ))
            }
            RuntimeStrategy::SessionToken { base, file_name } => {
                let lookup_url = format!("{}/mcversion/{}/latest", base, version);
                let release: SessionRelease = http::fetch_json(&lookup_url).await?;

                let server_file = release
                    .files
                    .iter()
                    .find(|f| f.file_name.contains("server"))
                    .ok_or_else(|| {
                        Error::metadata(
                            &lookup_url,
                            format!("release {} has no server file", release.id),
                        )
                    })?;
                debug!(
                    "Using file {} of release {}",
                    server_file.file_name, release.id
                );

                Ok(ResolvedArtifact::new(
                    format!("{}/{}/download/{}", base, release.id, server_file.id),
                    *file_name,
                ))
            }
        }
    }
}

async fn latest_build(versions_url: &str) -> Result<u64> {
    let list: BuildList = http::fetch_json(versions_url).await?;
    max_build(&list.builds).ok_or_else(|| Error::metadata(versions_url, "no builds listed"))
}

/// Highest build number; providers do not guarantee ordering
fn max_build(builds: &[u64]) -> Option<u64> {
    builds.iter().copied().max()
}
