//! Error types for artifact resolution and download.

use std::fmt::Display;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving or fetching an artifact.
#[derive(Debug, Error)]
pub enum Error {
    /// The plugin page URL does not belong to any supported host.
    #[error(
        "Unsupported plugin source: '{0}'. Supported hosts: spigotmc.org/resources, hangar.papermc.io, modrinth.com/plugin"
    )]
    UnsupportedSource(String),

    /// The URL matched a host but no project or resource id could be read from it.
    #[error("Invalid plugin URL '{url}': {reason}")]
    InvalidPluginUrl { url: String, reason: String },

    /// Querying a provider API failed (network, HTTP status, or response shape).
    #[error("Failed to fetch metadata from {url}: {message}")]
    Metadata { url: String, message: String },

    /// Streaming the artifact itself failed (network, HTTP status, or disk I/O).
    #[error("Failed to download {url}: {message}")]
    Artifact { url: String, message: String },

    /// Every published version was filtered out.
    #[error("No matching version found for '{project}' (loader: {loader})")]
    NoCompatibleVersion { project: String, loader: String },
}

impl Error {
    pub fn metadata(url: impl Into<String>, message: impl Display) -> Self {
        Self::Metadata {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn artifact(url: impl Into<String>, message: impl Display) -> Self {
        Self::Artifact {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl Display) -> Self {
        Self::InvalidPluginUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// True when the caller passed something unusable, false when a remote failed
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::UnsupportedSource(_) | Self::InvalidPluginUrl { .. })
    }
}
