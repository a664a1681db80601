// Config module: working directory and the provider endpoint table

use crate::constants;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub fn config_dir() -> String {
    std::env::var(constants::DIR_ENV).unwrap_or_else(|_| ".".to_string())
}

pub fn plugins_dir() -> PathBuf {
    PathBuf::from(config_dir()).join(constants::PLUGINS_DIR)
}

pub fn endpoints_path() -> PathBuf {
    PathBuf::from(config_dir()).join(constants::ENDPOINTS_FILE)
}

/// Base URLs of every distribution provider.
///
/// Loaded once at startup and handed to the resolvers, so tests can point any
/// provider at a mock server. Every key is optional in `endpoints.toml`;
/// missing keys fall back to the public endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// PaperMC projects API (paper, waterfall, velocity, folia)
    pub papermc: String,
    /// Static craftbukkit mirror
    pub getbukkit: String,
    /// Version-pinned spigot mirror
    pub undefined_creations: String,
    /// Full URL of the latest BungeeCord jar
    pub bungeecord: String,
    pub purpur: String,
    pub leaf: String,
    pub asp: String,
    /// Jenkins job root hosting the Pufferfish builds
    pub pufferfish: String,
    pub spigot_api: String,
    pub hangar_api: String,
    pub modrinth_api: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            papermc: constants::PAPERMC_API.to_string(),
            getbukkit: constants::GETBUKKIT_MIRROR.to_string(),
            undefined_creations: constants::UNDEFINED_CREATIONS_MIRROR.to_string(),
            bungeecord: constants::BUNGEECORD_ARTIFACT.to_string(),
            purpur: constants::PURPUR_API.to_string(),
            leaf: constants::LEAF_API.to_string(),
            asp: constants::ASP_API.to_string(),
            pufferfish: constants::PUFFERFISH_CI.to_string(),
            spigot_api: constants::SPIGOT_API.to_string(),
            hangar_api: constants::HANGAR_API.to_string(),
            modrinth_api: constants::MODRINTH_API.to_string(),
        }
    }
}

impl Endpoints {
    /// Load `endpoints.toml` from the config dir, or the defaults if it does not exist
    pub fn load() -> anyhow::Result<Self> {
        let path = endpoints_path();
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)?;
        Self::from_toml(&text)
            .map_err(|e| anyhow::anyhow!("Invalid endpoint config '{}': {}", path.display(), e))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let endpoints: Endpoints = toml::from_str(text)?;
        Ok(endpoints.normalized())
    }

    /// Strip trailing slashes so URL templates can join with a single '/'
    pub fn normalized(self) -> Self {
        fn trim(url: String) -> String {
            url.trim_end_matches('/').to_string()
        }

        Self {
            papermc: trim(self.papermc),
            getbukkit: trim(self.getbukkit),
            undefined_creations: trim(self.undefined_creations),
            bungeecord: trim(self.bungeecord),
            purpur: trim(self.purpur),
            leaf: trim(self.leaf),
            asp: trim(self.asp),
            pufferfish: trim(self.pufferfish),
            spigot_api: trim(self.spigot_api),
            hangar_api: trim(self.hangar_api),
            modrinth_api: trim(self.modrinth_api),
        }
    }
}
