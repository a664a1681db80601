// Server type capabilities used to pick plugin variants

use std::fmt;
use std::str::FromStr;

/// What kind of server a plugin is being fetched for.
///
/// Resolvers only ever read these four properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerType {
    proxy: bool,
    custom: bool,
    folia: bool,
    loader_name: String,
}

impl ServerType {
    /// A plain game server whose plugins are published for `loader_name`
    pub fn new(loader_name: impl Into<String>) -> Self {
        Self {
            proxy: false,
            custom: false,
            folia: false,
            loader_name: loader_name.into(),
        }
    }

    /// A self-built server that accepts plugins for any loader
    pub fn custom() -> Self {
        Self {
            custom: true,
            ..Self::new("paper")
        }
    }

    pub fn with_proxy(mut self) -> Self {
        self.proxy = true;
        self
    }

    pub fn with_folia(mut self) -> Self {
        self.folia = true;
        self
    }

    pub fn is_proxy(&self) -> bool {
        self.proxy
    }

    pub fn is_custom(&self) -> bool {
        self.custom
    }

    pub fn is_folia(&self) -> bool {
        self.folia
    }

    pub fn loader_name(&self) -> &str {
        &self.loader_name
    }
}

impl FromStr for ServerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let server_type = match s.to_ascii_lowercase().as_str() {
            "paper" => Self::new("paper"),
            "spigot" => Self::new("spigot"),
            "bukkit" | "craftbukkit" => Self::new("bukkit"),
            "purpur" => Self::new("purpur"),
            "folia" => Self::new("folia").with_folia(),
            "velocity" => Self::new("velocity").with_proxy(),
            "waterfall" => Self::new("waterfall").with_proxy(),
            "bungeecord" => Self::new("bungeecord").with_proxy(),
            "custom" => Self::custom(),
            other => {
                return Err(format!(
                    "Unknown server type '{}'. Expected one of: paper, spigot, bukkit, purpur, folia, velocity, waterfall, bungeecord, custom",
                    other
                ));
            }
        };
        Ok(server_type)
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.custom {
            write!(f, "custom")
        } else {
            write!(f, "{}", self.loader_name)
        }
    }
}
