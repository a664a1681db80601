// Constants module for shared string constants

pub const ENDPOINTS_FILE: &str = "endpoints.toml";
pub const PLUGINS_DIR: &str = "plugins";
pub const DIR_ENV: &str = "JARFETCH_DIR";
pub const DEFAULT_SERVER_TYPE: &str = "paper";

// Default provider endpoints
pub const PAPERMC_API: &str = "https://api.papermc.io/v2/projects";
pub const GETBUKKIT_MIRROR: &str = "https://download.getbukkit.org/craftbukkit";
pub const UNDEFINED_CREATIONS_MIRROR: &str = "https://repo.undefinedcreations.com/releases/spigot";
pub const BUNGEECORD_ARTIFACT: &str =
    "https://ci.md-5.net/job/BungeeCord/lastSuccessfulBuild/artifact/bootstrap/target/BungeeCord.jar";
pub const PURPUR_API: &str = "https://api.purpurmc.org/v2/purpur";
pub const LEAF_API: &str = "https://api.leafmc.one/v2/projects/leaf";
pub const ASP_API: &str = "https://api.infernalsuite.com/v1/projects/asp_server";
pub const PUFFERFISH_CI: &str = "https://ci.pufferfish.host/job";
pub const SPIGOT_API: &str = "https://api.spiget.org/v2/resources";
pub const HANGAR_API: &str = "https://hangar.papermc.io/api/v1/projects";
pub const MODRINTH_API: &str = "https://api.modrinth.com/v2/project";
