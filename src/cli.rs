// CLI module for handling command-line interface

use clap::{Parser, Subcommand};
use jarfetch::constants::DEFAULT_SERVER_TYPE;
use jarfetch::{Flavor, ServerType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jarfetch")]
#[command(about = "Download Minecraft server, proxy and plugin jars from their official sources")]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download a server or proxy jar
    Server {
        /// paper, waterfall, velocity, folia, spigot, craftbukkit, bungeecord, purpur, leaf, asp, pufferfish
        flavor: Flavor,
        /// Minecraft version, e.g. 1.21.4
        version: String,
        /// Destination folder (defaults to the working directory)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Download a plugin from a Spigot, Hangar or Modrinth page URL
    Plugin {
        url: String,
        #[arg(long, default_value = DEFAULT_SERVER_TYPE)]
        server_type: ServerType,
        /// Destination folder (defaults to ./plugins)
        #[arg(long)]
        dir: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Print the file name a plugin would be saved under
    Name {
        url: String,
        #[arg(long, default_value = DEFAULT_SERVER_TYPE)]
        server_type: ServerType,
    },
}
