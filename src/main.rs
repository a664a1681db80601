mod cli;
mod commands;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use jarfetch::config;
use jarfetch::{Downloader, Endpoints};
use log::debug;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Exit codes:
    // 0 = downloaded (or already present)
    // 1 = download failed
    // 2 = bad input or configuration
    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            ui::error(&format!("{:#}", e));
            2
        }
    };

    std::process::exit(code);
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let endpoints = Endpoints::load()?;
    debug!("Using endpoints: {:?}", endpoints);
    let downloader = Downloader::new(endpoints);

    match cli.command {
        Commands::Server {
            flavor,
            version,
            dir,
            json,
        } => {
            let dir = dir.unwrap_or_else(|| PathBuf::from(config::config_dir()));
            commands::server::server(&downloader, flavor, &version, &dir, json).await
        }
        Commands::Plugin {
            url,
            server_type,
            dir,
            json,
        } => {
            let dir = dir.unwrap_or_else(config::plugins_dir);
            commands::plugin::plugin(&downloader, &url, &server_type, &dir, json).await
        }
        Commands::Name { url, server_type } => {
            commands::name::name(&downloader, &url, &server_type).await
        }
    }
}
