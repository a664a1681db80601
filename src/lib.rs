//! Resolve and download Minecraft server, proxy and plugin jars.
//!
//! Every provider (PaperMC, Purpur, Jenkins CI jobs, Spigot, Hangar,
//! Modrinth, ...) is queried through its own API to find the latest matching
//! artifact, which is then fetched into a destination folder. Downloads are
//! idempotent: a file that is already present is never fetched again.
//!
//! ```no_run
//! use jarfetch::{Downloader, Endpoints, ServerType};
//! use std::path::Path;
//!
//! # async fn run() -> jarfetch::Result<()> {
//! let downloader = Downloader::new(Endpoints::default());
//! let server = downloader.paper(Path::new("server"), "1.21.4").await;
//! let plugin = downloader
//!     .download_plugin(
//!         Path::new("server/plugins"),
//!         "https://modrinth.com/plugin/luckperms",
//!         &ServerType::new("paper"),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod blocking;
pub mod config;
pub mod constants;
pub mod downloader;
pub mod error;
pub mod fetch;
pub mod result;
pub mod server_type;
pub mod sources;

pub use config::Endpoints;
pub use downloader::Downloader;
pub use error::{Error, Result};
pub use result::{DownloadResult, DownloadStatus};
pub use server_type::ServerType;
pub use sources::{Flavor, ResolvedArtifact};
