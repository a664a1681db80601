//! Blocking wrapper over [`crate::Downloader`].
//!
//! Each call drives the async implementation to completion on a private
//! current-thread runtime. Do not call these methods from inside an async
//! context; use [`crate::Downloader`] there instead.

use crate::config::Endpoints;
use crate::error::Result;
use crate::result::DownloadResult;
use crate::server_type::ServerType;
use crate::sources::{Flavor, ResolvedArtifact};
use std::path::Path;
use tokio::runtime::{Builder, Runtime};

pub struct Downloader {
    inner: crate::Downloader,
    runtime: Runtime,
}

impl Downloader {
    pub fn new(endpoints: Endpoints) -> std::io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            inner: crate::Downloader::new(endpoints),
            runtime,
        })
    }

    pub fn resolve_runtime(&self, flavor: Flavor, version: &str) -> Result<ResolvedArtifact> {
        self.runtime
            .block_on(self.inner.resolve_runtime(flavor, version))
    }

    pub fn download_runtime(&self, flavor: Flavor, folder: &Path, version: &str) -> DownloadResult {
        self.runtime
            .block_on(self.inner.download_runtime(flavor, folder, version))
    }

    pub fn download_plugin(
        &self,
        folder: &Path,
        url: &str,
        server_type: &ServerType,
    ) -> Result<DownloadResult> {
        self.runtime
            .block_on(self.inner.download_plugin(folder, url, server_type))
    }

    pub fn resolve_file_name(&self, url: &str, server_type: &ServerType) -> Result<String> {
        self.runtime
            .block_on(self.inner.resolve_file_name(url, server_type))
    }
}
