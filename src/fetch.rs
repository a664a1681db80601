// Artifact fetcher: the only place that writes downloaded jars to disk

use crate::error::{Error, Result};
use crate::result::DownloadResult;
use crate::sources::http;
use futures::StreamExt;
use log::{debug, info, warn};
use std::path::{Component, Path};
use tokio::fs::{self, File};
use tokio::io::{AsyncWriteExt, BufWriter};

/// Download `download_url` into `folder/file_name` unless it is already there.
///
/// A non-empty file at the destination counts as downloaded: no request is
/// sent and its content is not checked. The destination is only created once
/// the server answered with a success status, and is removed again if the
/// transfer breaks off or yields no bytes.
pub async fn fetch(folder: &Path, download_url: &str, file_name: &str) -> DownloadResult {
    if !is_plain_file_name(file_name) {
        warn!("Refusing to write '{}' from {}", file_name, download_url);
        return DownloadResult::failed(format!("Invalid file name '{}'", file_name));
    }
    let path = folder.join(file_name);

    if is_present(&path).await {
        debug!("{} already exists, skipping download", path.display());
        return DownloadResult::success(path);
    }

    match download(&path, download_url).await {
        Ok(bytes) => {
            info!(
                "Downloaded {} ({} bytes) from {}",
                path.display(),
                bytes,
                download_url
            );
            DownloadResult::success(path)
        }
        Err(e) => {
            warn!("{}", e);
            DownloadResult::failed(e.to_string())
        }
    }
}

/// Provider-supplied names must stay inside the destination folder
fn is_plain_file_name(file_name: &str) -> bool {
    let mut components = Path::new(file_name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !file_name.contains(['/', '\\'])
}

async fn is_present(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|meta| meta.is_file() && meta.len() > 0)
        .unwrap_or(false)
}

async fn download(path: &Path, url: &str) -> Result<u64> {
    let response = http::open_stream(url).await?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::artifact(url, format!("{}: {}", parent.display(), e)))?;
    }

    let file = File::create(path)
        .await
        .map_err(|e| Error::artifact(url, format!("{}: {}", path.display(), e)))?;

    match stream_to_file(file, response, url, path).await {
        Ok(0) => {
            discard_partial(path).await;
            Err(Error::artifact(url, "empty response body"))
        }
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            discard_partial(path).await;
            Err(e)
        }
    }
}

async fn stream_to_file(
    file: File,
    response: reqwest::Response,
    url: &str,
    path: &Path,
) -> Result<u64> {
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::artifact(url, e))?;
        writer
            .write_all(&chunk)
            .await
            .map_err(|e| Error::artifact(url, format!("{}: {}", path.display(), e)))?;
        written += chunk.len() as u64;
    }

    writer
        .flush()
        .await
        .map_err(|e| Error::artifact(url, format!("{}: {}", path.display(), e)))?;

    Ok(written)
}

async fn discard_partial(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        warn!("Could not remove partial download {}: {}", path.display(), e);
    }
}
