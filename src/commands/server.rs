// Server command for downloading a server or proxy jar

use crate::ui;
use jarfetch::{DownloadResult, Downloader, Flavor};
use std::path::Path;

pub async fn server(
    downloader: &Downloader,
    flavor: Flavor,
    version: &str,
    dir: &Path,
    json: bool,
) -> anyhow::Result<i32> {
    let pb = ui::spinner(&format!("Downloading {} {}...", flavor, version), json);
    let result = downloader.download_runtime(flavor, dir, version).await;

    report(&pb, &format!("{} {}", flavor, version), &result, json)
}

/// Print a download result and map it to an exit code (0 = downloaded, 1 = failed)
pub fn report(
    pb: &indicatif::ProgressBar,
    label: &str,
    result: &DownloadResult,
    json: bool,
) -> anyhow::Result<i32> {
    if json {
        ui::clear_bar(pb);
        ui::json(result)?;
    } else if let Some(file) = result.file() {
        ui::finish_spinner_success(pb, &format!("{} -> {}", label, file.display()));
    } else {
        ui::finish_spinner_error(
            pb,
            &format!(
                "{} failed: {}",
                label,
                result.error.as_deref().unwrap_or("unknown error")
            ),
        );
    }

    Ok(if result.is_success() { 0 } else { 1 })
}
