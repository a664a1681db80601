// Plugin command for downloading a plugin from its page URL

use crate::commands::server::report;
use crate::ui;
use jarfetch::{Downloader, ServerType};
use std::path::Path;

pub async fn plugin(
    downloader: &Downloader,
    url: &str,
    server_type: &ServerType,
    dir: &Path,
    json: bool,
) -> anyhow::Result<i32> {
    let pb = ui::spinner(&format!("Downloading {}...", url), json);

    let result = match downloader.download_plugin(dir, url, server_type).await {
        Ok(result) => result,
        Err(e) => {
            ui::clear_bar(&pb);
            return Err(e.into());
        }
    };

    report(&pb, url, &result, json)
}
