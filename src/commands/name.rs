// Name command for previewing a plugin's file name

use crate::ui;
use jarfetch::{Downloader, Error, ServerType};

pub async fn name(
    downloader: &Downloader,
    url: &str,
    server_type: &ServerType,
) -> anyhow::Result<i32> {
    match downloader.resolve_file_name(url, server_type).await {
        Ok(file_name) => {
            ui::plain(&file_name);
            Ok(0)
        }
        Err(e) if e.is_input_error() => Err(e.into()),
        Err(e @ Error::NoCompatibleVersion { .. }) => {
            ui::error(&e.to_string());
            ui::dim("Try --server-type custom to accept builds for any loader.");
            Ok(1)
        }
        Err(e) => {
            ui::error(&e.to_string());
            Ok(1)
        }
    }
}
