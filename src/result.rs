// Outcome of a download request

use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    Success,
    Failed,
}

/// Result handed back to callers instead of an error.
///
/// `file` is set on every success, including when the file was already on
/// disk. `error` is set on every failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadResult {
    pub status: DownloadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl DownloadResult {
    pub fn success(file: impl Into<PathBuf>) -> Self {
        Self {
            status: DownloadStatus::Success,
            error: None,
            file: Some(file.into()),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            status: DownloadStatus::Failed,
            error: Some(error.into()),
            file: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == DownloadStatus::Success
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let ok = serde_json::to_value(DownloadResult::success("server/paper.jar")).unwrap();
        assert_eq!(ok["status"], "success");
        assert_eq!(ok["file"], "server/paper.jar");
        assert!(ok.get("error").is_none());

        let failed = serde_json::to_value(DownloadResult::failed("HTTP 404")).unwrap();
        assert_eq!(failed["status"], "failed");
        assert_eq!(failed["error"], "HTTP 404");
        assert!(failed.get("file").is_none());
    }
}
