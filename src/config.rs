use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_URL: &str =
    "https://huggingface.co/spaces/IDEA-Research/RF-DETR/resolve/main/checkpoint_best_regular.pth";
pub const DEFAULT_BROWSE_URL: &str = "https://huggingface.co/spaces/IDEA-Research/RF-DETR/tree/main";
pub const DEFAULT_DESTINATION: &str = "weights/pre-trained-model/checkpoint_best_regular.pth";

/// What to fetch and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    pub source_url: String,
    pub destination: PathBuf,
    /// Page an operator can open to fetch the file by hand. Only known for
    /// the default source.
    pub browse_url: Option<String>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        DownloadConfig {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            browse_url: Some(DEFAULT_BROWSE_URL.to_string()),
        }
    }
}

impl DownloadConfig {
    pub fn new(source_url: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        let source_url = source_url.into();
        let browse_url = (source_url == DEFAULT_SOURCE_URL).then(|| DEFAULT_BROWSE_URL.to_string());
        DownloadConfig {
            source_url,
            destination: destination.into(),
            browse_url,
        }
    }

    /// Directory that must exist before the checkpoint is written.
    pub fn weights_dir(&self) -> &Path {
        match self.destination.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}
