use std::path::PathBuf;

use clap::Parser;

use crate::config::{DownloadConfig, DEFAULT_DESTINATION, DEFAULT_SOURCE_URL};

/// Download the pre-trained RF-DETR checkpoint.
#[derive(Debug, Parser)]
#[command(name = "download-rfdetr-weights", version)]
pub struct Cli {
    /// URL to fetch the checkpoint from
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    pub url: String,

    /// Where to write the checkpoint
    #[arg(short, long, default_value = DEFAULT_DESTINATION)]
    pub output: PathBuf,
}

impl Cli {
    pub fn into_config(self) -> DownloadConfig {
        DownloadConfig::new(self.url, self.output)
    }
}
