use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::DownloadConfig;
use crate::download_weights::{download, ensure_directory};
use crate::error::FetchError;

const MIB: f64 = 1024.0 * 1024.0;

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    Downloaded {
        path: PathBuf,
        bytes: u64,
    },
    Failed {
        error: FetchError,
        source_url: String,
        browse_url: Option<String>,
        destination: PathBuf,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Downloaded { .. })
    }

    /// Writes the human-readable report, including manual instructions on failure.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Outcome::Downloaded { path, bytes } => {
                writeln!(out, "Download completed successfully!")?;
                writeln!(out, "Saved to {}", path.display())?;
                writeln!(out, "File size: {:.2} MiB", *bytes as f64 / MIB)
            }
            Outcome::Failed {
                error,
                source_url,
                browse_url,
                destination,
            } => {
                writeln!(out, "Error downloading the model: {}", error)?;
                writeln!(out)?;
                writeln!(out, "Please manually download the model weights from:")?;
                writeln!(out, "{}", source_url)?;
                if let Some(browse_url) = browse_url {
                    writeln!(out, "(or browse {})", browse_url)?;
                }
                writeln!(out, "And place them at: {}", destination.display())
            }
        }
    }
}

/// Prepares the directory, fetches the checkpoint and measures it on disk.
pub fn run(config: &DownloadConfig) -> Outcome {
    run_with_output(config, &mut io::stdout())
}

/// Like [`run`], printing the progress line to `out`.
pub fn run_with_output<W: Write>(config: &DownloadConfig, out: &mut W) -> Outcome {
    if let Err(e) = writeln!(
        out,
        "Downloading RF-DETR model weights to {}...",
        config.destination.display()
    ) {
        tracing::warn!(error = %e, "could not print progress line");
    }

    match fetch(config) {
        Ok(bytes) => Outcome::Downloaded {
            path: config.destination.clone(),
            bytes,
        },
        Err(error) => {
            tracing::error!(%error, "checkpoint download failed");
            Outcome::Failed {
                error,
                source_url: config.source_url.clone(),
                browse_url: config.browse_url.clone(),
                destination: config.destination.clone(),
            }
        }
    }
}

fn fetch(config: &DownloadConfig) -> Result<u64, FetchError> {
    ensure_directory(config.weights_dir())?;
    download(&config.source_url, &config.destination)?;
    let meta = fs::metadata(&config.destination).map_err(|e| FetchError::io(&config.destination, e))?;
    Ok(meta.len())
}
