//! Fetches the pre-trained RF-DETR checkpoint into a local weights directory.

pub mod cli;
pub mod config;
pub mod download_weights;
pub mod error;
pub mod report;

pub use config::DownloadConfig;
pub use download_weights::{download, ensure_directory, CHUNK_SIZE};
pub use error::FetchError;
pub use report::{run, run_with_output, Outcome};
