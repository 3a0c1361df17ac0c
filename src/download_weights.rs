use std::fs::{self, File};
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;

use crate::error::{FetchError, Result};

/// Size of each read from the response body.
pub const CHUNK_SIZE: usize = 8 * 1024;

const PB_STYLE: &str =
    "{spinner:.green} [{elapsed_precise}] {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

/// Creates `path` and any missing parents. Succeeds if it already exists.
pub fn ensure_directory(path: &Path) -> Result<()> {
    tracing::debug!(dir = %path.display(), "preparing weights directory");
    fs::create_dir_all(path).map_err(|e| FetchError::io(path, e))
}

/// Streams the resource at `source_url` into `destination`.
///
/// # Arguments
///
/// * `source_url` - URL of the checkpoint.
/// * `destination` - File to write. Truncated if it already exists.
///
/// # Returns
///
/// The number of bytes written. On error the destination may hold a partial
/// file and should not be trusted.
pub fn download(source_url: &str, destination: &Path) -> Result<u64> {
    let client = Client::builder()
        .timeout(None::<Duration>)
        .build()
        .map_err(|e| FetchError::request(source_url, e))?;

    tracing::info!(url = source_url, "requesting checkpoint");
    let mut response = client
        .get(source_url)
        .send()
        .map_err(|e| FetchError::request(source_url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: source_url.to_string(),
            status,
        });
    }

    let total = response.content_length();
    tracing::info!(%status, content_length = ?total, "streaming response body");

    let mut file = File::create(destination).map_err(|e| FetchError::io(destination, e))?;
    let bar = progress_bar(total);

    let copied = copy_chunked(&mut response, &mut file, CHUNK_SIZE, |n| bar.inc(n as u64))
        .and_then(|n| file.flush().map(|_| n).map_err(CopyError::Write));

    match copied {
        Ok(written) => {
            bar.finish_and_clear();
            tracing::info!(bytes = written, path = %destination.display(), "checkpoint written");
            Ok(written)
        }
        Err(err) => {
            bar.abandon();
            tracing::warn!(path = %destination.display(), "download interrupted, partial file left behind");
            Err(match err {
                CopyError::Read(source) => FetchError::Body {
                    url: source_url.to_string(),
                    source,
                },
                CopyError::Write(source) => FetchError::io(destination, source),
            })
        }
    }
}

fn progress_bar(total: Option<u64>) -> ProgressBar {
    let bar = match total {
        Some(len) => ProgressBar::new(len),
        None => ProgressBar::new_spinner(),
    };
    if let Ok(style) = ProgressStyle::with_template(PB_STYLE) {
        bar.set_style(style);
    }
    bar
}

/// Which side of the copy failed.
#[derive(Debug)]
pub(crate) enum CopyError {
    Read(io::Error),
    Write(io::Error),
}

/// Copies `reader` into `writer` one `chunk_size` piece at a time, in order.
pub(crate) fn copy_chunked<R, W, F>(
    reader: &mut R,
    writer: &mut W,
    chunk_size: usize,
    mut on_chunk: F,
) -> std::result::Result<u64, CopyError>
where
    R: Read,
    W: Write,
    F: FnMut(usize),
{
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut written = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(written),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyError::Read(e)),
        };
        writer.write_all(&buf[..n]).map_err(CopyError::Write)?;
        written += n as u64;
        on_chunk(n);
    }
}
