//! Dataset fetcher.
//!
//! Downloads the gzip-compressed building CSV over HTTPS and decompresses
//! it next to the download.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use flate2::read::GzDecoder;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncWriteExt;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "fetch")]
#[command(about = "Download and decompress the building dataset")]
struct Args {
    /// HTTPS URL of the gzip-compressed CSV
    #[arg(short, long)]
    url: String,

    /// Local name for the downloaded archive; the decompressed CSV drops
    /// the .gz suffix
    #[arg(short, long, default_value = "009_buildings.csv.gz")]
    file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    info!("Downloading {}", args.url);
    if let Err(e) = download(&args.url, &args.file).await {
        // A failed download aborts cleanly: log it and leave neither a
        // partial archive nor a CSV behind.
        error!("Download failed: {:#}", e);
        discard_partial(&args.file);
        return Ok(());
    }
    info!("Downloaded {}", args.file.display());

    let csv_path = args.file.with_extension("");
    decompress(&args.file, &csv_path)?;
    info!("Decompressed to {}", csv_path.display());

    Ok(())
}

async fn download(url: &str, destination: &Path) -> Result<()> {
    let client = reqwest::Client::builder()
        .user_agent("corcovado/0.1 (building dataset fetcher)")
        .timeout(std::time::Duration::from_secs(300))
        .build()?;

    let mut response = client
        .get(url)
        .send()
        .await
        .context("request failed")?
        .error_for_status()
        .context("server returned an error status")?;

    let progress = match response.content_length() {
        Some(len) => {
            let pb = ProgressBar::new(len);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes}",
                    )?
                    .progress_chars("#>-"),
            );
            Some(pb)
        }
        None => None,
    };

    let mut file = tokio::fs::File::create(destination)
        .await
        .with_context(|| format!("cannot create {}", destination.display()))?;

    while let Some(chunk) = response.chunk().await.context("download interrupted")? {
        file.write_all(&chunk).await?;
        if let Some(pb) = &progress {
            pb.inc(chunk.len() as u64);
        }
    }
    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish();
    }

    Ok(())
}

/// A truncated archive from an interrupted download must not survive to a
/// later run, where decompressing it would fail partway through.
fn discard_partial(path: &Path) {
    if path.exists() {
        if let Err(e) = std::fs::remove_file(path) {
            error!(
                "Could not remove partial download {}: {}",
                path.display(),
                e
            );
        }
    }
}

fn decompress(archive: &Path, destination: &Path) -> Result<()> {
    let input =
        File::open(archive).with_context(|| format!("cannot open {}", archive.display()))?;
    let mut decoder = GzDecoder::new(input);

    let mut output = File::create(destination)
        .with_context(|| format!("cannot create {}", destination.display()))?;

    io::copy(&mut decoder, &mut output)
        .with_context(|| format!("failed to decompress {}", archive.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_partial_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("buildings.csv.gz");
        std::fs::write(&path, b"truncated").unwrap();

        discard_partial(&path);
        assert!(!path.exists());
    }

    #[test]
    fn test_discard_partial_tolerates_missing_file() {
        discard_partial(Path::new("no_such_download.csv.gz"));
    }
}
