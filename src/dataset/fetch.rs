//! Dataset download (fetch-if-absent)
//!
//! The CSV is fetched once from its fixed remote location and cached in the
//! data folder; later runs reuse the local copy. A failed fetch at startup
//! is fatal for the process, which cannot serve anything without its data.

use crate::Result;
use std::path::Path;
use tracing::info;

/// Ensure the dataset file exists at `path`, downloading it if absent.
pub async fn ensure_dataset(path: &Path, url: &str) -> Result<()> {
    if path.exists() {
        info!("Using cached dataset at {}", path.display());
        return Ok(());
    }

    info!("Dataset not found locally; downloading from {}", url);
    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;

    // Write to a temp name and rename so an interrupted download never
    // masquerades as a cached dataset.
    let partial = path.with_extension("part");
    std::fs::write(&partial, &bytes)?;
    std::fs::rename(&partial, path)?;

    info!("Downloaded {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
