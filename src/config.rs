//! Command-line arguments and data folder resolution

use clap::Parser;
use std::path::{Path, PathBuf};

/// File name of the cached dataset inside the data folder.
pub const DATASET_FILE_NAME: &str = "tmdb_movies_countries_clean.csv";

/// Fixed remote location of the dataset, fetched once if no local copy exists.
pub const DATASET_URL: &str =
    "https://drive.google.com/uc?id=19qfT8lml9jXUKnCcvdBKt9Zg1J5VYpgr&export=download";

/// Command-line arguments for cinemap
#[derive(Parser, Debug)]
#[command(name = "cinemap")]
#[command(about = "Interactive movie-production choropleth dashboard")]
#[command(version)]
pub struct Args {
    /// Host to listen on
    #[arg(long, default_value = "0.0.0.0", env = "CINEMAP_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "CINEMAP_PORT")]
    pub port: u16,

    /// Folder holding the cached dataset
    #[arg(short, long, env = "CINEMAP_DATA")]
    pub data_folder: Option<PathBuf>,

    /// Override the dataset download URL
    #[arg(long, env = "CINEMAP_DATASET_URL")]
    pub dataset_url: Option<String>,
}

/// Data folder resolution priority order:
/// 1. Command-line argument / environment variable (via clap)
/// 2. `data_folder` key in the platform config file
/// 3. OS-dependent compiled default (fallback)
pub fn resolve_data_folder(cli_arg: Option<&Path>) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Some(config_path) = config_file_path() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            if let Some(folder) = data_folder_from_toml(&content) {
                return folder;
            }
        }
    }

    default_data_folder()
}

/// Create the data folder (and parents) if it does not exist yet.
pub fn ensure_data_folder(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Platform config file location: `<config dir>/cinemap/config.toml`
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cinemap").join("config.toml"))
}

/// Extract the `data_folder` key from config file content.
fn data_folder_from_toml(content: &str) -> Option<PathBuf> {
    let value = toml::from_str::<toml::Value>(content).ok()?;
    value
        .get("data_folder")
        .and_then(|v| v.as_str())
        .map(PathBuf::from)
}

/// OS-dependent default data folder under the local data dir
fn default_data_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("cinemap"))
        .unwrap_or_else(|| PathBuf::from("./cinemap_data"))
}
