// File: crates/ascent-core/src/source.rs
// Summary: Where rides come from: a single HTTP GET of the published JSON, or a local JSON/CSV file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::dataset::Dataset;
use crate::error::{ChartError, Result};

/// Published cyclist dataset.
pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Remote { url: String, timeout: Duration },
    File(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Self::Remote { url: DEFAULT_URL.to_string(), timeout: DEFAULT_TIMEOUT }
    }
}

impl Source {
    /// The only suspension point of the pipeline; everything after it is synchronous.
    pub async fn load(&self) -> Result<Dataset> {
        match self {
            Source::Remote { url, timeout } => fetch_dataset(url, *timeout).await,
            Source::File(path) => load_dataset(path),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Source::Remote { url, .. } => url.clone(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// GET `url` once and parse the body. No retries; the timeout covers connect and body.
pub async fn fetch_dataset(url: &str, timeout: Duration) -> Result<Dataset> {
    info!(url, timeout_ms = timeout.as_millis() as u64, "fetching rides");
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .build()?;
    fetch_with(&client, url).await
}

/// Fetch with a caller-built client (custom proxy or TLS settings).
pub async fn fetch_with(client: &reqwest::Client, url: &str) -> Result<Dataset> {
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        warn!(url, status = status.as_u16(), "fetch rejected");
        return Err(ChartError::Status { url: url.to_string(), status: status.as_u16() });
    }
    let body = resp.bytes().await?;
    debug!(bytes = body.len(), "response received");

    let dataset = Dataset::from_json_slice(&body)?;
    info!(records = dataset.len(), "rides loaded");
    Ok(dataset)
}

/// Load a local `.json` or `.csv` file.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    info!(path = %path.display(), "loading rides");

    let dataset = match ext.as_str() {
        "json" => Dataset::from_json_slice(&std::fs::read(path)?)?,
        "csv" => Dataset::from_csv_reader(std::fs::File::open(path)?)?,
        _ => return Err(ChartError::UnsupportedInput(path.to_path_buf())),
    };
    info!(records = dataset.len(), "rides loaded");
    Ok(dataset)
}
