//! JSON report output.
//!
//! Reports are grouped by run date, one file per run:
//! `{json_output_dir}/{YYYY-MM-DD}/{HH-MM-SS}.json`.

use crate::models::BiasEdition;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// Path of the report file for `edition` under `json_output_dir`.
pub fn edition_path(edition: &BiasEdition, json_output_dir: &str) -> PathBuf {
    let file_name = format!("{}.json", edition.local_time.replace(':', "-"));
    PathBuf::from(json_output_dir)
        .join(&edition.local_date)
        .join(file_name)
}

/// Serialize `edition` and write it below `json_output_dir`.
///
/// Returns the path of the written file.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_edition(
    edition: &BiasEdition,
    json_output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(edition)?;
    let path = edition_path(edition, json_output_dir);

    if let Some(dir) = path.parent() {
        info!(dir = %dir.display(), "Ensuring JSON directory exists");
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    fs::write(&path, json).await?;
    info!(path = %path.display(), outcomes = edition.outcomes.len(), "Wrote JSON report");
    Ok(path)
}
