//! Markdown file persistence for generated PRDs.
//!
//! Plain verbatim writes: no atomicity, no overwrite protection, no
//! directory creation. The default target is the process working directory.

use std::path::{Path, PathBuf};

use crate::{log_error, log_info};

/// Default filename for a saved PRD: `streamlit_app_prd_<YYYYMMDD_HHMMSS>.md`
/// in local time.
pub fn default_prd_filename() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("streamlit_app_prd_{}.md", timestamp)
}

/// Write the PRD verbatim as UTF-8 to `path`.
pub fn save_prd_to_path(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content)?;
    log_info!("Saved PRD to {:?}", path);
    Ok(())
}

/// Write the PRD into the current working directory, generating a timestamped
/// filename when none is supplied. Returns the resolved path.
pub fn save_prd_to_markdown(content: &str, filename: Option<&str>) -> anyhow::Result<PathBuf> {
    let filename = filename
        .map(str::to_string)
        .unwrap_or_else(default_prd_filename);

    let path = std::env::current_dir()?.join(filename);
    save_prd_to_path(&path, content).inspect_err(|e| {
        log_error!("Failed to save PRD to {:?}: {}", path, e);
    })?;
    Ok(path)
}
