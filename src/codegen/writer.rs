//! Filesystem output for generated artifacts

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{GenError, Result};

/// Write one artifact, creating parent directories as needed.
///
/// Existing files are overwritten unconditionally so regeneration stays
/// idempotent. Failures carry the table and artifact kind for the
/// per-artifact error log.
pub fn write_artifact(
    dir: &Path,
    file_name: &str,
    content: &str,
    table: &str,
    artifact: &'static str,
) -> Result<()> {
    fs::create_dir_all(dir)
        .and_then(|_| fs::write(dir.join(file_name), content))
        .map_err(|source| GenError::ArtifactWrite {
            table: table.to_string(),
            artifact,
            source,
        })?;
    debug!(table, artifact, file = file_name, "wrote artifact");
    Ok(())
}
