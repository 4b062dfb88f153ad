//! Project generation orchestration.
//! Sequences the output directory check, template installation and snippet merging.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    config::ResolvedConfig,
    error::{Error, Result},
    installer::install,
    merger::merge,
    placeholder::PlaceholderRegistry,
};

/// Ensures the output directory is safe to write to.
///
/// # Arguments
/// * `output_dir` - Target directory path for generated output
/// * `force` - Whether to install into an existing non-empty directory
///
/// # Returns
/// * `Result<PathBuf>` - Validated output directory path
///
/// # Errors
/// * `Error::OutputDirectoryExists` if the directory has entries and force is false
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.is_dir() && !force {
        let mut entries = fs::read_dir(output_dir).map_err(Error::read(output_dir))?;
        if entries.next().is_some() {
            return Err(Error::OutputDirectoryExists {
                output_dir: output_dir.display().to_string(),
            });
        }
    }
    Ok(output_dir.to_path_buf())
}

/// Generates the project described by `config`.
///
/// Returns the paths of the files that remain after snippets are merged. On failure,
/// whatever was written before the failing step stays on disk.
pub fn create_project(
    config: &ResolvedConfig,
    registry: &PlaceholderRegistry,
    force: bool,
) -> Result<Vec<PathBuf>> {
    let project_dir = ensure_output_dir(&config.project_dir, force)?;
    debug!("Generating project in '{}'", project_dir.display());

    let installed = install(&config.template_dir, &project_dir, config, registry)?;
    merge(&installed)?;

    Ok(installed
        .into_iter()
        .filter(|file| !file.is_snippet)
        .map(|file| file.path)
        .collect())
}
