//! Version control initialization for generated projects.

use git2::Repository;
use log::debug;
use std::path::Path;

use crate::error::{Error, Result};

/// Initializes a git repository in `project_dir`.
///
/// # Errors
/// * `Error::ExternalToolFailure` if libgit2 cannot create the repository
pub fn init_repository<P: AsRef<Path>>(project_dir: P) -> Result<()> {
    let project_dir = project_dir.as_ref();
    let repo = Repository::init(project_dir).map_err(Error::ExternalToolFailure)?;
    debug!("Initialized git repository in '{}'", repo.path().display());
    Ok(())
}
