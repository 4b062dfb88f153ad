//! Template installation.
//! Walks template subtrees, rewrites every entry's name and content with the resolved
//! placeholder values and writes the result below the project directory.

use log::debug;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    config::{ProjectType, ResolvedConfig},
    constants::{
        COMMON_TEMPLATE, EXEC_EMPTY_DIRS, EXEC_TEMPLATE, LIB_COMMON_TEMPLATE,
        LIB_COMPILED_TEMPLATE, LIB_HEADER_TEMPLATE, SNIPPET_EXTENSION,
    },
    error::{Error, Result},
    naming::is_valid_path_segment,
    placeholder::{PlaceholderRegistry, Substitutions},
};

/// A regular file written by the installer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstalledFile {
    pub path: PathBuf,
    /// Set for fragments that the merger splices into a host file
    pub is_snippet: bool,
}

impl InstalledFile {
    pub fn new(path: PathBuf) -> Self {
        let is_snippet = is_snippet_path(&path);
        Self { path, is_snippet }
    }
}

/// Checks whether a path names a snippet fragment.
pub fn is_snippet_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SNIPPET_EXTENSION)
}

/// Template subtrees installed for a project type, in installation order.
pub fn subtrees_for(project_type: ProjectType) -> &'static [&'static str] {
    match project_type {
        ProjectType::Executable => &[COMMON_TEMPLATE, EXEC_TEMPLATE],
        ProjectType::CompiledLibrary => {
            &[COMMON_TEMPLATE, LIB_COMMON_TEMPLATE, LIB_COMPILED_TEMPLATE]
        }
        ProjectType::HeaderOnlyLibrary => {
            &[COMMON_TEMPLATE, LIB_COMMON_TEMPLATE, LIB_HEADER_TEMPLATE]
        }
    }
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(Error::write(path))
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    fs::write(path, content).map_err(Error::write(path))
}

/// Copies templates into a destination tree, applying placeholder substitutions.
pub struct Installer<'a> {
    substitutions: Substitutions<'a>,
    written: HashSet<PathBuf>,
}

impl<'a> Installer<'a> {
    /// Binds the registry to the resolved configuration's values.
    ///
    /// # Errors
    /// * `Error::PlaceholderConflict` if the configuration has no value for a token
    pub fn new(registry: &'a PlaceholderRegistry, config: &'a ResolvedConfig) -> Result<Self> {
        let substitutions = registry.bind(|name| config.value_of(name))?;
        Ok(Self { substitutions, written: HashSet::new() })
    }

    /// Renders a template path relative to its subtree root.
    ///
    /// # Arguments
    /// * `relative` - Path of the entry below the subtree root
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Relative destination path
    ///
    /// # Errors
    /// * `Error::InvalidInput` if a segment is not UTF-8 or does not render to a
    ///   usable file name (empty, `.`, `..`, separators, control characters)
    pub fn render_path(&self, relative: &Path) -> Result<PathBuf> {
        let mut rendered = PathBuf::new();
        for component in relative.components() {
            let Component::Normal(segment) = component else {
                return Err(Error::InvalidInput(format!(
                    "unexpected component in template path '{}'",
                    relative.display()
                )));
            };
            let segment = segment.to_str().ok_or_else(|| {
                Error::InvalidInput(format!(
                    "template path '{}' is not valid UTF-8",
                    relative.display()
                ))
            })?;
            let name = self.substitutions.render_name(segment);
            if !is_valid_path_segment(&name) {
                return Err(Error::InvalidInput(format!(
                    "'{segment}' in '{}' renders to an unusable name '{name}'",
                    relative.display()
                )));
            }
            rendered.push(&*name);
        }
        Ok(rendered)
    }

    /// Writes one template file to `target`, substituting placeholders in text files.
    ///
    /// Files that are not valid UTF-8 are copied unchanged.
    pub fn install_file(&self, source: &Path, target: &Path) -> Result<()> {
        let bytes = fs::read(source).map_err(Error::read(source))?;
        match String::from_utf8(bytes) {
            Ok(text) => {
                let content = self.substitutions.render_content(&text);
                debug!("Writing file: {}", target.display());
                write_file(target, content.as_bytes())
            }
            Err(err) => {
                debug!("Copying binary file: {}", target.display());
                write_file(target, err.as_bytes())
            }
        }
    }

    /// Installs one template subtree below `dest`.
    ///
    /// Directories are created before their entries. The returned list holds every
    /// regular file written.
    ///
    /// # Errors
    /// * `Error::TemplateMissing` if `template_dir` is not a directory
    /// * `Error::WriteError` if a destination was already written by this installer
    /// * `Error::WriteError` / `Error::ReadError` on filesystem failures
    pub fn install_tree(&mut self, template_dir: &Path, dest: &Path) -> Result<Vec<InstalledFile>> {
        if !template_dir.is_dir() {
            return Err(Error::TemplateMissing { path: template_dir.to_path_buf() });
        }
        debug!("Installing template '{}'", template_dir.display());

        let mut installed = Vec::new();
        for entry in WalkDir::new(template_dir).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(template_dir).to_path_buf();
                Error::ReadError { path, source: e.into() }
            })?;
            let relative = entry
                .path()
                .strip_prefix(template_dir)
                .map_err(|e| Error::InvalidInput(e.to_string()))?;
            let target = dest.join(self.render_path(relative)?);

            if entry.file_type().is_dir() {
                create_dir_all(&target)?;
            } else {
                if !self.written.insert(target.clone()) {
                    return Err(Error::WriteError {
                        path: target,
                        source: io::Error::new(
                            io::ErrorKind::AlreadyExists,
                            "already written by an earlier template subtree",
                        ),
                    });
                }
                self.install_file(entry.path(), &target)?;
                installed.push(InstalledFile::new(target));
            }
        }
        Ok(installed)
    }
}

/// Installs every template subtree selected by the configuration's project type.
///
/// # Arguments
/// * `template_root` - Directory holding the `common`, `exec`, `lib-*` subtrees
/// * `project_root` - Destination directory
/// * `config` - Resolved configuration providing placeholder values and project type
/// * `registry` - Placeholder table
///
/// # Returns
/// * `Result<Vec<InstalledFile>>` - Every regular file written, sorted by path
///
/// # Errors
/// * `Error::TemplateMissing` if a selected subtree is absent; subtrees installed
///   before it stay on disk
/// * `Error::WriteError` if a destination cannot be created or two subtrees render
///   to the same file
pub fn install(
    template_root: &Path,
    project_root: &Path,
    config: &ResolvedConfig,
    registry: &PlaceholderRegistry,
) -> Result<Vec<InstalledFile>> {
    let mut installer = Installer::new(registry, config)?;
    create_dir_all(project_root)?;

    let mut installed = Vec::new();
    for subtree in subtrees_for(config.project_type) {
        installed.extend(installer.install_tree(&template_root.join(subtree), project_root)?);
    }

    if config.project_type == ProjectType::Executable {
        for dir in EXEC_EMPTY_DIRS {
            create_dir_all(&project_root.join(dir))?;
        }
    }

    installed.sort();
    Ok(installed)
}
