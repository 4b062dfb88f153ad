//! Configuration resolution for cpp-project.
//! Turns the partial [`UserConfig`] supplied on the command line into a fully derived
//! [`ResolvedConfig`] by applying defaults and naming rules.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;

use crate::constants::TEMPLATE_DIR_NAME;
use crate::error::{Error, Result};
use crate::naming::{acronym, capitalize_first, is_valid_path_segment, pascal_to_snake_case};

/// Kind of project to generate; selects the template subtrees that get installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    /// Executable with an internal helper library
    #[default]
    #[value(name = "exec")]
    Executable,
    /// Compiled (static or shared) library
    #[value(name = "lib")]
    CompiledLibrary,
    /// Header-only library
    #[value(name = "header-only", alias = "lib_header_only")]
    HeaderOnlyLibrary,
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectType::Executable => write!(f, "executable"),
            ProjectType::CompiledLibrary => write!(f, "compiled library"),
            ProjectType::HeaderOnlyLibrary => write!(f, "header-only library"),
        }
    }
}

/// What the user specified. `None` means "not given", which is distinct from an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserConfig {
    pub project_name: String,
    pub target_base_name: Option<String>,
    pub abbreviation: Option<String>,
    pub cpp_namespace: Option<String>,
    pub cmake_namespace: Option<String>,
    pub project_type: Option<ProjectType>,
    pub template_dir: Option<PathBuf>,
    pub create_vcs: bool,
}

fn or_not_set<T: fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map_or_else(|| "[Not set]".to_string(), |v| v.to_string())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

impl fmt::Display for UserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " Project name:        {}", self.project_name)?;
        writeln!(f, " Project type:        {}", or_not_set(&self.project_type))?;
        writeln!(f, " Target name:         {}", or_not_set(&self.target_base_name))?;
        writeln!(f, " Namespace:           {}", or_not_set(&self.cpp_namespace))?;
        writeln!(f, " CMake namespace:     {}", or_not_set(&self.cmake_namespace))?;
        writeln!(f, " Abbreviation:        {}", or_not_set(&self.abbreviation))?;
        write!(f, " Create git repo:     {}", yes_no(self.create_vcs))
    }
}

/// Process-dependent locations the resolver needs, captured once so resolution
/// itself stays pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    /// Directory the project directory is created in
    pub working_dir: PathBuf,
    /// Directory holding the running executable
    pub exe_dir: PathBuf,
}

impl Locations {
    /// Captures the current working directory and the executable's directory.
    pub fn from_env() -> Result<Self> {
        let working_dir = std::env::current_dir()?;
        let exe = std::env::current_exe()?;
        let exe_dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self { working_dir, exe_dir })
    }

    /// Default location of the template tree, next to the executable.
    pub fn default_template_dir(&self) -> PathBuf {
        self.exe_dir.join(TEMPLATE_DIR_NAME)
    }
}

/// The fully derived configuration; every field is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub project_name: String,
    pub abbreviation: String,
    pub cmake_namespace: String,
    pub cpp_namespace: String,
    pub target_base_name: String,
    pub target: String,
    pub cmake_link_target: String,
    pub include_dir: String,
    pub project_dir: PathBuf,
    pub template_dir: PathBuf,
    pub project_type: ProjectType,
    pub create_vcs: bool,
}

/// Naming fields that only depend on what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseNames {
    pub project_name: String,
    pub abbreviation: String,
    pub cmake_namespace: String,
    pub cpp_namespace: String,
    pub target_base_name: String,
}

/// Fields computed from [`BaseNames`], the project type and the locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    pub target: String,
    pub cmake_link_target: String,
    pub include_dir: String,
    pub project_dir: PathBuf,
    pub template_dir: PathBuf,
}

fn validate_segment(what: &str, value: &str) -> Result<()> {
    if is_valid_path_segment(value) {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "{what} '{}' is not usable as a file name",
            value.escape_debug()
        )))
    }
}

/// Checks the user input before anything is derived from it.
///
/// # Errors
/// * `Error::InvalidInput` if the project name is empty or not a valid path segment,
///   or a non-empty target or abbreviation override is not a valid path segment
pub fn validate(user: &UserConfig) -> Result<()> {
    if user.project_name.is_empty() {
        return Err(Error::InvalidInput("project name must not be empty".to_string()));
    }
    validate_segment("project name", &user.project_name)?;

    if let Some(target) = user.target_base_name.as_deref().filter(|s| !s.is_empty()) {
        validate_segment("target name", target)?;
    }
    if let Some(abbreviation) = user.abbreviation.as_deref().filter(|s| !s.is_empty()) {
        validate_segment("abbreviation", abbreviation)?;
    }
    Ok(())
}

/// Applies the defaults for every naming override.
///
/// The abbreviation is resolved first because both namespaces fall back to it.
pub fn derive_base(user: &UserConfig) -> BaseNames {
    let abbreviation = user
        .abbreviation
        .clone()
        .unwrap_or_else(|| acronym(&user.project_name).to_lowercase());
    let cmake_namespace = user
        .cmake_namespace
        .clone()
        .unwrap_or_else(|| capitalize_first(&abbreviation));
    let cpp_namespace = user
        .cpp_namespace
        .clone()
        .unwrap_or_else(|| abbreviation.to_lowercase());
    let target_base_name = user
        .target_base_name
        .clone()
        .unwrap_or_else(|| pascal_to_snake_case(&user.project_name));

    BaseNames {
        project_name: user.project_name.clone(),
        abbreviation,
        cmake_namespace,
        cpp_namespace,
        target_base_name,
    }
}

/// Computes target names and directories from the base names.
pub fn derive_extra(
    base: &BaseNames,
    project_type: ProjectType,
    template_dir: Option<&Path>,
    locations: &Locations,
) -> DerivedNames {
    let (target, cmake_link_target) = match project_type {
        ProjectType::Executable => (
            base.target_base_name.clone(),
            format!("{}::{}_lib", base.cmake_namespace, base.target_base_name),
        ),
        ProjectType::CompiledLibrary | ProjectType::HeaderOnlyLibrary => (
            format!("{}_{}", base.cmake_namespace.to_lowercase(), base.target_base_name),
            format!("{}::{}", base.cmake_namespace, base.target_base_name),
        ),
    };

    DerivedNames {
        target,
        cmake_link_target,
        include_dir: base.abbreviation.to_lowercase(),
        project_dir: locations.working_dir.join(&base.project_name),
        template_dir: template_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| locations.default_template_dir()),
    }
}

impl ResolvedConfig {
    fn combine(
        base: BaseNames,
        derived: DerivedNames,
        project_type: ProjectType,
        create_vcs: bool,
    ) -> Self {
        Self {
            project_name: base.project_name,
            abbreviation: base.abbreviation,
            cmake_namespace: base.cmake_namespace,
            cpp_namespace: base.cpp_namespace,
            target_base_name: base.target_base_name,
            target: derived.target,
            cmake_link_target: derived.cmake_link_target,
            include_dir: derived.include_dir,
            project_dir: derived.project_dir,
            template_dir: derived.template_dir,
            project_type,
            create_vcs,
        }
    }

    /// Value substituted for the placeholder called `name`.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        let value = match name {
            "PROJECT_NAME" => &self.project_name,
            "TARGET_NAME" => &self.target,
            "CMAKE_TARGET_LINK_NAME" => &self.cmake_link_target,
            "INCLUDE_DIR_NAME" => &self.include_dir,
            "CMAKE_NAMESPACE" => &self.cmake_namespace,
            "CPP_NAMESPACE" => &self.cpp_namespace,
            "ACRONYM" => &self.abbreviation,
            _ => return None,
        };
        Some(value.as_str())
    }
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " Project name:          {}", self.project_name)?;
        writeln!(f, " Project type:          {}", self.project_type)?;
        writeln!(f, " Project directory:     {}", self.project_dir.display())?;
        writeln!(f, " Template directory:    {}", self.template_dir.display())?;
        writeln!(f, " Target name:           {}", self.target)?;
        writeln!(f, " Namespace:             {}", self.cpp_namespace)?;
        writeln!(f, " CMake namespace:       {}", self.cmake_namespace)?;
        writeln!(f, " CMake link target:     {}", self.cmake_link_target)?;
        writeln!(f, " Include directory:     {}", self.include_dir)?;
        write!(f, " Create git repo:       {}", yes_no(self.create_vcs))
    }
}

/// Resolves the user's configuration against the given locations.
///
/// # Arguments
/// * `user` - Configuration as supplied on the command line
/// * `locations` - Working and executable directories
///
/// # Returns
/// * `Result<ResolvedConfig>` - Fully derived configuration
///
/// # Errors
/// * `Error::InvalidInput` if the input fails [`validate`]
pub fn resolve(user: &UserConfig, locations: &Locations) -> Result<ResolvedConfig> {
    validate(user)?;

    let project_type = user.project_type.unwrap_or_default();
    let base = derive_base(user);
    let derived = derive_extra(&base, project_type, user.template_dir.as_deref(), locations);

    Ok(ResolvedConfig::combine(base, derived, project_type, user.create_vcs))
}

/// Resolves against the locations of the running process.
pub fn resolve_from_env(user: &UserConfig) -> Result<ResolvedConfig> {
    resolve(user, &Locations::from_env()?)
}
