//! Command-line interface implementation for cpp-project.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::{ProjectType, UserConfig};

/// Command-line arguments structure for cpp-project.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "cpp-project: creates a standard CMake layout for executables or libraries",
    long_about = None
)]
pub struct Args {
    /// Name of the project; also the name of the created directory
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Kind of project to create
    #[arg(short = 't', long = "type", value_enum)]
    pub project_type: Option<ProjectType>,

    /// Short form of the project name, used for namespaces and the include directory
    #[arg(short = 's', long = "short")]
    pub abbreviation: Option<String>,

    /// Base name of the main CMake target
    #[arg(short = 'T', long = "target")]
    pub target: Option<String>,

    /// Namespace used in C++ code
    #[arg(short = 'n', long = "ns-cpp")]
    pub cpp_namespace: Option<String>,

    /// Namespace used for exported CMake targets
    #[arg(short = 'N', long = "ns-cmake")]
    pub cmake_namespace: Option<String>,

    /// Initialize the project as a git repository
    #[arg(short = 'g', long = "git")]
    pub git: bool,

    /// Template directory to use instead of the one shipped next to the executable
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Install into the project directory even if it is not empty
    #[arg(short, long)]
    pub force: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Print the resolved configuration as JSON and exit without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The configuration the user asked for, before defaults are applied.
    pub fn user_config(&self) -> UserConfig {
        UserConfig {
            project_name: self.project_name.clone(),
            target_base_name: self.target.clone(),
            abbreviation: self.abbreviation.clone(),
            cpp_namespace: self.cpp_namespace.clone(),
            cmake_namespace: self.cmake_namespace.clone(),
            project_type: self.project_type,
            template_dir: self.template_dir.clone(),
            create_vcs: self.git,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
