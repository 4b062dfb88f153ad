//! cpp-project's application entry point.
//! Handles command-line argument parsing and coordinates configuration resolution,
//! project generation and version control initialization.

use cpp_project::{
    cli::{get_args, Args},
    config::resolve_from_env,
    constants::POST_BUILD_MESSAGE,
    error::{default_error_handler, Result},
    logger::init_logger,
    placeholder::PlaceholderRegistry,
    project::create_project,
    prompt::{DialoguerPrompter, Prompter},
    vcs::init_repository,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => default_error_handler(err),
    }
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Returns
/// * `Result<bool>` - `false` if the user declined to proceed
///
/// # Flow
/// 1. Builds the placeholder registry
/// 2. Resolves the configuration
/// 3. Shows it and asks for confirmation
/// 4. Installs templates and merges snippets
/// 5. Initializes a git repository if requested
fn run(args: Args) -> Result<bool> {
    let registry = PlaceholderRegistry::standard()?;
    let user_config = args.user_config();
    log::debug!("User configuration:\n{}", user_config);

    let config = resolve_from_env(&user_config)?;

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(true);
    }

    println!(
        "This will create a \"{}\" project with the following configuration:\n{}",
        config.project_type, config
    );

    let prompt = DialoguerPrompter::new();
    if !prompt.confirm(args.yes, "Proceed?".to_string())? {
        return Ok(false);
    }

    let files = create_project(&config, &registry, args.force)?;
    for file in &files {
        log::debug!("Created '{}'", file.display());
    }
    println!("{}", POST_BUILD_MESSAGE);

    if config.create_vcs {
        match init_repository(&config.project_dir) {
            Ok(()) => println!("Initialized git repository in {}.", config.project_dir.display()),
            Err(err) => log::warn!("{}", err),
        }
    }

    Ok(true)
}
