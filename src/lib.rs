//! cpp-project creates new C++/CMake projects from a template directory.
//! It resolves a naming configuration from a few user-supplied attributes, copies the
//! template tree while substituting placeholder markers in names and contents, and
//! merges snippet fragments into their host files.

/// Command-line interface module
pub mod cli;

/// Configuration resolution: user input to fully derived names
pub mod config;

/// Common constants: template layout and user-facing messages
pub mod constants;

/// Error types and handling
pub mod error;

/// Template tree installation with placeholder substitution
pub mod installer;

/// Logger setup
pub mod logger;

/// Snippet fragment merging
/// Splices `<host>.<label>.snippet` files into `<host>` at `${$SNIPPET:<label>$}$`
pub mod merger;

/// Pure naming helpers (acronyms, snake case)
pub mod naming;

/// Placeholder tokens and their patterns
pub mod placeholder;

/// Orchestration of the generation pipeline
pub mod project;

/// User interaction handling
pub mod prompt;

/// Git repository initialization
pub mod vcs;
