//! Common constants used throughout cpp-project.

/// Name of the template directory shipped next to the executable
pub const TEMPLATE_DIR_NAME: &str = "cpp_project_templates";

/// Subtree installed for every project type
pub const COMMON_TEMPLATE: &str = "common";

/// Subtree installed for executables
pub const EXEC_TEMPLATE: &str = "exec";

/// Subtree shared by both library flavours
pub const LIB_COMMON_TEMPLATE: &str = "lib-common";

/// Subtree installed for compiled libraries
pub const LIB_COMPILED_TEMPLATE: &str = "lib-compiled";

/// Subtree installed for header-only libraries
pub const LIB_HEADER_TEMPLATE: &str = "lib-header";

/// Empty directories created for executables
pub const EXEC_EMPTY_DIRS: [&str; 2] = ["src", "libs"];

/// Extension marking a snippet fragment
pub const SNIPPET_EXTENSION: &str = "snippet";

/// Instructions printed once the project has been generated
pub const POST_BUILD_MESSAGE: &str = "
###################################################################
###      Project creation completed successfully!               ###
###################################################################
#
# To build your project and run test cases
# you can perform the following steps:
#
# - Create and switch to the directory you want to build in
# - cmake <Project directory>
# - cmake --build .
# - ctest . # or for MSVC: ctest . -C Debug
#
###################################################################
";
