//! Constants for the ptree launcher
//!
//! Environment variable names, executable names and the fixed relative layout
//! of the JavaScript CLI that the launcher delegates to.

/// Name used to prefix every diagnostic line
pub const TOOL_NAME: &str = "ptree";

/// Overrides the project directory name under the base directory
pub const ENV_PROJECT_DIR: &str = "PTREE_PROJECT_DIR";

/// Overrides the Node.js executable (a path or a program name)
pub const ENV_NODE: &str = "PTREE_NODE";

/// Overrides the base directory the project layout is resolved against
pub const ENV_HOME: &str = "PTREE_HOME";

/// Overrides the location of the launcher config file
pub const ENV_CONFIG: &str = "PTREE_CONFIG";

/// Tracing filter directives for the launcher binary
pub const ENV_LOG: &str = "PTREE_LOG";

/// Name of the config file inside the user config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Project directory names, probed in order when none is configured.
///
/// The first entry is also the fallback when none of them is present.
pub const PROJECT_DIR_CANDIDATES: [&str; 2] = ["ptree-syntax", "0.0.4"];

/// Entry file, relative to the project directory
pub const ENTRY_RELATIVE_PATH: [&str; 2] = ["bin", "ptree.js"];

/// Compiled output, relative to the project directory
pub const COMPILED_RELATIVE_PATH: [&str; 2] = ["out", "cli.js"];

/// Node.js program name; on Windows `PATHEXT` supplies the extension
pub const NODE_EXECUTABLE: &str = "node";

/// Exit code for every failure the launcher itself detects
pub const FAILURE_EXIT_CODE: i32 = 1;
