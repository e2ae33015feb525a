//! Constants used throughout the crate

/// File name of the generated package manifest
pub const PACKAGE_MANIFEST_FILENAME: &str = "package.xml";

/// File name of the generated build description
pub const CMAKELISTS_FILENAME: &str = "CMakeLists.txt";

/// Suffix appended to a logical file name to find its template
pub const TEMPLATE_SUFFIX: &str = ".in";

/// Distro used when the caller does not pick one
pub const DEFAULT_ROSDISTRO: &str = "groovy";

/// Version assigned to packages created without an explicit version
pub const DEFAULT_VERSION: &str = "0.0.0";

/// License used when none is given
pub const DEFAULT_LICENSE: &str = "TODO";

/// Domain of the synthesized maintainer email address
pub const PLACEHOLDER_EMAIL_DOMAIN: &str = "todo.todo";

/// Name of the build tool; it is always a buildtool dependency and never a component
pub const BUILD_TOOL: &str = "catkin";

/// Marker used by the substitution engine for `@name@` placeholders
pub const PLACEHOLDER_DELIMITER: char = '@';

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Environment variable naming a directory of template sets
pub const TEMPLATES_DIR_ENV: &str = "CATKIN_TEMPLATES_DIR";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
