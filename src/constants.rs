//! Common constants used throughout the Sprout application.

/// Reserved placeholder token resolved to the project name
pub const MAIN_PACKAGE_TOKEN: &str = "<main_package>";

/// Marker value designating a file leaf in the template tree
pub const FILE_MARKER: &str = "file";
