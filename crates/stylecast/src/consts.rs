//! CLI-wide constants.

use std::path::{Path, PathBuf};

/// Binary name as shown in user-facing messages.
pub const APP_NAME: &str = "stylecast";

/// Directory holding the per-module config files, relative to the
/// project root.
pub const CONFIG_DIR_NAME: &str = "stylecast-config";

pub fn config_dir(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR_NAME)
}
