use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Per-user application data directory for the current platform.
pub fn user_data() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let override_var = env::var_os("LOCALAPPDATA");
    #[cfg(not(target_os = "windows"))]
    let override_var = env::var_os("XDG_DATA_HOME");

    resolve_data_dir(override_var, home::home_dir())
}

/// Pick the data directory from the platform variable and the home directory.
///
/// An empty variable counts as unset. Windows has no home fallback; macOS
/// ignores the variable.
fn resolve_data_dir(var: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    let var = var.filter(|v| !v.is_empty()).map(PathBuf::from);

    if cfg!(target_os = "windows") {
        var
    } else if cfg!(target_os = "macos") {
        home.map(|h| h.join("Library/Application Support"))
    } else {
        var.or_else(|| home.map(|h| h.join(".local/share")))
    }
}
