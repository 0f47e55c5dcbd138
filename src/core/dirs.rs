use std::path::PathBuf;

const APP_DIR: &str = "git-menu";

/// Directory holding `config.json` and the legacy `diffrc`
pub fn get_config_directory() -> PathBuf {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".config")),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        _ => dirs::config_dir().unwrap_or_default(),
    };

    base.join(APP_DIR)
}

/// Default location for materialized diff sides
pub fn get_scratch_directory() -> PathBuf {
    std::env::temp_dir()
}
