/// Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("itsatui-debug.log");
    path
}

/// Config file under the platform config directory, if there is one
pub fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("itsatui").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_path_in_temp_dir() {
        let path = get_debug_log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with("itsatui-debug.log"));
    }
}
