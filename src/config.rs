// src/config.rs
use crate::errors::{CtcaeError, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 18080;

/// The service only ever listens on loopback.
pub const BIND_HOST: &str = "127.0.0.1";

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Directory served at `/`. Falls back to the bundled UI if missing.
    pub ui_dir: PathBuf,
    pub open_browser: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("CTCAE_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                CtcaeError::Config(format!("CTCAE_PORT must be a port number, got '{}'", raw))
            })?,
            None => DEFAULT_PORT,
        };

        let ui_dir = match var("CTCAE_UI_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_ui_dir()?,
        };

        let open_browser = !var("CTCAE_NO_BROWSER").is_some_and(|v| is_truthy(&v));

        Ok(AppConfig {
            port,
            ui_dir,
            open_browser,
        })
    }

    pub fn bind_addr(&self) -> (&'static str, u16) {
        (BIND_HOST, self.port)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}/", BIND_HOST, self.port)
    }
}

/// `<install>/bin/ctcae` serves `<install>/ui`.
fn default_ui_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let bin_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(ui_dir_for(bin_dir))
}

fn ui_dir_for(bin_dir: &Path) -> PathBuf {
    bin_dir.parent().unwrap_or(bin_dir).join("ui")
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.open_browser);
        assert!(config.ui_dir.ends_with("ui"));
        assert_eq!(config.base_url(), "http://127.0.0.1:18080/");
        assert_eq!(config.bind_addr(), ("127.0.0.1", 18080));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CTCAE_PORT", "9000"),
            ("CTCAE_UI_DIR", "/srv/ctcae/ui"),
            ("CTCAE_NO_BROWSER", "true"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.ui_dir, PathBuf::from("/srv/ctcae/ui"));
        assert!(!config.open_browser);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = config_from(&[("CTCAE_PORT", ""), ("CTCAE_NO_BROWSER", " ")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.open_browser);
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let err = config_from(&[("CTCAE_PORT", "http")]).unwrap_err();
        assert!(matches!(err, CtcaeError::Config(_)));
        assert!(config_from(&[("CTCAE_PORT", "70000")]).is_err());
    }

    #[test]
    fn test_ui_dir_is_sibling_of_bin() {
        assert_eq!(
            ui_dir_for(Path::new("/opt/ctcae/bin")),
            PathBuf::from("/opt/ctcae/ui")
        );
    }
}
