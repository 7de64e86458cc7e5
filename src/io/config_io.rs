use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for config file operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

pub const CONFIG_FILE: &str = "config.toml";

/// `<config dir>/taskpad/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taskpad").join(CONFIG_FILE))
}

/// The file that will be read: an explicit path wins over the default.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(default_config_path)
}

/// Load the config. An explicitly given file must exist; a missing default
/// file just means defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.is_file() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Render a config as TOML
pub fn config_to_string(config: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_read_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[ui]\nshow_key_hints = false\n\n[ui.colors]\nhighlight = \"#8257E5\"\n",
        )
        .unwrap();

        let config = read_config(&path).unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(
            config.ui.colors.get("highlight").map(String::as_str),
            Some("#8257E5")
        );
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "[ui\nshow_key_hints = ").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "[ui]\nshow_key_hints = \"yes\"\n").unwrap();
        assert!(matches!(
            read_config(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_resolve_prefers_explicit() {
        let explicit = PathBuf::from("/tmp/elsewhere.toml");
        assert_eq!(resolve_config_path(Some(&explicit)), Some(explicit));
    }

    #[test]
    fn test_config_to_string_parses_back() {
        let mut config = Config::default();
        config.ui.show_key_hints = false;
        config.ui.colors.insert("green".into(), "#00FF00".into());

        let text = config_to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
