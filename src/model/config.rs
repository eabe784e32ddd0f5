use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULTS: &str = include_str!("../../config/default.toml");

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub editor: EditorConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub prompt: String,
    pub output_label: String,
    pub farewell: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub on_error: ErrorPolicy,
}

/// What the dispatcher does after reporting a failed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    #[default]
    Continue,
    Abort,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
    pub dir: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            prompt: "Input: ".to_string(),
            output_label: "Output: ".to_string(),
            farewell: "Leaving program...".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "clipedit=info".to_string(),
            dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration with layering: defaults → user config.
    pub fn load() -> Result<Self> {
        let user_path = directories::ProjectDirs::from("", "", "clipedit")
            .map(|dirs| dirs.config_dir().join("config.toml"));
        Self::load_from(user_path.as_deref())
    }

    /// Load defaults, then the file at `path` if it exists.
    ///
    /// Keys missing from the user file keep their built-in values.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut config: AppConfig = toml::from_str(DEFAULTS)?;

        if let Some(path) = path
            && path.exists()
        {
            let user_str = fs::read_to_string(path)?;
            config = toml::from_str(&user_str)
                .with_context(|| format!("invalid config file {}", path.display()))?;
        }

        // Expand ~ in log.dir
        if let Some(dir) = config.log.dir.as_mut()
            && dir.starts_with('~')
        {
            let home = dirs_home().ok_or_else(|| anyhow!("cannot determine home directory"))?;
            *dir = dir.replacen('~', &home.to_string_lossy(), 1);
        }

        Ok(config)
    }

    /// Directory for log files: configured, else the platform data dir.
    pub fn log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.log.dir {
            return PathBuf::from(dir);
        }
        directories::ProjectDirs::from("", "", "clipedit")
            .map(|d| d.data_dir().to_path_buf())
            .unwrap_or_else(std::env::temp_dir)
    }
}

fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_defaults_parse() {
        let config = AppConfig::load_from(None).unwrap();
        assert_eq!(config.general.prompt, "Input: ");
        assert_eq!(config.general.output_label, "Output: ");
        assert_eq!(config.general.farewell, "Leaving program...");
        assert_eq!(config.editor.on_error, ErrorPolicy::Continue);
        assert_eq!(config.log.filter, "clipedit=info");
        assert!(config.log.dir.is_none());
    }

    #[test]
    fn missing_user_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(Some(dir.path().join("nope.toml").as_path())).unwrap();
        assert_eq!(config.general.prompt, "Input: ");
    }

    #[test]
    fn partial_user_file_overrides_only_given_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[editor]\non_error = \"abort\"\n\n[general]\nprompt = \"> \"").unwrap();

        let config = AppConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.editor.on_error, ErrorPolicy::Abort);
        assert_eq!(config.general.prompt, "> ");
        assert_eq!(config.general.output_label, "Output: ");
        assert_eq!(config.log.filter, "clipedit=info");
    }

    #[test]
    fn configured_log_dir_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[log]\ndir = \"/var/tmp/clipedit\"").unwrap();

        let config = AppConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.log_dir(), PathBuf::from("/var/tmp/clipedit"));
    }

    #[test]
    fn invalid_user_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[editor]\non_error = \"explode\"").unwrap();
        assert!(AppConfig::load_from(Some(file.path())).is_err());
    }
}
