// Optional rc-file configuration
//
// File format is one `key=value` per line; blank lines and `#` comments are
// ignored. Command-line flags override anything set here.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(ColorMode::Auto),
            "always" | "on" => Some(ColorMode::Always),
            "never" | "off" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Resolve against whether stdout is a terminal
    pub fn enabled(&self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub color: ColorMode,
    /// Print every clock tick
    pub ticks: bool,
    /// Print activity log entries as they are recorded
    pub echo_log: bool,
    pub message_timeout_secs: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            ticks: false,
            echo_log: false,
            message_timeout_secs: crate::game::controller::DEFAULT_MESSAGE_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Get the configuration file path.
    /// `PIPEQUIZ_RC` wins; otherwise `~/.pipequiz/rc`.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("PIPEQUIZ_RC") {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        dirs::home_dir().map(|home| home.join(".pipequiz").join("rc"))
    }

    /// Load configuration from the default location, falling back to defaults
    /// when no file exists
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config = Self::default();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .with_context(|| format!("line {}: expected key=value, got '{}'", idx + 1, line))?;
            let (key, value) = (key.trim(), value.trim());

            match key {
                "color" => {
                    config.color = ColorMode::from_name(value).with_context(|| {
                        format!("line {}: color must be auto, always or never", idx + 1)
                    })?;
                }
                "ticks" => config.ticks = parse_switch(value, idx + 1)?,
                "echo_log" => config.echo_log = parse_switch(value, idx + 1)?,
                "message_timeout" => {
                    let secs = crate::utils::parse_duration(value)
                        .or_else(|_| value.parse::<i64>().map_err(anyhow::Error::from))
                        .with_context(|| format!("line {}: invalid message_timeout '{}'", idx + 1, value))?;
                    if secs <= 0 {
                        anyhow::bail!("line {}: message_timeout must be positive", idx + 1);
                    }
                    if chrono::Duration::try_seconds(secs).is_none() {
                        anyhow::bail!("line {}: message_timeout out of range '{}'", idx + 1, value);
                    }
                    config.message_timeout_secs = secs;
                }
                other => {
                    log::warn!("Ignoring unknown config key '{}' on line {}", other, idx + 1);
                }
            }
        }

        Ok(config)
    }
}

fn parse_switch(value: &str, line: usize) -> Result<bool> {
    match value {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => anyhow::bail!("line {}: expected on/off, got '{}'", line, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.message_timeout_secs, 5);
    }

    #[test]
    fn test_parse_all_keys() {
        let config = Config::parse(
            "# display\ncolor=never\nticks=on\n\necho_log = yes\nmessage_timeout=10s\n",
        )
        .unwrap();
        assert_eq!(config.color, ColorMode::Never);
        assert!(config.ticks);
        assert!(config.echo_log);
        assert_eq!(config.message_timeout_secs, 10);
    }

    #[test]
    fn test_plain_number_timeout() {
        let config = Config::parse("message_timeout=8").unwrap();
        assert_eq!(config.message_timeout_secs, 8);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let config = Config::parse("theme=dark\nticks=off").unwrap();
        assert!(!config.ticks);
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::parse("color=purple").is_err());
        assert!(Config::parse("ticks=maybe").is_err());
        assert!(Config::parse("message_timeout=soon").is_err());
        assert!(Config::parse("just some text").is_err());
    }

    #[test]
    fn test_timeout_out_of_range() {
        let err = Config::parse("message_timeout=9999999999999999s").unwrap_err();
        assert!(format!("{:#}", err).contains("out of range"));
        assert!(Config::parse("message_timeout=999999999999999999d").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let rc = temp_dir.path().join("rc");
        fs::write(&rc, "color=always\n").unwrap();

        let config = Config::load_from(&rc).unwrap();
        assert_eq!(config.color, ColorMode::Always);

        let missing = temp_dir.path().join("missing");
        assert!(Config::load_from(&missing).is_err());
    }

    #[test]
    fn test_color_mode_enabled() {
        assert!(ColorMode::Auto.enabled(true));
        assert!(!ColorMode::Auto.enabled(false));
        assert!(ColorMode::Always.enabled(false));
        assert!(!ColorMode::Never.enabled(true));
    }
}
