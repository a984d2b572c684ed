//! Configuration file for the hidusage CLI
//!
//! TOML, stored at `~/.config/hidusage/config.toml` by default. Every field
//! is optional; command-line flags take precedence.

use hidusage_source::PageFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which device to open when none is given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vid: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<u16>,
    /// hidapi device path, takes precedence over VID/PID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl DeviceSelector {
    /// No usable selector: neither a path nor a full VID/PID pair
    pub fn is_empty(&self) -> bool {
        self.path.is_none() && (self.vid.is_none() || self.pid.is_none())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Discovery filter: `power`, `all`, or a page number
    #[serde(default = "default_page_filter")]
    pub page_filter: String,

    /// Capability snapshot (JSON) for the selected device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<PathBuf>,

    #[serde(default)]
    pub device: DeviceSelector,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_page_filter() -> String {
    "power".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            page_filter: default_page_filter(),
            capabilities: None,
            device: DeviceSelector::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hidusage")
            .join("config.toml")
    }

    /// Load config from a file, or return default if not found
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        // Reject bad filters at load time rather than on first discovery
        config.page_filter()?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parsed discovery filter
    pub fn page_filter(&self) -> anyhow::Result<PageFilter> {
        Ok(self.page_filter.parse::<PageFilter>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.page_filter().unwrap(), PageFilter::Power);
        assert!(config.device.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
log_level = "debug"
page_filter = "0x85"
capabilities = "/etc/hidusage/ups.json"

[device]
vid = 1123
pid = 65535
"#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.page_filter().unwrap(), PageFilter::Page(0x85));
        assert_eq!(config.capabilities, Some(PathBuf::from("/etc/hidusage/ups.json")));
        assert_eq!(config.device.vid, Some(0x0463));
        assert!(!config.device.is_empty());
    }

    #[test]
    fn test_bad_filter_rejected() {
        assert!(Config::parse("page_filter = \"nope\"").is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("hidusage-config-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let mut config = Config::default();
        config.log_level = "trace".to_string();
        config.device.vid = Some(0x0463);
        config.device.pid = Some(0xFFFF);

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(loaded, config);
        assert!(!loaded.device.is_empty());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("hidusage-no-such-dir").join("config.toml");
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_roundtrip() {
        let mut config = Config::default();
        config.device.path = Some("/dev/hidraw3".to_string());
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("path = \"/dev/hidraw3\""));
        let parsed = Config::parse(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }
}
