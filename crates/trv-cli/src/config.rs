use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trv_engine::{CsvLayout, ParseOptions, Units};
use trv_types::SpatialBounds;

pub const CONFIG_ENV: &str = "TRV_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TRV_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
///
/// Returns `None` only when no config directory can be determined.
pub fn resolve_config_path(explicit_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("trv").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub parse: ParseConfig,
    #[serde(default)]
    pub bounds: SpatialBounds,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParseConfig {
    #[serde(default)]
    pub units: Units,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub csv_layout: CsvLayout,
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_pretty_json() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_layout: CsvLayout::default(),
            pretty_json: default_pretty_json(),
        }
    }
}

impl Config {
    /// Load from the resolved path, falling back to defaults.
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => {
                log::debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("Config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parser settings, with `units` taking precedence over the file.
    pub fn parse_options(&self, units: Option<Units>) -> ParseOptions {
        ParseOptions {
            units: units.unwrap_or(self.parse.units),
            bounds: self.bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.parse.units, Units::Degrees);
        assert_eq!(config.bounds, SpatialBounds::default());
        assert_eq!(config.export.csv_layout, CsvLayout::Flattened);
        assert!(config.export.pretty_json);
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[parse]\nunits = \"tenths\"\n\n[bounds]\nlat_min = 10.0\n\n[export]\ncsv_layout = \"header-only\"\npretty_json = false\n",
        )?;

        let mut expected = Config::default();
        expected.parse.units = Units::Tenths;
        expected.export.csv_layout = CsvLayout::HeaderOnly;
        expected.export.pretty_json = false;
        expected.bounds.lat_min = 10.0;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, expected);

        Ok(())
    }

    #[test]
    fn test_partial_tables_keep_defaults() -> Result<()> {
        let config: Config = toml::from_str(
            r#"
[parse]
units = "tenths"

[bounds]
lat_max = 60.0

[export]
csv_layout = "header-only"
"#,
        )?;

        assert_eq!(config.parse.units, Units::Tenths);
        assert_eq!(config.bounds.lat_max, 60.0);
        assert_eq!(config.bounds.lat_min, 15.0);
        assert_eq!(config.bounds.lon_max, 140.0);
        assert_eq!(config.export.csv_layout, CsvLayout::HeaderOnly);
        assert!(config.export.pretty_json);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_invalid_config_names_the_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[parse]\nunits = \"furlongs\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config"));

        Ok(())
    }

    #[test]
    fn test_units_override() {
        let config = Config::default();
        assert_eq!(config.parse_options(None).units, Units::Degrees);
        assert_eq!(
            config.parse_options(Some(Units::Tenths)).units,
            Units::Tenths
        );
    }

    #[test]
    fn test_explicit_path_wins() {
        assert_eq!(
            resolve_config_path(Some("/etc/trv.toml")),
            Some(PathBuf::from("/etc/trv.toml"))
        );
    }
}
