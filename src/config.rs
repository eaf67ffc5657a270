use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Root configuration structure, deserialized from `.forms2sql/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// How batch files are sized, named and labelled.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings for the generated SQL files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Maximum number of CSV rows per output file.
    pub batch_size: usize,
    /// File name prefix; the batch number and `.sql` are appended.
    pub file_prefix: String,
    /// Schema script that must be loaded before any batch.
    pub schema_file: String,
    /// Organization named in each file header.
    pub organization: String,
    /// Provenance line in each file header.
    pub source_label: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            batch_size: 100,
            file_prefix: "google_forms_batch_".to_string(),
            schema_file: "google_forms_schema.sql".to_string(),
            organization: "Teens Aloud Foundation".to_string(),
            source_label: "Google Forms CSV export".to_string(),
        }
    }
}

impl Config {
    /// Reject settings that cannot produce usable output.
    pub fn validate(&self) -> Result<()> {
        if self.output.batch_size == 0 {
            bail!("output.batch_size must be at least 1");
        }
        if self.output.file_prefix.trim().is_empty() {
            bail!("output.file_prefix must not be empty");
        }
        if self.output.file_prefix.contains(['/', '\\']) {
            bail!(
                "output.file_prefix must be a plain file name, got {:?}",
                self.output.file_prefix
            );
        }
        Ok(())
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    BuiltIn,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::BuiltIn => write!(f, "built-in defaults"),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<work_dir>/.forms2sql/config.toml`
/// 3. `~/.config/forms2sql/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(work_dir: &Path, config_override: Option<&Path>) -> Result<(Config, ConfigSource)> {
    if let Some(path) = config_override {
        return Ok((read_config(path)?, ConfigSource::File(path.to_path_buf())));
    }

    let local_config = work_dir.join(".forms2sql").join("config.toml");
    if local_config.exists() {
        return Ok((read_config(&local_config)?, ConfigSource::File(local_config)));
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("forms2sql").join("config.toml");
        if home_config.exists() {
            return Ok((read_config(&home_config)?, ConfigSource::File(home_config)));
        }
    }

    Ok((Config::default(), ConfigSource::BuiltIn))
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_defaults_match_original_layout() {
        let cfg = Config::default();
        assert_eq!(cfg.output.batch_size, 100);
        assert_eq!(cfg.output.file_prefix, "google_forms_batch_");
        assert_eq!(cfg.output.schema_file, "google_forms_schema.sql");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg: Config = toml::from_str("[output]\nbatch_size = 25\n").unwrap();
        assert_eq!(cfg.output.batch_size, 25);
        assert_eq!(cfg.output.file_prefix, "google_forms_batch_");

        let empty: Config = toml::from_str("").unwrap();
        assert_eq!(empty.output.batch_size, 100);
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let cfg: Config = toml::from_str("[output]\nbatch_size = 0\n").unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_prefix_with_path_rejected() {
        let cfg: Config = toml::from_str("[output]\nfile_prefix = \"../x\"\n").unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_override_path_wins() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[output]").unwrap();
        writeln!(f, "organization = \"Example Trust\"").unwrap();

        let dir = TempDir::new().unwrap();
        let (cfg, source) = load_config(dir.path(), Some(f.path())).unwrap();
        assert_eq!(cfg.output.organization, "Example Trust");
        assert_eq!(source, ConfigSource::File(f.path().to_path_buf()));
    }

    #[test]
    fn test_local_config_found() {
        let dir = TempDir::new().unwrap();
        let cfg_dir = dir.path().join(".forms2sql");
        std::fs::create_dir(&cfg_dir).unwrap();
        std::fs::write(cfg_dir.join("config.toml"), "[output]\nbatch_size = 7\n").unwrap();

        let (cfg, source) = load_config(dir.path(), None).unwrap();
        assert_eq!(cfg.output.batch_size, 7);
        assert_eq!(source, ConfigSource::File(cfg_dir.join("config.toml")));
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "[output").unwrap();
        let dir = TempDir::new().unwrap();
        assert!(load_config(dir.path(), Some(f.path())).is_err());
    }
}
