use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// On-disk configuration: `~/.cryptolab/config.toml` unless overridden via
/// `--config`. Supplies the default Diffie-Hellman group used when the CLI
/// omits `--prime`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dh: DhGroupConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DhGroupConfig {
    /// Decimal prime modulus.
    pub prime: String,
    /// Decimal generator; discovered from the prime when omitted.
    pub generator: Option<String>,
}

impl Default for DhGroupConfig {
    fn default() -> Self {
        DhGroupConfig {
            prime: "2147483647".to_string(), // 2^31 - 1, Mersenne prime
            generator: None,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".cryptolab").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Load the config, falling back to defaults when the file is absent.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_group_is_prime_decimal() {
        let cfg = Config::default();
        assert_eq!(cfg.dh.prime, "2147483647");
        assert!(cfg.dh.generator.is_none());
    }

    #[test]
    fn parses_full_group() {
        let cfg: Config = toml::from_str("[dh]\nprime = \"23\"\ngenerator = \"5\"\n").unwrap();
        assert_eq!(cfg.dh.prime, "23");
        assert_eq!(cfg.dh.generator.as_deref(), Some("5"));
    }
}
