// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::config_source::ConfigSource;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::debug;
use walkround_arith::RoundingMode;

/// Prefix for environment overrides, eg. `WALKROUND_ROUNDING=floor`
pub const ENV_PREFIX: &str = "WALKROUND_";

/// File name searched for in the working directory, its ancestors and the user config dir
pub const DEFAULT_CONFIG_NAME: &str = "walkround.config.yaml";

/// Settings shared by every walkround command
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct WalkroundConfig {
    /// How negative weights are rounded. Either "truncate" or "floor"
    pub rounding: RoundingMode,
    /// Largest entry magnitude `shrink` leaves in a weight vector
    pub shrink_limit: u64,
    /// The file this configuration was read from, if any
    #[serde(skip)]
    config_file: Option<PathBuf>,
}

impl Default for WalkroundConfig {
    fn default() -> Self {
        Self {
            rounding: RoundingMode::Truncate,
            shrink_limit: 1_000_000,
            config_file: None,
        }
    }
}

impl WalkroundConfig {
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    pub fn shrink_limit(&self) -> u64 {
        self.shrink_limit
    }

    pub fn config_file(&self) -> Option<&PathBuf> {
        self.config_file.as_ref()
    }
}

pub struct OsDirs;
impl OsDirs {
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("walkround")
    }
}

/// Load configuration from defaults, the YAML file and `WALKROUND_*` environment variables.
///
/// A missing file is only an error when it was passed explicitly on the command line.
pub fn load_config(cli_file: Option<String>) -> Result<WalkroundConfig> {
    let source = ConfigSource::locate(
        &env::current_dir()?,
        &OsDirs::config_dir(),
        DEFAULT_CONFIG_NAME,
        cli_file.as_deref().map(Path::new),
    );
    let path = source.path();

    let mut figment = Figment::from(Serialized::defaults(WalkroundConfig::default()));
    let mut config_file = None;

    match fs::read_to_string(path) {
        Ok(yaml) => {
            debug!(?source, "Reading configuration file");
            figment = figment.merge(Yaml::string(&yaml));
            config_file = Some(path.to_path_buf());
        }
        Err(e) if e.kind() == ErrorKind::NotFound && !source.is_required() => {
            debug!(?path, "No configuration file, using defaults");
        }
        Err(e) => {
            return Err(e).context(format!("Configuration file {:?} could not be read", path));
        }
    }

    let mut config: WalkroundConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).only(&["rounding", "shrink_limit"]))
        .extract()
        .context("Could not parse configuration")?;

    config.config_file = config_file;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use figment::Jail;

    #[test]
    fn test_deserialization() -> Result<()> {
        let config: WalkroundConfig = serde_yaml::from_str("rounding: floor\nshrink_limit: 50\n")?;
        assert_eq!(config.rounding(), RoundingMode::Floor);
        assert_eq!(config.shrink_limit(), 50);

        let partial: WalkroundConfig = serde_yaml::from_str("shrink_limit: 7\n")?;
        assert_eq!(partial.rounding(), RoundingMode::Truncate);

        assert!(serde_yaml::from_str::<WalkroundConfig>("rounding: ceil\n").is_err());
        assert!(serde_yaml::from_str::<WalkroundConfig>("divisor: 10\n").is_err());
        Ok(())
    }

    #[test]
    fn test_defaults() {
        Jail::expect_with(|jail| {
            let home = format!("{}", jail.directory().to_string_lossy());
            jail.set_env("HOME", &home);
            jail.set_env("XDG_CONFIG_HOME", &format!("{}/.config", home));

            let config = load_config(None).map_err(|e| e.to_string())?;

            assert_eq!(config.rounding(), RoundingMode::Truncate);
            assert_eq!(config.shrink_limit(), 1_000_000);
            assert_eq!(config.config_file(), None);

            Ok(())
        });
    }

    #[test]
    fn test_file_not_found() -> Result<()> {
        let Err(err) = load_config(Some("/nope/walkround.config.yaml".to_string())) else {
            bail!("error expected");
        };
        let Some(e) = err.downcast_ref::<std::io::Error>() else {
            bail!("io error expected");
        };

        assert_eq!(e.kind(), std::io::ErrorKind::NotFound);

        Ok(())
    }

    #[test]
    fn test_config_file_and_env() {
        Jail::expect_with(|jail| {
            let home = format!("{}", jail.directory().to_string_lossy());
            jail.set_env("HOME", &home);
            jail.set_env("XDG_CONFIG_HOME", &format!("{}/.config", home));

            jail.create_file(
                DEFAULT_CONFIG_NAME,
                r#"
rounding: floor
shrink_limit: 250
"#,
            )?;

            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(config.rounding(), RoundingMode::Floor);
            assert_eq!(config.shrink_limit(), 250);
            assert!(config
                .config_file()
                .is_some_and(|path| path.ends_with(DEFAULT_CONFIG_NAME)));

            jail.set_env("WALKROUND_ROUNDING", "truncate");
            jail.set_env("WALKROUND_SHRINK_LIMIT", "9");
            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(config.rounding(), RoundingMode::Truncate);
            assert_eq!(config.shrink_limit(), 9);

            Ok(())
        });
    }

    #[test]
    fn test_explicit_relative_file() {
        Jail::expect_with(|jail| {
            jail.create_dir("conf")?;
            jail.create_file("conf/custom.yaml", "shrink_limit: 3\n")?;

            let config =
                load_config(Some("conf/custom.yaml".to_string())).map_err(|e| e.to_string())?;
            assert_eq!(config.shrink_limit(), 3);
            assert_eq!(config.rounding(), RoundingMode::Truncate);

            Ok(())
        });
    }

    #[test]
    fn test_rounding_spellings_match_cli() {
        Jail::expect_with(|jail| {
            let home = format!("{}", jail.directory().to_string_lossy());
            jail.set_env("HOME", &home);
            jail.set_env("XDG_CONFIG_HOME", &format!("{}/.config", home));

            jail.create_file(DEFAULT_CONFIG_NAME, "rounding: trunc\n")?;
            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(config.rounding(), RoundingMode::Truncate);

            jail.set_env("WALKROUND_ROUNDING", "FLOOR");
            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(config.rounding(), RoundingMode::Floor);

            Ok(())
        });
    }

    #[test]
    fn test_invalid_file() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_NAME, "rounding: sideways\n")?;

            let result = load_config(None);
            assert!(result.is_err());

            Ok(())
        });
    }
}
