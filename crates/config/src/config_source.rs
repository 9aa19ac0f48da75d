// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

/// Where a configuration file is expected to live, and how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed on the command line. Must exist.
    Explicit(PathBuf),
    /// Found by walking up from the working directory.
    Discovered(PathBuf),
    /// The per-user location. May be absent.
    UserDefault(PathBuf),
}

impl ConfigSource {
    /// Picks the configuration file to read.
    ///
    /// An explicit path wins and is resolved against `cwd` when relative. Otherwise the
    /// nearest `filename` in `cwd` or one of its ancestors is used, falling back to
    /// `user_dir/filename`.
    pub fn locate(cwd: &Path, user_dir: &Path, filename: &str, cli_file: Option<&Path>) -> Self {
        if let Some(cli_file) = cli_file {
            return ConfigSource::Explicit(clean(cwd.join(cli_file)));
        }

        cwd.ancestors()
            .map(|dir| dir.join(filename))
            .find(|candidate| candidate.is_file())
            .map(ConfigSource::Discovered)
            .unwrap_or_else(|| ConfigSource::UserDefault(clean(user_dir.join(filename))))
    }

    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Explicit(path)
            | ConfigSource::Discovered(path)
            | ConfigSource::UserDefault(path) => path,
        }
    }

    /// Whether a missing file at [`Self::path`] is an error.
    pub fn is_required(&self) -> bool {
        matches!(self, ConfigSource::Explicit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    const NAME: &str = "walkround.config.yaml";

    #[test]
    fn test_explicit_paths() {
        let cwd = Path::new("/foo/bar");
        let user = Path::new("/my/config");

        let absolute = ConfigSource::locate(cwd, user, NAME, Some(Path::new("/abs/conf.yaml")));
        assert_eq!(absolute, ConfigSource::Explicit(PathBuf::from("/abs/conf.yaml")));
        assert!(absolute.is_required());

        let relative = ConfigSource::locate(cwd, user, NAME, Some(Path::new("../conf/./w.yaml")));
        assert_eq!(relative.path(), Path::new("/foo/conf/w.yaml"));
    }

    #[test]
    fn test_discovery_and_fallback() -> Result<()> {
        let root = tempfile::tempdir()?;
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested)?;
        let user = root.path().join("user");

        let fallback = ConfigSource::locate(&nested, &user, NAME, None);
        assert_eq!(fallback, ConfigSource::UserDefault(user.join(NAME)));
        assert!(!fallback.is_required());

        let target = root.path().join("a").join(NAME);
        std::fs::write(&target, "rounding: floor\n")?;
        assert_eq!(
            ConfigSource::locate(&nested, &user, NAME, None),
            ConfigSource::Discovered(target)
        );

        // a directory with the config's name is not a config file
        std::fs::create_dir(nested.join(NAME))?;
        assert!(matches!(
            ConfigSource::locate(&nested, &user, NAME, None),
            ConfigSource::Discovered(path) if path.parent() == Some(root.path().join("a").as_path())
        ));
        Ok(())
    }
}
