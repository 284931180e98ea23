//! Tab definitions loaded from TOML.
//!
//! ```toml
//! default_tab = 3
//!
//! [[tabs]]
//! id = 1
//! title = "Favorites"
//! icon = "ic_favorites"
//! ```
//!
//! The loader only builds the registry. The default tab is applied by
//! the host with [`BottomBar::set_default_tab`](crate::BottomBar::set_default_tab)
//! once its listeners are in place, since notifications are not buffered.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BarError, BarResult};
use crate::registry::TabRegistry;
use crate::tab::{TabId, TabSpec};

const CONFIG_DIR: &str = "bottombar";
const CONFIG_FILE: &str = "tabs.toml";

/// Tab bar configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarConfig {
    /// Tab to select when nothing else has been chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tab: Option<TabId>,
    /// Tabs in visual order
    #[serde(default)]
    pub tabs: Vec<TabSpec>,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            default_tab: None,
            tabs: vec![
                TabSpec::new(1, "Favorites").with_icon("ic_favorites"),
                TabSpec::new(2, "Nearby").with_icon("ic_nearby"),
                TabSpec::new(3, "Friends").with_icon("ic_friends"),
            ],
        }
    }
}

impl BarConfig {
    /// Parses a configuration document.
    ///
    /// `origin` is only used in error messages.
    pub fn from_toml_str(contents: &str, origin: &Path) -> BarResult<Self> {
        toml::from_str(contents).map_err(|source| BarError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Reads and parses the configuration at `path`.
    pub fn load(path: &Path) -> BarResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents, path)?;
        tracing::debug!(path = ?path, tabs = config.tabs.len(), "loaded tab configuration");
        Ok(config)
    }

    /// Loads the per-user configuration, or the built-in layout when the
    /// file does not exist.
    pub fn load_or_default() -> BarResult<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Location of the per-user configuration file.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml_string(&self) -> BarResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Builds a registry from the configured tabs.
    ///
    /// # Errors
    ///
    /// Returns `BarError::DuplicateId` if two tabs share an id.
    pub fn registry(&self) -> BarResult<TabRegistry> {
        TabRegistry::register(self.tabs.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
default_tab = 30

[[tabs]]
id = 10
title = "Favorites"
icon = "ic_favorites"

[[tabs]]
id = 20
title = "Nearby"

[[tabs]]
id = 30
title = "Friends"
"#;

    #[test]
    fn test_default_has_three_tabs() {
        let config = BarConfig::default();
        let registry = config.registry().expect("unique ids");
        assert_eq!(registry.count(), 3);
        assert_eq!(config.default_tab, None);
    }

    #[test]
    fn test_parse_sample() {
        let config = BarConfig::from_toml_str(SAMPLE, Path::new("sample.toml")).expect("valid");
        assert_eq!(config.default_tab, Some(30));
        assert_eq!(config.tabs.len(), 3);
        assert_eq!(config.tabs[0].icon.as_deref(), Some("ic_favorites"));
        assert!(config.tabs[1].icon.is_none());

        let registry = config.registry().expect("unique ids");
        assert_eq!(registry.find_position_for_id(20).ok(), Some(1));
    }

    #[test]
    fn test_parse_error_carries_path() {
        let result = BarConfig::from_toml_str("tabs = 5", Path::new("broken.toml"));
        match result {
            Err(BarError::Config { path, .. }) => assert_eq!(path, PathBuf::from("broken.toml")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_ids_rejected_by_registry() {
        let contents = r#"
[[tabs]]
id = 1
title = "A"

[[tabs]]
id = 1
title = "B"
"#;
        let config = BarConfig::from_toml_str(contents, Path::new("dup.toml")).expect("parses");
        assert!(matches!(config.registry(), Err(BarError::DuplicateId(1))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("tabs.toml");
        fs::write(&path, SAMPLE).expect("write");

        let config = BarConfig::load(&path).expect("loads");
        assert_eq!(config.tabs.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = BarConfig::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(BarError::Io(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = BarConfig {
            default_tab: Some(2),
            ..BarConfig::default()
        };
        let text = config.to_toml_string().expect("serializes");
        let parsed = BarConfig::from_toml_str(&text, Path::new("round.toml")).expect("parses");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        if let Some(path) = BarConfig::default_path() {
            assert!(path.ends_with(Path::new(CONFIG_DIR).join(CONFIG_FILE)));
        }
    }
}
