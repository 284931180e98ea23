//! Lifecycle snapshots of the selection state.
//!
//! A [`Snapshot`] is taken with [`BottomBar::save_state`] before the host
//! tears the bar down (screen rotation and the like) and handed back to
//! [`BottomBar::restore_state`] on the new instance. Restoring is silent:
//! it never fires select or reselect listeners.
//!
//! The JSON wire form uses camelCase keys and leaves out ids that are
//! unset:
//!
//! ```json
//! {"currentTabId": 2, "defaultTabId": 3, "defaultAlreadyApplied": true}
//! ```
//!
//! [`BottomBar::save_state`]: crate::BottomBar::save_state
//! [`BottomBar::restore_state`]: crate::BottomBar::restore_state

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::BarResult;
use crate::tab::TabId;

/// Serialized selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_tab_id: Option<TabId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tab_id: Option<TabId>,
    #[serde(default)]
    pub default_already_applied: bool,
}

impl Snapshot {
    /// Encodes the snapshot as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `BarError::SnapshotEncoding` if serialization fails.
    pub fn to_json(&self) -> BarResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns `BarError::SnapshotEncoding` for malformed input.
    ///
    /// # Example
    ///
    /// ```
    /// use bottombar_core::Snapshot;
    ///
    /// let snapshot = Snapshot::from_json(r#"{"currentTabId": 7}"#).expect("valid json");
    /// assert_eq!(snapshot.current_tab_id, Some(7));
    /// assert_eq!(snapshot.default_tab_id, None);
    /// assert!(!snapshot.default_already_applied);
    /// ```
    pub fn from_json(json: &str) -> BarResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the snapshot to `path`, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> BarResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        tracing::debug!(path = ?path, "saved selection snapshot");
        Ok(())
    }

    /// Reads a snapshot previously written with [`Snapshot::save_to_path`].
    pub fn load_from_path(path: &Path) -> BarResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}
