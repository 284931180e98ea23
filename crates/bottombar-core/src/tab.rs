//! Tab identifiers and descriptors.
//!
//! A [`TabSpec`] is what the configuration loader hands over; a
//! [`TabDescriptor`] is the registered form, carrying the position and
//! the active flag the renderer reads when repainting.

use serde::{Deserialize, Serialize};

/// Unique identifier for a tab.
///
/// Ids are assigned externally (by the tab definitions) and stay stable
/// for the lifetime of the bar. Listener callbacks always receive an id,
/// never a position.
pub type TabId = u32;

/// Definition of a single tab as supplied by the configuration loader.
///
/// Only `id` matters to selection; `title` and `icon` are carried along
/// for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSpec {
    pub id: TabId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl TabSpec {
    /// Creates a spec without an icon.
    ///
    /// # Example
    ///
    /// ```
    /// use bottombar_core::TabSpec;
    ///
    /// let spec = TabSpec::new(1, "Favorites");
    /// assert_eq!(spec.id, 1);
    /// assert!(spec.icon.is_none());
    /// ```
    pub fn new<S: Into<String>>(id: TabId, title: S) -> Self {
        TabSpec {
            id,
            title: title.into(),
            icon: None,
        }
    }

    /// Sets the icon reference.
    #[must_use]
    pub fn with_icon<S: Into<String>>(mut self, icon: S) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A registered tab.
///
/// Descriptors are owned by the [`TabRegistry`](crate::TabRegistry).
/// The active flag is derived from the selection state and can only be
/// changed from inside this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor {
    id: TabId,
    position: usize,
    title: String,
    icon: Option<String>,
    active: bool,
}

impl TabDescriptor {
    pub(crate) fn from_spec(spec: TabSpec, position: usize) -> Self {
        TabDescriptor {
            id: spec.id,
            position,
            title: spec.title,
            icon: spec.icon,
            active: false,
        }
    }

    /// Returns the stable tab id.
    #[must_use]
    pub fn id(&self) -> TabId {
        self.id
    }

    /// Returns the zero-based visual position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the icon reference, if any.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Returns true if this tab is the currently selected one.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// What the renderer reports when a tab is tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapTarget {
    /// The tab at this visual position was tapped.
    Position(usize),
    /// The tab with this id was tapped.
    Id(TabId),
}
