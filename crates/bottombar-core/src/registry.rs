//! Ordered tab registry.
//!
//! The [`TabRegistry`] holds the registered tabs in visual order and
//! keeps an id index for O(1) lookup, the same way a tab manager tracks
//! its tabs. It is built once and never grows or shrinks; only the
//! active flags change, and only through the selection state.

use std::collections::HashMap;

use crate::error::{BarError, BarResult};
use crate::tab::{TabDescriptor, TabId, TabSpec};

/// Ordered collection of tab descriptors, indexed by id and by position.
///
/// # Example
///
/// ```
/// use bottombar_core::{TabRegistry, TabSpec};
///
/// let registry = TabRegistry::register(vec![
///     TabSpec::new(10, "Favorites"),
///     TabSpec::new(20, "Nearby"),
/// ])
/// .expect("ids are unique");
///
/// assert_eq!(registry.count(), 2);
/// assert_eq!(registry.find_position_for_id(20).ok(), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TabRegistry {
    /// Tabs in visual order; index equals position
    tabs: Vec<TabDescriptor>,
    /// Mapping from TabId to position
    tab_indices: HashMap<TabId, usize>,
}

impl TabRegistry {
    /// Registers tabs in the given order, assigning positions `0..n`.
    ///
    /// # Errors
    ///
    /// Returns `BarError::DuplicateId` if two specs share an id.
    pub fn register<I>(specs: I) -> BarResult<Self>
    where
        I: IntoIterator<Item = TabSpec>,
    {
        let mut registry = TabRegistry::default();

        for spec in specs {
            let position = registry.tabs.len();
            if registry.tab_indices.insert(spec.id, position).is_some() {
                return Err(BarError::DuplicateId(spec.id));
            }
            registry.tabs.push(TabDescriptor::from_spec(spec, position));
        }

        tracing::debug!(count = registry.tabs.len(), "registered tabs");
        Ok(registry)
    }

    /// Returns the position of the tab with the given id.
    ///
    /// # Errors
    ///
    /// Returns `BarError::UnknownTabId` if the id is not registered.
    pub fn find_position_for_id(&self, id: TabId) -> BarResult<usize> {
        self.tab_indices
            .get(&id)
            .copied()
            .ok_or(BarError::UnknownTabId(id))
    }

    /// Returns the tab at the given position.
    ///
    /// # Errors
    ///
    /// Returns `BarError::IndexOutOfRange` if `position >= count()`.
    pub fn get_at_position(&self, position: usize) -> BarResult<&TabDescriptor> {
        self.tabs.get(position).ok_or(BarError::IndexOutOfRange {
            position,
            count: self.tabs.len(),
        })
    }

    /// Gets a tab by id.
    #[must_use]
    pub fn get(&self, id: TabId) -> Option<&TabDescriptor> {
        self.tab_indices
            .get(&id)
            .and_then(|&idx| self.tabs.get(idx))
    }

    /// Returns true if a tab with this id is registered.
    #[must_use]
    pub fn contains(&self, id: TabId) -> bool {
        self.tab_indices.contains_key(&id)
    }

    /// Returns the number of tabs.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tabs.len()
    }

    /// Returns true if no tabs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Returns all tabs in visual order.
    #[must_use]
    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    /// Returns the tab whose active flag is set, if any.
    #[must_use]
    pub fn active_tab(&self) -> Option<&TabDescriptor> {
        self.tabs.iter().find(|t| t.is_active())
    }

    /// Rewrites every active flag in one pass so that only `id` is active.
    ///
    /// Callers must have validated `id` against this registry.
    pub(crate) fn sync_active(&mut self, id: Option<TabId>) {
        for tab in &mut self.tabs {
            tab.set_active(Some(tab.id()) == id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_tabs() -> TabRegistry {
        TabRegistry::register(vec![
            TabSpec::new(100, "Favorites"),
            TabSpec::new(200, "Nearby"),
            TabSpec::new(300, "Friends"),
        ])
        .expect("unique ids")
    }

    #[test]
    fn test_register_assigns_positions_in_order() {
        let registry = three_tabs();
        assert_eq!(registry.count(), 3);
        for (i, tab) in registry.tabs().iter().enumerate() {
            assert_eq!(tab.position(), i);
        }
        assert_eq!(registry.find_position_for_id(100).ok(), Some(0));
        assert_eq!(registry.find_position_for_id(200).ok(), Some(1));
        assert_eq!(registry.find_position_for_id(300).ok(), Some(2));
    }

    #[test]
    fn test_register_rejects_duplicate_ids() {
        let result = TabRegistry::register(vec![
            TabSpec::new(1, "A"),
            TabSpec::new(2, "B"),
            TabSpec::new(1, "C"),
        ]);
        assert!(matches!(result, Err(BarError::DuplicateId(1))));
    }

    #[test]
    fn test_register_empty() {
        let registry = TabRegistry::register(Vec::new()).expect("empty is valid");
        assert!(registry.is_empty());
        assert_eq!(registry.count(), 0);
        assert!(registry.active_tab().is_none());
    }

    #[test]
    fn test_find_position_unknown_id() {
        let registry = three_tabs();
        assert!(matches!(
            registry.find_position_for_id(999),
            Err(BarError::UnknownTabId(999))
        ));
    }

    #[test]
    fn test_get_at_position() {
        let registry = three_tabs();
        let tab = registry.get_at_position(1).expect("in range");
        assert_eq!(tab.id(), 200);
        assert_eq!(tab.title(), "Nearby");
    }

    #[test]
    fn test_get_at_position_out_of_range() {
        let registry = three_tabs();
        assert!(matches!(
            registry.get_at_position(3),
            Err(BarError::IndexOutOfRange {
                position: 3,
                count: 3
            })
        ));
    }

    #[test]
    fn test_get_and_contains() {
        let registry = three_tabs();
        assert_eq!(registry.get(300).map(|t| t.title()), Some("Friends"));
        assert!(registry.get(1).is_none());
        assert!(registry.contains(100));
        assert!(!registry.contains(101));
    }

    #[test]
    fn test_sync_active_sets_exactly_one() {
        let mut registry = three_tabs();
        registry.sync_active(Some(200));
        assert_eq!(registry.active_tab().map(|t| t.id()), Some(200));
        assert_eq!(registry.tabs().iter().filter(|t| t.is_active()).count(), 1);

        registry.sync_active(Some(100));
        assert_eq!(registry.active_tab().map(|t| t.id()), Some(100));
        assert_eq!(registry.tabs().iter().filter(|t| t.is_active()).count(), 1);
    }

    #[test]
    fn test_sync_active_none_clears_all() {
        let mut registry = three_tabs();
        registry.sync_active(Some(300));
        registry.sync_active(None);
        assert!(registry.tabs().iter().all(|t| !t.is_active()));
    }
}
