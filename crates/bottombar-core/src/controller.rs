//! Tab bar controller.
//!
//! [`BottomBar`] composes the registry, the selection state and the
//! listener hub behind one facade. Each bar instance owns its own
//! components; hosts that need several bars create several controllers.
//!
//! # Example
//!
//! ```
//! use bottombar_core::{BottomBar, TabSpec, Transition};
//!
//! let mut bar = BottomBar::from_specs(vec![
//!     TabSpec::new(1, "Favorites"),
//!     TabSpec::new(2, "Nearby"),
//!     TabSpec::new(3, "Friends"),
//! ])
//! .expect("ids are unique");
//!
//! bar.set_default_tab(3).expect("known tab");
//! assert_eq!(bar.current_tab_id(), Some(3));
//!
//! let transition = bar.select_tab_with_id(2).expect("known tab");
//! assert_eq!(transition, Transition::Selected { previous: Some(3), current: 2 });
//!
//! let saved = bar.save_state();
//! bar.select_tab_with_id(1).expect("known tab");
//! bar.restore_state(saved).expect("same tab set");
//! assert_eq!(bar.current_tab_position(), Some(1));
//! ```

use crate::error::{BarError, BarResult};
use crate::listener::{
    ListenerHub, OnTabReselectListener, OnTabSelectListener, TabSelectionInterceptor,
};
use crate::registry::TabRegistry;
use crate::selection::{SelectOrigin, SelectionState, Transition};
use crate::snapshot::Snapshot;
use crate::tab::{TabDescriptor, TabId, TabSpec, TapTarget};

/// Selection-state engine of one tab bar.
///
/// All operations run to completion on the calling thread. Listener
/// callbacks are invoked before the triggering call returns.
#[derive(Debug, Default)]
pub struct BottomBar {
    registry: TabRegistry,
    selection: SelectionState,
    listeners: ListenerHub,
}

impl BottomBar {
    /// Creates an unselected bar over the given registry.
    #[must_use]
    pub fn new(registry: TabRegistry) -> Self {
        Self::with_parts(registry, SelectionState::new(), ListenerHub::new())
    }

    /// Registers `specs` and creates an unselected bar.
    ///
    /// # Errors
    ///
    /// Returns `BarError::DuplicateId` if two specs share an id.
    pub fn from_specs<I>(specs: I) -> BarResult<Self>
    where
        I: IntoIterator<Item = TabSpec>,
    {
        Ok(Self::new(TabRegistry::register(specs)?))
    }

    /// Builds a bar from externally constructed components.
    ///
    /// The registry's active flags are brought in line with the injected
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns `BarError::UnknownTabId` if the selection references a tab
    /// the registry does not contain.
    pub fn with_components(
        registry: TabRegistry,
        selection: SelectionState,
        listeners: ListenerHub,
    ) -> BarResult<Self> {
        for id in [selection.current_tab_id(), selection.default_tab_id()]
            .into_iter()
            .flatten()
        {
            if !registry.contains(id) {
                return Err(BarError::UnknownTabId(id));
            }
        }

        Ok(Self::with_parts(registry, selection, listeners))
    }

    fn with_parts(
        mut registry: TabRegistry,
        selection: SelectionState,
        listeners: ListenerHub,
    ) -> Self {
        registry.sync_active(selection.current_tab_id());
        BottomBar {
            registry,
            selection,
            listeners,
        }
    }

    // ==================== Selection ====================

    /// Selects the tab with the given id on behalf of the user.
    ///
    /// Fires the select listener when the current tab changes and the
    /// reselect listener when `id` already was current. A tab restored
    /// from a snapshot fires a select the first time it is requested.
    ///
    /// # Errors
    ///
    /// Returns `BarError::UnknownTabId` if the id is not registered;
    /// nothing changes and nothing fires.
    pub fn select_tab_with_id(&mut self, id: TabId) -> BarResult<Transition> {
        let transition = self
            .selection
            .request_select(&mut self.registry, id, SelectOrigin::User)?;
        self.listeners.dispatch(&transition);
        Ok(transition)
    }

    /// Selects the tab at the given position.
    ///
    /// # Errors
    ///
    /// Returns `BarError::IndexOutOfRange` for an invalid position.
    pub fn select_tab_at_position(&mut self, position: usize) -> BarResult<Transition> {
        let id = self.registry.get_at_position(position)?.id();
        self.select_tab_with_id(id)
    }

    /// Handles a tap reported by the renderer.
    ///
    /// A tap that would switch tabs is first offered to the interceptor;
    /// `Ok(None)` means it was vetoed and nothing changed.
    pub fn handle_tap(&mut self, target: TapTarget) -> BarResult<Option<Transition>> {
        let id = match target {
            TapTarget::Position(position) => self.registry.get_at_position(position)?.id(),
            TapTarget::Id(id) => {
                self.registry.find_position_for_id(id)?;
                id
            }
        };

        let current = self.selection.current_tab_id();
        if current != Some(id) && self.listeners.should_intercept(current, id) {
            tracing::debug!(tab = id, ?current, "tap intercepted");
            return Ok(None);
        }

        self.select_tab_with_id(id).map(Some)
    }

    /// Designates a default tab, selecting it only if nothing has been
    /// chosen yet.
    ///
    /// Returns the select transition when the default was applied. A
    /// user choice or restored selection is never overridden.
    ///
    /// # Errors
    ///
    /// Returns `BarError::UnknownTabId` if the id is not registered.
    pub fn set_default_tab(&mut self, id: TabId) -> BarResult<Option<Transition>> {
        let transition = self.selection.set_default_tab(&mut self.registry, id)?;
        if let Some(transition) = &transition {
            self.listeners.dispatch(transition);
        }
        Ok(transition)
    }

    /// Position-based variant of [`BottomBar::set_default_tab`].
    pub fn set_default_tab_position(&mut self, position: usize) -> BarResult<Option<Transition>> {
        let id = self.registry.get_at_position(position)?.id();
        self.set_default_tab(id)
    }

    // ==================== Queries ====================

    /// Returns the id of the current tab, `None` while unselected.
    #[must_use]
    pub fn current_tab_id(&self) -> Option<TabId> {
        self.selection.current_tab_id()
    }

    /// Returns the position of the current tab.
    #[must_use]
    pub fn current_tab_position(&self) -> Option<usize> {
        self.current_tab().map(TabDescriptor::position)
    }

    /// Returns the descriptor of the current tab.
    #[must_use]
    pub fn current_tab(&self) -> Option<&TabDescriptor> {
        self.selection
            .current_tab_id()
            .and_then(|id| self.registry.get(id))
    }

    /// Returns the number of registered tabs.
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.registry.count()
    }

    /// Returns the tab at `position`.
    ///
    /// # Errors
    ///
    /// Returns `BarError::IndexOutOfRange` for an invalid position.
    pub fn tab_at_position(&self, position: usize) -> BarResult<&TabDescriptor> {
        self.registry.get_at_position(position)
    }

    /// Returns the tab with `id`.
    ///
    /// # Errors
    ///
    /// Returns `BarError::UnknownTabId` if the id is not registered.
    pub fn tab_with_id(&self, id: TabId) -> BarResult<&TabDescriptor> {
        self.registry.get(id).ok_or(BarError::UnknownTabId(id))
    }

    /// Returns the position of the tab with `id`.
    ///
    /// # Errors
    ///
    /// Returns `BarError::UnknownTabId` if the id is not registered.
    pub fn find_position_for_tab_with_id(&self, id: TabId) -> BarResult<usize> {
        self.registry.find_position_for_id(id)
    }

    /// Returns the tab registry, for renderers repainting active flags.
    #[must_use]
    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    /// Returns the selection state.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    // ==================== Lifecycle ====================

    /// Captures the selection for a host lifecycle save.
    #[must_use]
    pub fn save_state(&self) -> Snapshot {
        self.selection.snapshot()
    }

    /// Restores a snapshot taken with [`BottomBar::save_state`].
    ///
    /// Restoring is silent: no listener fires.
    ///
    /// # Errors
    ///
    /// Returns `BarError::CorruptSnapshot` if the snapshot references a
    /// tab that is no longer registered. The selection is left unchanged.
    pub fn restore_state(&mut self, snapshot: Snapshot) -> BarResult<()> {
        self.selection.restore(&mut self.registry, &snapshot)
    }

    /// Restores a snapshot, falling back to the unselected state if it is
    /// stale.
    ///
    /// Returns true if the snapshot was applied.
    pub fn restore_state_or_reset(&mut self, snapshot: Snapshot) -> bool {
        match self.restore_state(snapshot) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("discarding saved tab state: {}", err);
                self.selection.reset(&mut self.registry);
                false
            }
        }
    }

    // ==================== Listeners ====================

    /// Replaces the select listener. `None` removes it.
    pub fn set_on_tab_select_listener(&mut self, listener: Option<Box<dyn OnTabSelectListener>>) {
        self.listeners.set_on_select(listener);
    }

    /// Replaces the reselect listener. `None` removes it.
    pub fn set_on_tab_reselect_listener(
        &mut self,
        listener: Option<Box<dyn OnTabReselectListener>>,
    ) {
        self.listeners.set_on_reselect(listener);
    }

    /// Replaces the tap interceptor. `None` removes it.
    pub fn set_tab_selection_interceptor(
        &mut self,
        interceptor: Option<Box<dyn TabSelectionInterceptor>>,
    ) {
        self.listeners.set_interceptor(interceptor);
    }
}
