//! Selection state machine.
//!
//! [`SelectionState`] is the single source of truth for which tab is
//! current. It classifies every request as a select or a reselect
//! [`Transition`], keeps the registry's active flags in step, and owns
//! the default-tab rule: a default is applied at most once, and never
//! over a choice the user already made or one that was restored.

use crate::error::{BarError, BarResult};
use crate::registry::TabRegistry;
use crate::snapshot::Snapshot;
use crate::tab::TabId;

/// Outcome of a successful selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The current tab changed to a different id, or a restored tab was
    /// selected for the first time on this instance.
    Selected {
        /// Tab that was current before, if any
        previous: Option<TabId>,
        /// Newly current tab
        current: TabId,
    },
    /// The already-current tab was requested again.
    Reselected(TabId),
}

impl Transition {
    /// Returns the id of the tab that is current after this transition.
    #[must_use]
    pub fn tab_id(&self) -> TabId {
        match self {
            Transition::Selected { current, .. } => *current,
            Transition::Reselected(id) => *id,
        }
    }

    /// Returns true for a select (as opposed to reselect) transition.
    #[must_use]
    pub fn is_select(&self) -> bool {
        matches!(self, Transition::Selected { .. })
    }
}

/// Who asked for a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOrigin {
    /// A tap or an explicit API call on behalf of the user.
    User,
    /// Automatic application of the default tab.
    Default,
}

/// Where the current selection came from, as far as the default-tab
/// rule is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultTabState {
    /// Nothing has been selected and no default applied yet.
    #[default]
    NeverApplied,
    /// The current selection is the applied default.
    AppliedAsDefault,
    /// The user chose a tab, or a restored snapshot carried a choice.
    AppliedAsUserChoice,
}

/// Current tab, recorded default tab and default-tab bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    current: Option<TabId>,
    default_tab: Option<TabId>,
    default_state: DefaultTabState,
    /// Last id announced through a select transition; cleared by restore
    announced: Option<TabId>,
}

impl SelectionState {
    /// Creates an unselected state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current tab id, or `None` while unselected.
    #[must_use]
    pub fn current_tab_id(&self) -> Option<TabId> {
        self.current
    }

    /// Returns the most recently recorded default tab id.
    #[must_use]
    pub fn default_tab_id(&self) -> Option<TabId> {
        self.default_tab
    }

    /// Returns where the current selection came from.
    #[must_use]
    pub fn default_state(&self) -> DefaultTabState {
        self.default_state
    }

    /// Wire form of the default-tab bookkeeping.
    #[must_use]
    pub fn default_already_applied(&self) -> bool {
        self.default_state != DefaultTabState::NeverApplied
    }

    /// Requests that `id` become the current tab.
    ///
    /// Returns [`Transition::Selected`] when the current tab changes and
    /// [`Transition::Reselected`] when `id` already was current and has
    /// been announced by a select transition on this instance. A restored
    /// tab is never reselected before it has been selected once. The
    /// registry's active flags are updated in the same call.
    ///
    /// # Errors
    ///
    /// Returns `BarError::UnknownTabId` if `id` is not registered; the
    /// state is left untouched.
    pub fn request_select(
        &mut self,
        registry: &mut TabRegistry,
        id: TabId,
        origin: SelectOrigin,
    ) -> BarResult<Transition> {
        if !registry.contains(id) {
            return Err(BarError::UnknownTabId(id));
        }

        if origin == SelectOrigin::User {
            self.default_state = DefaultTabState::AppliedAsUserChoice;
        }

        if self.current == Some(id) && self.announced == Some(id) {
            tracing::debug!(tab = id, "reselected tab");
            return Ok(Transition::Reselected(id));
        }

        let previous = self.current.replace(id);
        self.announced = Some(id);
        registry.sync_active(self.current);
        tracing::debug!(tab = id, ?previous, ?origin, "selected tab");

        Ok(Transition::Selected {
            previous,
            current: id,
        })
    }

    /// Records `id` as the default tab and selects it if nothing has been
    /// chosen yet.
    ///
    /// Returns the select transition when the default was applied, or
    /// `None` when an earlier default, user choice or restored selection
    /// takes precedence.
    ///
    /// # Errors
    ///
    /// Returns `BarError::UnknownTabId` if `id` is not registered.
    pub fn set_default_tab(
        &mut self,
        registry: &mut TabRegistry,
        id: TabId,
    ) -> BarResult<Option<Transition>> {
        if !registry.contains(id) {
            return Err(BarError::UnknownTabId(id));
        }

        self.default_tab = Some(id);

        if self.default_state != DefaultTabState::NeverApplied {
            tracing::debug!(
                tab = id,
                current = ?self.current,
                "default tab recorded, existing selection kept"
            );
            return Ok(None);
        }

        let transition = self.request_select(registry, id, SelectOrigin::Default)?;
        self.default_state = DefaultTabState::AppliedAsDefault;
        Ok(Some(transition))
    }

    /// Captures the state for a lifecycle save.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_tab_id: self.current,
            default_tab_id: self.default_tab,
            default_already_applied: self.default_already_applied(),
        }
    }

    /// Replaces the state with a snapshot without classifying it as a
    /// transition.
    ///
    /// The restored tab has not been announced on this instance, so the
    /// next request for it is a select rather than a reselect.
    ///
    /// # Errors
    ///
    /// Returns `BarError::CorruptSnapshot` if the snapshot references an
    /// id that is not registered; the state is left unchanged.
    pub fn restore(&mut self, registry: &mut TabRegistry, snapshot: &Snapshot) -> BarResult<()> {
        for id in [snapshot.current_tab_id, snapshot.default_tab_id]
            .into_iter()
            .flatten()
        {
            if !registry.contains(id) {
                return Err(BarError::CorruptSnapshot(id));
            }
        }

        self.current = snapshot.current_tab_id;
        self.default_tab = snapshot.default_tab_id;
        self.announced = None;
        self.default_state = match (snapshot.current_tab_id, snapshot.default_already_applied) {
            (None, false) => DefaultTabState::NeverApplied,
            (Some(current), true) if snapshot.default_tab_id == Some(current) => {
                DefaultTabState::AppliedAsDefault
            }
            _ => DefaultTabState::AppliedAsUserChoice,
        };
        registry.sync_active(self.current);

        tracing::debug!(
            current = ?self.current,
            default = ?self.default_tab,
            state = ?self.default_state,
            "restored selection"
        );
        Ok(())
    }

    /// Silently returns to the unselected state with no default recorded.
    pub fn reset(&mut self, registry: &mut TabRegistry) {
        *self = SelectionState::new();
        registry.sync_active(None);
    }
}
