//! Listener slots and notification dispatch.
//!
//! The [`ListenerHub`] holds at most one select listener, one reselect
//! listener and one tap interceptor. Setting a slot replaces whatever was
//! there before; there is no multicasting and no buffering of
//! notifications for listeners registered later.
//!
//! All three traits have blanket impls for closures, so a listener can be
//! a plain `FnMut`:
//!
//! ```
//! use bottombar_core::{ListenerHub, TabId};
//!
//! let mut hub = ListenerHub::new();
//! hub.set_on_select(Some(Box::new(|id: TabId| println!("selected {id}"))));
//! assert!(hub.has_select_listener());
//! ```

use crate::selection::Transition;
use crate::tab::TabId;

/// Receives a notification each time a different tab becomes current.
pub trait OnTabSelectListener {
    /// Called with the id of the newly selected tab.
    fn on_tab_selected(&mut self, tab_id: TabId);
}

/// Receives a notification each time the current tab is selected again.
pub trait OnTabReselectListener {
    /// Called with the id of the reselected tab.
    fn on_tab_reselected(&mut self, tab_id: TabId);
}

/// Gets a chance to veto a tap before it changes the selection.
///
/// Only consulted for taps that would be select transitions; reselects
/// and programmatic selections never reach the interceptor.
pub trait TabSelectionInterceptor {
    /// Returns true to cancel the switch from `old_tab_id` to `new_tab_id`.
    fn should_intercept_tab_selection(
        &mut self,
        old_tab_id: Option<TabId>,
        new_tab_id: TabId,
    ) -> bool;
}

impl<F: FnMut(TabId)> OnTabSelectListener for F {
    fn on_tab_selected(&mut self, tab_id: TabId) {
        self(tab_id)
    }
}

impl<F: FnMut(TabId)> OnTabReselectListener for F {
    fn on_tab_reselected(&mut self, tab_id: TabId) {
        self(tab_id)
    }
}

impl<F: FnMut(Option<TabId>, TabId) -> bool> TabSelectionInterceptor for F {
    fn should_intercept_tab_selection(
        &mut self,
        old_tab_id: Option<TabId>,
        new_tab_id: TabId,
    ) -> bool {
        self(old_tab_id, new_tab_id)
    }
}

/// Single-registrant listener slots.
#[derive(Default)]
pub struct ListenerHub {
    on_select: Option<Box<dyn OnTabSelectListener>>,
    on_reselect: Option<Box<dyn OnTabReselectListener>>,
    interceptor: Option<Box<dyn TabSelectionInterceptor>>,
}

impl ListenerHub {
    /// Creates a hub with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the select listener. `None` stops future notifications.
    pub fn set_on_select(&mut self, listener: Option<Box<dyn OnTabSelectListener>>) {
        self.on_select = listener;
    }

    /// Replaces the reselect listener. `None` stops future notifications.
    pub fn set_on_reselect(&mut self, listener: Option<Box<dyn OnTabReselectListener>>) {
        self.on_reselect = listener;
    }

    /// Replaces the tap interceptor.
    pub fn set_interceptor(&mut self, interceptor: Option<Box<dyn TabSelectionInterceptor>>) {
        self.interceptor = interceptor;
    }

    #[must_use]
    pub fn has_select_listener(&self) -> bool {
        self.on_select.is_some()
    }

    #[must_use]
    pub fn has_reselect_listener(&self) -> bool {
        self.on_reselect.is_some()
    }

    #[must_use]
    pub fn has_interceptor(&self) -> bool {
        self.interceptor.is_some()
    }

    /// Notifies the select listener, if one is registered.
    pub fn notify_select(&mut self, tab_id: TabId) {
        if let Some(listener) = self.on_select.as_mut() {
            listener.on_tab_selected(tab_id);
        }
    }

    /// Notifies the reselect listener, if one is registered.
    pub fn notify_reselect(&mut self, tab_id: TabId) {
        if let Some(listener) = self.on_reselect.as_mut() {
            listener.on_tab_reselected(tab_id);
        }
    }

    /// Routes a transition to the matching listener.
    pub fn dispatch(&mut self, transition: &Transition) {
        match *transition {
            Transition::Selected { current, .. } => self.notify_select(current),
            Transition::Reselected(id) => self.notify_reselect(id),
        }
    }

    /// Asks the interceptor whether a tap switching tabs should be dropped.
    ///
    /// Returns false when no interceptor is registered.
    pub fn should_intercept(&mut self, old_tab_id: Option<TabId>, new_tab_id: TabId) -> bool {
        self.interceptor
            .as_mut()
            .is_some_and(|i| i.should_intercept_tab_selection(old_tab_id, new_tab_id))
    }
}

impl std::fmt::Debug for ListenerHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerHub")
            .field("on_select", &self.has_select_listener())
            .field("on_reselect", &self.has_reselect_listener())
            .field("interceptor", &self.has_interceptor())
            .finish()
    }
}
