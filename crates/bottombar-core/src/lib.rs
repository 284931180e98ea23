//! # bottombar-core
//!
//! Selection-state engine for a horizontal tab bar.
//!
//! This crate decides which tab of a bar is current, tells listeners
//! about select and reselect transitions, keeps exactly one tab flagged
//! active, and saves/restores the selection across host lifecycle
//! events such as a screen rotation. Drawing the tabs and recognising
//! gestures is left to the host toolkit, which queries the registry and
//! reports taps back.
//!
//! ## Core Abstractions
//!
//! - [`TabRegistry`] - Ordered tab descriptors, indexed by id and position
//! - [`SelectionState`] - Current tab, transition logic and default-tab rule
//! - [`ListenerHub`] - Single-slot select/reselect listeners and tap interceptor
//! - [`Snapshot`] - Serialized selection for save/restore
//! - [`BottomBar`] - Facade composing the above
//! - [`BarConfig`] - Tab definitions loaded from TOML
//! - [`BarError`] - Error types for bar operations
//!
//! ## Example
//!
//! ```
//! use bottombar_core::{BottomBar, TabId, TabSpec};
//!
//! let mut bar = BottomBar::from_specs(vec![
//!     TabSpec::new(1, "Favorites"),
//!     TabSpec::new(2, "Nearby"),
//!     TabSpec::new(3, "Friends"),
//! ])
//! .expect("ids are unique");
//!
//! bar.set_on_tab_select_listener(Some(Box::new(|id: TabId| println!("selected {id}"))));
//! bar.set_on_tab_reselect_listener(Some(Box::new(|id: TabId| println!("scroll {id} to top"))));
//!
//! bar.select_tab_with_id(2).expect("known tab");
//! assert_eq!(bar.current_tab_position(), Some(1));
//! assert!(bar.tab_at_position(1).expect("in range").is_active());
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod listener;
pub mod registry;
pub mod selection;
pub mod snapshot;
pub mod tab;

pub use config::BarConfig;
pub use controller::BottomBar;
pub use error::{BarError, BarResult};
pub use listener::{
    ListenerHub, OnTabReselectListener, OnTabSelectListener, TabSelectionInterceptor,
};
pub use registry::TabRegistry;
pub use selection::{DefaultTabState, SelectOrigin, SelectionState, Transition};
pub use snapshot::Snapshot;
pub use tab::{TabDescriptor, TabId, TabSpec, TapTarget};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        // Verify all public types are accessible
        let _: TabId = 0;
        let _ = TabSpec::new(0, "Tab");
        let _ = TapTarget::Position(0);
        let _ = TabRegistry::default();
        let _ = SelectionState::new();
        let _ = ListenerHub::new();
        let _ = Snapshot::default();
        let _ = BarConfig::default();
        let _ = BarError::UnknownTabId(0);
        let _ = DefaultTabState::NeverApplied;
        let _ = SelectOrigin::User;
        let _ = Transition::Reselected(0);
    }

    #[test]
    fn test_default_bar_is_empty() {
        let bar = BottomBar::default();
        assert_eq!(bar.tab_count(), 0);
        assert_eq!(bar.current_tab_id(), None);
    }

    #[test]
    fn test_bar_result_usage() {
        fn example_function() -> BarResult<usize> {
            Ok(1)
        }

        fn failing_function() -> BarResult<usize> {
            Err(BarError::UnknownTabId(1))
        }

        assert_eq!(example_function().ok(), Some(1));
        assert!(failing_function().is_err());
    }

    #[test]
    fn test_config_to_bar() {
        let config = BarConfig::default();
        let mut bar = BottomBar::new(config.registry().expect("unique ids"));
        bar.select_tab_at_position(0).expect("in range");
        assert_eq!(bar.current_tab().map(|t| t.title()), Some("Favorites"));
    }
}
