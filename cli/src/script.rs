//! Script steps replayed against a bar.
//!
//! Each command-line step stands for something the host would do: a
//! programmatic selection, a tap reported by the renderer, a default-tab
//! assignment, or a lifecycle save/restore.

use anyhow::{Context, Result};
use bottombar_core::{BottomBar, Snapshot, TabId, TabRegistry, TapTarget};
use std::str::FromStr;

use crate::error::ScriptError;

/// Reference to a tab by numeric id or by title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabRef {
    Id(TabId),
    Title(String),
}

impl TabRef {
    fn parse(raw: &str) -> Self {
        raw.parse::<TabId>()
            .map(TabRef::Id)
            .unwrap_or_else(|_| TabRef::Title(raw.to_string()))
    }

    /// Resolves the reference to an id. Numeric ids are passed through
    /// unchecked so the bar reports unknown ids itself.
    pub fn resolve(&self, registry: &TabRegistry) -> Result<TabId, ScriptError> {
        match self {
            TabRef::Id(id) => Ok(*id),
            TabRef::Title(title) => registry
                .tabs()
                .iter()
                .find(|tab| tab.title().eq_ignore_ascii_case(title))
                .map(|tab| tab.id())
                .ok_or_else(|| ScriptError::UnknownTab(title.clone())),
        }
    }
}

/// One scripted host action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Select(TabRef),
    Tap(usize),
    Default(TabRef),
    Save,
    Restore,
    Show,
}

impl FromStr for Step {
    type Err = ScriptError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match raw.split_once(':') {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (raw, None),
        };

        let require = |arg: Option<&str>| {
            arg.map(str::to_string)
                .ok_or_else(|| ScriptError::MissingArgument {
                    step: name.to_string(),
                })
        };

        match name.trim().to_ascii_lowercase().as_str() {
            "select" => Ok(Step::Select(TabRef::parse(&require(arg)?))),
            "default" => Ok(Step::Default(TabRef::parse(&require(arg)?))),
            "tap" => {
                let position = require(arg)?;
                position
                    .parse()
                    .map(Step::Tap)
                    .map_err(|_| ScriptError::InvalidPosition(position))
            }
            "save" => Ok(Step::Save),
            "restore" => Ok(Step::Restore),
            "show" => Ok(Step::Show),
            _ => Err(ScriptError::UnknownStep(raw.to_string())),
        }
    }
}

/// A bar plus the last snapshot taken during the script.
pub struct Session {
    bar: BottomBar,
    saved: Option<Snapshot>,
}

impl Session {
    pub fn new(bar: BottomBar) -> Self {
        Session { bar, saved: None }
    }

    pub fn bar(&self) -> &BottomBar {
        &self.bar
    }

    /// Runs one step. Returns a line to print, if the step produces one;
    /// selections are reported by the bar's listeners instead.
    pub fn run(&mut self, step: &Step) -> Result<Option<String>> {
        match step {
            Step::Select(tab) => {
                let id = tab.resolve(self.bar.registry())?;
                self.bar
                    .select_tab_with_id(id)
                    .with_context(|| format!("failed to select tab {}", id))?;
                Ok(None)
            }
            Step::Tap(position) => {
                let outcome = self
                    .bar
                    .handle_tap(TapTarget::Position(*position))
                    .with_context(|| format!("failed to tap position {}", position))?;
                Ok(outcome.is_none().then(|| format!("tap on {} ignored", position)))
            }
            Step::Default(tab) => {
                let id = tab.resolve(self.bar.registry())?;
                let applied = self
                    .bar
                    .set_default_tab(id)
                    .with_context(|| format!("failed to set default tab {}", id))?;
                Ok(applied
                    .is_none()
                    .then(|| format!("default tab {} recorded, selection kept", id)))
            }
            Step::Save => {
                let snapshot = self.bar.save_state();
                self.saved = Some(snapshot);
                Ok(Some(format!("saved {}", snapshot.to_json()?)))
            }
            Step::Restore => {
                let snapshot = self.saved.take().ok_or(ScriptError::NothingSaved)?;
                self.bar
                    .restore_state(snapshot)
                    .context("failed to restore saved state")?;
                Ok(Some("restored".to_string()))
            }
            Step::Show => Ok(Some(describe(&self.bar))),
        }
    }
}

/// One line per tab, marking the active one.
pub fn describe(bar: &BottomBar) -> String {
    bar.registry()
        .tabs()
        .iter()
        .map(|tab| {
            let marker = if tab.is_active() { '*' } else { ' ' };
            format!("{} {} {:>6}  {}", marker, tab.position(), tab.id(), tab.title())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
