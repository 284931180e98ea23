mod error;
mod script;

use crate::script::{Session, Step};
use anyhow::{Context, Result};
use bottombar_core::{BarConfig, BottomBar, Snapshot, TabId};
use clap::Parser;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "bottombar",
    about = "Replay tab bar interactions and print select/reselect notifications",
    version,
    author
)]
struct Args {
    /// Tab definitions (TOML). Defaults to the per-user config, then a built-in three-tab bar
    #[arg(long)]
    tabs: Option<PathBuf>,

    /// Snapshot file restored at start and written at exit
    #[arg(long)]
    state: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Steps to run: select:<tab>, tap:<position>, default:<tab>, save, restore, show
    steps: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::from_default_env()
            .add_directive("bottombar=debug".parse()?)
            .add_directive("bottombar_core=debug".parse()?)
    } else {
        EnvFilter::from_default_env()
            .add_directive("bottombar=info".parse()?)
            .add_directive("bottombar_core=info".parse()?)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    for line in run(&args)? {
        println!("{}", line);
    }

    Ok(())
}

/// Runs one host session and returns the lines it printed, in order.
///
/// Restores `--state` first, then applies the configured default tab, so a
/// restored choice is never overridden by the default.
fn run(args: &Args) -> Result<Vec<String>> {
    // Parse every step up front so a typo does not leave half a script applied
    let steps = args
        .steps
        .iter()
        .map(|raw| raw.parse::<Step>())
        .collect::<Result<Vec<_>, _>>()?;

    let config = match &args.tabs {
        Some(path) => BarConfig::load(path)
            .with_context(|| format!("Failed to load tab definitions from {:?}", path))?,
        None => BarConfig::load_or_default().context("Failed to load tab definitions")?,
    };
    let registry = config.registry().context("Invalid tab definitions")?;

    let labels: Rc<HashMap<TabId, String>> = Rc::new(
        registry
            .tabs()
            .iter()
            .map(|tab| (tab.id(), tab.title().to_string()))
            .collect(),
    );
    let output: Rc<RefCell<Vec<String>>> = Rc::default();

    let mut bar = BottomBar::new(registry);
    {
        let labels = Rc::clone(&labels);
        let output = Rc::clone(&output);
        bar.set_on_tab_select_listener(Some(Box::new(move |id: TabId| {
            output
                .borrow_mut()
                .push(format!("selected {}", label(&labels, id)));
        })));
    }
    {
        let labels = Rc::clone(&labels);
        let output = Rc::clone(&output);
        bar.set_on_tab_reselect_listener(Some(Box::new(move |id: TabId| {
            output
                .borrow_mut()
                .push(format!("reselected {}", label(&labels, id)));
        })));
    }

    if let Some(path) = args.state.as_ref().filter(|p| p.exists()) {
        let snapshot = Snapshot::load_from_path(path)
            .with_context(|| format!("Failed to read saved state from {:?}", path))?;
        if bar.restore_state_or_reset(snapshot) {
            tracing::info!("Restored tab state from {:?}", path);
        }
    }

    if let Some(default_tab) = config.default_tab {
        bar.set_default_tab(default_tab)
            .context("Configured default tab is not a registered tab")?;
    }

    let mut session = Session::new(bar);
    for step in &steps {
        if let Some(line) = session.run(step)? {
            output.borrow_mut().push(line);
        }
    }

    if let Some(path) = args.state.as_ref() {
        session
            .bar()
            .save_state()
            .save_to_path(path)
            .with_context(|| format!("Failed to write state to {:?}", path))?;
        tracing::debug!("Saved tab state to {:?}", path);
    }

    let lines = output.borrow().clone();
    Ok(lines)
}

fn label(labels: &HashMap<TabId, String>, id: TabId) -> String {
    match labels.get(&id) {
        Some(title) => format!("{} ({})", title, id),
        None => id.to_string(),
    }
}
