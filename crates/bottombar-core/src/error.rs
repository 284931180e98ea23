//! Error types for bottombar-core
//!
//! Every fallible operation of the tab bar reports one of these variants
//! synchronously to its caller. Nothing is retried internally.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use toml::de::Error as ConfigParseError;

use crate::tab::TabId;

/// Errors raised by the tab registry, the selection state and the
/// controller facade.
#[derive(Debug, Error)]
pub enum BarError {
    /// An operation referenced a tab id that is not registered.
    ///
    /// This is a caller error; the bar state is left untouched.
    #[error("unknown tab id: {0}")]
    UnknownTabId(TabId),

    /// Two tab definitions share the same id.
    ///
    /// Raised while building a registry, which makes the bar unusable.
    #[error("duplicate tab id: {0}")]
    DuplicateId(TabId),

    /// A position lookup fell outside `0..count`.
    #[error("tab position {position} out of range (tab count {count})")]
    IndexOutOfRange { position: usize, count: usize },

    /// A snapshot referenced a tab id missing from the current registry.
    ///
    /// Usually the tab set changed between save and restore. The
    /// selection is left unchanged so the caller can pick a fallback.
    #[error("snapshot references unknown tab id: {0}")]
    CorruptSnapshot(TabId),

    /// Snapshot payload could not be encoded or decoded.
    #[error("snapshot encoding error: {0}")]
    SnapshotEncoding(#[from] serde_json::Error),

    /// Tab definition file could not be parsed.
    #[error("invalid tab configuration at {path:?}: {source}")]
    Config {
        path: PathBuf,
        source: ConfigParseError,
    },

    /// Configuration could not be serialized.
    #[error("failed to serialize tab configuration: {0}")]
    ConfigEncoding(#[from] toml::ser::Error),

    /// Underlying IO error from reading or writing files.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias using [`BarError`].
pub type BarResult<T> = Result<T, BarError>;
