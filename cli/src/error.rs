use thiserror::Error;

/// Errors raised while parsing or running a script step.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown step '{0}' (expected select:, tap:, default:, save, restore or show)")]
    UnknownStep(String),
    #[error("step '{step}' needs an argument, e.g. {step}:nearby")]
    MissingArgument { step: String },
    #[error("'{0}' is not a tab position")]
    InvalidPosition(String),
    #[error("no tab matches '{0}'")]
    UnknownTab(String),
    #[error("restore requested before any save")]
    NothingSaved,
}
