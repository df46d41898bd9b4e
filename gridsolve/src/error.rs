use std::fmt;
use std::io;
use std::path::PathBuf;

use gridsearch_domains::InvalidInput;

/// Anything that stops a command before or after the search itself.
#[derive(Debug)]
pub enum RunError {
    /// Reading an input file failed.
    Read { path: PathBuf, source: io::Error },
    /// Writing the report failed.
    Write(io::Error),
    Json(serde_json::Error),
    Input(InvalidInput),
    UnknownFixture(String),
    /// Neither `--file` nor `--fixture` was given.
    NoInput,
    /// `--file` was given for a maze without `--start` and `--goal`.
    MissingEndpoints,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Write(e) => write!(f, "cannot write output: {e}"),
            Self::Json(e) => write!(f, "cannot encode result: {e}"),
            Self::Input(e) => write!(f, "invalid input: {e}"),
            Self::UnknownFixture(name) => {
                write!(f, "no fixture named \u{201c}{name}\u{201d} (try `gridsolve fixtures`)")
            }
            Self::NoInput => write!(f, "no input: pass --file or --fixture"),
            Self::MissingEndpoints => write!(f, "a maze file needs --start and --goal"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Write(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Input(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidInput> for RunError {
    fn from(e: InvalidInput) -> Self {
        Self::Input(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        Self::Write(e)
    }
}

impl From<serde_json::Error> for RunError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
