use super::LAUNCHER;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// The launcher could not be found on `PATH`. Nothing was spawned.
    LauncherNotFound(which::Error),
    /// The launcher was found, but spawning it, waiting on it, or collecting its exit code failed.
    ExecutionFailed(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::LauncherNotFound(_) => write!(f, "{LAUNCHER} is not installed or not in PATH"),
            Error::ExecutionFailed(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::LauncherNotFound(error) => Some(error),
            Error::ExecutionFailed(error) => Some(error),
        }
    }
}
