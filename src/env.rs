use std::{ffi::OsString, io, path::PathBuf};

/// Variable naming the distribution to run in
pub const DISTRIBUTION_VAR: &str = "WSL_DISTRO";

pub const DEFAULT_DISTRIBUTION: &str = "Ubuntu";

/// Source of environment variables and the working directory used for launcher lookup.
///
/// [`ProcessEnv`] reads the current process's environment. Closures of type
/// `Fn(&str) -> Option<OsString>` also implement this trait, which is convenient in tests.
pub trait Env {
    fn var_os(&self, key: &str) -> Option<OsString>;

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

impl<F> Env for F
where
    F: Fn(&str) -> Option<OsString>,
{
    fn var_os(&self, key: &str) -> Option<OsString> {
        self(key)
    }
}

#[must_use]
pub fn distribution(env: &dyn Env) -> OsString {
    env.var_os(DISTRIBUTION_VAR)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| OsString::from(DEFAULT_DISTRIBUTION))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_distribution(value: Option<&'static str>) -> impl Env {
        move |key: &str| {
            if key == DISTRIBUTION_VAR {
                value.map(OsString::from)
            } else {
                None
            }
        }
    }

    #[test]
    fn unset() {
        assert_eq!("Ubuntu", distribution(&with_distribution(None)));
    }

    #[test]
    fn empty() {
        assert_eq!("Ubuntu", distribution(&with_distribution(Some(""))));
    }

    #[test]
    fn set() {
        assert_eq!("Debian", distribution(&with_distribution(Some("Debian"))));
        assert_eq!(
            " Ubuntu-22.04 ",
            distribution(&with_distribution(Some(" Ubuntu-22.04 ")))
        );
    }
}
