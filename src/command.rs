use std::{
    ffi::{OsStr, OsString},
    fmt::Debug,
    path::Path,
    process::Command,
};

/// Name of the executable that bridges into a WSL distribution
pub const LAUNCHER: &str = "wsl";

/// Launcher flag that selects the distribution
pub const DISTRIBUTION_FLAG: &str = "-d";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetCommand {
    Docker,
    DockerCompose,
}

impl TargetCommand {
    #[must_use]
    pub fn as_os_str(self) -> &'static OsStr {
        match self {
            TargetCommand::Docker => OsStr::new("docker"),
            TargetCommand::DockerCompose => OsStr::new("docker-compose"),
        }
    }
}

impl std::fmt::Display for TargetCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_os_str().display())
    }
}

/// Argument vector handed to the launcher: `-d <distribution> <target> <args...>`
#[must_use]
pub fn launcher_args<T: AsRef<OsStr> + Debug>(
    distribution: &OsStr,
    target: TargetCommand,
    args: &[T],
) -> Vec<OsString> {
    [
        OsStr::new(DISTRIBUTION_FLAG),
        distribution,
        target.as_os_str(),
    ]
    .into_iter()
    .map(OsString::from)
    .chain(args.iter().map(|arg| arg.as_ref().to_owned()))
    .collect()
}

#[must_use]
pub fn build_launcher_command<T: AsRef<OsStr> + Debug>(
    launcher: &Path,
    distribution: &OsStr,
    target: TargetCommand,
    args: &[T],
) -> Command {
    let mut command = Command::new(launcher);
    command.args(launcher_args(distribution, target, args));
    command
}
