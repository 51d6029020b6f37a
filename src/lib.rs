use log::debug;
use std::{
    ffi::{OsStr, OsString},
    io::{self, Write},
    path::PathBuf,
    process::{Command, ExitStatus, Stdio, exit},
};

mod command;
pub use command::{
    DISTRIBUTION_FLAG, LAUNCHER, TargetCommand, build_launcher_command, launcher_args,
};

mod env;
pub use env::{DEFAULT_DISTRIBUTION, DISTRIBUTION_VAR, Env, ProcessEnv, distribution};

mod error;
pub use error::Error;

/// Exit status of the forwarder when it fails itself, as opposed to the forwarded command failing
pub const FAILURE: i32 = 1;

#[must_use]
pub fn docker() -> Builder {
    Builder::new(TargetCommand::Docker)
}

#[must_use]
pub fn docker_compose() -> Builder {
    Builder::new(TargetCommand::DockerCompose)
}

pub struct Builder {
    target: TargetCommand,
    args: Vec<OsString>,
    env: Box<dyn Env>,
    stdin: Option<Stdio>,
    stdout: Option<Stdio>,
    stderr: Option<Stdio>,
}

impl Builder {
    #[must_use]
    pub fn new(target: TargetCommand) -> Self {
        Self {
            target,
            args: Vec::new(),
            env: Box::new(ProcessEnv),
            stdin: None,
            stdout: None,
            stderr: None,
        }
    }

    /// Pass `arg` to the target command
    #[must_use]
    pub fn arg<S>(mut self, arg: S) -> Builder
    where
        S: AsRef<OsStr>,
    {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    /// Pass `args` to the target command
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Builder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_owned()));
        self
    }

    /// Read `PATH` and `WSL_DISTRO` from `env` rather than from the process environment
    #[must_use]
    pub fn env<E>(mut self, env: E) -> Builder
    where
        E: Env + 'static,
    {
        self.env = Box::new(env);
        self
    }

    #[must_use]
    pub fn stdin<T: Into<Stdio>>(mut self, cfg: T) -> Builder {
        self.stdin = Some(cfg.into());
        self
    }

    #[must_use]
    pub fn stdout<T: Into<Stdio>>(mut self, cfg: T) -> Builder {
        self.stdout = Some(cfg.into());
        self
    }

    #[must_use]
    pub fn stderr<T: Into<Stdio>>(mut self, cfg: T) -> Builder {
        self.stderr = Some(cfg.into());
        self
    }

    /// Resolve the launcher and distribution and build the launcher command without spawning it.
    ///
    /// Streams default to those of the current process.
    pub fn build_command(self) -> Result<Command, Error> {
        let launcher = self.launcher()?;
        let distribution = distribution(&*self.env);
        debug!(
            "launcher: {}, distribution: {}",
            launcher.display(),
            distribution.display()
        );
        let mut command =
            build_launcher_command(&launcher, &distribution, self.target, &self.args);
        command.stdin(self.stdin.unwrap_or_else(Stdio::inherit));
        command.stdout(self.stdout.unwrap_or_else(Stdio::inherit));
        command.stderr(self.stderr.unwrap_or_else(Stdio::inherit));
        Ok(command)
    }

    fn launcher(&self) -> Result<PathBuf, Error> {
        let cwd = self
            .env
            .current_dir()
            .unwrap_or_else(|_| PathBuf::from("."));
        which::which_in(LAUNCHER, self.env.var_os("PATH"), cwd).map_err(Error::LauncherNotFound)
    }

    /// Run the target command in the distribution and wait for it.
    ///
    /// Returns the exit code the current process should exit with. A nonzero code from the
    /// target command is not an error.
    pub fn forward(self) -> Result<i32, Error> {
        env_logger::try_init().unwrap_or_default();
        let target = self.target;
        let mut command = self.build_command()?;
        debug!("{target}: {command:?}");
        let status = command.status().map_err(Error::ExecutionFailed)?;
        exit_code(status)
    }

    /// Like [`Builder::forward`], but report a failure to `stderr` and map it to [`FAILURE`]
    pub fn run<W: Write>(self, stderr: &mut W) -> i32 {
        match self.forward() {
            Ok(code) => code,
            Err(error) => {
                writeln!(stderr, "Error: {error}").unwrap_or_default();
                FAILURE
            }
        }
    }

    pub fn exit(self) -> ! {
        let code = self.run(&mut io::stderr());
        exit(code)
    }
}

fn exit_code(status: ExitStatus) -> Result<i32, Error> {
    status.code().ok_or_else(|| {
        Error::ExecutionFailed(io::Error::other(format!(
            "{LAUNCHER} terminated abnormally: {status}"
        )))
    })
}
