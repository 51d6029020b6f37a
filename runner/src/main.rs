//! Stand-in for `wsl` used by the tests.
//!
//! Prints the arguments it received, optionally echoes stdin, and exits with `RUNNER_EXIT_CODE`.

use anyhow::{Context, Result};
use std::{
    env::{args_os, var},
    io::{Write, copy, stdin, stdout},
    process::exit,
};

fn main() -> Result<()> {
    let args = args_os().skip(1).collect::<Vec<_>>();
    let mut stdout = stdout().lock();
    writeln!(stdout, "{args:?}")?;
    if enabled("RUNNER_ECHO_STDIN") {
        copy(&mut stdin().lock(), &mut stdout)?;
    }
    stdout.flush()?;
    let code = match var("RUNNER_EXIT_CODE") {
        Ok(value) => value
            .parse::<i32>()
            .with_context(|| format!("failed to parse `RUNNER_EXIT_CODE`: {value:?}"))?,
        Err(_) => 0,
    };
    exit(code);
}

fn enabled(key: &str) -> bool {
    var(key).is_ok_and(|value| value != "0")
}
