//! Blocking shell execution with inherited stdio.

use std::process::{Command, Stdio};

/// Run a command line through the host shell, blocking until it finishes.
///
/// stdin/stdout/stderr are inherited from the parent so interactive
/// children behave normally. Returns the child's exit code, or -1 when
/// it was killed by a signal or could not be spawned.
pub fn run_shell(command: &str) -> i32 {
    #[cfg(windows)]
    let mut cmd = {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    };

    #[cfg(not(windows))]
    let mut cmd = {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    };

    let status = cmd
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();

    match status {
        Ok(s) => s.code().unwrap_or(-1),
        Err(_) => -1,
    }
}
