//! OCI CLI command execution.
//!
//! Provides the process runner used by [`super::OciCli`].

use crate::config;
use crate::error::FetchError;
use colored::Colorize;
use std::path::Path;
use std::process::Command;

/// Markers the CLI prints on stderr when a resource does not exist.
const NOT_FOUND_MARKERS: [&str; 2] = ["\"status\": 404", "NotAuthorizedOrNotFound"];

/// Run `program` with `args` and return its stdout.
///
/// Arguments are passed to the process as-is, never through a shell.
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err(FetchError::NotFound)` - If the CLI reported a 404
/// * `Err` - If the command cannot start, fails, or produces too much output
pub fn run(program: &Path, args: &[String]) -> Result<String, FetchError> {
    let cmd = command_line(program, args);
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let output = Command::new(program).args(args).output().map_err(|source| {
        log::error!("Command execution failed: {}", source);
        FetchError::Spawn {
            command: cmd.clone(),
            source,
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::debug!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        if NOT_FOUND_MARKERS.iter().any(|m| stderr.contains(m)) {
            return Err(FetchError::NotFound { what: cmd });
        }
        return Err(FetchError::Command {
            command: cmd,
            status: output.status.to_string(),
            stderr,
        });
    }

    log::debug!("Success output.stdout.len(): {}", output.stdout.len());
    if output.stdout.len() > config::MAX_RESPONSE_BYTES {
        return Err(FetchError::TooLarge {
            command: cmd,
            len: output.stdout.len(),
        });
    }

    String::from_utf8(output.stdout).map_err(|_| FetchError::Utf8 { command: cmd })
}

/// Printable form of a command for logs and errors.
fn command_line(program: &Path, args: &[String]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
