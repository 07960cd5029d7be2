//! Running external tools.
//!
//! Tools are spawned directly (no shell), with stdin closed, both output
//! streams captured, and a hard timeout. A child still running at the
//! timeout is killed.

use std::{ffi::OsStr, path::Path, process::Stdio, time::Duration};

use quickimpl_config::GeneratorConfig;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::{AssistError, GenerationCommand, Result};

/// Captured output of one external tool run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    stdout: String,
    stderr: Option<String>,
    exit_error: Option<String>,
}

impl GenerationResult {
    /// Text written to stdout.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Non-empty stderr output, if any.
    pub fn stderr(&self) -> Option<&str> {
        self.stderr.as_deref()
    }

    /// Why the process failed to run or finish cleanly, if it did.
    pub fn exit_error(&self) -> Option<&str> {
        self.exit_error.as_deref()
    }

    /// True when the run exited cleanly and wrote nothing to stderr.
    pub fn is_success(&self) -> bool {
        self.exit_error.is_none() && self.stderr.is_none()
    }

    /// The generated stub text.
    ///
    /// # Errors
    ///
    /// Returns [`AssistError::Generator`] if the process failed or wrote to
    /// stderr; stdout is never trusted in that case.
    pub fn into_stub(self) -> Result<String> {
        let message = match (self.exit_error, self.stderr) {
            (None, None) => return Ok(self.stdout),
            (Some(exit), Some(stderr)) => format!("{}: {}", exit, stderr),
            (Some(exit), None) => exit,
            (None, Some(stderr)) => stderr,
        };
        Err(AssistError::Generator { message })
    }
}

/// Runs the stub generator.
#[derive(Debug, Clone)]
pub struct GeneratorInvoker {
    tool: String,
    args: Vec<String>,
    timeout: Duration,
}

impl GeneratorInvoker {
    pub fn new(tool: impl Into<String>, timeout: Duration) -> Self {
        Self {
            tool: tool.into(),
            args: Vec::new(),
            timeout,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            tool: config.tool.clone(),
            args: config.args.clone(),
            timeout: config.timeout(),
        }
    }

    /// Arguments passed before the receiver and interface.
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// The full command line, as a user would type it.
    pub fn command_line(&self, command: &GenerationCommand) -> String {
        let mut line = self.tool.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        format!("{} {}", line, command)
    }

    /// Run the generator for `command` inside `working_dir`.
    pub async fn invoke(
        &self,
        command: &GenerationCommand,
        working_dir: &Path,
    ) -> GenerationResult {
        let args = self
            .args
            .iter()
            .map(String::as_str)
            .chain(command.args());
        run_tool(&self.tool, args, working_dir, self.timeout).await
    }
}

/// Spawn `program` with `args` in `cwd` and wait at most `timeout` for it.
pub(crate) async fn run_tool<I, S>(
    program: &str,
    args: I,
    cwd: &Path,
    timeout: Duration,
) -> GenerationResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    debug!(program, cwd = %cwd.display(), "spawning tool");

    let child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn();

    let child = match child {
        Ok(child) => child,
        Err(e) => {
            warn!(program, error = %e, "failed to spawn tool");
            return failed(format!("failed to run '{}': {}", program, e));
        }
    };

    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => return failed(format!("failed to wait for '{}': {}", program, e)),
        Err(_) => {
            warn!(program, ?timeout, "tool timed out");
            return failed(format!(
                "'{}' timed out after {}s",
                program,
                timeout.as_secs_f64()
            ));
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let exit_error = (!output.status.success())
        .then(|| format!("'{}' exited with {}", program, output.status));

    debug!(program, status = %output.status, "tool finished");

    GenerationResult {
        stdout,
        stderr: (!stderr.is_empty()).then_some(stderr),
        exit_error,
    }
}

fn failed(message: String) -> GenerationResult {
    GenerationResult {
        stdout: String::new(),
        stderr: None,
        exit_error: Some(message),
    }
}
