use std::process::{Command, ExitStatus, Output, Stdio};

use crate::error::AppError;

/// Width of the `XY ` status prefix on each `git status --porcelain` line
const PORCELAIN_PREFIX_WIDTH: usize = 3;

/// Operations gcm needs from the version-control binary.
///
/// [`Git`] is the only implementation that spawns a process; tests swap in a
/// scripted double.
pub trait VersionControl {
    /// Runs the binary with exactly `args`, inheriting stdin/stdout/stderr
    fn execute(&self, args: &[&str]) -> Result<(), AppError>;

    /// Lists paths reported by `status --porcelain`, in reported order
    fn changed_paths(&self) -> Result<Vec<String>, AppError>;
}

/// Production gateway that shells out to `git`
#[derive(Debug, Clone)]
pub struct Git {
    program: String,
}

impl Default for Git {
    fn default() -> Self {
        Self::new()
    }
}

impl Git {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Uses `program` instead of `git` found on `PATH`
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command_line(&self, args: &[&str]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl VersionControl for Git {
    fn execute(&self, args: &[&str]) -> Result<(), AppError> {
        let command = self.command_line(args);
        tracing::debug!(%command, "running git");

        let status: ExitStatus = Command::new(&self.program)
            .args(args)
            .status()
            .map_err(|err| AppError::ExternalProcess {
                command: command.clone(),
                reason: err.to_string(),
            })?;

        if !status.success() {
            return Err(AppError::ExternalProcess {
                command,
                reason: status.to_string(),
            });
        }

        Ok(())
    }

    fn changed_paths(&self) -> Result<Vec<String>, AppError> {
        let args = ["status", "--porcelain"];
        let command = self.command_line(&args);
        tracing::debug!(%command, "querying changed paths");

        let git_command_output: Output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|err| AppError::ExternalProcess {
                command: command.clone(),
                reason: err.to_string(),
            })?;

        if !git_command_output.status.success() {
            let stderr = String::from_utf8_lossy(&git_command_output.stderr);
            let reason = match stderr.trim() {
                "" => git_command_output.status.to_string(),
                message => message.to_string(),
            };
            return Err(AppError::ExternalProcess { command, reason });
        }

        let paths = parse_porcelain(&String::from_utf8_lossy(&git_command_output.stdout));
        tracing::debug!(count = paths.len(), "changed paths found");
        Ok(paths)
    }
}

/// Extracts paths from `git status --porcelain` output.
///
/// Each line carries a two-character status code and a separator before the
/// path. Lines too short to hold a path are skipped.
pub fn parse_porcelain(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.get(PORCELAIN_PREFIX_WIDTH..))
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect()
}
