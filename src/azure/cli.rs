//! Azure CLI command execution.
//!
//! Provides utilities for running Azure CLI commands and parsing their output.

use colored::Colorize;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::process::Command;
use std::string::FromUtf8Error;
use std::sync::OnceLock;
use thiserror::Error;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Failure of a single external command, or of parsing what it printed.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("empty command")]
    EmptyCommand,
    #[error("failed to execute '{cmd}': {source}")]
    Spawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{cmd}' exited with {status}: {stderr}")]
    Failed {
        cmd: String,
        status: String,
        stderr: String,
    },
    #[error("response too large: {len} bytes for command '{cmd}'")]
    TooLarge { cmd: String, len: usize },
    #[error("invalid UTF-8 from '{cmd}': {source}")]
    Utf8 {
        cmd: String,
        #[source]
        source: FromUtf8Error,
    },
    #[error("error parsing {what}: path={path} error={message}")]
    Parse {
        what: &'static str,
        path: String,
        message: String,
    },
}

/// Something that can run an `az` command line and hand back its stdout.
pub trait CommandRunner {
    fn run(&self, cmd: &str) -> Result<String, CliError>;
}

/// Runs commands as real subprocesses.
#[derive(Debug, Clone)]
pub struct AzCli {
    max_output_bytes: usize,
}

impl AzCli {
    pub fn new(max_output_bytes: usize) -> Self {
        AzCli { max_output_bytes }
    }
}

impl CommandRunner for AzCli {
    fn run(&self, cmd: &str) -> Result<String, CliError> {
        run(cmd, self.max_output_bytes)
    }
}

/// Run a shell command and return its stdout.
///
/// The command string is split on spaces, with quoted substrings preserved.
/// stdout and stderr are captured separately.
///
/// # Arguments
/// * `cmd` - The command string to execute
/// * `max_output_bytes` - Largest stdout accepted
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err` - If the command cannot start, exits non-zero (stderr is kept),
///   prints more than `max_output_bytes`, or prints invalid UTF-8
pub fn run(cmd: &str, max_output_bytes: usize) -> Result<String, CliError> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd);
    log::trace!("split cmds={:?}", cmds);

    let (program, args) = cmds.split_first().ok_or(CliError::EmptyCommand)?;
    if program.is_empty() {
        return Err(CliError::EmptyCommand);
    }

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| {
            log::error!("Command execution failed: {}", source);
            CliError::Spawn {
                cmd: cmd.to_string(),
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
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(CliError::Failed {
            cmd: cmd.to_string(),
            status: output.status.to_string(),
            stderr,
        });
    }

    log::debug!("Success output.stdout.len(): {}", output.stdout.len());
    if output.stdout.len() > max_output_bytes {
        return Err(CliError::TooLarge {
            cmd: cmd.to_string(),
            len: output.stdout.len(),
        });
    }

    String::from_utf8(output.stdout).map_err(|source| CliError::Utf8 {
        cmd: cmd.to_string(),
        source,
    })
}

/// Deserialize command output, reporting the JSON path that failed.
pub fn parse_json<T: DeserializeOwned>(output: &str, what: &'static str) -> Result<T, CliError> {
    let mut deserializer = serde_json::Deserializer::from_str(output);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::debug!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", output);
        CliError::Parse {
            what,
            path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    })
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}
