//! Canned command responses.
//!
//! [`ReplayRunner`] answers `az` command lines from a table instead of
//! spawning processes, and remembers what it was asked.

use super::cli::{CliError, CommandRunner};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Reply {
    Output(String),
    Failure(String),
}

/// A [`CommandRunner`] backed by a map of command line to reply.
///
/// Commands without a registered reply fail as if `az` had exited with an
/// error.
#[derive(Debug, Default)]
pub struct ReplayRunner {
    replies: HashMap<String, Reply>,
    calls: RefCell<Vec<String>>,
}

impl ReplayRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `cmd` with `output` on stdout.
    pub fn with_output(mut self, cmd: impl Into<String>, output: impl Into<String>) -> Self {
        self.replies.insert(cmd.into(), Reply::Output(output.into()));
        self
    }

    /// Reply to `cmd` with a non-zero exit and `stderr`.
    pub fn with_failure(mut self, cmd: impl Into<String>, stderr: impl Into<String>) -> Self {
        self.replies.insert(cmd.into(), Reply::Failure(stderr.into()));
        self
    }

    /// Every command run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ReplayRunner {
    fn run(&self, cmd: &str) -> Result<String, CliError> {
        self.calls.borrow_mut().push(cmd.to_string());
        match self.replies.get(cmd) {
            Some(Reply::Output(output)) => Ok(output.clone()),
            Some(Reply::Failure(stderr)) => Err(CliError::Failed {
                cmd: cmd.to_string(),
                status: "exit status: 1".to_string(),
                stderr: stderr.clone(),
            }),
            None => {
                log::warn!("no canned reply for {cmd}");
                Err(CliError::Failed {
                    cmd: cmd.to_string(),
                    status: "exit status: 2".to_string(),
                    stderr: format!("no canned reply for '{cmd}'"),
                })
            }
        }
    }
}
