// Copyright 2025 Kore Ledger, SL
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::Component;
use crate::Error;

use tracing::warn;

use std::{
    path::PathBuf,
    process::{Command, Stdio},
};

const TARGET_COMMAND: &str = "DeviceId-Component-Command";

/// Runs a command and returns its standard output.
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, command: &str) -> Result<String, Error>;
}

/// Executes commands through `<shell> -c <command>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommandExecutor {
    shell: PathBuf,
}

impl ShellCommandExecutor {
    pub fn new(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn sh() -> Self {
        Self::new("/bin/sh")
    }

    pub fn bash() -> Self {
        Self::new("/bin/bash")
    }
}

impl Default for ShellCommandExecutor {
    fn default() -> Self {
        Self::sh()
    }
}

impl CommandExecutor for ShellCommandExecutor {
    fn execute(&self, command: &str) -> Result<String, Error> {
        // `output` waits for the child, so it is always reaped.
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| {
                Error::CommandExecutionFailed(format!(
                    "Can not spawn {}: {}",
                    self.shell.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            return Err(Error::CommandExecutionFailed(format!(
                "`{}` exited with {}",
                command, output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
    }
}

/// Component whose value is the output of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandComponent<E = ShellCommandExecutor> {
    command: String,
    executor: E,
}

impl CommandComponent {
    /// Command run through `/bin/sh`.
    pub fn new(command: impl Into<String>) -> Self {
        Self::with_executor(command, ShellCommandExecutor::sh())
    }
}

impl<E: CommandExecutor> CommandComponent<E> {
    pub fn with_executor(command: impl Into<String>, executor: E) -> Self {
        Self {
            command: command.into(),
            executor,
        }
    }
}

impl<E: CommandExecutor> Component for CommandComponent<E> {
    fn value(&self) -> Option<String> {
        match self.executor.execute(&self.command) {
            Ok(output) => Some(output),
            Err(e) => {
                warn!(TARGET_COMMAND, "{}", e);
                None
            }
        }
    }
}
