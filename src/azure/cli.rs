use crate::error::DeployError;
use crate::traits::{CommandExecutor, Output};
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Runs `az` subcommands and checks their result
pub struct AzCli {
    path: PathBuf,
    executor: Arc<dyn CommandExecutor>,
    output: Arc<dyn Output>,
}

impl AzCli {
    pub fn new(path: PathBuf, executor: Arc<dyn CommandExecutor>, output: Arc<dyn Output>) -> Self {
        Self {
            path,
            executor,
            output,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `az` with the given arguments and return its stdout
    ///
    /// A non-zero exit is always an error. Output on stderr is an error only
    /// when `fail_on_stderr` is set. Warning lines are always reported as
    /// warnings; other stderr lines are logged only when the run succeeds.
    pub fn run(&self, args: &[String], fail_on_stderr: bool) -> Result<String> {
        let command = self.command_line(args);
        self.output.debug(&format!("Running: {}", command));

        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let result = self.executor.execute(&self.path, &arg_refs)?;

        let stdout = String::from_utf8_lossy(&result.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&result.stderr).into_owned();

        let failed = !result.status.success() || (fail_on_stderr && !stderr.trim().is_empty());

        // Other lines of a failed command travel in the returned error
        for line in stderr.lines().filter(|line| !line.trim().is_empty()) {
            if line.trim_start().to_lowercase().starts_with("warning") {
                self.output.warning(line);
            } else if !failed {
                self.output.raw(line);
            }
        }

        if !result.status.success() {
            return Err(DeployError::CommandFailed {
                command,
                exit_code: result.status.code(),
                stderr,
            }
            .into());
        }

        if fail_on_stderr && !stderr.trim().is_empty() {
            return Err(DeployError::StdErr { command, stderr }.into());
        }

        Ok(stdout)
    }

    /// Switch the active subscription with `az account set`
    pub fn set_subscription(&self, subscription_id: &str) -> Result<()> {
        let args = vec![
            "account".to_string(),
            "set".to_string(),
            "--subscription".to_string(),
            subscription_id.to_string(),
        ];

        self.run(&args, false)?;
        Ok(())
    }

    /// Printable command line, quoting arguments that contain whitespace
    pub fn command_line(&self, args: &[String]) -> String {
        let mut line = String::from("az");

        for arg in args {
            line.push(' ');

            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                line.push('"');
                line.push_str(&arg.replace('"', "\\\""));
                line.push('"');
            } else {
                line.push_str(arg);
            }
        }

        line
    }
}
