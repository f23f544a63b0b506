use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Trait for executing system commands, allowing for mocking in tests
pub trait CommandExecutor: Send + Sync {
    /// Execute a program with arguments and capture its output
    fn execute(&self, program: &Path, args: &[&str]) -> Result<Output>;
}

/// Real command executor using std::process::Command
pub struct RealCommandExecutor;

impl RealCommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealCommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for RealCommandExecutor {
    fn execute(&self, program: &Path, args: &[&str]) -> Result<Output> {
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("Failed to execute {}", program.display()))?;

        Ok(output)
    }
}

/// Mock command executor for testing
///
/// Every invocation is recorded. Canned results are matched against the
/// argument line (arguments joined by spaces) by prefix and consumed once.
#[cfg(test)]
pub struct MockCommandExecutor {
    outputs: std::sync::Mutex<Vec<MockCommandResult>>,
    calls: std::sync::Mutex<Vec<RecordedCommand>>,
}

#[cfg(test)]
#[derive(Clone, Debug)]
pub struct MockCommandResult {
    /// Prefix of the argument line this result answers
    pub args_prefix: String,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[cfg(test)]
impl MockCommandResult {
    pub fn success(args_prefix: &str, stdout: &str) -> Self {
        Self {
            args_prefix: args_prefix.to_string(),
            exit_code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedCommand {
    pub program: std::path::PathBuf,
    pub args: Vec<String>,
}

#[cfg(test)]
impl RecordedCommand {
    pub fn line(&self) -> String {
        self.args.join(" ")
    }
}

#[cfg(test)]
impl MockCommandExecutor {
    pub fn new() -> Self {
        Self {
            outputs: std::sync::Mutex::new(Vec::new()),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn with_outputs(outputs: Vec<MockCommandResult>) -> Self {
        Self {
            outputs: std::sync::Mutex::new(outputs),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn add_output(&self, output: MockCommandResult) {
        let mut outputs = self.outputs.lock().unwrap();
        outputs.push(output);
    }

    /// All invocations in the order they happened
    pub fn calls(&self) -> Vec<RecordedCommand> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of invocations whose argument line starts with `prefix`
    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.line().starts_with(prefix))
            .count()
    }
}

#[cfg(test)]
impl Default for MockCommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl CommandExecutor for MockCommandExecutor {
    fn execute(&self, program: &Path, args: &[&str]) -> Result<Output> {
        let call = RecordedCommand {
            program: program.to_path_buf(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        };
        let line = call.line();
        self.calls.lock().unwrap().push(call);

        let mut outputs = self.outputs.lock().unwrap();

        if let Some(result) = outputs.iter().position(|r| line.starts_with(&r.args_prefix)) {
            let mock_result = outputs.remove(result);
            return Ok(Output {
                status: create_exit_status(mock_result.exit_code),
                stdout: mock_result.stdout.into_bytes(),
                stderr: mock_result.stderr.into_bytes(),
            });
        }

        // Default: successful empty output
        Ok(Output {
            status: create_exit_status(0),
            stdout: Vec::new(),
            stderr: Vec::new(),
        })
    }
}

#[cfg(test)]
fn create_exit_status(code: i32) -> std::process::ExitStatus {
    // ExitStatus can't be constructed directly
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        // Raw wait status carries the exit code in the second byte
        std::process::ExitStatus::from_raw(code << 8)
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::ExitStatusExt;
        std::process::ExitStatus::from_raw(code as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_mock_executor_returns_configured_output() {
        let executor = MockCommandExecutor::with_outputs(vec![MockCommandResult::success(
            "account show",
            "success",
        )]);

        let output = executor
            .execute(&PathBuf::from("az"), &["account", "show", "-o", "json"])
            .unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout), "success");
    }

    #[test]
    fn test_mock_executor_default_success() {
        let executor = MockCommandExecutor::new();
        let output = executor.execute(&PathBuf::from("az"), &["unknown"]).unwrap();
        assert!(output.status.success());
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_mock_executor_exit_code() {
        let executor = MockCommandExecutor::with_outputs(vec![MockCommandResult {
            args_prefix: "deployment".to_string(),
            exit_code: 3,
            stdout: String::new(),
            stderr: "boom".to_string(),
        }]);

        let output = executor
            .execute(&PathBuf::from("az"), &["deployment", "group", "create"])
            .unwrap();
        assert!(!output.status.success());
        assert_eq!(output.status.code(), Some(3));
    }

    #[test]
    fn test_mock_executor_records_calls() {
        let executor = MockCommandExecutor::new();
        executor.execute(&PathBuf::from("/usr/bin/az"), &["account", "set"]).unwrap();
        executor.execute(&PathBuf::from("/usr/bin/az"), &["deployment", "sub"]).unwrap();

        let calls = executor.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].program, PathBuf::from("/usr/bin/az"));
        assert_eq!(calls[1].line(), "deployment sub");
        assert_eq!(executor.count_calls("account set"), 1);
    }

    #[test]
    fn test_mock_executor_consumes_results_once() {
        let executor = MockCommandExecutor::with_outputs(vec![MockCommandResult::success(
            "version",
            "2.60.0",
        )]);

        let first = executor.execute(&PathBuf::from("az"), &["version"]).unwrap();
        let second = executor.execute(&PathBuf::from("az"), &["version"]).unwrap();
        assert_eq!(String::from_utf8_lossy(&first.stdout), "2.60.0");
        assert!(second.stdout.is_empty());
    }
}
