use crate::traits::{
    CommandExecutor, FileSystem, Output, RealCommandExecutor, RealFileSystem, WorkflowOutput,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

/// Values the runner hands to the action through its environment
#[derive(Debug, Clone, Default)]
pub struct RunnerEnvironment {
    /// Search path used to locate `az`
    pub path: Option<OsString>,
    /// File that receives step outputs
    pub github_output: Option<PathBuf>,
}

impl RunnerEnvironment {
    /// Capture the runner environment of the current process
    pub fn from_process() -> Self {
        Self {
            path: std::env::var_os("PATH"),
            github_output: std::env::var_os("GITHUB_OUTPUT")
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Application context that holds all dependencies for dependency injection
pub struct Context {
    pub fs: Arc<dyn FileSystem>,
    pub output: Arc<dyn Output>,
    pub command: Arc<dyn CommandExecutor>,
    pub env: RunnerEnvironment,
}

impl Context {
    /// Create a new context with real implementations (for production use)
    pub fn new() -> Self {
        Self {
            fs: Arc::new(RealFileSystem),
            output: Arc::new(WorkflowOutput),
            command: Arc::new(RealCommandExecutor::new()),
            env: RunnerEnvironment::from_process(),
        }
    }

    /// Create a test context with specific mock implementations
    #[cfg(test)]
    pub fn test_with(
        fs: Arc<dyn FileSystem>,
        output: Arc<dyn Output>,
        command: Arc<dyn CommandExecutor>,
        env: RunnerEnvironment,
    ) -> Self {
        Self {
            fs,
            output,
            command,
            env,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Context {
    fn clone(&self) -> Self {
        Self {
            fs: Arc::clone(&self.fs),
            output: Arc::clone(&self.output),
            command: Arc::clone(&self.command),
            env: self.env.clone(),
        }
    }
}
