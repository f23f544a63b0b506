use std::fmt;

/// Error types for deployment runs
#[derive(Debug)]
pub enum DeployError {
    /// `az` was not found on the search path
    AzNotFound,

    /// Scope input is not one of the supported values
    InvalidScope(String),

    /// A required input was left empty
    MissingInput(&'static str),

    /// `az` exited with a non-zero status
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// `az` wrote to stderr while failOnStdErr is enabled
    StdErr { command: String, stderr: String },

    /// Deployment result could not be parsed
    OutputParse(String),
}

impl fmt::Display for DeployError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployError::AzNotFound => {
                write!(
                    f,
                    "Unable to locate executable file: az. Please verify either the file path exists or the file can be found within a directory specified by the PATH environment variable."
                )
            }
            DeployError::InvalidScope(scope) => {
                write!(
                    f,
                    "Invalid scope '{}'. Valid values are: 'resourcegroup', 'managementgroup', 'subscription'",
                    scope
                )
            }
            DeployError::MissingInput(name) => write!(f, "{} must be set.", name),
            DeployError::CommandFailed {
                command,
                exit_code,
                stderr,
            } => {
                write!(f, "Command '{}' failed", command)?;

                if let Some(code) = exit_code {
                    write!(f, " (exit code {})", code)?;
                }

                if !stderr.trim().is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }

                Ok(())
            }
            DeployError::StdErr { command, stderr } => {
                write!(
                    f,
                    "Command '{}' wrote to stderr and failOnStdErr is enabled: {}",
                    command,
                    stderr.trim()
                )
            }
            DeployError::OutputParse(msg) => {
                write!(f, "Failed to parse deployment outputs: {}", msg)
            }
        }
    }
}

impl std::error::Error for DeployError {}

impl From<serde_json::Error> for DeployError {
    fn from(err: serde_json::Error) -> Self {
        DeployError::OutputParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_scope_lists_valid_values() {
        let message = DeployError::InvalidScope("tenant".to_string()).to_string();
        assert!(message.contains("'tenant'"));
        assert!(message.contains("'resourcegroup', 'managementgroup', 'subscription'"));
    }

    #[test]
    fn test_command_failed_display() {
        let err = DeployError::CommandFailed {
            command: "az deployment group create".to_string(),
            exit_code: Some(1),
            stderr: "ERROR: InvalidTemplate\n".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Command 'az deployment group create' failed (exit code 1): ERROR: InvalidTemplate"
        );
    }

    #[test]
    fn test_command_failed_without_code_or_stderr() {
        let err = DeployError::CommandFailed {
            command: "az account set".to_string(),
            exit_code: None,
            stderr: String::new(),
        };

        assert_eq!(err.to_string(), "Command 'az account set' failed");
    }

    #[test]
    fn test_missing_input_display() {
        assert_eq!(
            DeployError::MissingInput("Region").to_string(),
            "Region must be set."
        );
    }
}
