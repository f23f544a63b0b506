//! Action inputs
//!
//! The runner passes each `with:` value as an `INPUT_<NAME>` environment
//! variable, upper-cased. Every input can also be given as a flag for local
//! runs.

use crate::error::DeployError;
use clap::Args;
use std::fmt;
use std::str::FromStr;

/// Raw action inputs, exactly as received
#[derive(Args, Debug, Clone, Default)]
pub struct ActionInputs {
    /// Deployment scope: resourcegroup, subscription or managementgroup
    #[arg(long, env = "INPUT_SCOPE", default_value = "")]
    pub scope: String,

    /// Subscription to switch to before deploying
    #[arg(long, env = "INPUT_SUBSCRIPTIONID", default_value = "")]
    pub subscription_id: String,

    /// Deployment location for subscription and management group scope
    #[arg(long, env = "INPUT_REGION", default_value = "")]
    pub region: String,

    /// Target resource group
    #[arg(long, env = "INPUT_RESOURCEGROUPNAME", default_value = "")]
    pub resource_group_name: String,

    /// Local path or URL of the ARM/Bicep template
    #[arg(long, env = "INPUT_TEMPLATE", default_value = "")]
    pub template: String,

    /// incremental, complete, validate or what-if
    #[arg(long, env = "INPUT_DEPLOYMENTMODE", default_value = "")]
    pub deployment_mode: String,

    /// Name of the deployment
    #[arg(long, env = "INPUT_DEPLOYMENTNAME", default_value = "")]
    pub deployment_name: String,

    /// Template parameters, as accepted by `az deployment ... --parameters`
    #[arg(long, env = "INPUT_PARAMETERS", default_value = "", allow_hyphen_values = true)]
    pub parameters: String,

    /// Target management group
    #[arg(long, env = "INPUT_MANAGEMENTGROUPID", default_value = "")]
    pub management_group_id: String,

    /// Fail when az writes to stderr
    #[arg(long, env = "INPUT_FAILONSTDERR", default_value = "")]
    pub fail_on_std_err: String,

    /// Extra arguments appended to the deployment command
    #[arg(long, env = "INPUT_ADDITIONALARGUMENTS", default_value = "", allow_hyphen_values = true)]
    pub additional_arguments: String,
}

impl ActionInputs {
    /// Resolve the scope input, `resourcegroup` when empty
    pub fn scope(&self) -> Result<Scope, DeployError> {
        let scope = self.scope.trim();

        if scope.is_empty() {
            return Ok(Scope::ResourceGroup);
        }

        scope.parse()
    }

    pub fn deployment_mode(&self) -> DeploymentMode {
        DeploymentMode::from_input(&self.deployment_mode)
    }

    /// failOnStdErr, `true` unless explicitly set to a false boolean
    pub fn fail_on_std_err(&self) -> bool {
        parse_boolean_input(&self.fail_on_std_err).unwrap_or(true)
    }
}

/// ARM deployment target level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    ResourceGroup,
    Subscription,
    ManagementGroup,
}

impl Scope {
    /// Name of the `az deployment` command group for this scope
    pub fn command_group(&self) -> &'static str {
        match self {
            Scope::ResourceGroup => "group",
            Scope::Subscription => "sub",
            Scope::ManagementGroup => "mg",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::ResourceGroup => "resourcegroup",
            Scope::Subscription => "subscription",
            Scope::ManagementGroup => "managementgroup",
        }
    }
}

impl FromStr for Scope {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "resourcegroup" => Ok(Scope::ResourceGroup),
            "subscription" => Ok(Scope::Subscription),
            "managementgroup" => Ok(Scope::ManagementGroup),
            other => Err(DeployError::InvalidScope(other.to_string())),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of the deploymentMode input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentMode {
    /// Empty input, deploys incrementally
    Default,
    Incremental,
    Complete,
    Validate,
    WhatIf,
    /// Anything else, deployed incrementally
    Other(String),
}

impl DeploymentMode {
    /// Parse the input case-insensitively
    pub fn from_input(value: &str) -> Self {
        let value = value.trim().to_lowercase();

        match value.as_str() {
            "" => DeploymentMode::Default,
            "incremental" => DeploymentMode::Incremental,
            "complete" => DeploymentMode::Complete,
            "validate" => DeploymentMode::Validate,
            "what-if" => DeploymentMode::WhatIf,
            _ => DeploymentMode::Other(value),
        }
    }

    /// Value for `--mode` of a resource group deployment
    pub fn arm_mode(&self) -> &str {
        match self {
            DeploymentMode::Complete => "Complete",
            _ => "Incremental",
        }
    }

    /// Whether the mode only makes sense at resource group scope
    pub fn requires_resource_group(&self) -> bool {
        matches!(self, DeploymentMode::Complete)
    }
}

/// Parse a boolean input the way the Actions toolkit does (YAML 1.2 core schema)
pub fn parse_boolean_input(value: &str) -> Option<bool> {
    match value.trim() {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

/// Split an argument string into tokens
///
/// Whitespace separates tokens, double quotes group them, and a backslash
/// escapes a double quote inside quotes. An unterminated quote runs to the
/// end of the string.
pub fn split_arguments(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escaped = false;
    let mut has_token = false;

    for c in input.chars() {
        if escaped {
            if c != '"' {
                current.push('\\');
            }
            current.push(c);
            escaped = false;
            continue;
        }

        match c {
            '\\' if in_quotes => escaped = true,
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if escaped {
        current.push('\\');
    }

    if has_token {
        args.push(current);
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_defaults_to_resource_group() {
        let inputs = ActionInputs::default();
        assert_eq!(inputs.scope().unwrap(), Scope::ResourceGroup);
    }

    #[test]
    fn test_scope_parsing() {
        assert_eq!("resourcegroup".parse::<Scope>().unwrap(), Scope::ResourceGroup);
        assert_eq!("subscription".parse::<Scope>().unwrap(), Scope::Subscription);
        assert_eq!(
            " managementgroup ".parse::<Scope>().unwrap(),
            Scope::ManagementGroup
        );
    }

    #[test]
    fn test_invalid_scope() {
        let err = "tenant".parse::<Scope>().unwrap_err();
        assert!(matches!(err, DeployError::InvalidScope(ref s) if s == "tenant"));

        let inputs = ActionInputs {
            scope: "ResourceGroup".to_string(),
            ..Default::default()
        };
        assert!(inputs.scope().is_err());
    }

    #[test]
    fn test_scope_command_group() {
        assert_eq!(Scope::ResourceGroup.command_group(), "group");
        assert_eq!(Scope::Subscription.command_group(), "sub");
        assert_eq!(Scope::ManagementGroup.command_group(), "mg");
    }

    #[test]
    fn test_deployment_mode_is_case_insensitive() {
        assert_eq!(DeploymentMode::from_input("What-If"), DeploymentMode::WhatIf);
        assert_eq!(DeploymentMode::from_input("Complete"), DeploymentMode::Complete);
        assert_eq!(DeploymentMode::from_input("VALIDATE"), DeploymentMode::Validate);
        assert_eq!(DeploymentMode::from_input("incremental"), DeploymentMode::Incremental);
        assert_eq!(DeploymentMode::from_input(""), DeploymentMode::Default);
        assert_eq!(
            DeploymentMode::from_input("Rollback"),
            DeploymentMode::Other("rollback".to_string())
        );
    }

    #[test]
    fn test_arm_mode() {
        assert_eq!(DeploymentMode::Default.arm_mode(), "Incremental");
        assert_eq!(DeploymentMode::Validate.arm_mode(), "Incremental");
        assert_eq!(DeploymentMode::Complete.arm_mode(), "Complete");
        assert_eq!(
            DeploymentMode::Other("rollback".to_string()).arm_mode(),
            "Incremental"
        );
        assert!(DeploymentMode::Complete.requires_resource_group());
        assert!(!DeploymentMode::Other("rollback".to_string()).requires_resource_group());
        assert!(!DeploymentMode::Validate.requires_resource_group());
    }

    #[test]
    fn test_parse_boolean_input() {
        assert_eq!(parse_boolean_input("true"), Some(true));
        assert_eq!(parse_boolean_input("TRUE"), Some(true));
        assert_eq!(parse_boolean_input("False"), Some(false));
        assert_eq!(parse_boolean_input("yes"), None);
        assert_eq!(parse_boolean_input(""), None);
    }

    #[test]
    fn test_fail_on_std_err_defaults_to_true() {
        let mut inputs = ActionInputs::default();
        assert!(inputs.fail_on_std_err());

        inputs.fail_on_std_err = "false".to_string();
        assert!(!inputs.fail_on_std_err());

        inputs.fail_on_std_err = "nope".to_string();
        assert!(inputs.fail_on_std_err());
    }

    #[test]
    fn test_split_arguments_plain() {
        assert_eq!(
            split_arguments("  storageName=st01   location=westeurope "),
            vec!["storageName=st01", "location=westeurope"]
        );
        assert!(split_arguments("   ").is_empty());
    }

    #[test]
    fn test_split_arguments_quotes() {
        assert_eq!(
            split_arguments(r#"@params.json tags="{\"env\": \"dev\"}" name="my app""#),
            vec!["@params.json", r#"tags={"env": "dev"}"#, "name=my app"]
        );
        assert_eq!(split_arguments(r#"empty="""#), vec!["empty="]);
        assert_eq!(split_arguments(r#""""#), vec![""]);
    }

    #[test]
    fn test_split_arguments_backslash_outside_quotes() {
        assert_eq!(
            split_arguments(r"--template-file C:\templates\main.bicep"),
            vec!["--template-file", r"C:\templates\main.bicep"]
        );
    }

    #[test]
    fn test_split_arguments_unterminated_quote() {
        assert_eq!(split_arguments(r#"a "b c"#), vec!["a", "b c"]);
    }
}
