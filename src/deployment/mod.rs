//! `az deployment` command assembly
//!
//! One parameterized command covers the six scope and operation combinations.

use crate::azure::AzCli;
use crate::inputs::{split_arguments, DeploymentMode, Scope};
use crate::outputs::{parse_outputs, Outputs};
use crate::traits::Output;
use anyhow::Result;
use std::fmt;

/// What the deployment command does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Validate,
    WhatIf,
}

impl Operation {
    pub fn for_mode(mode: &DeploymentMode) -> Self {
        match mode {
            DeploymentMode::WhatIf => Operation::WhatIf,
            DeploymentMode::Validate => Operation::Validate,
            _ => Operation::Create,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Validate => "validate",
            Operation::WhatIf => "what-if",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Where the deployment goes, with the identifiers each scope needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    ResourceGroup {
        name: String,
        mode: String,
    },
    Subscription {
        region: String,
    },
    ManagementGroup {
        region: String,
        management_group_id: String,
    },
}

impl Target {
    pub fn scope(&self) -> Scope {
        match self {
            Target::ResourceGroup { .. } => Scope::ResourceGroup,
            Target::Subscription { .. } => Scope::Subscription,
            Target::ManagementGroup { .. } => Scope::ManagementGroup,
        }
    }
}

/// A single `az deployment <scope> <verb>` invocation
#[derive(Debug, Clone)]
pub struct DeploymentCommand {
    pub target: Target,
    pub operation: Operation,
    pub template: String,
    pub deployment_name: String,
    pub parameters: String,
    pub additional_arguments: String,
    pub fail_on_std_err: bool,
}

impl DeploymentCommand {
    /// Arguments passed to `az`
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "deployment".to_string(),
            self.target.scope().command_group().to_string(),
            self.operation.verb().to_string(),
        ];

        match &self.target {
            Target::ResourceGroup { name, mode } => {
                args.push("--resource-group".to_string());
                args.push(name.clone());

                if self.operation != Operation::WhatIf {
                    args.push("--mode".to_string());
                    args.push(mode.clone());
                }
            }
            Target::Subscription { region } => {
                args.push("--location".to_string());
                args.push(region.clone());
            }
            Target::ManagementGroup {
                region,
                management_group_id,
            } => {
                args.push("--location".to_string());
                args.push(region.clone());
                args.push("--management-group-id".to_string());
                args.push(management_group_id.clone());
            }
        }

        if self.template.starts_with("http") {
            args.push("--template-uri".to_string());
        } else {
            args.push("--template-file".to_string());
        }
        args.push(self.template.clone());

        if !self.deployment_name.is_empty() {
            args.push("--name".to_string());
            args.push(self.deployment_name.clone());
        }

        let parameters = split_arguments(&self.parameters);
        if !parameters.is_empty() {
            args.push("--parameters".to_string());
            args.extend(parameters);
        }

        args.extend(split_arguments(&self.additional_arguments));

        match self.operation {
            Operation::WhatIf => args.push("--no-prompt".to_string()),
            Operation::Create | Operation::Validate => {
                args.push("--output".to_string());
                args.push("json".to_string());
            }
        }

        args
    }

    /// Run the command and collect its outputs
    pub fn run(&self, az: &AzCli, output: &dyn Output) -> Result<Outputs> {
        let args = self.args();
        output.info(&az.command_line(&args));

        let stdout = az.run(&args, self.fail_on_std_err)?;

        if self.operation == Operation::WhatIf {
            output.raw(stdout.trim_end());
            return Ok(Outputs::new());
        }

        output.group("Deployment result");
        output.raw(stdout.trim_end());
        output.end_group();

        match parse_outputs(&stdout) {
            Ok(outputs) => Ok(outputs),
            Err(err) => {
                output.warning(&err.to_string());
                Ok(Outputs::new())
            }
        }
    }
}
