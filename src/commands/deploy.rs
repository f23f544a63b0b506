use crate::azure::{locate_az, AzCli};
use crate::context::Context;
use crate::deployment::{DeploymentCommand, Operation, Target};
use crate::error::DeployError;
use crate::inputs::{ActionInputs, DeploymentMode, Scope};
use crate::outputs::Outputs;
use anyhow::{Context as _, Result};

/// Runs a deployment or what-if preview from the action inputs
pub struct DeployCommand;

impl DeployCommand {
    /// Execute the action and return the deployment outputs
    pub fn execute(ctx: &Context, inputs: &ActionInputs) -> Result<Outputs> {
        let az_path = locate_az(ctx.fs.as_ref(), ctx.env.path.as_deref())?;
        let az = AzCli::new(az_path, ctx.command.clone(), ctx.output.clone());
        ctx.output.debug(&format!("Using az at {}", az.path().display()));

        let scope = inputs.scope()?;
        let mode = inputs.deployment_mode();
        let fail_on_std_err = inputs.fail_on_std_err();

        let command = match mode {
            DeploymentMode::WhatIf => Self::what_if_command(scope, inputs, fail_on_std_err)?,
            _ => Self::deploy_command(ctx, scope, &mode, inputs, fail_on_std_err)?,
        };

        let subscription_id = inputs.subscription_id.trim();
        if scope != Scope::ManagementGroup && !subscription_id.is_empty() {
            ctx.output.info("Changing subscription context...");
            az.set_subscription(subscription_id)
                .context("Failed to change subscription context")?;
        }

        ctx.output.info(&format!(
            "Running {} at {} scope...",
            command.operation,
            scope
        ));

        let outputs = command.run(&az, ctx.output.as_ref()).with_context(|| {
            format!(
                "Deployment {} at {} scope failed",
                command.operation, scope
            )
        })?;

        ctx.output.success(&format!(
            "Deployment {} at {} scope completed",
            command.operation, scope
        ));

        Ok(outputs)
    }

    fn deploy_command(
        ctx: &Context,
        scope: Scope,
        mode: &DeploymentMode,
        inputs: &ActionInputs,
        fail_on_std_err: bool,
    ) -> Result<DeploymentCommand> {
        if let DeploymentMode::Other(value) = mode {
            ctx.output.warning(&format!(
                "Unknown deployment mode '{}', deploying incrementally",
                value
            ));
        } else if scope != Scope::ResourceGroup && mode.requires_resource_group() {
            ctx.output.warning(&format!(
                "Deployment mode '{}' is not supported for {} scoped deployments, it will be ignored",
                inputs.deployment_mode.trim(),
                scope
            ));
        }

        let target = match scope {
            Scope::ResourceGroup => Self::resource_group_target(inputs, mode.arm_mode())?,
            Scope::Subscription => Self::subscription_target(inputs)?,
            Scope::ManagementGroup => Self::management_group_target(inputs)?,
        };

        Self::command(target, Operation::for_mode(mode), inputs, fail_on_std_err)
    }

    fn what_if_command(
        scope: Scope,
        inputs: &ActionInputs,
        fail_on_std_err: bool,
    ) -> Result<DeploymentCommand> {
        let target = match scope {
            Scope::ResourceGroup => Self::resource_group_target(inputs, "Incremental")?,
            Scope::Subscription => Self::subscription_target(inputs)?,
            Scope::ManagementGroup => Self::management_group_target(inputs)?,
        };

        Self::command(target, Operation::WhatIf, inputs, fail_on_std_err)
    }

    fn command(
        target: Target,
        operation: Operation,
        inputs: &ActionInputs,
        fail_on_std_err: bool,
    ) -> Result<DeploymentCommand> {
        Ok(DeploymentCommand {
            target,
            operation,
            template: required(&inputs.template, "Template")?,
            deployment_name: inputs.deployment_name.trim().to_string(),
            parameters: inputs.parameters.clone(),
            additional_arguments: inputs.additional_arguments.clone(),
            fail_on_std_err,
        })
    }

    fn resource_group_target(inputs: &ActionInputs, mode: &str) -> Result<Target> {
        Ok(Target::ResourceGroup {
            name: required(&inputs.resource_group_name, "ResourceGroup name")?,
            mode: mode.to_string(),
        })
    }

    fn subscription_target(inputs: &ActionInputs) -> Result<Target> {
        Ok(Target::Subscription {
            region: required(&inputs.region, "Region")?,
        })
    }

    fn management_group_target(inputs: &ActionInputs) -> Result<Target> {
        Ok(Target::ManagementGroup {
            region: required(&inputs.region, "Region")?,
            management_group_id: required(&inputs.management_group_id, "Management Group Id")?,
        })
    }
}

fn required(value: &str, name: &'static str) -> Result<String, DeployError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(DeployError::MissingInput(name));
    }

    Ok(value.to_string())
}
