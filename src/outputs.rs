//! Deployment outputs
//!
//! `az deployment ... create -o json` prints the deployment resource. Its
//! `properties.outputs` object maps each output name to `{ "type", "value" }`.

use crate::context::Context;
use crate::error::DeployError;
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Output name to value
pub type Outputs = BTreeMap<String, String>;

#[derive(Debug, Deserialize)]
struct DeploymentResult {
    #[serde(default)]
    properties: Option<DeploymentProperties>,
}

#[derive(Debug, Deserialize)]
struct DeploymentProperties {
    #[serde(default)]
    outputs: Option<HashMap<String, OutputValue>>,
}

#[derive(Debug, Deserialize)]
struct OutputValue {
    #[serde(default)]
    value: serde_json::Value,
}

/// Parse the JSON printed by a deployment into Outputs
///
/// Blank output, or a result without `properties.outputs`, yields no outputs.
pub fn parse_outputs(stdout: &str) -> Result<Outputs, DeployError> {
    if stdout.trim().is_empty() {
        return Ok(Outputs::new());
    }

    let result: DeploymentResult = serde_json::from_str(stdout)?;

    let outputs = result
        .properties
        .and_then(|properties| properties.outputs)
        .unwrap_or_default()
        .into_iter()
        .map(|(name, output)| (name, render_value(output.value)))
        .collect();

    Ok(outputs)
}

fn render_value(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Publish outputs to the step and list them in the log
pub fn publish_outputs(ctx: &Context, outputs: &Outputs) -> Result<()> {
    if outputs.is_empty() {
        return Ok(());
    }

    ctx.output.group("Deployment outputs");

    for (name, value) in outputs {
        ctx.output.key_value(name, value);

        if let Some(file) = &ctx.env.github_output {
            ctx.fs
                .append(file, &format_output_entry(name, value))
                .with_context(|| format!("Failed to set output '{}'", name))?;
        }
    }

    ctx.output.end_group();

    if ctx.env.github_output.is_none() {
        ctx.output
            .warning("GITHUB_OUTPUT is not set, outputs were only written to the log");
    }

    Ok(())
}

/// Entry in the multi-line `GITHUB_OUTPUT` file format
fn format_output_entry(name: &str, value: &str) -> String {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
    format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
}
