//! Checks on action.yml
//!
//! The action runs the binary as a composite step on the runner itself, so
//! it shares the `az` login of earlier steps. Composite steps get no
//! `INPUT_*` variables for free; each one has to be mapped by hand.

const ACTION_YML: &str = include_str!("../action.yml");

const INPUTS: &[&str] = &[
    "scope",
    "subscriptionId",
    "region",
    "resourceGroupName",
    "template",
    "deploymentMode",
    "deploymentName",
    "parameters",
    "managementGroupId",
    "failOnStdErr",
    "additionalArguments",
];

#[test]
fn test_action_runs_on_the_runner_host() {
    assert!(ACTION_YML.contains("using: 'composite'"));
    assert!(!ACTION_YML.contains("using: 'docker'"));
    assert!(!ACTION_YML.contains("Dockerfile"));
}

#[test]
fn test_every_input_is_passed_to_the_binary() {
    for input in INPUTS {
        let declared = format!("\n  {}:\n", input);
        assert!(ACTION_YML.contains(&declared), "input {} not declared", input);

        let mapped = format!(
            "INPUT_{}: ${{{{ inputs.{} }}}}",
            input.to_uppercase(),
            input
        );
        assert!(ACTION_YML.contains(&mapped), "input {} not mapped", input);
    }
}

#[test]
fn test_deploy_step_publishes_outputs() {
    assert!(ACTION_YML.contains("id: deploy"));
    assert!(ACTION_YML.contains("${{ toJSON(steps.deploy.outputs) }}"));
    assert!(ACTION_YML.contains("target/release/arm-deploy"));
}

#[test]
fn test_build_honors_committed_lockfile() {
    assert!(ACTION_YML.contains("Cargo.lock"));
    assert!(ACTION_YML.contains("--locked"));
    assert!(ACTION_YML.contains("cargo build --release"));
}
