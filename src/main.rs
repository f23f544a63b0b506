mod azure;
mod commands;
mod context;
mod deployment;
mod error;
mod inputs;
mod output;
mod outputs;
mod traits;

use clap::Parser;
use commands::DeployCommand;
use context::Context;
use inputs::ActionInputs;
use outputs::publish_outputs;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "arm-deploy")]
#[command(about = "Deploy Azure Resource Manager templates, or preview them with what-if, through the Azure CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    inputs: ActionInputs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ctx = Context::new();

    let result = DeployCommand::execute(&ctx, &cli.inputs)
        .and_then(|deployment_outputs| publish_outputs(&ctx, &deployment_outputs));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ctx.output.error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
