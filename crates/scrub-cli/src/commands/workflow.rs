//! `scrub workflow` - api-ready, form-ready and debug.

use scrub_core::{application::Operation, domain::Workflow};

use crate::{cli::WorkflowArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: WorkflowArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let workflow = Workflow::from(args.workflow);
    super::run_document(&args.document, Operation::Workflow(workflow), &config, &output)
}
