use drip_core::build_schedule;

use crate::cli::Cli;
use crate::error::CliError;
use crate::output;
use crate::plan::builtin_plan;

pub fn execute(cli: &Cli) -> Result<(), CliError> {
    let plan = builtin_plan()?;
    let schedule = build_schedule(&plan);
    output::render_schedule(&schedule, cli.format, cli.pretty)
}
