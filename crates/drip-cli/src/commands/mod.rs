mod run;
mod schedule;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Schedule => schedule::execute(cli),
        Command::Run(args) => run::execute(cli, args).await,
    }
}
