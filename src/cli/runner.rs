use crate::cli::{Cli, Commands, LocalCommands};
use crate::error::Result;
use crate::init;
use crate::local::{self, RunContext};

/// Dispatches a parsed command line to the matching handler.
pub fn run(cli: Cli) -> Result<()> {
    let ctx = RunContext { docker_tag: cli.docker_tag };

    match cli.command {
        Commands::Init => init::run(),
        Commands::Local(command) => match command {
            LocalCommands::Train(args) => local::train(&ctx, &args.app_name),
            LocalCommands::Process(args) => {
                local::process(&ctx, &args.file, &args.app.app_name)
            }
            LocalCommands::Deploy(args) => local::deploy(&ctx, &args.app_name),
            LocalCommands::Make(args) => {
                local::make(&ctx, &args.target, &args.app.app_name)
            }
        },
    }
}
