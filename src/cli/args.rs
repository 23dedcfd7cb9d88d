use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use crate::constants::{verbosity, DEFAULT_DOCKER_TAG};

/// CLI arguments for easy_sm.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Docker tag applied to locally built images.
    #[arg(long = "docker-tag", global = true, default_value = DEFAULT_DOCKER_TAG)]
    pub docker_tag: String,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize an easy_sm app template interactively.
    Init,
    /// Commands for local operations: train, process, deploy and make.
    #[command(subcommand)]
    Local(LocalCommands),
}

#[derive(Subcommand, Debug)]
pub enum LocalCommands {
    /// Train ML model(s) locally.
    Train(AppArgs),
    /// Run an R file locally as a processing job.
    Process(ProcessArgs),
    /// Deploy ML model(s) locally at localhost:8080.
    Deploy(AppArgs),
    /// Build a make target defined in the module's processing/Makefile.
    Make(MakeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AppArgs {
    /// The app name whose json file will be referenced for setting up the command.
    #[arg(short = 'a', long = "app-name")]
    pub app_name: String,
}

#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    /// The name (not path) of the R file to run as a processing job.
    #[arg(short = 'f', long = "file")]
    pub file: String,

    #[command(flatten)]
    pub app: AppArgs,
}

#[derive(Args, Debug, Clone)]
pub struct MakeArgs {
    /// The name of the target that needs to be built.
    #[arg(short = 't', long = "target")]
    pub target: String,

    #[command(flatten)]
    pub app: AppArgs,
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
