pub mod args;
pub mod runner;

pub use args::{
    get_log_level_from_verbose, AppArgs, Cli, Commands, LocalCommands, MakeArgs,
    ProcessArgs,
};
pub use runner::run;
