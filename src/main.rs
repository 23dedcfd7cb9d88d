use clap::Parser;
use easy_sm::{
    cli::{get_log_level_from_verbose, run, Cli},
    error::default_error_handler,
};

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(cli.verbose))
        .init();

    if let Err(err) = run(cli) {
        default_error_handler(err);
    }
}
