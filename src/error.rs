use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file. Original error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Template installation would clobber an existing module directory.
    #[error("There is an easy_sm directory/module already: '{module_dir}'. Please rename it in order to use easy_sm.")]
    ModuleExistsError { module_dir: String },

    /// The referenced app's config file is absent from the working directory.
    #[error("This is not an easy_sm directory: {current_dir}")]
    AppNotFoundError { current_dir: String },

    /// Represents validation failures of expected directories and files
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("invalid choice: {input}. (choose from {valid})")]
    BadParameter { input: String, valid: String },

    #[error("aws cli is not configured! No credential profiles were found.")]
    NoProfilesError,

    /// When a wrapper script has executed but finished with an error.
    #[error("Command '{command}' failed with status: {status}")]
    ScriptFailure { status: ExitStatus, command: String, output: String },
}

/// Convenience type alias for Results with easy_sm's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
