//! Constants used throughout the easy_sm application

/// Name of the generated module directory inside an app's output directory
pub const MODULE_NAME: &str = "easy_sm_base";

/// Package marker file created at the root of the output directory
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Subdirectory of the module holding the local wrapper scripts
pub const LOCAL_TEST_DIR: &str = "local_test";

/// Working-state directory mounted into local containers
pub const TEST_DIR: &str = "test_dir";

/// Subdirectory of the module holding processing jobs and the Makefile
pub const PROCESSING_DIR: &str = "processing";

/// Makefile consumed by `local make`
pub const MAKEFILE: &str = "Makefile";

/// Wrapper script names, one per local subcommand
pub const TRAIN_SCRIPT: &str = "train_local.sh";
pub const PROCESS_SCRIPT: &str = "process_local.sh";
pub const DEPLOY_SCRIPT: &str = "deploy_local.sh";
pub const MAKE_SCRIPT: &str = "make_local.sh";

/// Default AWS region offered during `init`
pub const DEFAULT_REGION: &str = "eu-west-1";

/// Docker tag used when none is given on the command line
pub const DEFAULT_DOCKER_TAG: &str = "latest";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
