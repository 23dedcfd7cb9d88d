//! Local train/process/deploy/make subcommands.
//!
//! Each subcommand loads the app's config, validates the generated module
//! layout, and hands off to the matching wrapper script. Script failures are
//! reported in full (return code, command line, combined output) and then
//! propagated so the CLI exits non-zero.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::{config_file_path, AppConfig, ConfigManager};
use crate::constants::{
    DEPLOY_SCRIPT, LOCAL_TEST_DIR, MAKEFILE, MAKE_SCRIPT, MODULE_NAME,
    PROCESSING_DIR, PROCESS_SCRIPT, TEST_DIR, TRAIN_SCRIPT,
};
use crate::error::{Error, Result};

/// Process-wide values shared by every local subcommand.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Docker tag applied to locally built images.
    pub docker_tag: String,
}

/// Resolved locations inside the generated module.
#[derive(Debug)]
struct ModulePaths {
    /// `<easy_sm_module_dir>/easy_sm_base`
    module_dir: PathBuf,
    /// Absolute path of `local_test/test_dir`, validated to exist.
    test_dir: PathBuf,
}

/// Trains ML model(s) locally.
pub fn train(ctx: &RunContext, app_name: &str) -> Result<()> {
    println!("Started local training...\n");
    let config = load_app_config(app_name)?;
    let paths = resolve_module(&config)?;

    let script = paths.module_dir.join(LOCAL_TEST_DIR).join(TRAIN_SCRIPT);
    let test_dir = paths.test_dir.display().to_string();
    run_script(&script, &[&test_dir, &ctx.docker_tag, &config.image_name])?;

    println!("Local training completed successfully!");
    Ok(())
}

/// Runs an R file from `processing/` locally as a processing job.
pub fn process(ctx: &RunContext, file: &str, app_name: &str) -> Result<()> {
    println!("Started local processing job...\n");
    let config = load_app_config(app_name)?;
    let paths = resolve_module(&config)?;

    let job_file_path = paths.module_dir.join(PROCESSING_DIR).join(file);
    if !job_file_path.is_file() {
        return Err(Error::ValidationError(format!(
            "Processing file does not exist: {}",
            job_file_path.display()
        )));
    }

    let script = paths.module_dir.join(LOCAL_TEST_DIR).join(PROCESS_SCRIPT);
    let test_dir = paths.test_dir.display().to_string();
    run_script(
        &script,
        &[
            &test_dir,
            &ctx.docker_tag,
            &config.image_name,
            file,
            &config.aws_profile,
            &config.aws_region,
        ],
    )?;

    println!("Local processing completed successfully!");
    Ok(())
}

/// Serves trained model(s) locally.
pub fn deploy(ctx: &RunContext, app_name: &str) -> Result<()> {
    let config = load_app_config(app_name)?;
    let paths = resolve_module(&config)?;

    let script = paths.module_dir.join(LOCAL_TEST_DIR).join(DEPLOY_SCRIPT);
    let test_dir = paths.test_dir.display().to_string();

    println!("Started local deployment at localhost:8080 ...\n");
    run_script(&script, &[&test_dir, &ctx.docker_tag, &config.image_name])?;
    Ok(())
}

/// Builds a target of `processing/Makefile` locally.
pub fn make(ctx: &RunContext, target: &str, app_name: &str) -> Result<()> {
    let config = load_app_config(app_name)?;
    let paths = resolve_module(&config)?;

    let makefile_path = paths.module_dir.join(PROCESSING_DIR).join(MAKEFILE);
    if !makefile_path.is_file() {
        return Err(Error::ValidationError(format!(
            "Makefile does not exist: {}",
            makefile_path.display()
        )));
    }

    let script = paths.module_dir.join(LOCAL_TEST_DIR).join(MAKE_SCRIPT);
    let test_dir = paths.test_dir.display().to_string();
    run_script(
        &script,
        &[
            &test_dir,
            &ctx.docker_tag,
            &config.image_name,
            target,
            &config.aws_profile,
            &config.aws_region,
        ],
    )?;

    println!("{target} built successfully!");
    Ok(())
}

/// Loads the config for `app_name` from the working directory.
fn load_app_config(app_name: &str) -> Result<AppConfig> {
    let config_file_path = config_file_path(app_name);
    if !config_file_path.is_file() {
        let current_dir = std::env::current_dir().unwrap_or_default();
        return Err(Error::AppNotFoundError {
            current_dir: current_dir.display().to_string(),
        });
    }
    ConfigManager::new(&config_file_path).get_config()
}

/// Resolves the module layout and validates the local test directory.
fn resolve_module(config: &AppConfig) -> Result<ModulePaths> {
    let module_dir = Path::new(&config.easy_sm_module_dir).join(MODULE_NAME);
    let test_dir = module_dir.join(LOCAL_TEST_DIR).join(TEST_DIR);
    if !test_dir.is_dir() {
        return Err(Error::ValidationError(format!(
            "This is not an easy_sm directory, expected: {}",
            test_dir.display()
        )));
    }
    let test_dir = std::path::absolute(&test_dir)?;
    Ok(ModulePaths { module_dir, test_dir })
}

/// Runs a wrapper script to completion, stderr merged into stdout.
///
/// On success returns the combined output. On a non-zero exit the failure is
/// printed in full and returned as [`Error::ScriptFailure`].
fn run_script(script: &Path, args: &[&str]) -> Result<String> {
    log::debug!("Running {} {:?}", script.display(), args);
    let output = Command::new(script).args(args).output()?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if output.status.success() {
        return Ok(combined);
    }

    let command = std::iter::once(script.display().to_string())
        .chain(args.iter().map(|a| a.to_string()))
        .collect::<Vec<_>>()
        .join(" ");
    let return_code = output
        .status
        .code()
        .map(|code| code.to_string())
        .unwrap_or_else(|| output.status.to_string());

    println!("Error occurred while running the command:");
    println!("Return code: {return_code}");
    println!("Command: {command}");
    println!("Error output:");
    println!("{combined}");

    Err(Error::ScriptFailure { status: output.status, command, output: combined })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_module_dir(dir: &Path) -> AppConfig {
        AppConfig {
            image_name: "demo".to_string(),
            aws_profile: "default".to_string(),
            aws_region: "us-east-1".to_string(),
            easy_sm_module_dir: dir.display().to_string(),
            renv_dir: "env".to_string(),
        }
    }

    #[test]
    fn missing_test_dir_names_the_expected_path() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let config = config_with_module_dir(tmp_dir.path());

        let err = resolve_module(&config).unwrap_err();
        let expected = tmp_dir
            .path()
            .join(MODULE_NAME)
            .join(LOCAL_TEST_DIR)
            .join(TEST_DIR);
        match err {
            Error::ValidationError(msg) => {
                assert!(msg.contains(&expected.display().to_string()), "{msg}");
            }
            other => panic!("expected ValidationError, got {other}"),
        }
    }

    #[test]
    fn resolves_absolute_test_dir() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let test_dir = tmp_dir
            .path()
            .join(MODULE_NAME)
            .join(LOCAL_TEST_DIR)
            .join(TEST_DIR);
        std::fs::create_dir_all(&test_dir).unwrap();

        let config = config_with_module_dir(tmp_dir.path());
        let paths = resolve_module(&config).unwrap();
        assert!(paths.test_dir.is_absolute());
        assert!(paths.test_dir.ends_with("local_test/test_dir"));
    }
}
