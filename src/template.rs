//! The fixed project template and its installer.
//!
//! The template tree ships embedded in the binary so installation works from
//! any working directory without a companion data directory.

use std::path::Path;

use crate::config::{config_file_path, ConfigManager};
use crate::constants::{MODULE_NAME, PACKAGE_MARKER};
use crate::error::{Error, Result};
use crate::ioutils;

/// One file of the embedded template tree.
pub struct TemplateEntry {
    /// Path relative to the output directory.
    pub relative_path: &'static str,
    pub content: &'static str,
    /// Whether the materialized file needs the executable bit.
    pub executable: bool,
}

macro_rules! entry {
    ($path:literal) => {
        TemplateEntry {
            relative_path: $path,
            content: include_str!(concat!("../template/", $path)),
            executable: false,
        }
    };
    ($path:literal, executable) => {
        TemplateEntry {
            relative_path: $path,
            content: include_str!(concat!("../template/", $path)),
            executable: true,
        }
    };
}

/// Every file of the template, in install order.
pub const TEMPLATE_ENTRIES: &[TemplateEntry] = &[
    entry!("easy_sm_base/Dockerfile"),
    entry!("easy_sm_base/__init__.py"),
    entry!("easy_sm_base/training/train", executable),
    entry!("easy_sm_base/training/train.R"),
    entry!("easy_sm_base/processing/processing.R"),
    entry!("easy_sm_base/processing/Makefile"),
    entry!("easy_sm_base/prediction/serve", executable),
    entry!("easy_sm_base/prediction/serve.R"),
    entry!("easy_sm_base/local_test/train_local.sh", executable),
    entry!("easy_sm_base/local_test/process_local.sh", executable),
    entry!("easy_sm_base/local_test/deploy_local.sh", executable),
    entry!("easy_sm_base/local_test/make_local.sh", executable),
    entry!("easy_sm_base/local_test/test_dir/input/data/training/.gitkeep"),
    entry!("easy_sm_base/local_test/test_dir/model/.gitkeep"),
    entry!("easy_sm_base/local_test/test_dir/output/.gitkeep"),
];

/// Installs the template into `output_dir` and persists the app's config to
/// `{app_name}.json` in the working directory.
///
/// Fails before any write if `output_dir` already contains an `easy_sm_base`
/// module. Not transactional: a failure mid-copy leaves a partially populated
/// directory behind.
pub fn install(
    app_name: &str,
    aws_profile: &str,
    aws_region: &str,
    output_dir: &Path,
    renv_dir: &str,
) -> Result<()> {
    install_with_config_path(
        app_name,
        aws_profile,
        aws_region,
        output_dir,
        renv_dir,
        &config_file_path(app_name),
    )
}

/// Same as [`install`] but with an explicit config file location.
pub fn install_with_config_path(
    app_name: &str,
    aws_profile: &str,
    aws_region: &str,
    output_dir: &Path,
    renv_dir: &str,
    config_path: &Path,
) -> Result<()> {
    let module_dir = output_dir.join(MODULE_NAME);
    if module_dir.exists() {
        return Err(Error::ModuleExistsError {
            module_dir: module_dir.display().to_string(),
        });
    }

    ioutils::create_dir_all(output_dir)?;
    ioutils::touch(output_dir.join(PACKAGE_MARKER))?;

    log::debug!("Materializing template into {}", output_dir.display());
    for entry in TEMPLATE_ENTRIES {
        let dest = output_dir.join(entry.relative_path);
        ioutils::write_file(entry.content, &dest)?;
        if entry.executable {
            ioutils::make_executable(&dest)?;
        }
    }

    let manager = ConfigManager::new(config_path);
    let mut config = manager.get_config()?;
    config.image_name = app_name.to_string();
    config.aws_profile = aws_profile.to_string();
    config.aws_region = aws_region.to_string();
    config.easy_sm_module_dir = output_dir.display().to_string();
    config.renv_dir = renv_dir.to_string();
    manager.set_config(&config)
}
