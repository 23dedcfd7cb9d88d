//! Discovery of locally configured AWS credential profiles.
//!
//! Profiles come from the standard aws-cli files: every section of
//! `~/.aws/credentials`, plus `[profile <name>]` sections of `~/.aws/config`.
//! Nothing here talks to AWS; the names are only offered in the `init` menu
//! and stored verbatim in the app config.

use std::path::Path;

use configparser::ini::Ini;

const CONFIG_PROFILE_PREFIX: &str = "profile ";

/// Names of locally configured credential profiles, in file order and without
/// duplicates. Missing or unreadable files contribute nothing.
pub fn available_profiles() -> Vec<String> {
    match dirs::home_dir() {
        Some(home) => profiles_from_aws_dir(&home.join(".aws")),
        None => Vec::new(),
    }
}

/// Profile enumeration over an explicit aws-cli directory.
pub fn profiles_from_aws_dir(aws_dir: &Path) -> Vec<String> {
    let mut profiles = Vec::new();

    for section in ini_sections(&aws_dir.join("credentials")) {
        push_unique(&mut profiles, section);
    }
    for section in ini_sections(&aws_dir.join("config")) {
        let name = section
            .strip_prefix(CONFIG_PROFILE_PREFIX)
            .unwrap_or(&section)
            .to_string();
        push_unique(&mut profiles, name);
    }

    profiles
}

fn ini_sections(path: &Path) -> Vec<String> {
    if !path.is_file() {
        return Vec::new();
    }
    // Case-sensitive parse so profile names keep their spelling.
    let mut ini = Ini::new_cs();
    match ini.load(path) {
        Ok(_) => ini.sections(),
        Err(err) => {
            log::warn!("Skipping malformed aws file {}: {err}", path.display());
            Vec::new()
        }
    }
}

fn push_unique(profiles: &mut Vec<String>, name: String) {
    if !profiles.contains(&name) {
        profiles.push(name);
    }
}
