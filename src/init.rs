//! Interactive `init` flow: collect app settings and install the template.

use std::path::Path;

use dialoguer::{Confirm, Input};

use crate::aws;
use crate::constants::DEFAULT_REGION;
use crate::error::{Error, Result};
use crate::template;

/// Runs the full prompt sequence and installs the template.
pub fn run() -> Result<()> {
    let app_name = ask_for_app_name()?;

    let is_new_project = Confirm::new()
        .with_prompt("Are you starting a new project?")
        .default(true)
        .interact()?;

    let root_dir = if is_new_project { None } else { Some(ask_for_root_dir()?) };

    let (aws_profile, aws_region) = ask_for_aws_details()?;

    let renv_dir = ask_for_renv_dir()?;

    let output_dir = root_dir.unwrap_or_else(|| app_name.clone());
    template::install(
        &app_name,
        &aws_profile,
        &aws_region,
        Path::new(&output_dir),
        &renv_dir,
    )?;

    println!("\neasy_sm module is created! ヽ(´▽`)/");
    Ok(())
}

/// Maps a 1-indexed menu input to a 0-based profile index.
///
/// Empty input is not handled here; the prompt supplies `"1"` as its default.
pub fn select_profile_index(input: &str, profile_count: usize) -> Result<usize> {
    let valid = (1..=profile_count)
        .map(|pos| pos.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let choice: usize = input.trim().parse().map_err(|_| Error::BadParameter {
        input: input.to_string(),
        valid: valid.clone(),
    })?;

    if choice < 1 || choice > profile_count {
        return Err(Error::BadParameter { input: input.to_string(), valid });
    }
    Ok(choice - 1)
}

/// Checks the advisory naming rule from the prompt copy: alphanumeric and `-`.
pub fn is_valid_app_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn ask_for_app_name() -> Result<String> {
    let name: String = Input::new()
        .with_prompt(
            "Type in a name for your SageMaker app (only alphanumeric characters and - are allowed)",
        )
        .validate_with(|input: &String| {
            if is_valid_app_name(input) {
                Ok(())
            } else {
                Err("only alphanumeric characters and - are allowed")
            }
        })
        .interact_text()?;
    Ok(name)
}

fn ask_for_root_dir() -> Result<String> {
    let dir: String = Input::new()
        .with_prompt("Type in the directory where your code lives. Example: src")
        .interact_text()?;
    Ok(dir.trim_end_matches('/').to_string())
}

fn ask_for_renv_dir() -> Result<String> {
    let dir: String = Input::new()
        .with_prompt("Type in the path to renv directory")
        .interact_text()?;
    Ok(dir.trim_end_matches('/').to_string())
}

fn ask_for_aws_details() -> Result<(String, String)> {
    let available_profiles = aws::available_profiles();
    if available_profiles.is_empty() {
        return Err(Error::NoProfilesError);
    }

    println!("Select AWS profile:");
    for (pos, profile) in available_profiles.iter().enumerate() {
        println!("{} - {}", pos + 1, profile);
    }

    let valid = (1..=available_profiles.len())
        .map(|pos| pos.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let raw: String = Input::new()
        .with_prompt(format!("Choose from {valid}"))
        .default("1".to_string())
        .interact_text()?;
    let chosen_index = select_profile_index(&raw, available_profiles.len())?;
    let chosen_profile = available_profiles[chosen_index].clone();

    let chosen_region: String = Input::new()
        .with_prompt("Type in your preferred AWS region name")
        .default(DEFAULT_REGION.to_string())
        .interact_text()?;

    Ok((chosen_profile, chosen_region))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_selects_first_profile() {
        assert_eq!(select_profile_index("1", 3).unwrap(), 0);
    }

    #[test]
    fn maps_menu_position_to_zero_based_index() {
        assert_eq!(select_profile_index("3", 3).unwrap(), 2);
    }

    #[test]
    fn rejects_out_of_range_choice() {
        let err = select_profile_index("4", 3).unwrap_err();
        match err {
            Error::BadParameter { input, valid } => {
                assert_eq!(input, "4");
                assert_eq!(valid, "1, 2, 3");
            }
            other => panic!("expected BadParameter, got {other}"),
        }
    }

    #[test]
    fn rejects_zero() {
        assert!(matches!(
            select_profile_index("0", 3),
            Err(Error::BadParameter { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(matches!(
            select_profile_index("first", 3),
            Err(Error::BadParameter { .. })
        ));
    }

    #[test]
    fn app_name_rule_allows_alphanumeric_and_dash() {
        assert!(is_valid_app_name("my-app-01"));
        assert!(!is_valid_app_name(""));
        assert!(!is_valid_app_name("my app"));
        assert!(!is_valid_app_name("my_app"));
    }
}
