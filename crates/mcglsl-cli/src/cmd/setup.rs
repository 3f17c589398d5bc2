//! Validator setup command
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use mcglsl_core::config::{normalize_base_url, release_base_url, settings_line};
use mcglsl_core::setup::install_platform;
use mcglsl_core::{Platform, SelectionError};
use reqwest::Client;
use tracing::debug;

use crate::ui::Output;

/// Interactive platform menu, one line per selection code.
pub fn platform_menu() -> String {
    let options: String = Platform::ALL
        .iter()
        .map(|platform| format!(" - {}: {platform}\n", platform.code()))
        .collect();
    format!("Choose your OS:\n{options}> ")
}

/// Resolve the platform from `--os` or, when absent, from the prompt.
fn select_platform(os: Option<&str>, output: &Output) -> Result<Result<Platform, SelectionError>> {
    let answer = match os {
        Some(code) => code.to_string(),
        None => output
            .prompt(&platform_menu())
            .context("Failed to read platform selection")?,
    };
    Ok(Platform::parse_selection(&answer))
}

/// Download glslangValidator and install it into `dest`.
///
/// An invalid platform selection is reported on stderr and yields exit
/// status 1 before any network access.
pub async fn setup(
    os: Option<String>,
    dest: Option<PathBuf>,
    release_url: Option<String>,
) -> Result<ExitCode> {
    let output = Output::new();
    debug!(host = ?Platform::current(), "host platform");

    let platform = match select_platform(os.as_deref(), &output)? {
        Ok(platform) => platform,
        Err(err) => {
            output.error(&err.to_string());
            return Ok(ExitCode::from(1));
        }
    };

    let dest = match dest {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    std::fs::create_dir_all(&dest)
        .with_context(|| format!("Failed to create {}", dest.display()))?;

    let base_url = match release_url {
        Some(url) => normalize_base_url(&url),
        None => release_base_url(),
    };
    debug!(%platform, url = %platform.download_url(&base_url), "selected release archive");

    output.info("Downloading...");

    let client = Client::new();
    let path = install_platform(&client, platform, &base_url, &dest)
        .await
        .with_context(|| format!("Failed to install {}", platform.binary_name()))?;

    output.success(&format!(
        "{} downloaded. Add this line to your VSCode settings:",
        platform.binary_name()
    ));
    println!("{}", output.highlight(&settings_line(&path.display().to_string())));

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_menu_lists_codes_in_order() {
        assert_eq!(
            platform_menu(),
            "Choose your OS:\n - 0: Windows\n - 1: Linux\n - 2: OSX\n> "
        );
    }

    #[test]
    fn test_os_flag_goes_through_selection_parser() {
        let output = Output::new();
        assert_eq!(
            select_platform(Some("2"), &output).unwrap(),
            Ok(Platform::Osx)
        );
        assert!(matches!(
            select_platform(Some("linux"), &output).unwrap(),
            Err(SelectionError::InvalidSelection(_))
        ));
        assert!(matches!(
            select_platform(Some("99999999999999999999"), &output).unwrap(),
            Err(SelectionError::InvalidSelection(_))
        ));
    }
}
