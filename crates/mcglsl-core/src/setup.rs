//! Validator setup flow: select, download, install.

use std::path::{Path, PathBuf};

use reqwest::Client;
use thiserror::Error;
use tracing::info;

use crate::fetch::{self, FetchError};
use crate::install::{self, InstallError};
use crate::platform::{Platform, SelectionError};

/// Errors from the end-to-end setup flow.
#[derive(Error, Debug)]
pub enum SetupError {
    /// The platform selection was rejected before any network access.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Download failed.
    #[error("Download failed: {0}")]
    Fetch(#[from] FetchError),

    /// Extraction or relocation failed.
    #[error("Install failed: {0}")]
    Install(#[from] InstallError),
}

/// Validate `selection`, then download and install the validator for it.
///
/// See [`install_platform`] for the filesystem effects.
pub async fn fetch_and_install(
    client: &Client,
    selection: i64,
    base_url: &str,
    dest: &Path,
) -> Result<PathBuf, SetupError> {
    let platform = Platform::from_code(selection)?;
    install_platform(client, platform, base_url, dest).await
}

/// Download the release archive for `platform` from `base_url` and install
/// its validator binary into `dest`.
pub async fn install_platform(
    client: &Client,
    platform: Platform,
    base_url: &str,
    dest: &Path,
) -> Result<PathBuf, SetupError> {
    let url = platform.download_url(base_url);
    let archive = fetch::download_archive(client, &url).await?;
    let path = install::install_entry(&archive, &platform.entry_path(), dest)?;

    info!(%platform, path = %path.display(), "validator installed");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use std::io::{Cursor, Write};
    use tempfile::TempDir;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn release_zip(entry: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        writer.start_file(entry, options).unwrap();
        writer.write_all(b"#!/bin/sh\n").unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[tokio::test]
    async fn test_fetch_and_install_requests_only_platform_url() {
        let mut server = Server::new_async().await;
        let linux = server
            .mock("GET", "/glslang-master-linux-Release.zip")
            .with_status(200)
            .with_body(release_zip("bin/glslangValidator"))
            .expect(1)
            .create_async()
            .await;
        let others = server
            .mock("GET", mockito::Matcher::Regex("(windows|osx)".to_string()))
            .expect(0)
            .create_async()
            .await;

        let tmp = TempDir::new().unwrap();
        let client = Client::new();
        let path = fetch_and_install(&client, 1, &server.url(), tmp.path())
            .await
            .unwrap();

        assert_eq!(path.file_name().unwrap(), "glslangValidator");
        assert!(path.is_absolute());
        linux.assert_async().await;
        others.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_selection_never_touches_network() {
        let mut server = Server::new_async().await;
        let any = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let tmp = TempDir::new().unwrap();
        let client = Client::new();
        let err = fetch_and_install(&client, 3, &server.url(), tmp.path())
            .await
            .unwrap_err();

        assert!(matches!(err, SetupError::Selection(_)));
        assert_eq!(
            err.to_string(),
            "Invalid OS. Please only choose a value between 0 and 2"
        );
        any.assert_async().await;
    }

    #[tokio::test]
    async fn test_windows_archive_uses_exe_entry() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/glslang-master-windows-x64-Release.zip")
            .with_status(200)
            .with_body(release_zip("bin/glslangValidator.exe"))
            .create_async()
            .await;

        let tmp = TempDir::new().unwrap();
        let client = Client::new();
        let path = install_platform(&client, Platform::Windows, &server.url(), tmp.path())
            .await
            .unwrap();

        assert_eq!(path.file_name().unwrap(), "glslangValidator.exe");
    }

    #[tokio::test]
    async fn test_archive_without_validator_is_reported() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/glslang-master-osx-Release.zip")
            .with_status(200)
            .with_body(release_zip("share/readme.txt"))
            .create_async()
            .await;

        let tmp = TempDir::new().unwrap();
        let client = Client::new();
        let err = install_platform(&client, Platform::Osx, &server.url(), tmp.path())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SetupError::Install(InstallError::MissingEntry(ref p)) if p == "bin/glslangValidator"
        ));
    }
}
