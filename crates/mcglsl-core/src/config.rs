//! Defaults shared by the CLI and the core operations.

/// Base URL of the glslang "master-tot" release assets.
pub const DEFAULT_RELEASE_URL: &str =
    "https://github.com/KhronosGroup/glslang/releases/download/master-tot";

/// Environment variable that overrides [`DEFAULT_RELEASE_URL`].
pub const RELEASE_URL_ENV: &str = "MCGLSL_RELEASE_URL";

/// Shader listing read by the snippet formatter when no path is given.
pub const DEFAULT_SHADER_FILE: &str = "shaders.txt";

/// VS Code setting that points the extension at the validator binary.
pub const VSCODE_SETTING_KEY: &str = "mcglsl.glslangValidatorPath";

/// User Agent string for outgoing requests
pub const USER_AGENT: &str = concat!("mcglsl/", env!("CARGO_PKG_VERSION"));

/// Returns the release base URL, honouring `MCGLSL_RELEASE_URL`.
pub fn release_base_url() -> String {
    release_base_url_from(std::env::var(RELEASE_URL_ENV).ok())
}

/// Resolve the release base URL from an optional override.
///
/// Blank overrides fall back to [`DEFAULT_RELEASE_URL`]; trailing slashes
/// are stripped so asset names can be appended with a single `/`.
pub fn release_base_url_from(value: Option<String>) -> String {
    let base = value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_RELEASE_URL.to_string());
    normalize_base_url(&base)
}

/// Strip surrounding whitespace and trailing `/` from a base URL.
pub fn normalize_base_url(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

/// The settings line printed after a successful install.
///
/// Backslashes in Windows paths are escaped so the line stays valid JSON.
///
/// # Example
///
/// ```
/// use mcglsl_core::config::settings_line;
///
/// assert_eq!(
///     settings_line("/opt/glslangValidator"),
///     r#""mcglsl.glslangValidatorPath": "/opt/glslangValidator""#
/// );
/// ```
pub fn settings_line(validator_path: &str) -> String {
    let escaped = validator_path.replace('\\', "\\\\");
    format!("\"{VSCODE_SETTING_KEY}\": \"{escaped}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("http://127.0.0.1:1234/"),
            "http://127.0.0.1:1234"
        );
        assert_eq!(normalize_base_url("  https://x.test//  "), "https://x.test");
        assert_eq!(normalize_base_url(DEFAULT_RELEASE_URL), DEFAULT_RELEASE_URL);
    }

    #[test]
    fn test_release_base_url_from_override() {
        assert_eq!(
            release_base_url_from(Some("http://127.0.0.1:8080/".to_string())),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn test_release_base_url_falls_back_to_default() {
        assert_eq!(release_base_url_from(None), DEFAULT_RELEASE_URL);
        assert_eq!(
            release_base_url_from(Some("   ".to_string())),
            DEFAULT_RELEASE_URL
        );
    }

    #[test]
    fn test_settings_line_escapes_backslashes() {
        assert_eq!(
            settings_line(r"C:\tools\glslangValidator.exe"),
            r#""mcglsl.glslangValidatorPath": "C:\\tools\\glslangValidator.exe""#
        );
    }

    #[test]
    fn test_user_agent_prefix() {
        assert!(USER_AGENT.starts_with("mcglsl/"));
    }
}
