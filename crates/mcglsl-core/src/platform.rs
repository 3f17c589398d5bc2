//! Target platform selection for the validator download.
//!
//! glslang publishes one prebuilt archive per platform. The user picks a
//! platform by its numeric selection code, which is validated here before
//! any network access happens.

use thiserror::Error;

/// Errors produced while parsing a platform selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The selection was not one of the known platform codes.
    #[error("Invalid OS. Please only choose a value between 0 and 2")]
    InvalidSelection(String),
}

/// Host platform of a glslang release archive.
///
/// # Example
///
/// ```
/// use mcglsl_core::Platform;
///
/// let linux = Platform::parse_selection("1\n").unwrap();
/// assert_eq!(linux, Platform::Linux);
/// assert_eq!(linux.entry_path(), "bin/glslangValidator");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// 64-bit Windows
    Windows = 0,
    /// Linux
    Linux = 1,
    /// macOS
    Osx = 2,
}

impl Platform {
    /// Every platform, in selection-code order.
    pub const ALL: [Self; 3] = [Self::Windows, Self::Linux, Self::Osx];

    /// Base name of the validator binary inside the archive.
    pub const TOOL_NAME: &'static str = "glslangValidator";

    /// Look up a platform by selection code.
    pub fn from_code(code: i64) -> Result<Self, SelectionError> {
        match code {
            0 => Ok(Self::Windows),
            1 => Ok(Self::Linux),
            2 => Ok(Self::Osx),
            other => Err(SelectionError::InvalidSelection(other.to_string())),
        }
    }

    /// Parse a raw line of user input (e.g. from a prompt) as a selection.
    pub fn parse_selection(input: &str) -> Result<Self, SelectionError> {
        let trimmed = input.trim();
        let code = trimmed
            .parse::<i64>()
            .map_err(|_| SelectionError::InvalidSelection(trimmed.to_string()))?;
        Self::from_code(code)
    }

    /// Numeric selection code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The platform this binary was compiled for, if glslang ships one.
    pub fn current() -> Option<Self> {
        match std::env::consts::OS {
            "windows" => Some(Self::Windows),
            "linux" => Some(Self::Linux),
            "macos" => Some(Self::Osx),
            _ => None,
        }
    }

    /// File name of the release archive for this platform.
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::Windows => "glslang-master-windows-x64-Release.zip",
            Self::Linux => "glslang-master-linux-Release.zip",
            Self::Osx => "glslang-master-osx-Release.zip",
        }
    }

    /// Full download URL of the archive below `base_url`.
    pub fn download_url(self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.asset_name())
    }

    /// Validator file name on this platform.
    pub fn binary_name(self) -> &'static str {
        match self {
            Self::Windows => "glslangValidator.exe",
            Self::Linux | Self::Osx => Self::TOOL_NAME,
        }
    }

    /// Path of the validator entry inside the archive.
    pub fn entry_path(self) -> String {
        format!("bin/{}", self.binary_name())
    }

    /// Menu label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Linux => "Linux",
            Self::Osx => "OSX",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_selection(s)
    }
}
