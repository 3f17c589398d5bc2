//! mcglsl - developer tooling for the mcglsl editor extension
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! # Commands
//!
//! - `mcglsl setup`: download the prebuilt glslangValidator for a platform and
//!   install it into a directory, then print the VS Code setting to use it.
//! - `mcglsl snippets`: turn a `shaders.txt` uniform listing into completion
//!   snippet entries.

pub mod cmd;
pub mod ui;

use clap::{Parser, Subcommand};
use mcglsl_core::config::{DEFAULT_SHADER_FILE, RELEASE_URL_ENV};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mcglsl")]
#[command(author, version = env!("MCGLSL_VERSION"), about = "mcglsl - glslangValidator setup and shader snippet tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download glslangValidator and install it into a directory
    Setup {
        /// Platform code (0: Windows, 1: Linux, 2: OSX); prompts when omitted
        #[arg(long = "os", allow_hyphen_values = true)]
        os: Option<String>,
        /// Directory to install into (defaults to the current directory)
        #[arg(long)]
        dest: Option<PathBuf>,
        /// Base URL of the glslang release assets (defaults to the master-tot release)
        #[arg(long, env = RELEASE_URL_ENV)]
        release_url: Option<String>,
    },
    /// Print completion snippets for the uniforms in a shader listing
    Snippets {
        /// Uniform listing to read
        #[arg(long, short, default_value = DEFAULT_SHADER_FILE)]
        input: PathBuf,
        /// Emit a JSON array instead of snippet blocks
        #[arg(long)]
        json: bool,
    },
}
