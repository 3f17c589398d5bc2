//! Core library for mcglsl tooling.
//!
//! Two independent pieces live here:
//!
//! - **Validator setup**: [`Platform`] selection, [`fetch`] of the prebuilt
//!   glslang release archive, and [`install`] of its `bin/glslangValidator`
//!   entry into a target directory.
//! - **Uniform snippets**: [`uniforms`] turns `uniform` declarations from a
//!   shader listing into editor completion records.
//!
//! Nothing in this crate writes to the terminal; the CLI owns presentation.

pub mod config;
pub mod fetch;
pub mod install;
pub mod platform;
pub mod setup;
pub mod uniforms;

pub use config::USER_AGENT;
pub use platform::{Platform, SelectionError};
pub use setup::{SetupError, fetch_and_install};
pub use uniforms::{UniformRecord, Uniforms};
