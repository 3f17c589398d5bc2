//! Terminal presentation: colours, icons, and status lines.

pub mod output;
pub mod theme;

pub use output::{Output, Severity};
pub use theme::Theme;
