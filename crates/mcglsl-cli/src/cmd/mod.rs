pub mod setup;
pub mod snippets;
