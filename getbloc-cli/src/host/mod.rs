//! Terminal implementations of the editor host capabilities

pub mod editor;
pub mod prompt;

pub use editor::{parse_range, FileRangeEditor, StdioEditor};
pub use prompt::{DialoguerPrompter, Prompter};
