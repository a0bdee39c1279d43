//! CLI command implementations

pub mod scaffold;
pub mod wrap;

pub use scaffold::{PageArg, ScaffoldArgs, ScaffoldCommand};
pub use wrap::{list_code_actions, WrapArgs, WrapCommand};
