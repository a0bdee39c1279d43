//! getbloc CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod host;

pub use commands::{PageArg, ScaffoldArgs, ScaffoldCommand, WrapArgs, WrapCommand};
pub use host::{DialoguerPrompter, Prompter};
