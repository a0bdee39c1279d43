//! Scaffold generation
//!
//! Turns an entity name and a target directory into controller, module and
//! binding source files.

pub mod generator;
pub mod materializer;
pub mod name;
pub mod planner;
pub mod style;

pub use generator::{GeneratedFile, ScaffoldGenerator, ScaffoldRequest};
pub use materializer::{materialize, FileSink, RenderedFile, TokioFileSink};
pub use name::EntityName;
pub use planner::{plan, FilePlan, ModuleOptions, PlannedFile, ScaffoldKind};
pub use style::{DependencyProbe, PubspecProbe, ResolvedStyle, StyleResolver};
