//! getbloc: scaffolding for GetBloc (Flutter + GetX) controllers
//!
//! Generates the boilerplate Dart files for the GetBloc architecture and
//! wraps selected widget code in reactive builders.
//!
//! # Scaffolds
//!
//! | Kind              | Files                                                     |
//! |-------------------|-----------------------------------------------------------|
//! | `Controller`      | `state/<name>_event.dart`, `_state.dart`, `_controller.dart` |
//! | `StateController` | `state/<name>_state.dart`, `_controller.dart`              |
//! | `Module`          | `<name>/state/…` as `Controller`, plus `<name>/<name>_page.dart` |
//! | `Binding`         | `<name>_binding.dart`                                      |
//!
//! Each scaffold comes in a plain style (`@immutable` markers) or an
//! `Equatable` style. The style is read from configuration and, when set to
//! `auto`, follows whether the project's `pubspec.yaml` depends on
//! `equatable`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use getbloc::config::FigmentSettings;
//! use getbloc::scaffold::{EntityName, PubspecProbe, ScaffoldGenerator, ScaffoldKind, ScaffoldRequest};
//!
//! # async fn example() -> getbloc::Result<()> {
//! let generator = ScaffoldGenerator::new(
//!     FigmentSettings::new("."),
//!     PubspecProbe::new("."),
//! )?;
//!
//! let request = ScaffoldRequest::new(
//!     ScaffoldKind::Controller,
//!     EntityName::parse("counter")?,
//!     "lib/counter",
//! );
//! let files = generator.generate(&request).await?;
//! assert_eq!(files.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;
pub mod snippet;
pub mod templates;

pub use error::{Result, ScaffoldError};

/// Commonly used types
pub mod prelude {
    pub use crate::config::{FigmentSettings, GetblocConfig, PageStyle, SettingsProvider, StyleSetting};
    pub use crate::error::{Result, ScaffoldError};
    pub use crate::scaffold::{
        DependencyProbe, EntityName, FileSink, GeneratedFile, PubspecProbe, ResolvedStyle, ScaffoldGenerator,
        ScaffoldKind, ScaffoldRequest, TokioFileSink,
    };
    pub use crate::snippet::{code_actions, wrap, wrap_selection, CodeAction, Snippet, SnippetShape, TextEditor};
    pub use crate::templates::{Artifact, TemplateRegistry};
}
