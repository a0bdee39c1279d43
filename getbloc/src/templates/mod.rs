//! Dart template rendering
//!
//! One registry holds every artifact template; the Simple/Equatable split is
//! an `{{#if equatable}}` block inside each template rather than a separate
//! copy per style.

use handlebars::Handlebars;
use serde_json::json;

use crate::error::Result;
use crate::scaffold::{EntityName, ResolvedStyle};

pub mod files;
pub use files::*;

/// Extension of every generated file
pub const DART_EXTENSION: &str = "dart";

/// Kind of generated source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// `<snake>_event.dart`
    Event,
    /// `<snake>_state.dart`
    State,
    /// `<snake>_controller.dart` with events
    Controller,
    /// `<snake>_controller.dart` without events
    StateController,
    /// `<snake>_page.dart` owning its controller
    Page,
    /// `<snake>_page.dart` as a `GetView`
    GetViewPage,
    /// `<snake>_binding.dart`
    Binding,
}

impl Artifact {
    /// Every artifact, in registration order
    pub const ALL: [Self; 7] = [
        Self::Event,
        Self::State,
        Self::Controller,
        Self::StateController,
        Self::Page,
        Self::GetViewPage,
        Self::Binding,
    ];

    /// Registry key
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::State => "state",
            Self::Controller => "controller",
            Self::StateController => "state_controller",
            Self::Page => "page",
            Self::GetViewPage => "get_view_page",
            Self::Binding => "binding",
        }
    }

    /// File name suffix after `<snake>_`
    #[must_use]
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::State => "state",
            Self::Controller | Self::StateController => "controller",
            Self::Page | Self::GetViewPage => "page",
            Self::Binding => "binding",
        }
    }

    /// File name for an entity, e.g. `counter_event.dart`
    #[must_use]
    pub fn file_name(self, name: &EntityName) -> String {
        format!("{}_{}.{DART_EXTENSION}", name.snake(), self.file_suffix())
    }

    const fn source(self) -> &'static str {
        match self {
            Self::Event => EVENT_DART,
            Self::State => STATE_DART,
            Self::Controller => CONTROLLER_DART,
            Self::StateController => STATE_CONTROLLER_DART,
            Self::Page => PAGE_DART,
            Self::GetViewPage => GET_VIEW_PAGE_DART,
            Self::Binding => BINDING_DART,
        }
    }
}

/// Compiled artifact templates
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Compile all built-in templates
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);

        for artifact in Artifact::ALL {
            handlebars.register_template_string(artifact.template_name(), artifact.source())?;
        }

        Ok(Self { handlebars })
    }

    /// Render one artifact for an entity
    ///
    /// Output depends only on the two casing forms of `name` and `style`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render(&self, artifact: Artifact, name: &EntityName, style: ResolvedStyle) -> Result<String> {
        let context = json!({
            "pascal": name.pascal(),
            "snake": name.snake(),
            "equatable": style.is_equatable(),
        });

        Ok(self.handlebars.render(artifact.template_name(), &context)?)
    }
}
