//! File planning for each scaffold kind
//!
//! Planning only decides paths and artifacts. Content is rendered afterwards
//! and nothing here touches the disk.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::EntityName;
use crate::config::PageStyle;
use crate::error::{Result, ScaffoldError};
use crate::templates::Artifact;

/// Directory holding event/state/controller files
pub const STATE_DIR: &str = "state";

/// Requested scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaffoldKind {
    /// Event, state and controller under `<target>/state/`
    Controller,
    /// State and state-only controller under `<target>/state/`
    StateController,
    /// Controller files under `<target>/<snake>/state/` plus a page
    Module,
    /// A single `<target>/<snake>_binding.dart`
    Binding,
}

impl ScaffoldKind {
    /// Label used in user feedback ("Successfully Generated Counter Module")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Controller | Self::StateController => "Controller",
            Self::Module => "Module",
            Self::Binding => "Binding",
        }
    }

    /// Whether the templates for this kind depend on the resolved style
    #[must_use]
    pub const fn uses_style(self) -> bool {
        !matches!(self, Self::Binding)
    }
}

/// Module-only planning options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModuleOptions {
    /// Page variant to emit
    pub page: PageStyle,
    /// Also emit `<snake>_binding.dart` next to the page
    pub with_binding: bool,
}

/// One file of a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Absolute path of the file to create
    pub path: PathBuf,
    /// Template to render into it
    pub artifact: Artifact,
}

/// Ordered, duplicate-free set of files to create
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePlan {
    files: Vec<PlannedFile>,
}

impl FilePlan {
    /// Append a file, rejecting a path that is already planned
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Validation`] on a duplicate path.
    pub fn push(&mut self, path: PathBuf, artifact: Artifact) -> Result<()> {
        if self.files.iter().any(|file| file.path == path) {
            return Err(ScaffoldError::validation(format!(
                "{} is planned twice",
                path.display()
            )));
        }
        self.files.push(PlannedFile { path, artifact });
        Ok(())
    }

    /// Planned files in order
    #[must_use]
    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    /// Number of planned files
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing is planned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Parent directories that must exist before writing, shallowest first
    #[must_use]
    pub fn directories(&self) -> Vec<PathBuf> {
        self.files
            .iter()
            .filter_map(|file| file.path.parent().map(Path::to_path_buf))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Compute the files for a scaffold
///
/// # Errors
///
/// Returns an error only if two artifacts would land on the same path.
pub fn plan(kind: ScaffoldKind, name: &EntityName, target: &Path, options: ModuleOptions) -> Result<FilePlan> {
    let mut plan = FilePlan::default();

    match kind {
        ScaffoldKind::Controller => {
            push_controller_files(&mut plan, name, target, Artifact::Controller, true)?;
        }
        ScaffoldKind::StateController => {
            push_controller_files(&mut plan, name, target, Artifact::StateController, false)?;
        }
        ScaffoldKind::Module => {
            let module_dir = target.join(name.snake());
            push_controller_files(&mut plan, name, &module_dir, Artifact::Controller, true)?;

            let page = match options.page {
                PageStyle::Owned => Artifact::Page,
                PageStyle::Located => Artifact::GetViewPage,
            };
            plan.push(module_dir.join(page.file_name(name)), page)?;

            if options.with_binding {
                plan.push(module_dir.join(Artifact::Binding.file_name(name)), Artifact::Binding)?;
            }
        }
        ScaffoldKind::Binding => {
            plan.push(target.join(Artifact::Binding.file_name(name)), Artifact::Binding)?;
        }
    }

    tracing::debug!(?kind, files = plan.len(), "Planned scaffold");
    Ok(plan)
}

fn push_controller_files(
    plan: &mut FilePlan,
    name: &EntityName,
    base: &Path,
    controller: Artifact,
    with_events: bool,
) -> Result<()> {
    let state_dir = base.join(STATE_DIR);
    if with_events {
        plan.push(state_dir.join(Artifact::Event.file_name(name)), Artifact::Event)?;
    }
    plan.push(state_dir.join(Artifact::State.file_name(name)), Artifact::State)?;
    plan.push(state_dir.join(controller.file_name(name)), controller)
}
