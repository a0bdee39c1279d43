//! Scaffold commands (`new-controller`, `new-statecontroller`, `new-module`, `new-binding`)

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::style;
use getbloc::config::{FigmentSettings, PageStyle};
use getbloc::scaffold::{EntityName, GeneratedFile, PubspecProbe, ScaffoldGenerator, ScaffoldKind, ScaffoldRequest};
use std::path::{Path, PathBuf};

use crate::host::Prompter;

/// Arguments shared by every scaffold command
#[derive(Debug, Clone, Default, Args)]
pub struct ScaffoldArgs {
    /// Entity name (e.g. `counter`); prompted for when omitted
    pub name: Option<String>,

    /// Directory to generate into; prompted for when omitted or invalid
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Project root holding `pubspec.yaml` and `getbloc.toml`
    /// (default: nearest ancestor of the target with a `pubspec.yaml`)
    #[arg(long)]
    pub project: Option<PathBuf>,
}

/// Page variant for `new-module`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageArg {
    /// Page owns its controller (`Get.put`)
    Owned,
    /// `GetView` page with a `routeName`, controller from the locator
    Located,
}

impl From<PageArg> for PageStyle {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Owned => Self::Owned,
            PageArg::Located => Self::Located,
        }
    }
}

/// One scaffold invocation
#[derive(Debug, Clone)]
pub struct ScaffoldCommand {
    kind: ScaffoldKind,
    args: ScaffoldArgs,
    page: Option<PageStyle>,
    with_binding: bool,
}

impl ScaffoldCommand {
    /// Command for a scaffold kind with default module options
    #[must_use]
    pub const fn new(kind: ScaffoldKind, args: ScaffoldArgs) -> Self {
        Self {
            kind,
            args,
            page: None,
            with_binding: false,
        }
    }

    /// `new-module` with its page and binding options
    #[must_use]
    pub fn module(args: ScaffoldArgs, page: Option<PageArg>, with_binding: bool) -> Self {
        Self {
            kind: ScaffoldKind::Module,
            args,
            page: page.map(PageStyle::from),
            with_binding,
        }
    }

    /// Execute the command
    ///
    /// Prompts for whatever the arguments leave out, then writes every file
    /// of the scaffold.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is missing, blank, or not a valid identifier
    /// - No valid target directory is given
    /// - A file already exists or cannot be written
    pub async fn execute<P: Prompter>(&self, prompter: &P) -> Result<Vec<GeneratedFile>> {
        let (prompt, noun) = self.prompt_labels();

        let raw_name = match &self.args.name {
            Some(name) => Some(name.clone()),
            None => prompter.entity_name(prompt, "counter")?,
        };
        let name = match raw_name.as_deref().map(str::trim) {
            None | Some("") => anyhow::bail!("The {noun} name must not be empty"),
            Some(raw) => EntityName::parse(raw)?,
        };

        let target = match self.args.dir.as_ref().filter(|dir| dir.is_dir()) {
            Some(dir) => dir.clone(),
            None => prompter
                .target_directory(&format!("Select a folder to create the {noun} in"))?
                .filter(|dir| dir.is_dir())
                .context("Please select a valid directory")?,
        };

        let project_root = self
            .args
            .project
            .clone()
            .unwrap_or_else(|| find_project_root(&target));
        tracing::debug!(project = %project_root.display(), target = %target.display(), "Resolved locations");

        let generator = ScaffoldGenerator::new(
            FigmentSettings::new(&project_root),
            PubspecProbe::new(&project_root),
        )?;

        let request = ScaffoldRequest {
            kind: self.kind,
            name,
            target,
            page: self.page,
            with_binding: self.with_binding,
        };

        println!(
            "\n{} {}",
            style(format!("Scaffolding {noun}")).cyan().bold(),
            style(request.name.pascal()).green().bold()
        );

        let files = generator.generate(&request).await?;

        for file in &files {
            println!(
                "  {} {} ({})",
                style("✓").green(),
                style(file.path.display()).dim(),
                style(&file.description).dim()
            );
        }
        println!(
            "\n{} Successfully Generated {} {}",
            style("✨").green().bold(),
            style(request.name.pascal()).green().bold(),
            self.kind.label()
        );

        Ok(files)
    }

    const fn prompt_labels(&self) -> (&'static str, &'static str) {
        match self.kind {
            ScaffoldKind::Controller => ("Controller Name", "controller"),
            ScaffoldKind::StateController => ("StateController Name", "controller"),
            ScaffoldKind::Module => ("Module Name", "module"),
            ScaffoldKind::Binding => ("Binding Name", "binding"),
        }
    }
}

/// Directory holding the project's `pubspec.yaml`
///
/// Looks above `target` first, then above the working directory, and falls
/// back to `target` when neither is inside a project.
fn find_project_root(target: &Path) -> PathBuf {
    let cwd = std::env::current_dir().ok();
    project_root_from(target, cwd.as_deref())
}

fn project_root_from(target: &Path, cwd: Option<&Path>) -> PathBuf {
    std::iter::once(target)
        .chain(cwd)
        .find_map(|start| PubspecProbe::new(start).manifest_path())
        .and_then(|manifest| manifest.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| target.to_path_buf())
}
