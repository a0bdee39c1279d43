//! Scaffold generator orchestrator
//!
//! Runs one scaffold command end to end: resolve the style, plan the files,
//! render every template, create directories, then write the batch.

use std::path::PathBuf;

use super::materializer::{materialize, FileSink, RenderedFile, TokioFileSink};
use super::name::EntityName;
use super::planner::{plan, ModuleOptions, ScaffoldKind};
use super::style::{DependencyProbe, ResolvedStyle, StyleResolver};
use crate::config::{PageStyle, SettingsProvider};
use crate::error::{Result, ScaffoldError};
use crate::templates::{Artifact, TemplateRegistry};

/// Input collected from the user for one scaffold command
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// What to generate
    pub kind: ScaffoldKind,
    /// Entity name driving every generated identifier
    pub name: EntityName,
    /// Existing directory to generate into
    pub target: PathBuf,
    /// Page variant override for modules; `None` reads the settings
    pub page: Option<PageStyle>,
    /// Emit a binding alongside a module's page
    pub with_binding: bool,
}

impl ScaffoldRequest {
    /// Request with default module options
    pub fn new(kind: ScaffoldKind, name: EntityName, target: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            name,
            target: target.into(),
            page: None,
            with_binding: false,
        }
    }
}

/// Represents a generated file
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Absolute path of the written file
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}

/// Scaffold generator
pub struct ScaffoldGenerator<S, P, F = TokioFileSink> {
    resolver: StyleResolver<S, P>,
    templates: TemplateRegistry,
    sink: F,
}

impl<S, P> ScaffoldGenerator<S, P, TokioFileSink>
where
    S: SettingsProvider,
    P: DependencyProbe,
{
    /// Generator writing through `tokio::fs`
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in templates fail to compile.
    pub fn new(settings: S, probe: P) -> Result<Self> {
        Self::with_sink(settings, probe, TokioFileSink)
    }
}

impl<S, P, F> ScaffoldGenerator<S, P, F>
where
    S: SettingsProvider,
    P: DependencyProbe,
    F: FileSink,
{
    /// Generator writing through a custom sink
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in templates fail to compile.
    pub fn with_sink(settings: S, probe: P, sink: F) -> Result<Self> {
        Ok(Self {
            resolver: StyleResolver::new(settings, probe),
            templates: TemplateRegistry::new()?,
            sink,
        })
    }

    /// Generate all files for a request
    ///
    /// Directories are created before the writes and are left behind if a
    /// write then fails.
    ///
    /// # Errors
    ///
    /// - [`ScaffoldError::Validation`] if the target is not an existing directory
    /// - [`ScaffoldError::AlreadyExists`] if any planned file exists
    /// - [`ScaffoldError::Io`] if a directory or file cannot be created
    pub async fn generate(&self, request: &ScaffoldRequest) -> Result<Vec<GeneratedFile>> {
        let is_dir = tokio::fs::metadata(&request.target)
            .await
            .is_ok_and(|meta| meta.is_dir());
        if !is_dir {
            return Err(ScaffoldError::validation("Please select a valid directory"));
        }

        let style = if request.kind.uses_style() {
            self.resolver.resolve(request.kind)
        } else {
            ResolvedStyle::Simple
        };

        let options = if request.kind == ScaffoldKind::Module {
            ModuleOptions {
                page: request
                    .page
                    .unwrap_or_else(|| self.resolver.settings().page_style()),
                with_binding: request.with_binding,
            }
        } else {
            ModuleOptions::default()
        };

        let file_plan = plan(request.kind, &request.name, &request.target, options)?;

        let generated = file_plan
            .files()
            .iter()
            .map(|file| -> Result<GeneratedFile> {
                Ok(GeneratedFile {
                    path: file.path.clone(),
                    content: self.templates.render(file.artifact, &request.name, style)?,
                    description: describe(file.artifact, &request.name),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for dir in file_plan.directories() {
            self.sink.create_dir_all(&dir).await?;
        }

        let rendered: Vec<RenderedFile> = generated
            .iter()
            .map(|file| RenderedFile {
                path: file.path.clone(),
                content: file.content.clone(),
            })
            .collect();
        materialize(&self.sink, &rendered).await?;

        tracing::info!(
            kind = ?request.kind,
            name = %request.name,
            ?style,
            files = generated.len(),
            "Scaffold generated"
        );
        Ok(generated)
    }
}

fn describe(artifact: Artifact, name: &EntityName) -> String {
    let pascal = name.pascal();
    match artifact {
        Artifact::Event => format!("{pascal}Event base type"),
        Artifact::State => format!("{pascal}State and {pascal}Initial"),
        Artifact::Controller => format!("{pascal}Controller"),
        Artifact::StateController => format!("{pascal}Controller (state only)"),
        Artifact::Page => format!("{pascal}Page"),
        Artifact::GetViewPage => format!("{pascal}Page (GetView)"),
        Artifact::Binding => format!("{pascal}Binding"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GetblocConfig, TemplateSettings};
    use async_trait::async_trait;
    use std::fs;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct NoDependencies;

    impl DependencyProbe for NoDependencies {
        fn has_dependency(&self, _name: &str) -> bool {
            false
        }
    }

    /// Records calls instead of touching the disk
    #[derive(Default)]
    struct RecordingSink {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl FileSink for RecordingSink {
        async fn create_dir_all(&self, path: &Path) -> Result<()> {
            self.calls.lock().unwrap().push(format!("mkdir {}", path.display()));
            Ok(())
        }

        async fn write_new(&self, path: &Path, _content: &str) -> Result<()> {
            self.calls.lock().unwrap().push(format!("write {}", path.display()));
            Ok(())
        }
    }

    fn generator() -> ScaffoldGenerator<GetblocConfig, NoDependencies> {
        ScaffoldGenerator::new(GetblocConfig::default(), NoDependencies).unwrap()
    }

    fn request(kind: ScaffoldKind, raw: &str, target: &Path) -> ScaffoldRequest {
        ScaffoldRequest::new(kind, EntityName::parse(raw).unwrap(), target)
    }

    #[tokio::test]
    async fn test_controller_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let files = generator()
            .generate(&request(ScaffoldKind::Controller, "counter", temp_dir.path()))
            .await
            .unwrap();

        assert_eq!(files.len(), 3);
        let state_dir = temp_dir.path().join("state");
        let event = fs::read_to_string(state_dir.join("counter_event.dart")).unwrap();
        let state = fs::read_to_string(state_dir.join("counter_state.dart")).unwrap();
        let controller = fs::read_to_string(state_dir.join("counter_controller.dart")).unwrap();

        assert!(event.contains("abstract class CounterEvent {}"));
        assert!(state.contains("abstract class CounterState {}"));
        assert!(state.contains("class CounterInitial extends CounterState {}"));
        assert!(controller.contains("class CounterController extends Controller<CounterEvent, CounterState>"));
    }

    #[tokio::test]
    async fn test_second_run_fails_without_overwriting() {
        let temp_dir = TempDir::new().unwrap();
        let generator = generator();
        let req = request(ScaffoldKind::Controller, "counter", temp_dir.path());

        generator.generate(&req).await.unwrap();
        let controller_path = temp_dir.path().join("state").join("counter_controller.dart");
        fs::write(&controller_path, "// edited").unwrap();

        let err = generator.generate(&req).await.unwrap_err();
        assert!(err.is_already_exists());
        assert_eq!(fs::read_to_string(&controller_path).unwrap(), "// edited");
    }

    #[tokio::test]
    async fn test_invalid_target_is_validation_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not_a_dir");
        fs::write(&file, "").unwrap();

        for target in [file, temp_dir.path().join("missing")] {
            let err = generator()
                .generate(&request(ScaffoldKind::Controller, "counter", &target))
                .await
                .unwrap_err();
            assert!(matches!(err, ScaffoldError::Validation(_)));
        }
        assert!(!temp_dir.path().join("missing").exists());
    }

    #[tokio::test]
    async fn test_module_uses_configured_style_and_page() {
        let temp_dir = TempDir::new().unwrap();
        let config = GetblocConfig {
            templates: TemplateSettings {
                new_module: "equatable".to_string(),
                module_page: "located".to_string(),
                ..TemplateSettings::default()
            },
        };
        let generator = ScaffoldGenerator::new(config, NoDependencies).unwrap();

        let files = generator
            .generate(&request(ScaffoldKind::Module, "counter", temp_dir.path()))
            .await
            .unwrap();

        assert_eq!(files.len(), 4);
        let module_dir = temp_dir.path().join("counter");
        let state = fs::read_to_string(module_dir.join("state").join("counter_state.dart")).unwrap();
        let page = fs::read_to_string(module_dir.join("counter_page.dart")).unwrap();
        assert!(state.contains("extends Equatable"));
        assert!(page.contains("extends GetView<CounterController>"));
    }

    #[tokio::test]
    async fn test_page_override_beats_settings() {
        let temp_dir = TempDir::new().unwrap();
        let mut req = request(ScaffoldKind::Module, "counter", temp_dir.path());
        req.page = Some(PageStyle::Owned);
        req.with_binding = true;

        let files = generator().generate(&req).await.unwrap();

        assert_eq!(files.len(), 5);
        let page = fs::read_to_string(temp_dir.path().join("counter").join("counter_page.dart")).unwrap();
        assert!(page.contains("Get.put(CounterController())"));
        assert!(temp_dir.path().join("counter").join("counter_binding.dart").exists());
    }

    #[tokio::test]
    async fn test_directories_created_before_writes() {
        let temp_dir = TempDir::new().unwrap();
        let sink = RecordingSink::default();
        let generator = ScaffoldGenerator::with_sink(GetblocConfig::default(), NoDependencies, sink).unwrap();

        generator
            .generate(&request(ScaffoldKind::StateController, "counter", temp_dir.path()))
            .await
            .unwrap();

        let calls = generator.sink.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 3);
        assert!(calls[0].starts_with("mkdir "));
        assert!(calls[1..].iter().all(|call| call.starts_with("write ")));
    }
}
