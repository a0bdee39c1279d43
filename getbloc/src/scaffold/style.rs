//! Boilerplate style resolution
//!
//! An explicit `equatable`/`simple` setting always wins. `auto` looks for an
//! `equatable` dependency in the project's `pubspec.yaml`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::ScaffoldKind;
use crate::config::{SettingsProvider, StyleSetting};

/// Dependency that switches `auto` to the `Equatable` style
pub const EQUATABLE_DEPENDENCY: &str = "equatable";

/// Flutter project manifest file name
pub const PUBSPEC_FILE: &str = "pubspec.yaml";

/// Concrete boilerplate variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedStyle {
    /// Plain `@immutable` marker types
    #[default]
    Simple,
    /// Types extending `Equatable` with an empty `props` list
    Equatable,
}

impl ResolvedStyle {
    /// Whether templates should emit the `Equatable` variant
    #[must_use]
    pub const fn is_equatable(self) -> bool {
        matches!(self, Self::Equatable)
    }
}

/// Answers whether the host project declares a dependency
pub trait DependencyProbe {
    /// `true` if the manifest lists `name` under its dependencies
    fn has_dependency(&self, name: &str) -> bool;
}

#[derive(Debug, Default, Deserialize)]
struct Pubspec {
    #[serde(default)]
    dependencies: Option<BTreeMap<String, serde_yaml::Value>>,
}

/// Probe backed by the nearest `pubspec.yaml`
///
/// The manifest is searched for in `start` and its ancestors. A missing or
/// unreadable manifest reports every dependency as absent.
#[derive(Debug, Clone)]
pub struct PubspecProbe {
    start: PathBuf,
}

impl PubspecProbe {
    /// Create a probe that searches upward from `start`
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
        }
    }

    /// Locate the nearest manifest, if any
    #[must_use]
    pub fn manifest_path(&self) -> Option<PathBuf> {
        self.start
            .ancestors()
            .map(|dir| dir.join(PUBSPEC_FILE))
            .find(|candidate| candidate.is_file())
    }

    fn read_manifest(path: &Path) -> Option<Pubspec> {
        let content = fs::read_to_string(path)
            .map_err(|err| tracing::debug!(path = %path.display(), error = %err, "Cannot read manifest"))
            .ok()?;
        serde_yaml::from_str(&content)
            .map_err(|err| tracing::debug!(path = %path.display(), error = %err, "Cannot parse manifest"))
            .ok()
    }
}

impl DependencyProbe for PubspecProbe {
    fn has_dependency(&self, name: &str) -> bool {
        let Some(path) = self.manifest_path() else {
            tracing::debug!(start = %self.start.display(), "No {PUBSPEC_FILE} found");
            return false;
        };

        Self::read_manifest(&path)
            .and_then(|pubspec| pubspec.dependencies)
            .is_some_and(|deps| deps.contains_key(name))
    }
}

/// Collapses a [`StyleSetting`] to a [`ResolvedStyle`]
#[derive(Debug, Clone)]
pub struct StyleResolver<S, P> {
    settings: S,
    probe: P,
}

impl<S: SettingsProvider, P: DependencyProbe> StyleResolver<S, P> {
    /// Create a resolver over injected settings and manifest probe
    pub const fn new(settings: S, probe: P) -> Self {
        Self { settings, probe }
    }

    /// Resolve the style for a scaffold kind, reading settings fresh
    pub fn resolve(&self, kind: ScaffoldKind) -> ResolvedStyle {
        let setting = self.settings.style_setting(kind);
        let style = match setting {
            StyleSetting::Equatable => ResolvedStyle::Equatable,
            StyleSetting::Simple => ResolvedStyle::Simple,
            StyleSetting::Auto => {
                if self.probe.has_dependency(EQUATABLE_DEPENDENCY) {
                    ResolvedStyle::Equatable
                } else {
                    ResolvedStyle::Simple
                }
            }
        };
        tracing::debug!(?kind, ?setting, ?style, "Resolved template style");
        style
    }

    /// Settings this resolver reads from
    pub const fn settings(&self) -> &S {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GetblocConfig, TemplateSettings};
    use tempfile::TempDir;

    struct FixedProbe(bool);

    impl DependencyProbe for FixedProbe {
        fn has_dependency(&self, _name: &str) -> bool {
            self.0
        }
    }

    fn config_with(controller: &str) -> GetblocConfig {
        GetblocConfig {
            templates: TemplateSettings {
                new_controller: controller.to_string(),
                ..TemplateSettings::default()
            },
        }
    }

    #[test]
    fn test_explicit_setting_overrides_probe() {
        for present in [true, false] {
            let resolver = StyleResolver::new(config_with("equatable"), FixedProbe(present));
            assert_eq!(resolver.resolve(ScaffoldKind::Controller), ResolvedStyle::Equatable);

            let resolver = StyleResolver::new(config_with("simple"), FixedProbe(present));
            assert_eq!(resolver.resolve(ScaffoldKind::Controller), ResolvedStyle::Simple);
        }
    }

    #[test]
    fn test_auto_follows_probe() {
        let resolver = StyleResolver::new(config_with("auto"), FixedProbe(true));
        assert_eq!(resolver.resolve(ScaffoldKind::Controller), ResolvedStyle::Equatable);

        let resolver = StyleResolver::new(config_with("auto"), FixedProbe(false));
        assert_eq!(resolver.resolve(ScaffoldKind::Controller), ResolvedStyle::Simple);
    }

    #[test]
    fn test_unrecognized_setting_probes() {
        let resolver = StyleResolver::new(config_with("freezed"), FixedProbe(true));
        assert_eq!(resolver.resolve(ScaffoldKind::Controller), ResolvedStyle::Equatable);
    }

    #[test]
    fn test_pubspec_probe_finds_dependency_in_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(PUBSPEC_FILE),
            "name: demo\ndependencies:\n  flutter:\n    sdk: flutter\n  equatable: ^2.0.5\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("lib").join("features");
        fs::create_dir_all(&nested).unwrap();

        let probe = PubspecProbe::new(&nested);
        assert!(probe.has_dependency(EQUATABLE_DEPENDENCY));
        assert!(!probe.has_dependency("bloc"));
    }

    #[test]
    fn test_pubspec_probe_ignores_dev_dependencies() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(PUBSPEC_FILE),
            "name: demo\ndev_dependencies:\n  equatable: ^2.0.5\n",
        )
        .unwrap();

        assert!(!PubspecProbe::new(temp_dir.path()).has_dependency(EQUATABLE_DEPENDENCY));
    }

    #[test]
    fn test_pubspec_probe_unreadable_manifest_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PUBSPEC_FILE), "dependencies: [unclosed").unwrap();

        assert!(!PubspecProbe::new(temp_dir.path()).has_dependency(EQUATABLE_DEPENDENCY));
    }
}
