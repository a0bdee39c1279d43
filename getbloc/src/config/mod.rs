//! Configuration management for getbloc
//!
//! Template settings are loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `GETBLOC_` prefix, `__` for nesting)
//! 2. `<project root>/getbloc.toml`
//! 3. `~/.config/getbloc/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! Example: `GETBLOC_TEMPLATES__NEW_CONTROLLER=equatable`
//!
//! # Example Configuration
//!
//! ```toml
//! # getbloc.toml
//! [templates]
//! new_controller = "auto"        # auto | equatable | simple
//! new_state_controller = "simple"
//! new_module = "equatable"
//! module_page = "located"        # owned | located
//! ```
//!
//! Values are kept as raw strings so that a typo degrades to `auto`
//! instead of failing the whole command.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::scaffold::ScaffoldKind;

/// Name of the per-project configuration file
pub const PROJECT_CONFIG_FILE: &str = "getbloc.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "GETBLOC_";

/// Configured boilerplate style for one scaffold kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleSetting {
    /// Probe the project manifest for `equatable`
    #[default]
    Auto,
    /// Always emit `Equatable` based types
    Equatable,
    /// Always emit plain `@immutable` marker types
    Simple,
}

impl StyleSetting {
    /// Interpret a raw configuration value, treating anything unknown as `Auto`
    #[must_use]
    pub fn from_config_value(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|()| {
            tracing::warn!(value = raw, "Unrecognized template setting, falling back to auto");
            Self::Auto
        })
    }
}

impl FromStr for StyleSetting {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(Self::Auto),
            "equatable" => Ok(Self::Equatable),
            "simple" => Ok(Self::Simple),
            _ => Err(()),
        }
    }
}

/// Which page template a module scaffold emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageStyle {
    /// Page owns its controller through `Get.put`
    #[default]
    Owned,
    /// `GetView` page resolved through the locator, with a `routeName`
    Located,
}

impl PageStyle {
    /// Interpret a raw configuration value, treating anything unknown as `Owned`
    #[must_use]
    pub fn from_config_value(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "located" | "getview" => Self::Located,
            "owned" | "" => Self::Owned,
            other => {
                tracing::warn!(value = other, "Unrecognized module_page setting, using owned");
                Self::Owned
            }
        }
    }
}

/// `[templates]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TemplateSettings {
    /// Style for `new-controller`
    pub new_controller: String,

    /// Style for `new-statecontroller`
    pub new_state_controller: String,

    /// Style for `new-module`
    pub new_module: String,

    /// Page variant for `new-module`
    pub module_page: String,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            new_controller: "auto".to_string(),
            new_state_controller: "auto".to_string(),
            new_module: "auto".to_string(),
            module_page: "owned".to_string(),
        }
    }
}

/// Complete getbloc configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GetblocConfig {
    /// Template selection settings
    #[serde(default)]
    pub templates: TemplateSettings,
}

impl GetblocConfig {
    /// Load configuration for the project rooted at `project_root`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file contains invalid TOML
    /// - A value has the wrong type (e.g. a table where a string is expected)
    pub fn load(project_root: &Path) -> Result<Self, figment::Error> {
        let defaults = toml::to_string(&Self::default())
            .map_err(|e| figment::Error::from(e.to_string()))?;

        let mut figment = Figment::new().merge(Toml::string(&defaults));

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let project_config = project_root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            figment = figment.merge(Toml::file(&project_config));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        figment.extract()
    }

    /// Get the recommended XDG config path
    ///
    /// Returns `~/.config/getbloc/config.toml` on Linux.
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(PROJECT_CONFIG_FILE),
            |config_dir| config_dir.join("getbloc").join("config.toml"),
        )
    }

    /// Configured style for a scaffold kind
    #[must_use]
    pub fn style_setting(&self, kind: ScaffoldKind) -> StyleSetting {
        match kind {
            ScaffoldKind::Controller => StyleSetting::from_config_value(&self.templates.new_controller),
            ScaffoldKind::StateController => {
                StyleSetting::from_config_value(&self.templates.new_state_controller)
            }
            ScaffoldKind::Module => StyleSetting::from_config_value(&self.templates.new_module),
            ScaffoldKind::Binding => StyleSetting::Auto,
        }
    }

    /// Configured module page variant
    #[must_use]
    pub fn page_style(&self) -> PageStyle {
        PageStyle::from_config_value(&self.templates.module_page)
    }
}

/// Read-only view of the host's settings store
pub trait SettingsProvider {
    /// Style setting for the given scaffold kind
    fn style_setting(&self, kind: ScaffoldKind) -> StyleSetting;

    /// Page variant for module scaffolds
    fn page_style(&self) -> PageStyle;
}

impl SettingsProvider for GetblocConfig {
    fn style_setting(&self, kind: ScaffoldKind) -> StyleSetting {
        Self::style_setting(self, kind)
    }

    fn page_style(&self) -> PageStyle {
        Self::page_style(self)
    }
}

/// Settings provider backed by figment, re-read on every query
#[derive(Debug, Clone)]
pub struct FigmentSettings {
    project_root: PathBuf,
}

impl FigmentSettings {
    /// Create a provider for the project rooted at `project_root`
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    fn current(&self) -> GetblocConfig {
        GetblocConfig::load(&self.project_root).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Ignoring unreadable configuration");
            GetblocConfig::default()
        })
    }
}

impl SettingsProvider for FigmentSettings {
    fn style_setting(&self, kind: ScaffoldKind) -> StyleSetting {
        self.current().style_setting(kind)
    }

    fn page_style(&self) -> PageStyle {
        self.current().page_style()
    }
}
