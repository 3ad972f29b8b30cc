//! Configuration file support for buttonmap
//!
//! Loads project-specific file locations from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.buttonmaprc.json` in project root
//! 3. `buttonmap.config.json` in project root
//! 4. `"buttonmap"` key in `package.json`
//!
//! All fields are optional. CLI flags take precedence over config file values.
//! Size thresholds are fixed and cannot be configured.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the button list, relative to the project root
pub const DEFAULT_BUTTONS: &str = "src/data/buttons.json";
/// Default location of the reference page, relative to the project root
pub const DEFAULT_REFERENCE: &str = "reference/index.html";
/// Default location of the rendered dashboard, relative to the project root
pub const DEFAULT_OUTPUT: &str = "buttonmap-report.html";

/// buttonmap configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonmapConfig {
    /// Path to the buttons JSON list
    #[serde(default)]
    pub buttons: Option<PathBuf>,

    /// Path to the reference HTML page patched in place
    #[serde(default)]
    pub reference: Option<PathBuf>,

    /// Path the HTML dashboard is written to
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub buttons: PathBuf,
    pub reference: PathBuf,
    pub output: PathBuf,
    /// Path the config was loaded from (None if defaults)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<PathBuf>,
}

impl ButtonmapConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("buttons", &self.buttons),
            ("reference", &self.reference),
            ("output", &self.output),
        ] {
            if let Some(path) = value {
                if path.as_os_str().is_empty() {
                    anyhow::bail!("{} must not be an empty path", name);
                }
            }
        }

        if let (Some(reference), Some(output)) = (&self.reference, &self.output) {
            if reference == output {
                anyhow::bail!(
                    "output ({}) must differ from reference ({})",
                    output.display(),
                    reference.display()
                );
            }
        }

        Ok(())
    }

    /// Resolve into absolute paths; relative paths are taken from `base_dir`
    pub fn resolve(&self, base_dir: &Path) -> Result<ResolvedConfig> {
        self.validate()?;

        let pick = |value: &Option<PathBuf>, default: &str| -> PathBuf {
            let path = value.clone().unwrap_or_else(|| PathBuf::from(default));
            if path.is_absolute() {
                path
            } else {
                base_dir.join(path)
            }
        };

        Ok(ResolvedConfig {
            buttons: pick(&self.buttons, DEFAULT_BUTTONS),
            reference: pick(&self.reference, DEFAULT_REFERENCE),
            output: pick(&self.output, DEFAULT_OUTPUT),
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults(project_root: &Path) -> Result<Self> {
        ButtonmapConfig::default().resolve(project_root)
    }

    /// Render the resolved configuration as JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}

/// Dedicated settings files, checked before `package.json`
const SETTINGS_FILES: [&str; 2] = [".buttonmaprc.json", "buttonmap.config.json"];

/// Find the project's buttonmap settings
///
/// The first of [`SETTINGS_FILES`] that exists wins; otherwise a
/// `"buttonmap"` object inside `package.json` is used. `None` means the
/// project has no settings and the defaults apply.
pub fn discover_config(project_root: &Path) -> Result<Option<(ButtonmapConfig, PathBuf)>> {
    if let Some(path) = SETTINGS_FILES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
    {
        let config = load_config_file(&path)?;
        return Ok(Some((config, path)));
    }

    let manifest = project_root.join("package.json");
    if !manifest.is_file() {
        return Ok(None);
    }
    Ok(load_from_package_json(&manifest)?.map(|config| (config, manifest)))
}

/// Read a dedicated settings file such as the one passed via `--config`
pub fn load_config_file(path: &Path) -> Result<ButtonmapConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot open buttonmap settings {}", path.display()))?;
    parse_settings(serde_json::from_str(&raw), path)
}

/// Settings nested under the `"buttonmap"` key of an npm manifest
fn load_from_package_json(path: &Path) -> Result<Option<ButtonmapConfig>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot open npm manifest {}", path.display()))?;
    let mut manifest: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("npm manifest {} is not valid JSON", path.display()))?;

    match manifest.get_mut("buttonmap").map(serde_json::Value::take) {
        Some(section) => parse_settings(serde_json::from_value(section), path).map(Some),
        None => Ok(None),
    }
}

fn parse_settings(
    parsed: serde_json::Result<ButtonmapConfig>,
    source: &Path,
) -> Result<ButtonmapConfig> {
    let config = parsed
        .with_context(|| format!("malformed buttonmap settings in {}", source.display()))?;
    config
        .validate()
        .with_context(|| format!("rejected buttonmap settings in {}", source.display()))?;
    Ok(config)
}

/// Load and resolve config for a project
///
/// If `config_path` is provided, loads from that file.
/// Otherwise, discovers config from the project root.
/// Relative paths in a config file resolve against the file's directory.
/// Returns default config if nothing is found.
pub fn load_and_resolve(project_root: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        let config = load_config_file(path)?;
        (config, Some(path.to_path_buf()))
    } else {
        match discover_config(project_root)? {
            Some((config, path)) => (config, Some(path)),
            None => (ButtonmapConfig::default(), None),
        }
    };

    let base_dir = source_path
        .as_deref()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(project_root);

    let mut resolved = config.resolve(base_dir)?;
    resolved.config_path = source_path;
    Ok(resolved)
}
