//! Button records and loading
//!
//! Records are parsed leniently into raw JSON values first, then validated
//! one by one so that errors can name the offending entry.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// A legacy button as captured from the old UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonRecord {
    pub id: String,
    pub height: f64,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "className", default)]
    pub class_name: String,
}

impl ButtonRecord {
    pub fn new(id: impl Into<String>, height: f64, color: &str, class_name: &str) -> Self {
        ButtonRecord {
            id: id.into(),
            height,
            color: color.to_string(),
            class_name: class_name.to_string(),
        }
    }
}

/// Unvalidated record shape accepted from `buttons.json`
#[derive(Debug, Deserialize)]
struct RawButtonRecord {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    height: Value,
    #[serde(default)]
    color: Value,
    #[serde(rename = "className", default)]
    class_name: Value,
}

impl RawButtonRecord {
    /// Validate into a [`ButtonRecord`]; `position` is 1-based
    fn validate(self, position: usize) -> Result<ButtonRecord> {
        let id = match self.id {
            Value::String(s) => s,
            Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
            Value::Null => anyhow::bail!("button #{}: missing id", position),
            other => anyhow::bail!(
                "button #{}: id must be a string or integer (got {})",
                position,
                other
            ),
        };

        let height = match &self.height {
            Value::Number(n) => n.as_f64(),
            Value::Null => anyhow::bail!("button #{} ({}): missing height", position, id),
            _ => None,
        };
        let height = match height {
            Some(h) if h.is_finite() => h,
            _ => anyhow::bail!(
                "button #{} ({}): height must be a finite number (got {})",
                position,
                id,
                self.height
            ),
        };

        let color = optional_text(self.color)
            .with_context(|| format!("button #{} ({}): invalid color", position, id))?;
        let class_name = optional_text(self.class_name)
            .with_context(|| format!("button #{} ({}): invalid className", position, id))?;

        Ok(ButtonRecord {
            id,
            height,
            color,
            class_name,
        })
    }
}

/// Absent or null text fields are treated as empty
fn optional_text(value: Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        other => anyhow::bail!("expected a string (got {})", other),
    }
}

/// Parse and validate a JSON array of button records
pub fn parse_buttons(json: &str) -> Result<Vec<ButtonRecord>> {
    let raw: Vec<RawButtonRecord> =
        serde_json::from_str(json).context("buttons must be a JSON array of objects")?;

    raw.into_iter()
        .enumerate()
        .map(|(i, r)| r.validate(i + 1))
        .collect()
}

/// Load and validate button records from a file
pub fn load_buttons(path: &Path) -> Result<Vec<ButtonRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read buttons file: {}", path.display()))?;

    parse_buttons(&content)
        .with_context(|| format!("invalid buttons file: {}", path.display()))
}
