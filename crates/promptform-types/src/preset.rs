//! Preset definitions: a named template plus its input field specs.

use serde::{Deserialize, Serialize};

use crate::template::Template;

/// A single named text input collected by a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Placeholder name this field fills (e.g. "complaint").
    pub name: String,
    /// Human-readable label shown next to the input.
    pub label: String,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
        }
    }
}

/// A dispatch preset: one use case wired to one template.
///
/// Every placeholder referenced by `template` must appear in `fields`;
/// the registry validates this at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    /// URL-safe identifier (e.g. "customer-support").
    pub name: String,
    /// Title shown on the form page.
    pub title: String,
    /// One-line description of what the preset does.
    pub description: String,
    /// The prompt template rendered per submission.
    pub template: Template,
    /// Input fields, in display order.
    pub fields: Vec<FieldSpec>,
    /// Label for the output box.
    pub output_label: String,
}

/// Serializable preset summary for API listings (omits the template body).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetInfo {
    pub name: String,
    pub title: String,
    pub description: String,
    pub fields: Vec<FieldSpec>,
}

impl From<&Preset> for PresetInfo {
    fn from(preset: &Preset) -> Self {
        Self {
            name: preset.name.clone(),
            title: preset.title.clone(),
            description: preset.description.clone(),
            fields: preset.fields.clone(),
        }
    }
}
