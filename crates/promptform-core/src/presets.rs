//! Built-in presets and the preset registry.
//!
//! The four presets replace four near-identical deployment scripts: same
//! control flow, different template and input fields. Templates are fixed
//! at process start; the registry validates at construction that every
//! placeholder a template references has a matching input field.

use promptform_types::preset::{FieldSpec, Preset, PresetInfo};
use promptform_types::template::Template;

/// Registry of presets, looked up by name.
///
/// Order is preserved for the index page and CLI listing.
#[derive(Debug)]
pub struct PresetRegistry {
    presets: Vec<Preset>,
}

impl PresetRegistry {
    /// Build a registry, rejecting any preset whose template references a
    /// placeholder with no matching field spec.
    pub fn new(presets: Vec<Preset>) -> Result<Self, String> {
        for preset in &presets {
            for placeholder in preset.template.placeholders() {
                if !preset.fields.iter().any(|f| f.name == placeholder) {
                    return Err(format!(
                        "preset '{}' references placeholder '{placeholder}' with no matching field",
                        preset.name
                    ));
                }
            }
        }
        Ok(Self { presets })
    }

    /// The built-in presets.
    pub fn builtin() -> Self {
        Self::new(builtin_presets()).expect("built-in presets are internally consistent")
    }

    /// Look up a preset by its URL-safe name.
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// All presets, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    /// Serializable summaries for API listings.
    pub fn infos(&self) -> Vec<PresetInfo> {
        self.presets.iter().map(PresetInfo::from).collect()
    }
}

/// The four built-in presets. Template text is carried over verbatim from
/// the original deployments.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "chat".to_string(),
            title: "LLM-Powered Chatbot".to_string(),
            description: "Ask anything and get a free-form response.".to_string(),
            template: Template::parse("{prompt}").expect("valid template"),
            fields: vec![FieldSpec::new("prompt", "Prompt")],
            output_label: "Response".to_string(),
        },
        Preset {
            name: "customer-support".to_string(),
            title: "Customer Support Reply".to_string(),
            description: "Draft a response to a customer complaint.".to_string(),
            template: Template::parse(
                "I am a customer service representative. I received the following complaint: {complaint}. My response is:",
            )
            .expect("valid template"),
            fields: vec![FieldSpec::new("complaint", "Complaint")],
            output_label: "Response".to_string(),
        },
        Preset {
            name: "cover-letter".to_string(),
            title: "Cover Letter Generator".to_string(),
            description: "Generate a cover letter from position, company, and skills.".to_string(),
            template: Template::parse(
                "Dear Hiring Manager,\n\nI am writing to apply for the {position} position at {company}. I have experience in {skills}.\n\nThank you for considering my application.\n\nSincerely,\n[Your Name]",
            )
            .expect("valid template"),
            fields: vec![
                FieldSpec::new("position", "Position"),
                FieldSpec::new("company", "Company"),
                FieldSpec::new("skills", "Skills"),
            ],
            output_label: "Cover Letter".to_string(),
        },
        Preset {
            name: "step-by-step".to_string(),
            title: "Step-by-Step Answers".to_string(),
            description: "Answer a question with step-by-step reasoning.".to_string(),
            template: Template::parse(
                "Question : {question}\nplease provide step by step Answer :\n",
            )
            .expect("valid template"),
            fields: vec![FieldSpec::new("question", "Question")],
            output_label: "Step by Step".to_string(),
        },
    ]
}
