//! `pform render` -- render a preset's template locally.
//!
//! Debugging aid: shows the exact prompt a form submission would send,
//! without touching the backend.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use console::style;

use promptform_core::presets::PresetRegistry;

/// Parse `name=value` pairs from the command line.
pub fn parse_fields(pairs: &[String]) -> Result<HashMap<String, String>> {
    let mut fields = HashMap::new();
    for pair in pairs {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("invalid field '{pair}', expected NAME=VALUE"))?;
        fields.insert(name.to_string(), value.to_string());
    }
    Ok(fields)
}

/// Render a preset's template with the given fields and print the result.
pub fn render_preset(
    registry: &PresetRegistry,
    preset_name: &str,
    pairs: &[String],
    json: bool,
) -> Result<()> {
    let preset = registry
        .get(preset_name)
        .ok_or_else(|| anyhow!("unknown preset '{preset_name}'"))?;

    let fields = parse_fields(pairs)?;
    let rendered = preset
        .template
        .render(&fields)
        .map_err(|err| anyhow!("{err}"))?;

    if json {
        println!(
            "{}",
            serde_json::json!({"preset": preset_name, "prompt": rendered})
        );
    } else {
        println!();
        println!("  {} {}", style("Prompt for").dim(), style(&preset.title).bold());
        println!();
        println!("{rendered}");
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fields() {
        let fields = parse_fields(&[
            "complaint=My order arrived broken.".to_string(),
            "note=a=b".to_string(),
        ])
        .unwrap();
        assert_eq!(fields["complaint"], "My order arrived broken.");
        // Only the first '=' splits.
        assert_eq!(fields["note"], "a=b");
    }

    #[test]
    fn test_parse_fields_rejects_missing_equals() {
        assert!(parse_fields(&["oops".to_string()]).is_err());
    }

    #[test]
    fn test_render_unknown_preset_fails() {
        let registry = PresetRegistry::builtin();
        let err = render_preset(&registry, "nope", &[], true).unwrap_err();
        assert!(err.to_string().contains("unknown preset"));
    }

    #[test]
    fn test_render_missing_field_fails() {
        let registry = PresetRegistry::builtin();
        let err = render_preset(&registry, "step-by-step", &[], true).unwrap_err();
        assert!(err.to_string().contains("question"));
    }
}
