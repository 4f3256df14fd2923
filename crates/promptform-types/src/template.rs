//! Prompt templates with named placeholders.
//!
//! A template is parsed once at construction into an ordered sequence of
//! literal segments and `{name}` placeholders. Rendering substitutes each
//! placeholder with a caller-supplied value in a single literal pass:
//! no escaping, no recursive substitution, no conditional logic.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from template parsing and rendering.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unclosed placeholder starting at byte {0}")]
    UnclosedPlaceholder(usize),

    #[error("empty placeholder at byte {0}")]
    EmptyPlaceholder(usize),

    #[error("stray '}}' at byte {0}")]
    StrayBrace(usize),

    #[error("invalid placeholder name '{0}'")]
    InvalidName(String),

    #[error("missing field '{name}'")]
    MissingField { name: String },
}

/// One parsed piece of a template: literal text or a named slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed prompt template.
///
/// Invariant: concatenating the segments (with placeholders written back
/// as `{name}`) reproduces the source string byte-for-byte, so rendering
/// replaces each placeholder exactly once in its original position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template string.
    ///
    /// Placeholder names must be non-empty and consist of ASCII
    /// alphanumerics and underscores. A `{` that does not open a valid
    /// placeholder, or a `}` outside one, is a parse error -- there is
    /// no escape syntax, which keeps rendering a single unambiguous pass.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices();

        while let Some((pos, ch)) = chars.next() {
            match ch {
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        if inner == '}' {
                            closed = true;
                            break;
                        }
                        name.push(inner);
                    }
                    if !closed {
                        return Err(TemplateError::UnclosedPlaceholder(pos));
                    }
                    if name.is_empty() {
                        return Err(TemplateError::EmptyPlaceholder(pos));
                    }
                    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                        return Err(TemplateError::InvalidName(name));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name));
                }
                '}' => return Err(TemplateError::StrayBrace(pos)),
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The original template source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder names in order of first appearance, deduplicated.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute every placeholder with its field value.
    ///
    /// Fails with [`TemplateError::MissingField`] if any placeholder has
    /// no corresponding field -- an absent field is never silently
    /// rendered as an empty string. Extra fields are ignored.
    pub fn render(&self, fields: &HashMap<String, String>) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match fields.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(TemplateError::MissingField { name: name.clone() });
                    }
                },
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl TryFrom<String> for Template {
    type Error = TemplateError;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        Template::parse(&source)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_literal_only() {
        let t = Template::parse("no placeholders here").unwrap();
        assert!(t.placeholders().is_empty());
        assert_eq!(t.render(&HashMap::new()).unwrap(), "no placeholders here");
    }

    #[test]
    fn test_parse_and_render_single_placeholder() {
        let t = Template::parse(
            "I am a customer service representative. I received the following complaint: {complaint}. My response is:",
        )
        .unwrap();
        assert_eq!(t.placeholders(), vec!["complaint"]);

        let rendered = t
            .render(&fields(&[("complaint", "My order arrived broken.")]))
            .unwrap();
        assert_eq!(
            rendered,
            "I am a customer service representative. I received the following complaint: My order arrived broken.. My response is:"
        );
    }

    #[test]
    fn test_render_multiple_placeholders_in_position() {
        let t = Template::parse("Dear {name}, your {item} has shipped.").unwrap();
        let rendered = t
            .render(&fields(&[("name", "Ada"), ("item", "keyboard")]))
            .unwrap();
        assert_eq!(rendered, "Dear Ada, your keyboard has shipped.");
    }

    #[test]
    fn test_render_missing_field_fails() {
        let t = Template::parse("Question : {question}").unwrap();
        let err = t.render(&HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingField {
                name: "question".to_string()
            }
        );
    }

    #[test]
    fn test_render_empty_value_accepted() {
        let t = Template::parse("[{x}]").unwrap();
        assert_eq!(t.render(&fields(&[("x", "")])).unwrap(), "[]");
    }

    #[test]
    fn test_render_ignores_extra_fields() {
        let t = Template::parse("{a}").unwrap();
        let rendered = t.render(&fields(&[("a", "1"), ("b", "2")])).unwrap();
        assert_eq!(rendered, "1");
    }

    #[test]
    fn test_repeated_placeholder_substituted_everywhere() {
        let t = Template::parse("{x} and {x}").unwrap();
        assert_eq!(t.placeholders(), vec!["x"]);
        assert_eq!(t.render(&fields(&[("x", "again")])).unwrap(), "again and again");
    }

    #[test]
    fn test_no_recursive_substitution() {
        // A value that looks like a placeholder is inserted literally.
        let t = Template::parse("{a}").unwrap();
        let rendered = t.render(&fields(&[("a", "{b}"), ("b", "nope")])).unwrap();
        assert_eq!(rendered, "{b}");
    }

    #[test]
    fn test_parse_unclosed_placeholder() {
        let err = Template::parse("hello {name").unwrap_err();
        assert_eq!(err, TemplateError::UnclosedPlaceholder(6));
    }

    #[test]
    fn test_parse_empty_placeholder() {
        let err = Template::parse("hello {}").unwrap_err();
        assert_eq!(err, TemplateError::EmptyPlaceholder(6));
    }

    #[test]
    fn test_parse_stray_brace() {
        let err = Template::parse("oops } here").unwrap_err();
        assert_eq!(err, TemplateError::StrayBrace(5));
    }

    #[test]
    fn test_parse_invalid_name() {
        let err = Template::parse("{not valid}").unwrap_err();
        assert_eq!(err, TemplateError::InvalidName("not valid".to_string()));
    }

    #[test]
    fn test_serde_roundtrip() {
        let t = Template::parse("Question : {question}").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"Question : {question}\"");
        let parsed: Template = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, t);
    }

    #[test]
    fn test_serde_rejects_invalid_template() {
        let result: Result<Template, _> = serde_json::from_str("\"broken {\"");
        assert!(result.is_err());
    }
}
