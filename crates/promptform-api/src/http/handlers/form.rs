//! Server-rendered HTML forms: the web UI host for the presets.
//!
//! GET /            -- index page listing all presets
//! GET /forms/{p}   -- the form for one preset
//! POST /forms/{p}  -- urlencoded submission; renders the result page
//!
//! Failures on the form path are shown with the historical user-visible
//! copy ("Error generating response: ...") rather than a bare status code;
//! the JSON API is the structured surface.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;

use promptform_types::preset::Preset;

use crate::state::AppState;

const STYLE: &str = "body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin:.75rem 0 .25rem;font-weight:600}\
input[type=text]{width:100%;padding:.5rem;box-sizing:border-box}\
button{margin-top:1rem;padding:.5rem 1.25rem}\
pre{background:#f4f4f4;padding:1rem;white-space:pre-wrap}\
.error{color:#b00020}";

/// Minimal HTML entity escaping for text interpolated into pages.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
<title>{}</title><style>{STYLE}</style></head><body>{body}</body></html>",
        escape(title)
    )
}

fn form_inputs(preset: &Preset, values: &HashMap<String, String>) -> String {
    preset
        .fields
        .iter()
        .map(|field| {
            let value = values.get(&field.name).map(String::as_str).unwrap_or("");
            format!(
                "<label for=\"{name}\">{label}</label>\
<input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\">",
                name = escape(&field.name),
                label = escape(&field.label),
                value = escape(value),
            )
        })
        .collect()
}

fn form_page(preset: &Preset, values: &HashMap<String, String>, result: Option<&str>, error: Option<&str>) -> String {
    let mut body = format!(
        "<p><a href=\"/\">&larr; All presets</a></p><h1>{}</h1><p>{}</p>\
<form method=\"post\" action=\"/forms/{}\">{}<button type=\"submit\">Generate</button></form>",
        escape(&preset.title),
        escape(&preset.description),
        escape(&preset.name),
        form_inputs(preset, values),
    );

    if let Some(text) = result {
        body.push_str(&format!(
            "<h2>{}</h2><pre>{}</pre>",
            escape(&preset.output_label),
            escape(text)
        ));
    }
    if let Some(text) = error {
        body.push_str(&format!("<p class=\"error\">{}</p>", escape(text)));
    }

    page(&preset.title, &body)
}

/// 404 page for an unknown preset name, styled like the rest of the forms.
fn not_found_page(name: &str) -> String {
    let body = format!(
        "<h1>Not found</h1><p class=\"error\">No preset named &#39;{}&#39;.</p>\
<p><a href=\"/\">&larr; All presets</a></p>",
        escape(name)
    );
    page("Not found", &body)
}

/// GET / -- index page listing every preset.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let items: String = state
        .registry
        .iter()
        .map(|preset| {
            format!(
                "<li><a href=\"/forms/{}\">{}</a> &mdash; {}</li>",
                escape(&preset.name),
                escape(&preset.title),
                escape(&preset.description),
            )
        })
        .collect();

    let body = format!(
        "<h1>Promptform</h1><p>Model: <code>{}</code></p><ul>{items}</ul>",
        escape(&state.model_id)
    );
    Html(page("Promptform", &body))
}

/// GET /forms/{preset} -- render the empty form, or an HTML 404 page
/// when no preset has that name.
pub async fn show_form(State(state): State<AppState>, Path(preset): Path<String>) -> Response {
    match state.registry.get(&preset) {
        Some(preset) => Html(form_page(preset, &HashMap::new(), None, None)).into_response(),
        None => (StatusCode::NOT_FOUND, Html(not_found_page(&preset))).into_response(),
    }
}

/// POST /forms/{preset} -- dispatch the submission and render the result.
///
/// Dispatch failures re-render the form with the submitted values and the
/// legacy error copy, so the user can correct and resubmit.
pub async fn submit_form(
    State(state): State<AppState>,
    Path(preset): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let Some(dispatcher) = state.dispatcher(&preset) else {
        return (StatusCode::NOT_FOUND, Html(not_found_page(&preset))).into_response();
    };

    let html = match dispatcher.dispatch(&fields).await {
        Ok(response) => form_page(dispatcher.preset(), &fields, Some(&response), None),
        Err(err) => form_page(dispatcher.preset(), &fields, None, Some(&err.legacy_text())),
    };

    Html(html).into_response()
}
