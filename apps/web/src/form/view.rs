//! Renders a `FormState` into the single page.

use crate::form::state::{FormState, Phase};
use crate::generation::input::RequiredFields;

const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Sent with every page. Scripts and styles are inline; the page talks only to its origin.
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    script-src 'self' 'unsafe-inline'; \
    style-src 'self' 'unsafe-inline'; \
    img-src 'self' blob: data:; \
    font-src 'self'; \
    connect-src 'self'; \
    frame-src 'self'";

pub fn render_page(form: &FormState, required: RequiredFields) -> String {
    let error_block = if form.error().is_empty() {
        String::new()
    } else {
        format!(
            "    <div class=\"error\" role=\"alert\">{}</div>\n",
            escape_html(form.error())
        )
    };

    let result_block = if form.generated_resume().is_empty() {
        String::new()
    } else {
        format!(
            "    <div class=\"result\">\n      <h2>Generated Resume:</h2>\n      <pre>{}</pre>\n    </div>\n",
            escape_html(form.generated_resume())
        )
    };

    let (button_disabled, button_label) = if form.phase() == Phase::Pending {
        (" disabled", "Generating...")
    } else {
        ("", "Generate Resume")
    };

    let qualifications_hint = if required.qualifications {
        ""
    } else {
        " <span class=\"hint\">(optional)</span>"
    };

    let api_key = escape_html(form.credential().expose());
    let job_description = escape_html(form.job_description());
    let qualifications = escape_html(form.qualifications());
    let current_resume = escape_html(form.current_resume());

    fill(
        PAGE_TEMPLATE,
        &[
            ("api_key", api_key.as_str()),
            ("job_description", job_description.as_str()),
            ("qualifications_hint", qualifications_hint),
            ("qualifications", qualifications.as_str()),
            ("current_resume", current_resume.as_str()),
            ("button_disabled", button_disabled),
            ("button_label", button_label),
            ("error_block", error_block.as_str()),
            ("result_block", result_block.as_str()),
        ],
    )
}

/// Single left-to-right pass: substituted text is never rescanned, and braces
/// that don't name a known key (CSS blocks, user text) pass through untouched.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];

        let hit = values.iter().find(|(key, _)| {
            tail.starts_with(key) && tail[key.len()..].starts_with('}')
        });

        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
