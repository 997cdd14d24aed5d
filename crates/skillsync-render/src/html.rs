//! HTML rendering of the assessment list.
//!
//! Produces card markup for the list container and a self-contained page
//! with all CSS inlined.

use anyhow::{Context, Result};
use std::path::Path;

use skillsync_core::model::{Assessment, SkillLevel};
use skillsync_core::view::{Banner, ViewState};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render one record as a card.
pub fn render_card(record: &Assessment) -> String {
    format!(
        concat!(
            "<div class=\"assessment-card\" data-id=\"{id}\">\n",
            "  <h6 class=\"card-title\">{employee}</h6>\n",
            "  <p class=\"card-text\"><strong>Skill:</strong> {skill}<br>\n",
            "    <span class=\"badge current\">{current}</span> &rarr; ",
            "<span class=\"badge target\">{target}</span></p>\n",
            "  <button class=\"delete\" data-id=\"{id}\" title=\"Delete\">Delete</button>\n",
            "</div>\n"
        ),
        id = html_escape(record.id.as_str()),
        employee = html_escape(&record.employee),
        skill = html_escape(&record.skill),
        current = html_escape(record.current.as_str()),
        target = html_escape(record.target.as_str()),
    )
}

/// Render the body of the list container for the given state.
pub fn render_view(state: &ViewState) -> String {
    match state {
        ViewState::Loading => {
            "<div class=\"spinner\" role=\"status\">Loading...</div>\n".to_string()
        }
        ViewState::Empty => "<p class=\"muted\">No assessments found.</p>\n".to_string(),
        ViewState::Loaded(records) => records.iter().map(render_card).collect(),
        ViewState::Failed(_) => "<p class=\"error\">Error loading assessments</p>\n".to_string(),
    }
}

/// Render a dismissible notification banner.
pub fn render_banner(banner: &Banner) -> String {
    let class = if banner.is_error() { "danger" } else { "success" };
    format!(
        "<div class=\"alert alert-{class}\" role=\"alert\">{}<button type=\"button\" class=\"close\" onclick=\"this.parentNode.remove()\">&times;</button></div>\n",
        html_escape(&banner.message)
    )
}

fn level_options(placeholder: &str) -> String {
    let mut html = format!("<option value=\"\">{placeholder}</option>");
    for level in SkillLevel::ALL.iter() {
        html.push_str(&format!("<option value=\"{level}\">{level}</option>"));
    }
    html
}

/// Generate the full assessments page.
pub fn generate_page(state: &ViewState, banner: Option<&Banner>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Skill Management Portal</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<header><h1>Skill Management Portal</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">{} assessments | generated {}</p></header>\n",
        state.records().len(),
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    if let Some(banner) = banner {
        html.push_str(&render_banner(banner));
    }

    // Quick add form
    html.push_str("<section class=\"quick-add\">\n<h2>Quick Add Assessment</h2>\n");
    html.push_str("<form id=\"quickAddForm\">\n");
    html.push_str("<input type=\"text\" name=\"Employee\" placeholder=\"Employee Name\" required>\n");
    html.push_str("<input type=\"text\" name=\"Skill\" placeholder=\"Skill\" required>\n");
    html.push_str(&format!(
        "<select name=\"Current\" required>{}</select>\n",
        level_options("Current")
    ));
    html.push_str(&format!(
        "<select name=\"Target\" required>{}</select>\n",
        level_options("Target")
    ));
    html.push_str("<button type=\"submit\">Add Assessment</button>\n");
    html.push_str("</form>\n</section>\n");

    // List
    html.push_str("<section class=\"assessments\">\n<h2>Current Assessments</h2>\n");
    html.push_str("<div id=\"assessmentsList\">\n");
    html.push_str(&render_view(state));
    html.push_str("</div>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write the assessments page to a file.
pub fn write_html_page(state: &ViewState, banner: Option<&Banner>, path: &Path) -> Result<()> {
    let html = generate_page(state, banner);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --ok: #dcfce7; --bad: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --ok: #064e3b; --bad: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
.meta, .muted { color: #6b7280; }
.error { color: #dc2626; }
form { display: flex; gap: 0.5rem; flex-wrap: wrap; }
#assessmentsList { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem; }
.assessment-card { border: 1px solid var(--border); border-radius: 8px; padding: 1rem; }
.badge { padding: 0.1rem 0.5rem; border-radius: 4px; background: var(--border); }
.badge.target { background: var(--ok); }
.alert { padding: 0.75rem 1rem; border-radius: 8px; margin: 1rem 0; }
.alert-success { background: var(--ok); }
.alert-danger { background: var(--bad); }
"#;
