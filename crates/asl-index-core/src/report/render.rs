use anyhow::{Context, Result};
use handlebars::Handlebars;

use crate::report::model::Catalog;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html.hbs");
const INDEX_TEMPLATE_NAME: &str = "index";

/// Renders the catalogue as a standalone HTML page.
///
/// All interpolated values are HTML-escaped by the template engine.
pub fn render_html(catalog: &Catalog) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars
        .register_template_string(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)
        .context("failed to compile page template")?;

    handlebars
        .render(INDEX_TEMPLATE_NAME, catalog)
        .context("failed to render page template")
}

pub fn render_json(catalog: &Catalog) -> Result<String> {
    serde_json::to_string_pretty(catalog).context("failed to serialize catalog")
}

pub fn render_text(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", catalog.tool.name, catalog.tool.version));
    out.push_str(&format!("Scripts: {}\n", catalog.script_count));
    for s in &catalog.scripts {
        out.push_str(&format!(
            "  - {} | {} | {} | {}\n",
            s.game,
            s.author,
            s.complexity,
            s.features.join(", ")
        ));
    }
    out
}
