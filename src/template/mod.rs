//! Template renderer seam
//!
//! Markup production belongs to the host framework; this module only defines
//! the seam it plugs into, plus a minimal placeholder-substitution renderer
//! and a default map-widget template so the pipeline works out of the box.
//!
//! # Example
//!
//! ```rust
//! use gmaps_widget::{GmapsWidget, MapTemplate, TemplateRenderer};
//!
//! let context = GmapsWidget::new().render("location", None, None);
//! let html = MapTemplate::default().render(&context);
//! assert!(html.contains("gmaps_location"));
//! ```

use serde_json::Value;

use crate::widget::TemplateContext;

/// Renders a template context to markup
///
/// Implementations own escaping and interpolation safety; the context hands
/// them strings and already-serialized JSON.
pub trait TemplateRenderer {
    fn render(&self, context: &TemplateContext) -> String;
}

/// The default map-widget markup: a map container, the bound WKT field, and
/// the script hook that initializes the client-side widget under the module
/// identifier.
const MAP_WIDGET_TEMPLATE: &str = r#"<div id="{{ module }}_map" class="gmaps-widget" style="width: {{ width }}; height: {{ height }}"></div>
<textarea id="{{ module }}_wkt" name="{{ name }}" class="vWKTField required" rows="3">{{ value }}</textarea>
<script type="text/javascript">
var {{ module }} = new GmapsWidget({
    id: '{{ module }}',
    map_start: {{ map_start }},
    behavior: {{ behavior }},
    address: {{ address }}
});
</script>
"#;

/// Placeholder-substitution renderer over a `{{ variable }}` template
///
/// Known variables are substituted; unresolved placeholders pass through
/// verbatim rather than erroring, consistent with the rest of the pipeline.
#[derive(Debug, Clone)]
pub struct MapTemplate {
    source: String,
}

impl Default for MapTemplate {
    fn default() -> Self {
        Self {
            source: MAP_WIDGET_TEMPLATE.to_string(),
        }
    }
}

impl MapTemplate {
    /// Use a custom template instead of the built-in markup
    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The template text this renderer substitutes into
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl TemplateRenderer for MapTemplate {
    fn render(&self, context: &TemplateContext) -> String {
        substitute(&self.source, context)
    }
}

fn substitute(template: &str, context: &TemplateContext) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        match after_open.find("}}") {
            Some(end) => {
                let name = after_open[..end].trim();
                match context.get(name) {
                    Some(value) => out.push_str(&variable_text(value)),
                    // Unknown variable: keep the placeholder as-is
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after_open[end + 2..];
            }
            None => {
                // Unclosed placeholder, emit the tail verbatim
                out.push_str(&rest[start..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// String form of a context value: strings verbatim (they are already
/// serialized where needed), everything else as compact JSON
fn variable_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
