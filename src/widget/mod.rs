//! The map widget: layered attributes, media list, and render pipeline
//!
//! A widget owns its merged attribute set (defaults plus construction-time
//! overrides). Each render call layers per-render overrides and the derived
//! module identifier on a fresh copy, formats it, and produces the flat
//! template context handed to the markup renderer. Rendering never mutates
//! the widget, so repeated renders of the same field are identical.

pub mod format;

use serde_json::{Map, Value};

use crate::config::WidgetConfig;

/// Script paths served alongside the computed map-service URL
pub const WICKET_JS: &str = "gmaps-widget/js/wicket.js";
pub const WICKET_GMAP3_JS: &str = "gmaps-widget/js/wicket-gmap3.js";
pub const WIDGET_JS: &str = "gmaps-widget/js/GmapsWidget.min.js";

/// Ordered client-side resources the rendered widget depends on
///
/// The map-service URL comes first; the WKT codec and widget scripts assume
/// the maps API is already loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub js: Vec<String>,
}

/// Flat mapping of template-variable names to render-ready values
///
/// Values are strings or already-serialized JSON; anything the formatter
/// left unconverted passes through as its raw value. Escaping and
/// interpolation safety belong to the consuming renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplateContext(Map<String, Value>);

impl TemplateContext {
    /// Look up a template variable
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Look up a template variable as a string
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name)?.as_str()
    }

    /// Iterate over the variables in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    fn insert(&mut self, name: &str, value: Value) {
        self.0.insert(name.to_string(), value);
    }
}

/// A Google-Maps point editor widget for admin forms
///
/// Drop-in replacement for a default 2D geometry editor: it binds a WKT
/// field to an interactive map and leaves markup production to a template
/// renderer supplied by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct GmapsWidget {
    attrs: WidgetConfig,
}

impl Default for GmapsWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl GmapsWidget {
    /// Create a widget with the built-in default attributes
    pub fn new() -> Self {
        Self {
            attrs: WidgetConfig::defaults(),
        }
    }

    /// Create a widget with overrides layered over the defaults
    pub fn with_attrs(overrides: &WidgetConfig) -> Self {
        Self {
            attrs: WidgetConfig::defaults().merged(overrides),
        }
    }

    /// The widget's merged attribute set
    pub fn attrs(&self) -> &WidgetConfig {
        &self.attrs
    }

    /// The computed map-service script URL for this widget's configuration
    pub fn gmaps_url(&self) -> String {
        format::gmaps_url(&self.attrs)
    }

    /// The ordered script resources this widget needs on the page
    pub fn media(&self) -> Media {
        Media {
            js: vec![
                self.gmaps_url(),
                WICKET_JS.to_string(),
                WICKET_GMAP3_JS.to_string(),
                WIDGET_JS.to_string(),
            ],
        }
    }

    /// Produce the template context for one field
    ///
    /// Layers per-render overrides and the derived module identifier over the
    /// widget's attributes, formats the result, and flattens it into template
    /// variables. `value` is the field's current WKT serialization, if any.
    pub fn render(
        &self,
        name: &str,
        value: Option<&str>,
        attrs: Option<&WidgetConfig>,
    ) -> TemplateContext {
        let mut merged = self.attrs.clone();
        if let Some(overrides) = attrs {
            merged.merge(overrides);
        }
        let module = format::module_identifier(name);
        merged.set("module", Value::String(module));

        let url = format::gmaps_url(&merged);
        format::format_attrs(&mut merged);

        build_context(&merged, name, value, url)
    }
}

/// Flatten formatted attributes into the outbound template contract
///
/// Known groups land under fixed variable names; any other top-level key
/// passes through untouched so host templates can consume extra attributes.
fn build_context(
    attrs: &WidgetConfig,
    name: &str,
    value: Option<&str>,
    gmaps_url: String,
) -> TemplateContext {
    let mut context = TemplateContext::default();
    context.insert("name", Value::String(name.to_string()));
    context.insert("value", Value::String(value.unwrap_or_default().to_string()));
    if let Some(module) = attrs.get("module") {
        context.insert("module", module.clone());
    }
    context.insert("gmaps_url", Value::String(gmaps_url));
    for key in ["width", "height"] {
        if let Some(v) = attrs.get(&format!("map_size.{key}")) {
            context.insert(key, v.clone());
        }
    }
    for (key, v) in attrs.iter() {
        match key.as_str() {
            "gmaps_url" | "map_size" | "module" => {}
            _ => context.insert(key, v.clone()),
        }
    }
    context
}
