//! gmaps-widget - a Google-Maps point editor widget for admin forms
//!
//! This library replaces a default 2D geometry editor with an interactive
//! map. It merges layered widget configuration, formats it into a
//! script-embeddable template context, computes the client-side resource
//! list, and hands markup production to a pluggable template renderer.
//!
//! # Example
//!
//! ```rust
//! use gmaps_widget::{GmapsWidget, WidgetConfig};
//! use serde_json::json;
//!
//! let overrides = WidgetConfig::from_value(json!({"map_size": {"width": 800}}));
//! let widget = GmapsWidget::with_attrs(&overrides);
//!
//! let context = widget.render("location", None, None);
//! assert_eq!(context.get_str("width"), Some("800px"));
//! assert_eq!(context.get_str("height"), Some("400px"));
//! assert_eq!(context.get_str("module"), Some("gmaps_location"));
//! ```

pub mod admin;
pub mod config;
pub mod error;
pub mod template;
pub mod widget;

pub use admin::{GeometryField, GeometryKind, GmapsAdmin};
pub use config::{deep_merge, WidgetConfig};
pub use error::WidgetError;
pub use template::{MapTemplate, TemplateRenderer};
pub use widget::{GmapsWidget, Media, TemplateContext};

/// Render one point field to markup with the default widget and template
///
/// Convenience for hosts that don't need custom configuration or their own
/// renderer.
///
/// # Example
///
/// ```rust
/// let html = gmaps_widget::render_point_field("location", Some("POINT (30 10)"));
/// assert!(html.contains("gmaps_location"));
/// assert!(html.contains("POINT (30 10)"));
/// ```
pub fn render_point_field(name: &str, value: Option<&str>) -> String {
    let context = GmapsWidget::new().render(name, value, None);
    MapTemplate::default().render(&context)
}
