//! Admin integration: geometry-field dispatch
//!
//! The single seam with the host admin layer. When a geometry field is a 2D
//! point, the admin swaps its default geometry editor for a map widget
//! carrying the admin's fixed override attributes; every other field kind
//! keeps the standard behavior. Dispatch is a plain builder call, no state
//! is kept across fields.

use crate::config::WidgetConfig;
use crate::widget::GmapsWidget;

/// Geometry column types a form field can be backed by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

/// Descriptor of a geometry-backed form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryField {
    pub name: String,
    pub kind: GeometryKind,
    /// Coordinate dimensionality of the column (2 for x/y, 3 with altitude)
    pub dim: u8,
}

impl GeometryField {
    pub fn new(name: impl Into<String>, kind: GeometryKind, dim: u8) -> Self {
        Self {
            name: name.into(),
            kind,
            dim,
        }
    }

    /// Shorthand for the common 2D point column
    pub fn point(name: impl Into<String>) -> Self {
        Self::new(name, GeometryKind::Point, 2)
    }
}

/// Admin-level widget dispatch with optional fixed override attributes
#[derive(Debug, Clone, Default)]
pub struct GmapsAdmin {
    gmap_attrs: Option<WidgetConfig>,
}

impl GmapsAdmin {
    /// Dispatch with no admin-level overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch that constructs widgets with the given fixed attributes
    pub fn with_attrs(gmap_attrs: WidgetConfig) -> Self {
        Self {
            gmap_attrs: Some(gmap_attrs),
        }
    }

    /// The map widget for a field, or `None` to fall back to the host's
    /// standard widget
    ///
    /// Only 2D point fields get the map editor; the client-side widget
    /// cannot edit altitude or non-point shapes.
    pub fn widget_for(&self, field: &GeometryField) -> Option<GmapsWidget> {
        if field.kind == GeometryKind::Point && field.dim < 3 {
            Some(match &self.gmap_attrs {
                Some(attrs) => GmapsWidget::with_attrs(attrs),
                None => GmapsWidget::new(),
            })
        } else {
            None
        }
    }
}
