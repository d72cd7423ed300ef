//! Layered widget configuration
//!
//! Widget attributes are grouped mappings (map-service URL settings, map
//! size, initial viewport, behavior flags, address options). Overrides are
//! partial configurations applied over the built-in defaults with a deep
//! merge: nested mappings merge recursively, scalars and lists replace.
//!
//! Keys are not validated against a schema; unknown keys pass through to the
//! template context untouched so host projects can feed extra variables to
//! their own templates.

mod merge;

pub use merge::deep_merge;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::WidgetError;

/// A widget attribute set: configuration-group name to scalar or nested map.
///
/// Internally a JSON object tree with insertion order preserved, so rendered
/// output is deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WidgetConfig(Map<String, Value>);

impl WidgetConfig {
    /// Create an empty configuration (useful as an override source)
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in default attributes for the map widget
    ///
    /// Constructed fresh on every call; callers own their copy and nothing
    /// process-wide is ever mutated.
    pub fn defaults() -> Self {
        let Value::Object(map) = json!({
            "gmaps_url": {
                "base": "https://maps.googleapis.com/maps/api/js?libraries=drawing",
                "sensor": false,
                "key": "",
            },
            "map_size": {
                "width": 600,
                "height": 400,
            },
            "map_start": {
                "zoom": 2,
                "lat": 0,
                "lng": 0,
                "type": "ROADMAP",
            },
            "behavior": {
                "display_wkt": false,
                "max_zoom": false,
                "min_zoom": false,
                "max_extent": false,
                "modifiable": false,
                "scrollable": false,
                "point_zoom": 12,
                "debug": false,
            },
            "address": {
                "field_name": null,
                "geocode": true,
                "reverse_geocode": false,
            },
        }) else {
            unreachable!("default attributes are a JSON object");
        };
        Self(map)
    }

    /// Build a configuration from a JSON value
    ///
    /// Non-object values are coerced to an empty configuration rather than
    /// erroring; the merge pipeline only ever deals in objects.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Parse overrides from JSON text
    pub fn from_json_str(content: &str) -> Result<Self, WidgetError> {
        let value: Value = serde_json::from_str(content)?;
        Ok(Self::from_value(value))
    }

    /// Parse overrides from TOML text
    ///
    /// TOML tables map onto nested configuration groups, so a host project
    /// can keep widget overrides next to its other settings files.
    pub fn from_toml_str(content: &str) -> Result<Self, WidgetError> {
        let table: toml::Table = toml::from_str(content)?;
        let value = serde_json::to_value(table)?;
        Ok(Self::from_value(value))
    }

    /// Load overrides from a TOML file
    pub fn from_toml_file(path: &std::path::Path) -> Result<Self, WidgetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Look up a value by dotted path, e.g. `"map_size.width"`
    pub fn get(&self, dotted_path: &str) -> Option<&Value> {
        let mut segments = dotted_path.split('.');
        let mut cur = self.0.get(segments.next()?)?;
        for segment in segments {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    /// Look up a string value by dotted path
    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.get(dotted_path)?.as_str()
    }

    /// Look up a boolean value by dotted path
    pub fn get_bool(&self, dotted_path: &str) -> Option<bool> {
        self.get(dotted_path)?.as_bool()
    }

    /// Set a value by dotted path, creating intermediate groups as needed
    ///
    /// A non-map value sitting where an intermediate group is needed gets
    /// replaced by an empty group, same as the merge rules.
    pub fn set(&mut self, dotted_path: &str, value: Value) {
        let mut cur = &mut self.0;
        let mut segments = dotted_path.split('.').peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                cur.insert(segment.to_string(), value);
                return;
            }
            let slot = cur
                .entry(segment)
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            match slot.as_object_mut() {
                Some(next) => cur = next,
                None => return,
            }
        }
    }

    /// Apply one override on top of this configuration
    ///
    /// Nested mappings merge recursively; scalars and lists replace. Last
    /// writer wins, never an error.
    pub fn merge(&mut self, overrides: &WidgetConfig) {
        merge::deep_merge_map(&mut self.0, &overrides.0);
    }

    /// Apply an ordered sequence of overrides; later sources take precedence
    pub fn merge_all<'a, I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = &'a WidgetConfig>,
    {
        for o in overrides {
            self.merge(o);
        }
    }

    /// Consuming variant of [`merge`](Self::merge) for builder-style layering
    pub fn merged(mut self, overrides: &WidgetConfig) -> Self {
        self.merge(overrides);
        self
    }

    /// Iterate over the top-level configuration groups
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// View the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Mutable view of the underlying JSON object
    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }
}

impl From<Value> for WidgetConfig {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
