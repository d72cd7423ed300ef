//! Attribute formatting for script-embeddable output
//!
//! Converts a merged attribute set into the form the template consumes:
//! pixel-suffixed dimensions, JSON-encoded sub-configs, the computed
//! map-service URL, and the module identifier that binds the rendered DOM
//! element to its client-side initialization.

use serde_json::Value;

use crate::config::WidgetConfig;

/// Attribute keys under `map_size` that get a pixel suffix
const PIXEL_KEYS: &[&str] = &["width", "height"];

/// Configuration groups embedded into the page as one JSON literal each
const JSON_GROUPS: &[&str] = &["map_start", "behavior", "address"];

/// Append a `px` suffix to integer and digit-string dimensions
///
/// Anything else (already-suffixed strings, floats, percentages) passes
/// through unchanged; a malformed dimension shows up in the page rather than
/// erroring server-side.
pub fn pixel_value(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(format!("{n}px")),
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            Some(format!("{s}px"))
        }
        _ => None,
    }
}

/// Derive the client-side module identifier for a field name
///
/// Dashes are invalid in a script identifier, so they become underscores:
/// `"point-location"` binds as `gmaps_point_location`.
pub fn module_identifier(field_name: &str) -> String {
    format!("gmaps_{}", field_name.replace('-', "_"))
}

/// Compute the map-service script URL from the `gmaps_url` group
///
/// The sensor flag is always appended, lower-cased; the API key parameter is
/// appended only when a non-empty key is configured.
pub fn gmaps_url(attrs: &WidgetConfig) -> String {
    let base = attrs.get_str("gmaps_url.base").unwrap_or_default();
    let sensor = match attrs.get("gmaps_url.sensor") {
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::String(s)) => s.to_lowercase(),
        Some(other) => other.to_string().to_lowercase(),
        None => String::new(),
    };
    let key = attrs.get_str("gmaps_url.key").unwrap_or_default();

    let mut url = format!("{base}&sensor={sensor}");
    if !key.is_empty() {
        url.push_str("&key=");
        url.push_str(key);
    }
    url
}

/// Format a merged attribute set in place for template consumption
///
/// Applies the pixel suffix to `map_size` dimensions and replaces the
/// viewport/behavior/address groups with their JSON-serialized string form.
pub fn format_attrs(attrs: &mut WidgetConfig) {
    for key in PIXEL_KEYS {
        let path = format!("map_size.{key}");
        if let Some(px) = attrs.get(&path).and_then(pixel_value) {
            attrs.set(&path, Value::String(px));
        }
    }

    for group in JSON_GROUPS {
        if let Some(value) = attrs.get(group) {
            let encoded =
                serde_json::to_string(value).expect("attribute values serialize to JSON");
            attrs.set(group, Value::String(encoded));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_pixel_value_integer() {
        assert_eq!(pixel_value(&json!(600)), Some("600px".to_string()));
    }

    #[test]
    fn test_pixel_value_digit_string() {
        assert_eq!(pixel_value(&json!("600")), Some("600px".to_string()));
    }

    #[test]
    fn test_pixel_value_already_suffixed() {
        assert_eq!(pixel_value(&json!("600px")), None);
    }

    #[test]
    fn test_pixel_value_non_numeric() {
        assert_eq!(pixel_value(&json!("auto")), None);
        assert_eq!(pixel_value(&json!(59.5)), None);
        assert_eq!(pixel_value(&json!("")), None);
        assert_eq!(pixel_value(&json!(true)), None);
    }

    #[test]
    fn test_module_identifier() {
        assert_eq!(module_identifier("location"), "gmaps_location");
        assert_eq!(module_identifier("point-location"), "gmaps_point_location");
    }

    #[test]
    fn test_gmaps_url_without_key() {
        let attrs = WidgetConfig::defaults();
        insta::assert_snapshot!(
            gmaps_url(&attrs),
            @"https://maps.googleapis.com/maps/api/js?libraries=drawing&sensor=false"
        );
    }

    #[test]
    fn test_gmaps_url_with_key() {
        let mut attrs = WidgetConfig::defaults();
        attrs.set("gmaps_url.key", json!("ABC123"));
        let url = gmaps_url(&attrs);
        assert!(url.ends_with("&sensor=false&key=ABC123"));
        assert_eq!(url.matches("&key=").count(), 1);
    }

    #[test]
    fn test_gmaps_url_sensor_true() {
        let mut attrs = WidgetConfig::defaults();
        attrs.set("gmaps_url.sensor", json!(true));
        assert!(gmaps_url(&attrs).contains("&sensor=true"));
    }

    #[test]
    fn test_gmaps_url_string_sensor_lowercased() {
        let mut attrs = WidgetConfig::defaults();
        attrs.set("gmaps_url.sensor", json!("False"));
        assert!(gmaps_url(&attrs).contains("&sensor=false"));
    }

    #[test]
    fn test_format_attrs_pixel_suffix() {
        let mut attrs = WidgetConfig::defaults();
        format_attrs(&mut attrs);
        assert_eq!(attrs.get("map_size.width"), Some(&json!("600px")));
        assert_eq!(attrs.get("map_size.height"), Some(&json!("400px")));
    }

    #[test]
    fn test_format_attrs_json_groups_round_trip() {
        let mut attrs = WidgetConfig::defaults();
        let before = attrs.get("map_start").cloned().expect("map_start default");
        format_attrs(&mut attrs);
        let encoded = attrs
            .get_str("map_start")
            .expect("map_start encoded as a string");
        let decoded: serde_json::Value =
            serde_json::from_str(encoded).expect("encoded map_start is valid JSON");
        assert_eq!(decoded, before);
    }

    #[test]
    fn test_format_attrs_leaves_malformed_dimension() {
        let mut attrs = WidgetConfig::defaults();
        attrs.set("map_size.width", json!("wide"));
        format_attrs(&mut attrs);
        assert_eq!(attrs.get("map_size.width"), Some(&json!("wide")));
    }

    #[test]
    fn test_format_attrs_missing_group_is_skipped() {
        let mut attrs = WidgetConfig::from_value(json!({"map_size": {"width": 600}}));
        format_attrs(&mut attrs);
        assert_eq!(attrs.get("address"), None);
    }
}
