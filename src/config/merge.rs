//! Recursive merge of widget attribute mappings

use serde_json::{Map, Value};

/// Merge `update` into `target`
///
/// When both sides hold a mapping at the same key, the mappings merge
/// recursively (an absent or scalar target slot becomes an empty mapping
/// first). Every other value type replaces the target outright, lists
/// included. Merge never fails; for conflicting scalars the last writer wins.
pub fn deep_merge(target: &mut Value, update: &Value) {
    if let (Value::Object(target_map), Value::Object(update_map)) = (&mut *target, update) {
        deep_merge_map(target_map, update_map);
    } else {
        *target = update.clone();
    }
}

pub(crate) fn deep_merge_map(target: &mut Map<String, Value>, update: &Map<String, Value>) {
    for (key, update_value) in update {
        match update_value {
            Value::Object(update_inner) => {
                let slot = target
                    .entry(key)
                    .or_insert_with(|| Value::Object(Map::new()));
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                if let Some(target_inner) = slot.as_object_mut() {
                    deep_merge_map(target_inner, update_inner);
                }
            }
            other => {
                target.insert(key.clone(), other.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_scalar_last_writer_wins() {
        let mut target = json!({"zoom": 2});
        deep_merge(&mut target, &json!({"zoom": 12}));
        assert_eq!(target, json!({"zoom": 12}));
    }

    #[test]
    fn test_nested_merge_preserves_untouched_keys() {
        let mut target = json!({"map_size": {"width": 600, "height": 400}});
        deep_merge(&mut target, &json!({"map_size": {"width": 800}}));
        assert_eq!(target, json!({"map_size": {"width": 800, "height": 400}}));
    }

    #[test]
    fn test_nested_merge_adds_new_keys() {
        let mut target = json!({"behavior": {"debug": false}});
        deep_merge(&mut target, &json!({"behavior": {"scrollable": true}}));
        assert_eq!(
            target,
            json!({"behavior": {"debug": false, "scrollable": true}})
        );
    }

    #[test]
    fn test_mapping_over_scalar_recurses_into_fresh_map() {
        let mut target = json!({"map_size": 600});
        deep_merge(&mut target, &json!({"map_size": {"width": 800}}));
        assert_eq!(target, json!({"map_size": {"width": 800}}));
    }

    #[test]
    fn test_mapping_at_absent_key() {
        let mut target = json!({});
        deep_merge(&mut target, &json!({"address": {"geocode": false}}));
        assert_eq!(target, json!({"address": {"geocode": false}}));
    }

    #[test]
    fn test_lists_replace_wholesale() {
        let mut target = json!({"layers": [1, 2, 3]});
        deep_merge(&mut target, &json!({"layers": [4]}));
        assert_eq!(target, json!({"layers": [4]}));
    }

    #[test]
    fn test_scalar_replaces_mapping() {
        let mut target = json!({"map_size": {"width": 600}});
        deep_merge(&mut target, &json!({"map_size": "auto"}));
        assert_eq!(target, json!({"map_size": "auto"}));
    }

    #[test]
    fn test_deep_recursion() {
        let mut target = json!({"a": {"b": {"c": 1, "d": 2}}});
        deep_merge(&mut target, &json!({"a": {"b": {"c": 9}}}));
        assert_eq!(target, json!({"a": {"b": {"c": 9, "d": 2}}}));
    }

    #[test]
    fn test_ordered_sequence_of_updates() {
        let mut target = json!({"map_start": {"zoom": 2, "lat": 0}});
        for update in [
            json!({"map_start": {"zoom": 5}}),
            json!({"map_start": {"zoom": 8, "lng": -46.6}}),
        ] {
            deep_merge(&mut target, &update);
        }
        assert_eq!(
            target,
            json!({"map_start": {"zoom": 8, "lat": 0, "lng": -46.6}})
        );
    }
}
