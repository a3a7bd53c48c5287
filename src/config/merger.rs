//! Deep merge for layered YAML configuration.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely
//! - Null values in the overlay delete the key from the base
//! - Scalars in the overlay replace scalars in the base

use serde_yaml::Value;

/// Deep merge two YAML values. The overlay wins at the point of conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Merge configs in order (later overrides earlier).
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, next| {
            deep_merge(&acc, next)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn nested_mappings_merge() {
        let base = yaml("catalog:\n  url: https://a\n  timeout_secs: 10\n");
        let overlay = yaml("catalog:\n  url: https://b\n");
        let merged = deep_merge(&base, &overlay);
        assert_eq!(merged["catalog"]["url"], yaml("https://b"));
        assert_eq!(merged["catalog"]["timeout_secs"], yaml("10"));
    }

    #[test]
    fn sequences_are_replaced() {
        let base = yaml("requires: [node, npm]\n");
        let overlay = yaml("requires: [git]\n");
        let merged = deep_merge(&base, &overlay);
        assert_eq!(merged["requires"], yaml("[git]"));
    }

    #[test]
    fn null_removes_key() {
        let base = yaml("app_name: demo\noutput_dir: dist\n");
        let overlay = yaml("app_name: ~\n");
        let merged = deep_merge(&base, &overlay);
        assert!(merged.get("app_name").is_none());
        assert_eq!(merged["output_dir"], yaml("dist"));
    }

    #[test]
    fn merge_configs_empty_is_empty_mapping() {
        let merged = merge_configs(&[]);
        assert!(merged.as_mapping().is_some_and(|m| m.is_empty()));
    }
}
