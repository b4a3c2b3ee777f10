use serde_json::Value;

/// Merge `source` into `target`, recursing through nested objects.
///
/// At each key the decision is shape-driven: when both sides hold a JSON
/// object, recurse; otherwise the source value replaces the target value
/// (object-to-non-object replacements included, in both directions). Arrays
/// and every other
/// non-object container replace wholesale, never element-wise.
///
/// This is what makes partial saves safe: merging one questionnaire part
/// into a record leaves every sibling field, at any depth, untouched.
pub fn deep_merge(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, source_value) in source_map {
                match target_map.get_mut(key) {
                    Some(target_value)
                        if target_value.is_object() && source_value.is_object() =>
                    {
                        deep_merge(target_value, source_value);
                    }
                    _ => {
                        target_map.insert(key.clone(), source_value.clone());
                    }
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preserves_untouched_siblings_at_depth() {
        let mut target = json!({
            "technical_session": {
                "part1_overview": { "overview_history": "old", "overview_alignment": "keep" },
                "part2_technical_stack": { "tech_languages_versions": "Python 3.11" }
            }
        });
        let partial = json!({
            "technical_session": {
                "part1_overview": { "overview_history": "x" }
            }
        });

        deep_merge(&mut target, &partial);

        assert_eq!(
            target["technical_session"]["part1_overview"]["overview_history"],
            "x"
        );
        assert_eq!(
            target["technical_session"]["part1_overview"]["overview_alignment"],
            "keep"
        );
        assert_eq!(
            target["technical_session"]["part2_technical_stack"]["tech_languages_versions"],
            "Python 3.11"
        );
    }

    #[test]
    fn last_write_wins_on_leaves() {
        let mut target = json!({ "workstream": "a" });
        deep_merge(&mut target, &json!({ "workstream": "b" }));
        deep_merge(&mut target, &json!({ "workstream": "c" }));
        assert_eq!(target["workstream"], "c");
    }

    #[test]
    fn new_keys_are_inserted() {
        let mut target = json!({ "a": 1 });
        deep_merge(&mut target, &json!({ "b": { "c": 2 } }));
        assert_eq!(target, json!({ "a": 1, "b": { "c": 2 } }));
    }

    #[test]
    fn object_replaces_non_object() {
        let mut target = json!({ "field": "text" });
        deep_merge(&mut target, &json!({ "field": { "nested": true } }));
        assert_eq!(target["field"], json!({ "nested": true }));
    }

    #[test]
    fn non_object_replaces_object() {
        let mut target = json!({ "field": { "nested": true } });
        deep_merge(&mut target, &json!({ "field": "text" }));
        assert_eq!(target["field"], "text");
    }

    #[test]
    fn arrays_replace_wholesale() {
        let mut target = json!({ "quotes": [{ "speaker": "a" }, { "speaker": "b" }] });
        deep_merge(&mut target, &json!({ "quotes": [{ "speaker": "c" }] }));
        assert_eq!(target["quotes"], json!([{ "speaker": "c" }]));
    }

    #[test]
    fn empty_source_is_a_no_op() {
        let mut target = json!({ "a": { "b": 1 } });
        let before = target.clone();
        deep_merge(&mut target, &json!({}));
        assert_eq!(target, before);
    }
}
