//! Bundle Module Tests
//!
//! Covers wire decoding, the empty-bundle rule, and violation aggregation.

#[cfg(test)]
mod tests {
    use crate::bundle::{Bundle, BundleError, SchemaValidator, StructuralValidator};
    use serde_json::json;

    fn malware_object(id: &str) -> serde_json::Value {
        json!({
            "id": format!("malware--{}", id),
            "type": "malware",
            "created": "2016-04-06T20:07:09.000Z",
            "modified": "2016-04-06T20:07:09.000Z",
        })
    }

    #[test]
    fn test_decode_valid_bundle() {
        let body = json!({
            "type": "bundle",
            "id": "bundle--5d0092c5-5f74-4287-9642-33f4c354e56d",
            "spec_version": "2.0",
            "objects": [malware_object("31b940d4-6f7f-459a-80ea-9c1f17b5891b")],
        });

        let bundle = Bundle::decode(&serde_json::to_vec(&body).unwrap()).unwrap();
        assert_eq!(bundle.object_type, "bundle");
        assert_eq!(bundle.spec_version, "2.0");
        assert_eq!(bundle.objects.len(), 1);
    }

    #[test]
    fn test_decode_malformed_json() {
        let result = Bundle::decode(b"{not json");
        assert!(matches!(result, Err(BundleError::Decode(_))));
    }

    #[test]
    fn test_validate_accepts_well_formed_objects() {
        let bundle = Bundle::wrap(vec![
            malware_object("31b940d4-6f7f-459a-80ea-9c1f17b5891b"),
            malware_object("0cd35b52-62b5-4c69-8ac1-4a3bb2b8e671"),
        ]);

        assert!(bundle.validate(&StructuralValidator).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_bundle() {
        let bundle = Bundle::wrap(vec![]);
        let result = bundle.validate(&StructuralValidator);
        assert!(matches!(result, Err(BundleError::Empty)));
    }

    #[test]
    fn test_validate_aggregates_every_violation() {
        let bundle = Bundle::wrap(vec![
            json!({"type": "malware"}),
            json!({"id": "indicator--7d1092c5-5f74-4287-9642-33f4c354e56d"}),
        ]);

        match bundle.validate(&StructuralValidator) {
            Err(BundleError::Invalid { messages }) => {
                assert_eq!(messages.len(), 2);
                let rendered = messages.join("; ");
                assert!(rendered.contains("'id'"));
                assert!(rendered.contains("'type'"));
            }
            other => panic!("Expected Invalid, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_structural_validator_rejects_non_objects() {
        let violations = StructuralValidator.validate(&json!("just a string"));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("not a json object"));
    }

    #[test]
    fn test_wrap_builds_fresh_envelope() {
        let bundle = Bundle::wrap(vec![malware_object("31b940d4-6f7f-459a-80ea-9c1f17b5891b")]);
        assert_eq!(bundle.object_type, "bundle");
        assert!(bundle.id.starts_with("bundle--"));
        assert_eq!(bundle.objects.len(), 1);
    }
}
