//! Per-entity attribute transform.
//!
//! Schema-agnostic by construction: the transform never validates or
//! whitelists keys. It applies one narrow convention-based rule to the
//! keys that represent registry references and is a strict pass-through
//! for everything else, which is what keeps the tool working when the
//! host adds or renames attributes.

use tracing::{debug, warn};

use crate::traits::host::EditorHost;
use crate::types::config::PipelineConfig;
use crate::types::value::{AttrValue, AttributeBag};

/// Transform an entity's attribute bag for transmission.
///
/// Every key in the input appears in the output, in the same order.
/// Reference-suffixed keys with a non-null value are resolved through the
/// host registry and replaced by the target's display name; a dangling
/// reference becomes null. All other values pass through unchanged.
///
/// This never fails: a reference that cannot be resolved is a defined
/// outcome, not an error, and must not take the whole batch down with it.
pub async fn transform_attributes<H: EditorHost>(
    host: &H,
    attributes: &AttributeBag,
    config: &PipelineConfig,
) -> AttributeBag {
    let mut out = AttributeBag::with_capacity(attributes.len());

    for (key, value) in attributes {
        let transformed = if config.is_reference_key(key) && !value.is_null() {
            resolve_display_name(host, key, value).await
        } else {
            value.clone()
        };
        out.insert(key.clone(), transformed);
    }

    out
}

/// Resolve a reference-suffixed value to its target's display name.
async fn resolve_display_name<H: EditorHost>(
    host: &H,
    key: &str,
    value: &AttrValue,
) -> AttrValue {
    let Some(id) = value.reference_id() else {
        // A boolean under a reference-suffixed key names nothing in the
        // registry; treat it like a dangling reference.
        debug!(key, "no reference id derivable from value, emitting null");
        return AttrValue::Null;
    };

    match host.resolve_reference(&id).await {
        Ok(Some(resolved)) => AttrValue::String(resolved.name),
        Ok(None) => {
            debug!(key, id = %id, "dangling reference, emitting null");
            AttrValue::Null
        }
        Err(e) => {
            warn!(key, id = %id, error = %e, "registry lookup failed, emitting null");
            AttrValue::Null
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockEditor;
    use crate::types::value::ReferenceId;

    fn bag(entries: Vec<(&str, AttrValue)>) -> AttributeBag {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[tokio::test]
    async fn test_resolved_reference_becomes_display_name() {
        let host = MockEditor::new().with_asset("tex-1", "brick.png");
        let input = bag(vec![("diffuseMap", AttrValue::from("tex-1"))]);

        let out = transform_attributes(&host, &input, &PipelineConfig::default()).await;

        assert_eq!(out["diffuseMap"], AttrValue::from("brick.png"));
    }

    #[tokio::test]
    async fn test_dangling_reference_becomes_null() {
        let host = MockEditor::new();
        let input = bag(vec![("diffuseMap", AttrValue::from("tex-missing"))]);

        let out = transform_attributes(&host, &input, &PipelineConfig::default()).await;

        assert_eq!(out["diffuseMap"], AttrValue::Null);
    }

    #[tokio::test]
    async fn test_null_reference_skips_lookup() {
        let host = MockEditor::new().with_asset("tex-1", "brick.png");
        let input = bag(vec![("diffuseMap", AttrValue::Null)]);

        let out = transform_attributes(&host, &input, &PipelineConfig::default()).await;

        assert_eq!(out["diffuseMap"], AttrValue::Null);
        assert!(host.resolve_calls().is_empty());
    }

    #[tokio::test]
    async fn test_non_reference_keys_pass_through() {
        let host = MockEditor::new();
        let input = bag(vec![
            ("opacity", AttrValue::from(0.5)),
            ("shininess", AttrValue::from(32i64)),
            ("twoSided", AttrValue::from(true)),
            ("label", AttrValue::from("matte")),
            ("cleared", AttrValue::Null),
        ]);

        let out = transform_attributes(&host, &input, &PipelineConfig::default()).await;

        assert_eq!(out, input);
        assert!(host.resolve_calls().is_empty());
    }

    #[tokio::test]
    async fn test_numeric_reference_id_resolves() {
        let host = MockEditor::new().with_asset("42", "stone.png");
        let input = bag(vec![("normalMap", AttrValue::from(42i64))]);

        let out = transform_attributes(&host, &input, &PipelineConfig::default()).await;

        assert_eq!(out["normalMap"], AttrValue::from("stone.png"));
        assert_eq!(host.resolve_calls(), vec![ReferenceId::new("42")]);
    }

    #[tokio::test]
    async fn test_boolean_under_reference_key_becomes_null() {
        let host = MockEditor::new();
        let input = bag(vec![("cubeMap", AttrValue::from(true))]);

        let out = transform_attributes(&host, &input, &PipelineConfig::default()).await;

        assert_eq!(out["cubeMap"], AttrValue::Null);
        assert!(host.resolve_calls().is_empty());
    }

    #[tokio::test]
    async fn test_key_order_preserved() {
        let host = MockEditor::new().with_asset("tex-1", "brick.png");
        let input = bag(vec![
            ("zAttr", AttrValue::from(1i64)),
            ("diffuseMap", AttrValue::from("tex-1")),
            ("aAttr", AttrValue::from(2i64)),
        ]);

        let out = transform_attributes(&host, &input, &PipelineConfig::default()).await;

        let keys: Vec<_> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zAttr", "diffuseMap", "aAttr"]);
    }

    #[tokio::test]
    async fn test_transform_is_repeatable() {
        let host = MockEditor::new().with_asset("tex-1", "brick.png");
        let input = bag(vec![
            ("diffuseMap", AttrValue::from("tex-1")),
            ("opacity", AttrValue::from(0.5)),
        ]);
        let before = input.clone();

        let first = transform_attributes(&host, &input, &PipelineConfig::default()).await;
        let second = transform_attributes(&host, &input, &PipelineConfig::default()).await;

        assert_eq!(first, second);
        assert_eq!(input, before); // source snapshot untouched
    }

    mod pass_through_property {
        use super::*;
        use proptest::prelude::*;

        fn scalar_value() -> impl Strategy<Value = AttrValue> {
            prop_oneof![
                Just(AttrValue::Null),
                any::<bool>().prop_map(AttrValue::from),
                any::<i64>().prop_map(AttrValue::from),
                "[a-zA-Z0-9 ._-]{0,16}".prop_map(|s| AttrValue::from(s.as_str())),
            ]
        }

        fn non_reference_bag() -> impl Strategy<Value = AttributeBag> {
            prop::collection::vec(("[a-z][a-zA-Z0-9]{0,11}", scalar_value()), 0..8).prop_map(
                |entries| {
                    entries
                        .into_iter()
                        .filter(|(k, _)| !k.ends_with("Map"))
                        .collect()
                },
            )
        }

        proptest! {
            #[test]
            fn transform_is_identity_without_reference_keys(input in non_reference_bag()) {
                let rt = tokio::runtime::Builder::new_current_thread()
                    .build()
                    .unwrap();
                let host = MockEditor::new();
                let config = PipelineConfig::default();

                let out = rt.block_on(transform_attributes(&host, &input, &config));

                prop_assert_eq!(out, input);
                prop_assert!(host.resolve_calls().is_empty());
            }
        }
    }
}
