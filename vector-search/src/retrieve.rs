//! Turning Qdrant scored points into [`RawMatch`] records.

use qdrant_client::qdrant::point_id::PointIdOptions;
use qdrant_client::qdrant::{PointId, ScoredPoint};
use serde_json::{Map, Value};

use crate::record::{DOCUMENT_KEY, RawMatch};

/// Splits a scored point into id, document text, metadata and score.
///
/// The `document` payload key becomes [`RawMatch::document`] (empty when
/// absent or not a string); all remaining keys are kept as metadata with
/// nested values preserved.
pub fn scored_point_to_match(sp: ScoredPoint) -> RawMatch {
    let mut metadata: Map<String, Value> = sp
        .payload
        .into_iter()
        .map(|(k, v)| (k, v.into_json()))
        .collect();

    let document = match metadata.remove(DOCUMENT_KEY) {
        Some(Value::String(s)) => s,
        _ => String::new(),
    };

    RawMatch {
        id: point_id_to_json(sp.id),
        document,
        metadata,
        score: sp.score,
    }
}

/// Numeric ids become JSON numbers, UUIDs become strings.
fn point_id_to_json(id: Option<PointId>) -> Value {
    match id.and_then(|pid| pid.point_id_options) {
        Some(PointIdOptions::Num(n)) => Value::from(n),
        Some(PointIdOptions::Uuid(s)) => Value::String(s),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdrant_client::qdrant::Value as QValue;
    use serde_json::json;
    use std::collections::HashMap;

    fn point(id: PointIdOptions, payload: Vec<(&str, QValue)>, score: f32) -> ScoredPoint {
        ScoredPoint {
            id: Some(PointId {
                point_id_options: Some(id),
            }),
            payload: payload
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<HashMap<_, _>>(),
            score,
            ..Default::default()
        }
    }

    #[test]
    fn document_is_split_from_metadata() {
        let m = scored_point_to_match(point(
            PointIdOptions::Num(1),
            vec![
                ("document", QValue::from("alpha doc")),
                ("lang", QValue::from("en")),
                ("content_type", QValue::from("text")),
            ],
            0.9,
        ));

        assert_eq!(m.id, json!(1));
        assert_eq!(m.document, "alpha doc");
        assert_eq!(m.score, 0.9);
        assert_eq!(
            Value::Object(m.metadata),
            json!({"lang": "en", "content_type": "text"})
        );
    }

    #[test]
    fn uuid_ids_render_as_strings() {
        let m = scored_point_to_match(point(
            PointIdOptions::Uuid("5c56c793-69f3-4fbf-87e6-c4bf54c28c26".into()),
            vec![("document", QValue::from("x"))],
            0.1,
        ));
        assert_eq!(m.id, json!("5c56c793-69f3-4fbf-87e6-c4bf54c28c26"));
        assert!(m.metadata.is_empty());
    }

    #[test]
    fn scalar_metadata_types_survive() {
        let m = scored_point_to_match(point(
            PointIdOptions::Num(7),
            vec![
                ("views", QValue::from(42_i64)),
                ("rating", QValue::from(4.5_f64)),
                ("public", QValue::from(true)),
            ],
            0.5,
        ));
        assert_eq!(m.document, "");
        assert_eq!(
            Value::Object(m.metadata),
            json!({"views": 42, "rating": 4.5, "public": true})
        );
    }

    #[test]
    fn missing_id_is_null() {
        let m = scored_point_to_match(ScoredPoint::default());
        assert_eq!(m.id, Value::Null);
        assert_eq!(m.document, "");
    }
}
