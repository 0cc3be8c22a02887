use serde::Serialize;
use serde_json::{Map, Value};
use vector_search::RawMatch;

/// One element of the POST /search response array.
///
/// Exactly `id`, `document` and `metadata`; the score and anything else the
/// store attaches are dropped.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub id: Value,
    pub document: String,
    pub metadata: Map<String, Value>,
}

impl From<RawMatch> for SearchResult {
    fn from(m: RawMatch) -> Self {
        Self {
            id: m.id,
            document: m.document,
            metadata: m.metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn projection_drops_score() {
        let raw = RawMatch {
            id: json!(1),
            document: "alpha doc".into(),
            metadata: json!({"lang": "en"}).as_object().cloned().unwrap(),
            score: 0.9,
        };

        let out = serde_json::to_value(SearchResult::from(raw)).unwrap();
        assert_eq!(
            out,
            json!({"id": 1, "document": "alpha doc", "metadata": {"lang": "en"}})
        );
    }
}
