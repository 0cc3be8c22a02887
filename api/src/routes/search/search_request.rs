use serde::Deserialize;

use crate::error_handler::AppError;

/// Request payload for POST /search.
///
/// Fields are optional at the serde level so that a missing key produces
/// our own 400 instead of a generic extractor rejection.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Free-text query.
    #[serde(default)]
    pub query: Option<String>,
    /// Value the stored `content_type` field must equal (e.g. "text", "image").
    #[serde(default)]
    pub content_type: Option<String>,
}

impl SearchRequest {
    /// Returns `(query, content_type)` or a bad request naming the missing fields.
    pub fn into_parts(self) -> Result<(String, String), AppError> {
        match (self.query, self.content_type) {
            (Some(query), Some(content_type)) => Ok((query, content_type)),
            (query, content_type) => {
                let missing: Vec<&str> = [
                    query.is_none().then_some("query"),
                    content_type.is_none().then_some("content_type"),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(AppError::BadRequest(format!(
                    "missing required field(s): {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> SearchRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn both_fields_present() {
        let (q, ct) = parse(r#"{"query":"alpha","content_type":"doc"}"#)
            .into_parts()
            .unwrap();
        assert_eq!(q, "alpha");
        assert_eq!(ct, "doc");
    }

    #[test]
    fn empty_strings_count_as_present() {
        let (q, ct) = parse(r#"{"query":"","content_type":""}"#)
            .into_parts()
            .unwrap();
        assert!(q.is_empty() && ct.is_empty());
    }

    #[test]
    fn missing_and_null_fields_are_named() {
        let err = parse(r#"{"query":"alpha"}"#).into_parts().unwrap_err();
        assert_eq!(
            err.to_string(),
            "bad request: missing required field(s): content_type"
        );

        let err = parse(r#"{"query":null}"#).into_parts().unwrap_err();
        assert_eq!(
            err.to_string(),
            "bad request: missing required field(s): query, content_type"
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let req = parse(r#"{"query":"a","content_type":"b","page":2}"#);
        assert!(req.into_parts().is_ok());
    }
}
