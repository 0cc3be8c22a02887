//! Filter conversion to Qdrant `Filter`.

use crate::record::MatchFilter;
use qdrant_client::qdrant::{Condition, FieldCondition, Filter, Match, condition::ConditionOneOf};
use tracing::debug;

/// Converts a [`MatchFilter`] into a Qdrant filter with a single `must`
/// keyword-match condition.
pub fn to_qdrant_filter(f: &MatchFilter) -> Filter {
    debug!(key = %f.key, "filters::to_qdrant_filter");

    let condition = Condition {
        condition_one_of: Some(ConditionOneOf::Field(FieldCondition {
            key: f.key.clone(),
            r#match: Some(Match {
                match_value: Some(qdrant_client::qdrant::r#match::MatchValue::Keyword(
                    f.value.clone(),
                )),
            }),
            ..Default::default()
        })),
    };

    Filter {
        must: vec![condition],
        ..Default::default()
    }
}
