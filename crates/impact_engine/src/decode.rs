use std::collections::HashSet;

use impact_core::{Impact, ImpactId};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Json(String),
    #[error("expected an array of impacts")]
    NotAnArray,
    #[error("impact at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("impact at index {index} repeats id {id}")]
    DuplicateId { index: usize, id: ImpactId },
}

/// Wire shape of one impact. `impact` also accepts `text`; a missing or null
/// highlight reads as empty.
#[derive(Debug, Deserialize)]
struct RawImpact {
    id: i64,
    entity: String,
    #[serde(default)]
    highlight: Option<String>,
    #[serde(alias = "text")]
    impact: String,
}

impl RawImpact {
    fn into_impact(self) -> Result<Impact, String> {
        let id = ImpactId::try_from(self.id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| format!("id {} is not a positive integer", self.id))?;
        if self.entity.trim().is_empty() {
            return Err("entity is empty".into());
        }
        if self.impact.trim().is_empty() {
            return Err("impact text is empty".into());
        }
        Ok(Impact {
            id,
            entity: self.entity,
            highlight: self.highlight.unwrap_or_default(),
            text: self.impact,
        })
    }
}

/// Decode a JSON array of impacts, rejecting the whole payload on the first bad record.
pub fn decode_impacts(bytes: &[u8]) -> Result<Vec<Impact>, DecodeError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::Json(err.to_string()))?;
    let Value::Array(items) = value else {
        return Err(DecodeError::NotAnArray);
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut impacts = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let impact =
            decode_record(item).map_err(|reason| DecodeError::InvalidRecord { index, reason })?;
        if !seen.insert(impact.id) {
            return Err(DecodeError::DuplicateId {
                index,
                id: impact.id,
            });
        }
        impacts.push(impact);
    }
    Ok(impacts)
}

/// Whether `value` has the shape and content of a single impact.
pub fn is_valid_impact(value: &Value) -> bool {
    decode_record(value.clone()).is_ok()
}

fn decode_record(value: Value) -> Result<Impact, String> {
    serde_json::from_value::<RawImpact>(value)
        .map_err(|err| err.to_string())?
        .into_impact()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_well_formed_record() {
        assert!(is_valid_impact(&json!({
            "id": 3, "entity": "WFP", "highlight": "", "impact": "Meals served"
        })));
    }

    #[test]
    fn rejects_wrong_types_and_empty_fields() {
        let rejected = [
            json!("not an object"),
            json!({"id": "3", "entity": "WFP", "impact": "x"}),
            json!({"id": 0, "entity": "WFP", "impact": "x"}),
            json!({"id": -4, "entity": "WFP", "impact": "x"}),
            json!({"id": 1.5, "entity": "WFP", "impact": "x"}),
            json!({"id": 1, "entity": " ", "impact": "x"}),
            json!({"id": 1, "entity": "WFP", "impact": ""}),
            json!({"id": 1, "entity": "WFP"}),
        ];
        for value in &rejected {
            assert!(!is_valid_impact(value), "{value}");
        }
    }

    #[test]
    fn text_alias_and_null_highlight_are_accepted() {
        let body = br#"[{"id": 1, "entity": "UNDP", "highlight": null, "text": "t"}]"#;
        assert_eq!(
            decode_impacts(body).unwrap(),
            vec![Impact::new(1, "UNDP", "", "t")]
        );
    }
}
