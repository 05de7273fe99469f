//! Wire types for communication between the dashboard and the Agent
//!
//! These types mirror the Agent's HTTP contract:
//! - `GET /violations` returns [`ViolationsResponse`]
//! - `POST /analyze_url` takes [`AnalyzeRequest`] and returns [`AnalyzeResponse`]
//! - `POST /register_user` takes [`RegisterUserRequest`]; success is opaque

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Suffix that marks a dynamic field as a violation-category flag.
pub const CATEGORY_SUFFIX: &str = "_violation";

/// A single detected traffic infraction record.
///
/// The Agent stores whatever the vision model emits, so beyond the typed
/// fields every record carries a variable set of keys. Category flags are
/// not fixed at compile time; [`Violation::category_flags`] extracts them
/// from the flattened keys so the view layer never inspects key names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// OCR'd number plate, when the model could read one
    #[serde(default)]
    pub number_plate: Option<String>,

    /// One-sentence description from the vision model
    #[serde(default)]
    pub summary: String,

    /// Numeric seriousness indicator, thresholded for display styling only
    #[serde(default)]
    pub severity_score: f64,

    /// Detected vehicle class ("motorcycle", "car", ...)
    #[serde(default)]
    pub vehicle_type: Option<String>,

    /// Backend document id
    #[serde(default)]
    pub id: Option<String>,

    /// Detection time, when the backend recorded one
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Everything else the Agent sent, keyed by opaque field name
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A violation-category flag extracted from a record's dynamic keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFlag {
    /// The opaque wire key (e.g. "helmet_violation")
    pub key: String,

    /// Display label derived from the key
    pub label: String,

    /// Whether the category was detected
    pub active: bool,
}

impl Violation {
    /// Plate text for display, falling back to "Unknown".
    pub fn plate_label(&self) -> &str {
        self.number_plate.as_deref().unwrap_or("Unknown")
    }

    /// Extract every category flag carried by this record.
    ///
    /// A key is a category flag iff it ends in [`CATEGORY_SUFFIX`]; keys
    /// are otherwise opaque. One flag per matching key, in key order.
    /// `active` follows JSON truthiness: `false`, `null`, `0` and `""`
    /// are falsy, everything else truthy.
    pub fn category_flags(&self) -> Vec<CategoryFlag> {
        self.extra
            .iter()
            .filter(|(key, _)| key.ends_with(CATEGORY_SUFFIX))
            .map(|(key, value)| CategoryFlag {
                key: key.clone(),
                label: key.replace('_', " "),
                active: is_truthy(value),
            })
            .collect()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Response envelope for `GET /violations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationsResponse {
    /// All recorded violations, newest first
    pub violations: Vec<Violation>,
}

/// Request body for `POST /analyze_url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Image URL for the Agent to fetch and analyze; sent as-is
    pub url: String,
}

/// Response envelope for `POST /analyze_url`.
///
/// The analysis payload has no locally enforced schema; the dashboard
/// displays it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Raw analysis blob from the vision model
    pub vision_result: Value,
}

/// Request body for `POST /register_user`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub plate: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_violation_deserializes_with_dynamic_keys() {
        let v: Violation = serde_json::from_value(json!({
            "number_plate": "TN00DEMO",
            "summary": "Detected rider without helmet.",
            "severity_score": 6.5,
            "vehicle_type": "motorcycle",
            "helmet_violation": true,
            "seatbelt_violation": false,
            "triple_riding": true,
        }))
        .unwrap();

        assert_eq!(v.number_plate.as_deref(), Some("TN00DEMO"));
        assert_eq!(v.severity_score, 6.5);
        assert_eq!(v.extra.len(), 3);
        assert_eq!(v.extra["helmet_violation"], json!(true));
    }

    #[test]
    fn test_missing_plate_renders_unknown() {
        let v: Violation = serde_json::from_value(json!({
            "summary": "Plate unreadable.",
        }))
        .unwrap();

        assert!(v.number_plate.is_none());
        assert_eq!(v.plate_label(), "Unknown");
    }

    #[test]
    fn test_category_flags_cover_every_suffixed_key() {
        let v: Violation = serde_json::from_value(json!({
            "summary": "s",
            "helmet_violation": true,
            "seatbelt_violation": false,
            "no_parking_violation": true,
            "triple_riding": true,
            "vehicle_type": "car",
        }))
        .unwrap();

        let flags = v.category_flags();
        let keys: Vec<&str> = flags.iter().map(|f| f.key.as_str()).collect();

        // One flag per suffixed key, in key order; non-suffixed keys ignored
        assert_eq!(
            keys,
            vec!["helmet_violation", "no_parking_violation", "seatbelt_violation"]
        );
        assert!(flags[0].active);
        assert!(flags[1].active);
        assert!(!flags[2].active);
    }

    #[test]
    fn test_category_flag_labels_replace_underscores() {
        let v: Violation = serde_json::from_value(json!({
            "no_parking_violation": true,
        }))
        .unwrap();

        let flags = v.category_flags();
        assert_eq!(flags[0].label, "no parking violation");
    }

    #[test]
    fn test_category_flag_truthiness_matches_json_semantics() {
        let v: Violation = serde_json::from_value(json!({
            "a_violation": null,
            "b_violation": 0,
            "c_violation": "",
            "d_violation": 1,
            "e_violation": "yes",
        }))
        .unwrap();

        let active: Vec<bool> = v.category_flags().iter().map(|f| f.active).collect();
        assert_eq!(active, vec![false, false, false, true, true]);
    }

    #[test]
    fn test_violations_response_envelope() {
        let body: ViolationsResponse = serde_json::from_value(json!({
            "violations": [
                { "number_plate": "KA01AB1234", "summary": "Speeding.", "severity_score": 8 },
                { "summary": "No helmet.", "helmet_violation": true },
            ]
        }))
        .unwrap();

        assert_eq!(body.violations.len(), 2);
        assert_eq!(body.violations[0].severity_score, 8.0);
        assert_eq!(body.violations[1].plate_label(), "Unknown");
    }

    #[test]
    fn test_analyze_response_keeps_payload_verbatim() {
        let payload = json!({
            "helmet_violation": true,
            "number_plate": "TN00DEMO",
            "nested": { "anything": [1, 2, 3] },
        });
        let body: AnalyzeResponse = serde_json::from_value(json!({
            "vision_result": payload.clone(),
        }))
        .unwrap();

        assert_eq!(body.vision_result, payload);
    }

    #[test]
    fn test_register_user_request_serializes_fields_as_is() {
        let req = RegisterUserRequest {
            name: "  Ada ".to_string(),
            plate: "ka01ab1234".to_string(),
            email: "ada@example.com".to_string(),
        };

        let body = serde_json::to_value(&req).unwrap();
        // No trimming or normalization before submission
        assert_eq!(
            body,
            json!({ "name": "  Ada ", "plate": "ka01ab1234", "email": "ada@example.com" })
        );
    }

    #[test]
    fn test_violation_timestamp_parses_rfc3339() {
        let v: Violation = serde_json::from_value(json!({
            "summary": "s",
            "timestamp": "2025-11-02T10:15:00Z",
        }))
        .unwrap();

        assert!(v.timestamp.is_some());
        // Timestamp is a typed field, not an opaque extra
        assert!(!v.extra.contains_key("timestamp"));
    }
}
