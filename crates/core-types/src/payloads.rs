use crate::error::CoreError;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields required to register a candidate. A party can only be assigned
/// afterwards, through [`CandidatePartyUpdate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCandidate {
    pub first_name: String,
    pub last_name: String,
    #[serde(deserialize_with = "flag")]
    pub industry_connected: bool,
}

impl NewCandidate {
    pub const REQUIRED: &'static [&'static str] = &["first_name", "last_name", "industry_connected"];
}

/// Moves a candidate to another party, or detaches it when `party_id` is null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePartyUpdate {
    pub party_id: Option<i64>,
}

impl CandidatePartyUpdate {
    pub const REQUIRED: &'static [&'static str] = &["party_id"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVoter {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewVoter {
    pub const REQUIRED: &'static [&'static str] = &["first_name", "last_name", "email"];
}

/// The email address is the only voter field that can change after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterEmailUpdate {
    pub email: String,
}

impl VoterEmailUpdate {
    pub const REQUIRED: &'static [&'static str] = &["email"];
}

/// Decodes an already validated body into its typed payload. Fields the
/// payload does not name are ignored.
pub fn decode<T: DeserializeOwned>(record: &Map<String, Value>) -> Result<T, CoreError> {
    serde_json::from_value(Value::Object(record.clone()))
        .map_err(|e| CoreError::InvalidInput("request body".to_string(), e.to_string()))
}

/// Accepts `true`/`false` as well as the integers `0`/`1`.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Int(0) => Ok(false),
        Flag::Int(1) => Ok(true),
        Flag::Int(other) => Err(de::Error::custom(format!(
            "expected a boolean or 0/1, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn industry_connected_accepts_integer_flags() {
        let candidate: NewCandidate = decode(&body(json!({
            "first_name": "Ronald",
            "last_name": "Firbank",
            "industry_connected": 1
        })))
        .expect("decodes");

        assert!(candidate.industry_connected);
    }

    #[test]
    fn industry_connected_rejects_other_integers() {
        let result = decode::<NewCandidate>(&body(json!({
            "first_name": "Ronald",
            "last_name": "Firbank",
            "industry_connected": 7
        })));

        assert!(matches!(result, Err(CoreError::InvalidInput(..))));
    }

    #[test]
    fn null_party_detaches_candidate() {
        let update: CandidatePartyUpdate = decode(&body(json!({ "party_id": null }))).unwrap();
        assert_eq!(update.party_id, None);
    }

    #[test]
    fn wrong_shape_is_invalid_input() {
        let result = decode::<VoterEmailUpdate>(&body(json!({ "email": 5 })));
        assert!(matches!(result, Err(CoreError::InvalidInput(..))));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let voter: NewVoter = decode(&body(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "id": 99
        })))
        .unwrap();

        assert_eq!(voter.email, "ada@example.com");
    }
}
