//! The client record and identifier parsing

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

pub type ClientId = i64;

/// A single registry entry. Ids are caller-supplied and not checked for uniqueness.
///
/// Fields missing from a request body decode to their zero value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
}

impl Client {
    pub fn new(id: ClientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Parses the `{id}` path segment; only strictly positive integers are accepted.
pub fn parse_client_id(segment: &str) -> Result<ClientId, AppError> {
    match segment.parse::<ClientId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidClientId(segment.to_string())),
    }
}

/// Decodes a request body into a [`Client`].
///
/// Field names match case-insensitively, with an exact match winning over a folded one.
/// `null` decodes to the zero client.
pub fn decode_client(body: &[u8]) -> Result<Client, AppError> {
    let payload: Value =
        serde_json::from_slice(body).map_err(|err| AppError::BadRequest(err.to_string()))?;

    // serde would otherwise accept a positional array for a struct
    let fields = match payload {
        Value::Null => return Ok(Client::default()),
        Value::Object(fields) => fields,
        _ => return Err(AppError::BadRequest("body must be a JSON object".to_string())),
    };

    serde_json::from_value(Value::Object(fold_keys(fields)))
        .map_err(|err| AppError::BadRequest(err.to_string()))
}

fn fold_keys(fields: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::with_capacity(fields.len());
    for (key, value) in fields {
        let lowered = key.to_lowercase();
        if key == lowered || !folded.contains_key(&lowered) {
            folded.insert(lowered, value);
        }
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_ids() {
        assert_eq!(parse_client_id("1"), Ok(1));
        assert_eq!(parse_client_id("42"), Ok(42));
        assert_eq!(parse_client_id("+7"), Ok(7));
    }

    #[test]
    fn rejects_zero_negative_and_non_numeric_ids() {
        for segment in ["0", "-3", "abc", "", "1.5", "1a", "99999999999999999999"] {
            let err = parse_client_id(segment).expect_err("segment should be rejected");
            assert_eq!(err, AppError::InvalidClientId(segment.to_string()));
        }
    }

    #[test]
    fn decodes_full_body() {
        let client = decode_client(br#"{"id":4,"name":"Client 4"}"#).expect("valid body");
        assert_eq!(client, Client::new(4, "Client 4"));
    }

    #[test]
    fn missing_fields_take_zero_values() {
        let client = decode_client(br#"{"name":"only a name"}"#).expect("valid body");
        assert_eq!(client, Client::new(0, "only a name"));

        let client = decode_client(b"{}").expect("valid body");
        assert_eq!(client, Client::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let client =
            decode_client(br#"{"id":2,"name":"Client 2","email":"c2@example.com"}"#)
                .expect("valid body");
        assert_eq!(client, Client::new(2, "Client 2"));
    }

    #[test]
    fn truncated_or_mistyped_body_is_bad_request() {
        for body in [
            br#"{"ID": 4, "Name":"#.as_slice(),
            br#"{"id":"four","name":"Client 4"}"#.as_slice(),
            br#"{"id":4,"name":12}"#.as_slice(),
            b"".as_slice(),
            b"[]".as_slice(),
            br#"[4,"Client 4"]"#.as_slice(),
            b"7".as_slice(),
        ] {
            let err = decode_client(body).expect_err("body should be rejected");
            assert!(matches!(err, AppError::BadRequest(_)));
        }
    }

    #[test]
    fn field_names_match_case_insensitively() {
        let client = decode_client(br#"{"ID":4,"Name":"Client 4"}"#).expect("valid body");
        assert_eq!(client, Client::new(4, "Client 4"));

        let client = decode_client(br#"{"iD":5,"NAME":"Client 5"}"#).expect("valid body");
        assert_eq!(client, Client::new(5, "Client 5"));
    }

    #[test]
    fn exact_field_name_wins_over_folded_one() {
        let client =
            decode_client(br#"{"Name":"folded","name":"exact","ID":9}"#).expect("valid body");
        assert_eq!(client, Client::new(9, "exact"));

        let client =
            decode_client(br#"{"name":"exact","NAME":"folded"}"#).expect("valid body");
        assert_eq!(client.name, "exact");
    }

    #[test]
    fn null_body_is_zero_client() {
        assert_eq!(decode_client(b"null").expect("null body"), Client::default());
    }

    #[test]
    fn serializes_to_wire_shape() {
        let encoded = serde_json::to_string(&Client::new(1, "Client 1")).expect("serialize");
        assert_eq!(encoded, r#"{"id":1,"name":"Client 1"}"#);
    }
}
