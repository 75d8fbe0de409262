//! Serde helpers for Discord snowflakes.
//!
//! Discord ids overflow JavaScript numbers, so they travel as strings in JSON and are
//! parsed back into `u64` on the Rust side.

use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StrOrInt {
        Str(String),
        Int(u64),
    }

    match StrOrInt::deserialize(deserializer)? {
        StrOrInt::Str(value) => value.parse::<u64>().map_err(D::Error::custom),
        StrOrInt::Int(value) => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Wrapper {
        #[serde(with = "super")]
        id: u64,
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&Wrapper {
            id: 1_234_567_890_123_456_789,
        })
        .unwrap();

        assert_eq!(json, r#"{"id":"1234567890123456789"}"#);
    }

    #[test]
    fn accepts_string_and_number() {
        let from_str: Wrapper = serde_json::from_str(r#"{"id":"42"}"#).unwrap();
        let from_int: Wrapper = serde_json::from_str(r#"{"id":42}"#).unwrap();

        assert_eq!(from_str, from_int);
    }

    #[test]
    fn rejects_non_numeric_string() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"id":"abc"}"#).is_err());
    }
}
