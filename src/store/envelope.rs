//! The on-disk layout of one collection: `{"version": N, "records": [...]}`.
//! A bare array is the older unversioned layout and is still accepted.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub(crate) const PAYLOAD_VERSION: u64 = 1;

#[derive(Serialize)]
struct Envelope<'a, T> {
    version: u64,
    records: &'a [T],
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum DecodeError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload version {0} is newer than supported version {max}", max = PAYLOAD_VERSION)]
    UnsupportedVersion(u64),

    #[error("payload is neither an array nor a versioned object")]
    UnknownShape,
}

#[derive(Debug, PartialEq)]
pub(crate) enum Decoded<T> {
    Current(Vec<T>),
    /// Read from the unversioned layout; should be rewritten.
    Legacy(Vec<T>),
}

pub(crate) fn encode<T: Serialize>(records: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Envelope {
        version: PAYLOAD_VERSION,
        records,
    })
}

pub(crate) fn decode<T: DeserializeOwned>(raw: &str) -> Result<Decoded<T>, DecodeError> {
    match serde_json::from_str::<Value>(raw)? {
        legacy @ Value::Array(_) => Ok(Decoded::Legacy(serde_json::from_value(legacy)?)),
        Value::Object(mut map) => {
            let version = map
                .get("version")
                .and_then(Value::as_u64)
                .ok_or(DecodeError::UnknownShape)?;
            if version > PAYLOAD_VERSION {
                return Err(DecodeError::UnsupportedVersion(version));
            }
            let records = map.remove("records").ok_or(DecodeError::UnknownShape)?;
            let records = serde_json::from_value(records)?;
            if version < PAYLOAD_VERSION {
                Ok(Decoded::Legacy(records))
            } else {
                Ok(Decoded::Current(records))
            }
        }
        _ => Err(DecodeError::UnknownShape),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_encode_wraps_records() {
        let raw = encode(&["a", "b"]).unwrap();
        assert_eq!(raw, r#"{"version":1,"records":["a","b"]}"#);
        assert_eq!(
            decode::<String>(&raw).unwrap(),
            Decoded::Current(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_decode_bare_array_is_legacy() {
        assert_eq!(decode::<u32>("[1,2]").unwrap(), Decoded::Legacy(vec![1, 2]));
    }

    #[test]
    fn test_decode_rejects_other_shapes() {
        assert!(matches!(decode::<u32>("42"), Err(DecodeError::UnknownShape)));
        assert!(matches!(
            decode::<u32>(r#"{"records":[]}"#),
            Err(DecodeError::UnknownShape)
        ));
        assert!(matches!(
            decode::<u32>(r#"{"version":1}"#),
            Err(DecodeError::UnknownShape)
        ));
        assert!(matches!(
            decode::<u32>(r#"{"version":2,"records":[]}"#),
            Err(DecodeError::UnsupportedVersion(2))
        ));
        assert!(matches!(decode::<u32>(r#"["x"]"#), Err(DecodeError::Json(_))));
    }
}
