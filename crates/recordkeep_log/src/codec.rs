//! JSON encoding of log entries.
//!
//! A snapshot is a JSON array of entry objects with field names preserved.
//! A `null` document decodes to an empty sequence. A leading UTF-8 byte order
//! mark is skipped when decoding.

use crate::error::{LogError, LogResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encodes entries as a JSON array.
///
/// # Errors
///
/// Returns [`LogError::Encode`] if an entry cannot be serialized.
pub fn encode_entries<T: Serialize>(entries: &[T], pretty: bool) -> LogResult<Vec<u8>> {
    let encoded = if pretty {
        serde_json::to_vec_pretty(entries)
    } else {
        serde_json::to_vec(entries)
    };
    encoded.map_err(LogError::Encode)
}

/// Decodes entries from a JSON array.
///
/// # Errors
///
/// Returns [`LogError::Decode`] if the bytes are not a JSON array of `T`.
pub fn decode_entries<T: DeserializeOwned>(bytes: &[u8]) -> LogResult<Vec<T>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let entries: Option<Vec<T>> = serde_json::from_slice(bytes).map_err(LogError::Decode)?;
    Ok(entries.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: i32,
        name: String,
    }

    #[test]
    fn compact_encoding_preserves_field_names() {
        let bytes = encode_entries(
            &[Entry {
                id: 1,
                name: "Rice".into(),
            }],
            false,
        )
        .unwrap();
        assert_eq!(bytes, br#"[{"id":1,"name":"Rice"}]"#);
    }

    #[test]
    fn pretty_encoding_is_multiline() {
        let bytes = encode_entries(
            &[Entry {
                id: 1,
                name: "Rice".into(),
            }],
            true,
        )
        .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\n  {"));
        assert!(text.contains("\"name\": \"Rice\""));
    }

    #[test]
    fn null_document_decodes_empty() {
        let entries: Vec<Entry> = decode_entries(b"null").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn empty_array_decodes_empty() {
        let entries: Vec<Entry> = decode_entries(b"[]").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn leading_byte_order_mark_is_skipped() {
        let entries: Vec<Entry> =
            decode_entries("\u{feff}[{\"id\":1,\"name\":\"Rice\"}]".as_bytes()).unwrap();
        assert_eq!(
            entries,
            vec![Entry {
                id: 1,
                name: "Rice".into()
            }]
        );

        let entries: Vec<Entry> = decode_entries(b"\xEF\xBB\xBFnull").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn malformed_documents_fail() {
        let inputs: [&[u8]; 4] = [b"", b"{", br#"{"id":1}"#, br#"[{"id":"one","name":"x"}]"#];
        for bad in inputs {
            let result: LogResult<Vec<Entry>> = decode_entries(bad);
            assert!(matches!(result, Err(LogError::Decode(_))), "accepted {:?}", bad);
        }
    }
}
