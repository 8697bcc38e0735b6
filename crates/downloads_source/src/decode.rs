use encoding_rs::{Encoding, UTF_8};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes with {encoding}: {message}")]
    DecodeFailure { encoding: String, message: String },
}

/// Decode a response body into UTF-8 text using: BOM -> Content-Type charset -> UTF-8.
pub fn decode_text(bytes: &[u8], content_type: Option<&str>) -> Result<String, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, encoding);
        }
    }

    decode_with(bytes, UTF_8)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (key, value) = part.trim().split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim_matches([' ', '"', '\''].as_ref()).to_string())
        })
        .next()
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<String, DecodeError> {
    // `decode` strips a matching BOM itself.
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: encoding.name().to_string(),
            message: "decoding error".into(),
        });
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_utf8_without_hints() {
        assert_eq!(decode_text(b"[1]", None).unwrap(), "[1]");
    }

    #[test]
    fn bom_is_stripped() {
        let bytes = b"\xEF\xBB\xBF[]";
        assert_eq!(decode_text(bytes, Some("application/json")).unwrap(), "[]");
    }

    #[test]
    fn charset_from_content_type_is_honoured() {
        let bytes = b"\"caf\xE9\"";
        let text = decode_text(bytes, Some("application/json; Charset=\"ISO-8859-1\"")).unwrap();
        assert_eq!(text, "\"caf\u{e9}\"");
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let err = decode_text(b"[\"\xC3\x28\"]", Some("application/json; charset=utf-8"));
        assert!(err.is_err());
    }
}
