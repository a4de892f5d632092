use crate::error::{Result, ToolError};

/// Percent-encodes every byte outside the RFC 3986 unreserved set.
pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Reverses [`url_encode`].
///
/// Unlike a lenient decoder, a `%` that is not followed by two hex digits is
/// an error rather than being passed through, and so is a byte sequence that
/// is not UTF-8.
pub fn url_decode(input: &str) -> Result<String> {
    if let Some(position) = malformed_escape(input) {
        let snippet: String = input[position..].chars().take(3).collect();
        return Err(ToolError::InvalidPercentEncoding(format!(
            "malformed escape {snippet:?} at byte {position}"
        )));
    }
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .map_err(|_| {
            ToolError::InvalidPercentEncoding("decoded bytes are not valid UTF-8".into())
        })
}

fn malformed_escape(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            let valid = bytes
                .get(idx + 1..idx + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Some(idx);
            }
            idx += 3;
        } else {
            idx += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_and_space() {
        assert_eq!(
            url_encode("https://example.com?message=hello world"),
            "https%3A%2F%2Fexample.com%3Fmessage%3Dhello%20world"
        );
        assert_eq!(url_encode("A-z_0.9~"), "A-z_0.9~");
    }

    #[test]
    fn decode_inverts_encode() {
        for sample in ["", "plain", "a b&c=d/e?f", "ünïcødé ✓ 🚀", "100% + more"] {
            assert_eq!(url_decode(&url_encode(sample)).unwrap(), sample);
        }
    }

    #[test]
    fn plus_is_not_a_space() {
        assert_eq!(url_decode("a+b").unwrap(), "a+b");
    }

    #[test]
    fn lone_percent_is_rejected() {
        assert!(matches!(
            url_decode("%"),
            Err(ToolError::InvalidPercentEncoding(_))
        ));
        assert!(url_decode("abc%2").is_err());
        assert!(url_decode("%zz").is_err());
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = url_decode("%FF%FE").unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }
}
