use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

/// Encodes a string's UTF-8 bytes as URL-safe base64 without padding.
///
/// The output alphabet is `A-Z`, `a-z`, `0-9`, `-`, and `_`, so encoded
/// identifiers can be embedded in URLs, file names, and query strings
/// without escaping. The empty string encodes to the empty string.
///
/// # Example
/// ```
/// use shortid::encode_base64;
///
/// assert_eq!(
///     encode_base64("240210120530XYZ9876"),
///     "MjQwMjEwMTIwNTMwWFlaOTg3Ng"
/// );
/// assert_eq!(encode_base64(""), "");
/// ```
#[must_use]
pub fn encode_base64(input: &str) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_vectors() {
        let vectors = [
            ("", ""),
            ("f", "Zg"),
            ("fo", "Zm8"),
            ("foo", "Zm9v"),
            ("240210120530XYZ9876", "MjQwMjEwMTIwNTMwWFlaOTg3Ng"),
        ];

        for (input, expected) in vectors {
            assert_eq!(encode_base64(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn round_trips_through_the_standard_decoder() {
        let input = "240210120530AbCdEf0001";
        let decoded = URL_SAFE_NO_PAD.decode(encode_base64(input)).unwrap();
        assert_eq!(decoded, input.as_bytes());
    }

    #[test]
    fn output_stays_in_the_url_safe_alphabet() {
        // These bytes hit sextets 62 and 63, where the standard alphabet
        // would emit '+' and '/'.
        let input = "\u{03FF}\u{07FF}~~~";
        let encoded = encode_base64(input);

        assert_eq!(encoded, "z7_fv35-fg");
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
    }
}
