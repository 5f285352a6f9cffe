const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BASE: u32 = 58;

/// Encodes a string's UTF-8 bytes as base58 using the Bitcoin alphabet.
///
/// The input is interpreted as a single big-endian integer of arbitrary
/// width, so inputs of any length encode without truncation. Because the
/// encoding is positional, leading NUL bytes carry no weight: the empty
/// string encodes to the empty string, and a non-empty input of only NUL
/// bytes encodes to `"1"` (the zero digit).
///
/// The alphabet omits `0`, `O`, `I`, and `l`, which makes the output safe
/// to read back over the phone or retype from paper.
///
/// # Example
/// ```
/// use shortid::encode_base58;
///
/// assert_eq!(encode_base58("bbb"), "a3gV");
/// assert_eq!(encode_base58(""), "");
/// ```
#[must_use]
pub fn encode_base58(input: &str) -> String {
    let bytes = input.as_bytes();

    let Some(first_significant) = bytes.iter().position(|&b| b != 0) else {
        return if bytes.is_empty() {
            String::new()
        } else {
            String::from("1")
        };
    };

    // Repeated schoolbook division by 58 over the big-endian byte string;
    // each pass yields the next least significant digit as the remainder.
    let mut scratch = bytes[first_significant..].to_vec();
    // log2(256) / log2(58) < 8 / 5 digits per byte.
    let mut digits = Vec::with_capacity(scratch.len() * 8 / 5 + 1);
    let mut start = 0;

    while start < scratch.len() {
        let mut remainder: u32 = 0;
        for byte in &mut scratch[start..] {
            let acc = (remainder << 8) | u32::from(*byte);
            *byte = (acc / BASE) as u8;
            remainder = acc % BASE;
        }
        digits.push(ALPHABET[remainder as usize]);

        // The quotient shrinks as digits come off; skip its leading zeros.
        while start < scratch.len() && scratch[start] == 0 {
            start += 1;
        }
    }

    digits.reverse();
    // SAFETY: every byte pushed into `digits` comes from `ALPHABET`, which
    // is pure ASCII, so the buffer is valid UTF-8.
    unsafe { String::from_utf8_unchecked(digits) }
}
