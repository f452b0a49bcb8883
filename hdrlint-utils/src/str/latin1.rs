/// Decodes raw header bytes using the ISO-8859-1 convention of HTTP/1.x,
/// where every byte maps onto the Unicode code point of the same value.
///
/// This never fails: any byte sequence is valid ISO-8859-1.
///
/// ```
/// use hdrlint_utils::str::decode_latin1;
///
/// assert_eq!(decode_latin1(b"text/html"), "text/html");
/// assert_eq!(decode_latin1(b"caf\xe9"), "café");
/// ```
#[must_use]
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[quickcheck_macros::quickcheck]
    fn decode_latin1_keeps_one_char_per_byte(bytes: Vec<u8>) -> bool {
        decode_latin1(&bytes).chars().count() == bytes.len()
    }

    #[quickcheck_macros::quickcheck]
    fn decode_latin1_is_identity_for_ascii(s: String) -> bool {
        !s.is_ascii() || decode_latin1(s.as_bytes()) == s
    }

    #[test]
    fn obs_text_maps_onto_latin1_supplement() {
        assert_eq!(decode_latin1(b"\x80\xff"), "\u{80}\u{ff}");
    }
}
