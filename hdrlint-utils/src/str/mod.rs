//! string utilities

mod latin1;
#[doc(inline)]
pub use latin1::decode_latin1;

/// Trims the optional whitespace (`OWS`, spaces and horizontal tabs)
/// HTTP allows around field values and list members.
#[must_use]
pub fn trim_ows(s: &str) -> &str {
    s.trim_matches([' ', '\t'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_ows_only_strips_space_and_tab() {
        assert_eq!(trim_ows(" \tfoo bar\t "), "foo bar");
        assert_eq!(trim_ows("\r\nfoo"), "\r\nfoo");
        assert_eq!(trim_ows(""), "");
    }
}
