use crate::Grammar;

hdrlint_utils::macros::enums::str_enum! {
    /// Whether a header block belongs to a request or a response message.
    pub enum Direction {
        Request => "request",
        Response => "response",
    }
}

/// Static knowledge about one header kind.
///
/// Descriptors are built in `const` context, starting from [`HeaderDescriptor::new`]
/// which describes a single-instance header valid in both directions:
///
/// ```
/// use hdrlint_headers::{Direction, Grammar, HeaderDescriptor};
///
/// const ACCEPT_RANGES: HeaderDescriptor = HeaderDescriptor::new(
///     "Accept-Ranges",
///     Grammar::TokenList,
///     "https://httpwg.org/specs/rfc9110.html#field.accept-ranges",
/// )
/// .list()
/// .response_only();
///
/// assert!(ACCEPT_RANGES.is_list_header());
/// assert!(!ACCEPT_RANGES.valid_in(Direction::Request));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderDescriptor {
    canonical_name: &'static str,
    description: &'static str,
    grammar: Grammar,
    list_header: bool,
    valid_in_requests: bool,
    valid_in_responses: bool,
    deprecation_ref: Option<&'static str>,
    spec_ref: &'static str,
    no_star_params: &'static [&'static str],
}

impl HeaderDescriptor {
    /// Descriptor used for header names the registry does not know about.
    ///
    /// Its canonical name is empty, it accepts any field-value and is valid in
    /// both directions. Like most headers it is expected to occur only once.
    pub const DEFAULT: Self = Self::new(
        "",
        Grammar::FieldValue,
        "https://httpwg.org/specs/rfc9110.html#fields.values",
    );

    /// Create a descriptor for a single-instance header valid in
    /// requests as well as responses.
    #[must_use]
    pub const fn new(
        canonical_name: &'static str,
        grammar: Grammar,
        spec_ref: &'static str,
    ) -> Self {
        Self {
            canonical_name,
            description: "",
            grammar,
            list_header: false,
            valid_in_requests: true,
            valid_in_responses: true,
            deprecation_ref: None,
            spec_ref,
            no_star_params: &[],
        }
    }

    /// Mark the header as a list header, which may occur multiple times.
    #[must_use]
    pub const fn list(mut self) -> Self {
        self.list_header = true;
        self
    }

    /// Only allow the header in requests.
    #[must_use]
    pub const fn request_only(mut self) -> Self {
        self.valid_in_requests = true;
        self.valid_in_responses = false;
        self
    }

    /// Only allow the header in responses.
    #[must_use]
    pub const fn response_only(mut self) -> Self {
        self.valid_in_requests = false;
        self.valid_in_responses = true;
        self
    }

    /// Mark the header as deprecated, pointing to the deprecation notice.
    #[must_use]
    pub const fn deprecated(mut self, reference: &'static str) -> Self {
        self.deprecation_ref = Some(reference);
        self
    }

    /// Set a short human readable description of the header.
    #[must_use]
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Set the parameter names (lowercase, without trailing `*`) for which the
    /// extended `name*=` form is not allowed.
    #[must_use]
    pub const fn with_no_star_params(mut self, params: &'static [&'static str]) -> Self {
        self.no_star_params = params;
        self
    }

    /// Canonical spelling of the header name, empty for [`HeaderDescriptor::DEFAULT`].
    #[must_use]
    pub const fn canonical_name(&self) -> &'static str {
        self.canonical_name
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    #[must_use]
    pub const fn grammar(&self) -> Grammar {
        self.grammar
    }

    #[must_use]
    pub const fn is_list_header(&self) -> bool {
        self.list_header
    }

    /// Whether the header is defined for messages of the given [`Direction`].
    #[must_use]
    pub const fn valid_in(&self, direction: Direction) -> bool {
        match direction {
            Direction::Request => self.valid_in_requests,
            Direction::Response => self.valid_in_responses,
        }
    }

    /// Link to the deprecation notice, if the header is deprecated.
    #[must_use]
    pub const fn deprecation_ref(&self) -> Option<&'static str> {
        self.deprecation_ref
    }

    /// Link to the normative definition of the header.
    #[must_use]
    pub const fn spec_ref(&self) -> &'static str {
        self.spec_ref
    }

    #[must_use]
    pub const fn no_star_params(&self) -> &'static [&'static str] {
        self.no_star_params
    }

    /// Whether the extended (`name*=`) form of a parameter is disallowed.
    #[must_use]
    pub fn forbids_star_param(&self, name: &str) -> bool {
        self.no_star_params
            .iter()
            .any(|param| param.eq_ignore_ascii_case(name))
    }
}

impl Default for HeaderDescriptor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_descriptor() {
        let descriptor = HeaderDescriptor::default();
        assert_eq!(descriptor.canonical_name(), "");
        assert_eq!(descriptor.grammar(), Grammar::FieldValue);
        assert!(!descriptor.is_list_header());
        assert!(descriptor.valid_in(Direction::Request));
        assert!(descriptor.valid_in(Direction::Response));
        assert!(descriptor.deprecation_ref().is_none());
        assert!(descriptor.no_star_params().is_empty());
    }

    #[test]
    fn builder_sets_flags() {
        const HOST: HeaderDescriptor =
            HeaderDescriptor::new("Host", Grammar::FieldValue, "https://example.com")
                .request_only()
                .deprecated("https://example.com/deprecated")
                .with_no_star_params(&["rel"]);

        assert!(!HOST.is_list_header());
        assert!(HOST.valid_in(Direction::Request));
        assert!(!HOST.valid_in(Direction::Response));
        assert_eq!(
            HOST.deprecation_ref(),
            Some("https://example.com/deprecated")
        );
        assert!(HOST.forbids_star_param("REL"));
        assert!(!HOST.forbids_star_param("title"));
    }

    #[test]
    fn direction_strings() {
        assert_eq!(Direction::Request.as_str(), "request");
        assert_eq!(Direction::strict_parse("RESPONSE"), Some(Direction::Response));
    }
}
