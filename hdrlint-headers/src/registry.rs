use std::sync::OnceLock;

use ahash::HashMap;

use crate::{Grammar, HeaderDescriptor};

macro_rules! rfc9110 {
    ($anchor:literal) => {
        concat!("https://httpwg.org/specs/rfc9110.html#", $anchor)
    };
}

macro_rules! rfc9111 {
    ($anchor:literal) => {
        concat!("https://httpwg.org/specs/rfc9111.html#", $anchor)
    };
}

/// Headers known to hdrlint.
static KNOWN_HEADERS: &[HeaderDescriptor] = &[
    HeaderDescriptor::new("Accept", Grammar::MediaRangeList, rfc9110!("field.accept"))
        .list()
        .request_only()
        .with_description("Media types that are acceptable for the response."),
    HeaderDescriptor::new(
        "Accept-Encoding",
        Grammar::MediaRangeList,
        rfc9110!("field.accept-encoding"),
    )
    .list()
    .request_only()
    .with_description("Content codings that are acceptable in the response."),
    HeaderDescriptor::new(
        "Accept-Language",
        Grammar::MediaRangeList,
        rfc9110!("field.accept-language"),
    )
    .list()
    .request_only()
    .with_description("Natural languages that are preferred in the response."),
    HeaderDescriptor::new(
        "Accept-Ranges",
        Grammar::TokenList,
        rfc9110!("field.accept-ranges"),
    )
    .list()
    .response_only()
    .with_description("Whether the server supports range requests for the resource."),
    HeaderDescriptor::new("Age", Grammar::Digits, rfc9111!("field.age"))
        .response_only()
        .with_description("Seconds since the response was generated by the origin server."),
    HeaderDescriptor::new("Allow", Grammar::TokenList, rfc9110!("field.allow"))
        .list()
        .response_only()
        .with_description("Methods supported by the target resource."),
    HeaderDescriptor::new(
        "Cache-Control",
        Grammar::DirectiveList,
        rfc9111!("field.cache-control"),
    )
    .list()
    .with_description("Directives for caches along the request/response chain."),
    HeaderDescriptor::new("Connection", Grammar::TokenList, rfc9110!("field.connection"))
        .list()
        .with_description("Control options for the current connection."),
    HeaderDescriptor::new(
        "Content-Disposition",
        Grammar::Disposition,
        "https://www.rfc-editor.org/rfc/rfc6266#section-4",
    )
    .response_only()
    .with_description("How the content is to be presented, e.g. inline or as a download."),
    HeaderDescriptor::new(
        "Content-Encoding",
        Grammar::TokenList,
        rfc9110!("field.content-encoding"),
    )
    .list()
    .with_description("Content codings applied to the representation."),
    HeaderDescriptor::new(
        "Content-Language",
        Grammar::TokenList,
        rfc9110!("field.content-language"),
    )
    .list()
    .with_description("Natural languages of the intended audience."),
    HeaderDescriptor::new("Content-Length", Grammar::Digits, rfc9110!("field.content-length"))
        .with_description("Size of the content in bytes."),
    HeaderDescriptor::new(
        "Content-Location",
        Grammar::FieldValue,
        rfc9110!("field.content-location"),
    )
    .with_description("A URI identifying the representation in the content."),
    HeaderDescriptor::new(
        "Content-MD5",
        Grammar::FieldValue,
        "https://www.rfc-editor.org/rfc/rfc1864",
    )
    .deprecated("https://www.rfc-editor.org/rfc/rfc7231#appendix-B")
    .with_description("MD5 digest of the content."),
    HeaderDescriptor::new(
        "Content-Range",
        Grammar::FieldValue,
        rfc9110!("field.content-range"),
    )
    .response_only()
    .with_description("Where in the full representation the partial content belongs."),
    HeaderDescriptor::new("Content-Type", Grammar::MediaType, rfc9110!("field.content-type"))
        .with_description("Media type of the representation."),
    HeaderDescriptor::new("Date", Grammar::HttpDate, rfc9110!("field.date"))
        .with_description("Date and time at which the message was originated."),
    HeaderDescriptor::new("ETag", Grammar::EntityTag, rfc9110!("field.etag"))
        .response_only()
        .with_description("Entity tag of the selected representation."),
    HeaderDescriptor::new(
        "Expect-CT",
        Grammar::DirectiveList,
        "https://www.rfc-editor.org/rfc/rfc9163",
    )
    .response_only()
    .deprecated("https://www.rfc-editor.org/rfc/rfc9163#section-1")
    .with_description("Certificate Transparency enforcement policy."),
    HeaderDescriptor::new("Expires", Grammar::HttpDate, rfc9111!("field.expires"))
        .response_only()
        .with_description("Date after which the response is considered stale."),
    HeaderDescriptor::new("Host", Grammar::FieldValue, rfc9110!("field.host"))
        .request_only()
        .with_description("Host and port of the target URI."),
    HeaderDescriptor::new(
        "If-Modified-Since",
        Grammar::HttpDate,
        rfc9110!("field.if-modified-since"),
    )
    .request_only()
    .with_description("Makes the request conditional on a modification after the given date."),
    HeaderDescriptor::new(
        "If-Unmodified-Since",
        Grammar::HttpDate,
        rfc9110!("field.if-unmodified-since"),
    )
    .request_only()
    .with_description("Makes the request conditional on no modification since the given date."),
    HeaderDescriptor::new(
        "Keep-Alive",
        Grammar::DirectiveList,
        "https://www.rfc-editor.org/rfc/rfc2068#section-19.7.1.1",
    )
    .list()
    .with_description("Hints about how a persistent connection may be used."),
    HeaderDescriptor::new(
        "Last-Modified",
        Grammar::HttpDate,
        rfc9110!("field.last-modified"),
    )
    .response_only()
    .with_description("Date the origin server believes the representation was last modified."),
    HeaderDescriptor::new(
        "Link",
        Grammar::LinkList,
        "https://www.rfc-editor.org/rfc/rfc8288#section-3",
    )
    .list()
    .with_no_star_params(&["rel", "rev", "anchor", "hreflang", "type", "media"])
    .with_description("Typed links to related resources."),
    HeaderDescriptor::new("Location", Grammar::FieldValue, rfc9110!("field.location"))
        .response_only()
        .with_description("A URI to redirect to or of a newly created resource."),
    HeaderDescriptor::new("Pragma", Grammar::DirectiveList, rfc9111!("field.pragma"))
        .list()
        .deprecated(rfc9111!("field.pragma"))
        .with_description("Legacy HTTP/1.0 cache directives."),
    HeaderDescriptor::new("Referer", Grammar::FieldValue, rfc9110!("field.referer"))
        .request_only()
        .with_description("The URI of the resource from which the target URI was obtained."),
    HeaderDescriptor::new("Retry-After", Grammar::FieldValue, rfc9110!("field.retry-after"))
        .response_only()
        .with_description("How long the client ought to wait before a follow-up request."),
    HeaderDescriptor::new("Server", Grammar::FieldValue, rfc9110!("field.server"))
        .list()
        .response_only()
        .with_description("Software used by the origin server."),
    HeaderDescriptor::new(
        "Set-Cookie",
        Grammar::FieldValue,
        "https://www.rfc-editor.org/rfc/rfc6265#section-4.1",
    )
    .list()
    .response_only()
    .with_description("Stores a cookie in the user agent."),
    HeaderDescriptor::new(
        "Strict-Transport-Security",
        Grammar::FieldValue,
        "https://www.rfc-editor.org/rfc/rfc6797#section-6.1",
    )
    .response_only()
    .with_description("Requests that the host is only accessed over secure connections."),
    HeaderDescriptor::new(
        "Transfer-Encoding",
        Grammar::TokenList,
        "https://httpwg.org/specs/rfc9112.html#field.transfer-encoding",
    )
    .list()
    .with_description("Transfer codings applied to the message body."),
    HeaderDescriptor::new("User-Agent", Grammar::FieldValue, rfc9110!("field.user-agent"))
        .list()
        .request_only()
        .with_description("Software used by the client."),
    HeaderDescriptor::new("Vary", Grammar::TokenList, rfc9110!("field.vary"))
        .list()
        .response_only()
        .with_description("Request headers that influenced the selection of the representation."),
    HeaderDescriptor::new("Via", Grammar::FieldValue, rfc9110!("field.via"))
        .list()
        .with_description("Intermediate protocols and recipients the message passed through."),
    HeaderDescriptor::new("Warning", Grammar::FieldValue, rfc9111!("field.warning"))
        .list()
        .deprecated(rfc9111!("field.warning"))
        .with_description("Additional information about the status of the message."),
    HeaderDescriptor::new(
        "WWW-Authenticate",
        Grammar::FieldValue,
        rfc9110!("field.www-authenticate"),
    )
    .list()
    .response_only()
    .with_description("Authentication schemes applicable to the target resource."),
    HeaderDescriptor::new(
        "X-Frame-Options",
        Grammar::Token,
        "https://www.rfc-editor.org/rfc/rfc7034#section-2",
    )
    .response_only()
    .with_description("Whether the response may be rendered inside a frame."),
];

/// Lookup table from header name to its [`HeaderDescriptor`].
///
/// Names are matched ASCII case-insensitively. Unknown names resolve to
/// [`HeaderDescriptor::DEFAULT`] through [`HeaderRegistry::describe`].
#[derive(Debug, Clone)]
pub struct HeaderRegistry {
    by_name: HashMap<String, &'static HeaderDescriptor>,
}

impl HeaderRegistry {
    /// The registry of all headers compiled into hdrlint.
    pub fn global() -> &'static Self {
        static REGISTRY: OnceLock<HeaderRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| Self::from_table(KNOWN_HEADERS))
    }

    /// Build a registry from a custom descriptor table.
    ///
    /// When a name occurs more than once the last descriptor wins.
    #[must_use]
    pub fn from_table(table: &'static [HeaderDescriptor]) -> Self {
        let mut by_name = HashMap::default();
        for descriptor in table {
            by_name.insert(descriptor.canonical_name().to_ascii_lowercase(), descriptor);
        }
        tracing::trace!(headers = by_name.len(), "header registry built");
        Self { by_name }
    }

    /// The descriptor registered for `name`, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static HeaderDescriptor> {
        if let Some(descriptor) = self.by_name.get(name) {
            return Some(*descriptor);
        }
        self.by_name.get(&name.to_ascii_lowercase()).copied()
    }

    /// The descriptor for `name`, falling back to the permissive default.
    #[must_use]
    pub fn describe(&self, name: &str) -> &'static HeaderDescriptor {
        self.lookup(name).unwrap_or(&HeaderDescriptor::DEFAULT)
    }

    /// Iterate over all registered descriptors, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &'static HeaderDescriptor> + '_ {
        self.by_name.values().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = HeaderRegistry::global();
        for name in ["content-type", "Content-Type", "CONTENT-TYPE", "cOnTeNt-TyPe"] {
            let descriptor = registry.lookup(name).unwrap();
            assert_eq!(descriptor.canonical_name(), "Content-Type");
            assert_eq!(descriptor.grammar(), Grammar::MediaType);
        }
    }

    #[test]
    fn unknown_names_get_the_default() {
        let registry = HeaderRegistry::global();
        assert!(registry.lookup("X-Custom-Thing").is_none());
        assert_eq!(
            registry.describe("X-Custom-Thing"),
            &HeaderDescriptor::DEFAULT
        );
        assert!(registry.lookup("caf\u{e9}").is_none());
    }

    #[test]
    fn known_headers_are_consistent() {
        let registry = HeaderRegistry::global();
        assert_eq!(registry.len(), KNOWN_HEADERS.len());
        for descriptor in registry.iter() {
            assert!(!descriptor.canonical_name().is_empty());
            assert!(
                descriptor.valid_in(Direction::Request) || descriptor.valid_in(Direction::Response),
                "{} is valid nowhere",
                descriptor.canonical_name()
            );
            assert!(descriptor.spec_ref().starts_with("https://"));
            assert!(!descriptor.description().is_empty());
        }
    }

    #[test]
    fn well_known_flags() {
        let registry = HeaderRegistry::global();

        let host = registry.describe("host");
        assert!(host.valid_in(Direction::Request));
        assert!(!host.valid_in(Direction::Response));
        assert!(!host.is_list_header());

        let vary = registry.describe("vary");
        assert!(vary.is_list_header());
        assert!(!vary.valid_in(Direction::Request));

        let link = registry.describe("link");
        assert!(link.forbids_star_param("rel"));
        assert!(!link.forbids_star_param("title"));

        assert!(registry.describe("pragma").deprecation_ref().is_some());
        assert!(registry.describe("content-md5").deprecation_ref().is_some());
        assert!(registry.describe("date").deprecation_ref().is_none());
    }

    #[test]
    fn custom_table() {
        static TABLE: &[HeaderDescriptor] = &[
            HeaderDescriptor::new("X-One", Grammar::Token, "https://example.com/one"),
            HeaderDescriptor::new("x-one", Grammar::Digits, "https://example.com/two"),
        ];
        let registry = HeaderRegistry::from_table(TABLE);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.describe("X-ONE").grammar(), Grammar::Digits);
        assert!(registry.lookup("content-type").is_none());
    }
}
