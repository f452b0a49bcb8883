use crate::kind::definitions;
use crate::render::interpolate;
use crate::{NoteDefinition, NoteKind, Params, RenderError};

/// Read-only registry of all [`NoteDefinition`]s.
///
/// The catalog is compiled in: it holds no state and is safe to use
/// from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoteCatalog;

impl NoteCatalog {
    /// All definitions, in declaration order.
    #[must_use]
    pub fn definitions() -> &'static [NoteDefinition] {
        definitions()
    }

    /// Look up a definition by its kind name (e.g. `"BAD_SYNTAX"`).
    ///
    /// ```
    /// use hdrlint_notes::{Level, NoteCatalog, RenderError};
    ///
    /// let def = NoteCatalog::lookup("HEADER_DEPRECATED").unwrap();
    /// assert_eq!(def.level(), Level::Warn);
    ///
    /// assert!(matches!(NoteCatalog::lookup("NOPE"), Err(RenderError::UnknownKind(_))));
    /// ```
    pub fn lookup(name: &str) -> Result<&'static NoteDefinition, RenderError> {
        NoteKind::strict_parse(name)
            .map(NoteKind::definition)
            .ok_or_else(|| RenderError::UnknownKind(name.to_owned()))
    }

    /// Render the summary and detail templates of `kind` against `params`.
    ///
    /// Entries of `params` not referenced by either template are ignored.
    pub fn render(kind: NoteKind, params: &Params) -> Result<(String, String), RenderError> {
        let definition = kind.definition();
        let summary = interpolate(kind, definition.summary_template(), params)?;
        let detail = interpolate(kind, definition.detail_template(), params)?;
        Ok((summary, detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fully_bound(kind: NoteKind) -> Params {
        kind.definition()
            .placeholders()
            .into_iter()
            .fold(Params::new(), |params, name| params.with(name, format!("<{name}>")))
    }

    #[test]
    fn every_kind_renders_when_fully_bound() {
        for kind in NoteKind::ALL {
            let (summary, detail) = NoteCatalog::render(*kind, &fully_bound(*kind)).unwrap();
            assert!(!summary.is_empty(), "{kind}: empty summary");
            assert!(!detail.is_empty(), "{kind}: empty detail");
            assert!(!summary.contains("%("), "{kind}: unrendered summary: {summary}");
            assert!(!detail.contains("%("), "{kind}: unrendered detail: {detail}");
        }
    }

    #[test]
    fn every_kind_fails_on_each_missing_placeholder() {
        for kind in NoteKind::ALL {
            let placeholders = kind.definition().placeholders();
            assert!(!placeholders.is_empty(), "{kind}: no placeholders");
            for missing in placeholders {
                let params = kind
                    .definition()
                    .placeholders()
                    .into_iter()
                    .filter(|name| *name != missing)
                    .fold(Params::new(), |params, name| params.with(name, "x"));
                let err = NoteCatalog::render(*kind, &params).unwrap_err();
                assert_eq!(
                    err,
                    RenderError::MissingParameter {
                        kind: *kind,
                        name: missing.to_owned(),
                    }
                );
            }
        }
    }

    #[test]
    fn unreferenced_params_are_ignored() {
        let params = fully_bound(NoteKind::HeaderTooLarge).with("unused", "whatever");
        let (summary, _) = NoteCatalog::render(NoteKind::HeaderTooLarge, &params).unwrap();
        assert_eq!(
            summary,
            "The <header_name> header is very large (<header_size>)."
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let def = NoteCatalog::lookup("param_star_charset").unwrap();
        assert_eq!(def.kind(), NoteKind::ParamStarCharset);
        assert_eq!(NoteCatalog::definitions().len(), NoteKind::ALL.len());
    }
}
