hdrlint_utils::macros::enums::str_enum! {
    /// Severity tier of a note, ordered from least to most severe.
    ///
    /// Report layers use it to rank or filter output.
    pub enum Level {
        Good => "good",
        Info => "info",
        Warn => "warning",
        Bad => "bad",
    }
}

hdrlint_utils::macros::enums::str_enum! {
    /// Grouping label of a note. Carries no ranking semantics.
    pub enum Category {
        General => "General",
        Security => "Security",
        Conneg => "Content Negotiation",
        Caching => "Caching",
        Validation => "Validation",
        Connection => "Connection",
        Range => "Partial Content",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ranked() {
        assert!(Level::Good < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Bad);
        assert_eq!(Level::strict_parse("WARNING"), Some(Level::Warn));
    }
}
