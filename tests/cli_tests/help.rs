use super::utils;

#[test]
#[ignore]
fn test_help() {
    let lines = utils::run(vec!["help"]).unwrap();
    assert!(lines.contains("hdrlint cli to check the headers of HTTP messages"));
    assert!(lines.contains("Usage:"));
    assert!(lines.contains("Commands:"));
    assert!(lines.contains("Options:"));
}

#[test]
#[ignore]
fn test_help_check() {
    let lines = utils::run(vec!["help", "check"]).unwrap();
    assert!(lines.contains("check the header block of a single HTTP message"));
    assert!(lines.contains("Usage:"));
    assert!(lines.contains("Arguments:"));
    assert!(lines.contains("--min-level"));
    assert!(lines.contains("--strict"));
}

#[test]
#[ignore]
fn test_notes() {
    let lines = utils::run(vec!["notes"]).unwrap();
    assert!(lines.contains("SINGLE_HEADER_REPEAT"));
    assert!(lines.contains("HEADER_DEPRECATED"));
}

#[test]
#[ignore]
fn test_headers() {
    let lines = utils::run(vec!["headers", "content-disposition"]).unwrap();
    assert!(lines.contains("Content-Disposition"));
    assert!(lines.contains("response-only"));
}
