use super::utils;

const RESPONSE: &[u8] = include_bytes!("../data/response.txt");
const REQUEST: &[u8] = include_bytes!("../data/request.txt");

#[test]
#[ignore]
fn test_check_response_text() {
    let output = utils::run_with_stdin(vec!["check"], RESPONSE).unwrap();
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("The Date header's value isn't a valid date."));
    assert!(output.stdout.contains("Only one Content-Type header is allowed in a message."));
    assert!(output.stdout.contains("\"Host\" is a request header."));
    assert!(output.stdout.contains("The Pragma header is deprecated."));
    assert!(output.stdout.contains("single-quoted"));
}

#[test]
#[ignore]
fn test_check_response_json() {
    let output = utils::run_with_stdin(vec!["check", "--format", "json"], RESPONSE).unwrap();
    assert_eq!(output.code, Some(0));

    let report: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(report["direction"], "response");
    let kinds: Vec<&str> = report["notes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|note| note["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "BAD_DATE_SYNTAX",
            "SINGLE_HEADER_REPEAT",
            "PARAM_SINGLE_QUOTED",
            "HEADER_DEPRECATED",
            "REQUEST_HDR_IN_RESPONSE",
        ]
    );
}

#[test]
#[ignore]
fn test_check_strict_exit_code() {
    let output = utils::run_with_stdin(vec!["check", "--strict"], RESPONSE).unwrap();
    assert_eq!(output.code, Some(2));

    let output = utils::run_with_stdin(
        vec!["check", "--strict", "--min-level", "bad"],
        b"HTTP/1.1 200 OK\r\nPragma: no-cache\r\n\r\n",
    )
    .unwrap();
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"));
}

#[test]
#[ignore]
fn test_check_request() {
    let output = utils::run_with_stdin(vec!["check", "--format", "json"], REQUEST).unwrap();
    assert_eq!(output.code, Some(0));

    let report: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(report["direction"], "request");
    assert_eq!(report["notes"].as_array().unwrap().len(), 0);
}

#[test]
#[ignore]
fn test_check_invalid_input() {
    let output = utils::run_with_stdin(vec!["check"], b"Date: x\r\ngarbage\r\n").unwrap();
    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("exit with error: parse header block: line 2"));
}
