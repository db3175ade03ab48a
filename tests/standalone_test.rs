use linkscout::{JsLinkFilter, Options, ParseStatus};

fn filter() -> JsLinkFilter {
    let options = Options {
        outlink_pattern: Some(r#",\s*"([^"]+)""#.to_string()),
        ..Options::default()
    };
    JsLinkFilter::new(options).expect("default patterns compile")
}

#[test]
fn eligible_script_is_scanned_whole() {
    let script = "// navigation tree\nvar nodes = [\"A\", \"../x/y.js\", \"_blank\"];\n";
    let parse = filter().parse_js("http://h/p/q/tree.js", script);

    assert!(parse.status.is_success());
    assert_eq!(parse.title, "// navigation tree");
    let urls: Vec<&str> = parse.outlinks.iter().map(|l| l.url.as_str()).collect();
    assert!(urls.contains(&"http://h/p/x/y.js"), "got {urls:?}");
}

#[test]
fn ineligible_base_url_fails_independent_of_content() {
    let script = "var nodes = [\"A\", \"../x/y.js\", \"_blank\"];";
    let parse = filter().parse_js("http://h/page.html", script);

    assert!(!parse.status.is_success());
    assert!(parse.outlinks.is_empty());
    assert!(parse.title.is_empty());
    match parse.status {
        ParseStatus::Failed { reason } => {
            assert!(reason.contains("content not JavaScript"), "got {reason:?}");
        }
        ParseStatus::Success => panic!("expected failure status"),
    }
}

#[test]
fn title_is_the_whole_text_when_there_is_no_newline() {
    let script = "var single = 1;";
    let parse = filter().parse_js("http://h/one.js", script);

    assert!(parse.status.is_success());
    assert_eq!(parse.title, "var single = 1;");
}

#[test]
fn title_is_truncated_to_the_configured_maximum() {
    let options = Options {
        outlink_pattern: Some(r#",\s*"([^"]+)""#.to_string()),
        max_title_len: 10,
        ..Options::default()
    };
    let filter = JsLinkFilter::new(options).expect("default patterns compile");

    let parse = filter.parse_js("http://h/one.js", "0123456789ABCDEF\nrest");
    assert_eq!(parse.title, "0123456789");

    // Multi-byte text must truncate on character boundaries.
    let parse = filter.parse_js("http://h/one.js", &"日本語".repeat(10));
    assert_eq!(parse.title.chars().count(), 10);
}

#[test]
fn raw_bytes_are_transcoded_before_scanning() {
    // UTF-8 BOM followed by a tree-menu line.
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice(b"[\"A\", \"menu.htm\", \"main\"]");

    let parse = filter().parse_js_bytes("http://h/p/tree.js", &bytes);

    assert!(parse.status.is_success());
    assert_eq!(parse.title, "[\"A\", \"menu.htm\", \"main\"]");
    let urls: Vec<&str> = parse.outlinks.iter().map(|l| l.url.as_str()).collect();
    assert!(urls.contains(&"http://h/p/menu.htm"), "got {urls:?}");
}

#[test]
fn empty_script_parses_successfully_with_empty_results() {
    let parse = filter().parse_js("http://h/empty.js", "");

    assert!(parse.status.is_success());
    assert!(parse.title.is_empty());
    assert!(parse.outlinks.is_empty());
}
