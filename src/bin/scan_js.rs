//! Scan a JavaScript file for outlinks from the command line.
//!
//! Usage: `scan-js <file.js> <base-url> [outlink-pattern]`
//!
//! The default outlink pattern captures quoted string literals that look
//! like a file path (a dot followed by a short extension). Set `RUST_LOG`
//! to surface skipped candidates and budget warnings.

use std::{env, fs, process};

use linkscout::{JsLinkFilter, Options};

const DEFAULT_OUTLINK_PATTERN: &str = r#"["']([^"']+\.[A-Za-z0-9]{1,5})["']"#;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let (Some(path), Some(base_url)) = (args.next(), args.next()) else {
        eprintln!("usage: scan-js <file.js> <base-url> [outlink-pattern]");
        process::exit(2);
    };
    let pattern = args
        .next()
        .unwrap_or_else(|| DEFAULT_OUTLINK_PATTERN.to_string());

    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("cannot read {path}: {err}");
            process::exit(1);
        }
    };

    let options = Options {
        outlink_pattern: Some(pattern),
        ..Options::default()
    };
    let filter = match JsLinkFilter::new(options) {
        Ok(filter) => filter,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    // Scan the file directly; eligibility gating is a crawl-pipeline
    // concern, not a CLI one.
    let text = linkscout::encoding::transcode_to_utf8(&bytes);
    let links = filter.extract_links(&text, "", &base_url);

    println!("Outlinks extracted: {}", links.len());
    for link in links {
        println!(" - {}", link.url);
    }
}
