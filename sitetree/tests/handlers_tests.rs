use sitetree::MapFormat;
use sitetree::handlers::*;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;
use url::Url;

#[test]
fn test_parse_url_line_with_scheme() {
    let result = parse_url_line("https://example.com/api");
    assert_eq!(result.unwrap().as_str(), "https://example.com/api");
}

#[test]
fn test_parse_url_line_without_scheme() {
    let result = parse_url_line("example.com");
    assert_eq!(result.unwrap().as_str(), "http://example.com/");
}

#[test]
fn test_parse_url_line_invalid() {
    let result = parse_url_line("not a valid url!!!");
    assert!(result.is_none());
}

#[test]
fn test_load_urls_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "https://example.com/api/users")?;
    writeln!(temp_file, "httpbin.org/get")?;
    writeln!(temp_file)?; // Empty line
    writeln!(temp_file, "https://api.example.com")?;

    let urls = load_urls_from_file(temp_file.path())?;

    assert_eq!(urls.len(), 3);
    assert_eq!(urls[0].as_str(), "https://example.com/api/users");
    assert_eq!(urls[1].as_str(), "http://httpbin.org/get");
    assert_eq!(urls[2].as_str(), "https://api.example.com/");

    Ok(())
}

#[test]
fn test_load_urls_from_file_empty() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file).unwrap();
    writeln!(temp_file, "   ").unwrap();

    let result = load_urls_from_file(temp_file.path());

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("No valid URLs"));
}

#[test]
fn test_load_urls_from_file_missing() {
    let result = load_urls_from_file(std::path::Path::new("/nonexistent/sitetree/hosts.txt"));
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Failed to read hosts file")
    );
}

#[test]
fn test_load_urls_from_reader_skips_invalid() {
    let input = Cursor::new("a.com/x\n\nnot a valid url!!!\nhttps://b.com/y\n");
    let urls = load_urls_from_reader(input).unwrap();

    let hosts: Vec<&str> = urls.iter().filter_map(Url::host_str).collect();
    assert_eq!(hosts, vec!["a.com", "b.com"]);
}

#[test]
fn test_collect_targets_no_input() {
    let result = collect_targets(&[], None, false);
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Either --url, --hosts-file or --stdin must be provided")
    );
}

#[test]
fn test_collect_targets_urls_then_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "https://b.com/z")?;

    let urls = vec!["a.com/x".to_string()];
    let targets = collect_targets(&urls, Some(temp_file.path()), false)?;

    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].host_str(), Some("a.com"));
    assert_eq!(targets[1].host_str(), Some("b.com"));
    Ok(())
}

#[test]
fn test_collect_targets_rejects_bad_url_argument() {
    let urls = vec!["   ".to_string()];
    let result = collect_targets(&urls, None, false);
    assert!(result.unwrap_err().to_string().contains("Invalid --url"));
}

#[test]
fn test_build_tree_structure() {
    let targets: Vec<Url> = [
        "https://a.com/api/users/1",
        "https://a.com/api/users/2",
        "https://a.com/api/orders",
        "https://b.com/",
        "https://a.com/api/users/1",
    ]
    .iter()
    .map(|u| Url::parse(u).unwrap())
    .collect();

    let tree = build_tree(&targets);

    assert_eq!(tree.host_count(), 2);
    assert_eq!(tree.len(), 7);

    let json = serde_json::to_value(tree.structure()).unwrap();
    assert_eq!(json[0]["Name"], "a.com");
    assert_eq!(json[0]["Children"][0]["Children"][0]["Name"], "users");
    assert_eq!(json[0]["Children"][0]["Children"][1]["Name"], "orders");
    assert_eq!(json[1]["Name"], "b.com");
    assert_eq!(json[1]["Children"], serde_json::json!([]));
}

#[test]
fn test_render_map_ends_with_newline() {
    let targets = vec![Url::parse("https://a.com/x").unwrap()];
    let tree = build_tree(&targets);

    for format in [MapFormat::Text, MapFormat::Json, MapFormat::Markdown] {
        let content = render_map(&tree, format, false).unwrap();
        assert!(content.ends_with('\n'), "{:?} output lacks a newline", format);
    }

    let json = render_map(&tree, MapFormat::Json, false).unwrap();
    assert!(json.ends_with("]\n"));
}
