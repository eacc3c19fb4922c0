use std::path::PathBuf;

/// Path to a file under tests/fixtures
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", name, e))
}

/// Minimal well-formed feed entry as JSON text
pub fn entry_json(name: &str, amount: &str, image_height: &str) -> String {
    format!(
        r#"{{"im:name":{{"label":"{name}"}},"im:artist":{{"label":"Artist"}},
            "category":{{"attributes":{{"label":"Pop"}}}},
            "im:image":[{{"label":"https://example.com/{image_height}.png","attributes":{{"height":"{image_height}"}}}}],
            "im:price":{{"attributes":{{"amount":"{amount}","currency":"USD"}}}},
            "id":{{"attributes":{{"im:id":"{name}"}}}}}}"#
    )
}

pub fn feed_json(entries: &[String]) -> String {
    format!(r#"{{"feed":{{"entry":[{}]}}}}"#, entries.join(","))
}
