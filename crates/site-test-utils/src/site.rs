//! [`TestSite`] builder for homepage update test scenarios.
//!
//! Extracted from `tests/integration/src/pipeline_tests.rs` to enable reuse
//! across all crates in the workspace.

use std::fs;
use std::path::Path;

use site_fs::NormalizedPath;
use tempfile::TempDir;

/// Document prefix up to and including the card region anchor.
///
/// Deliberately longer than the default 1000-byte corruption floor so that
/// patch tests pass size validation without overriding settings.
pub const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Online Tools Directory</title>
    <style>
        body {
            margin: 0;
            font-family: "Segoe UI", Arial, sans-serif;
            background: #f5f6fa;
            color: #2f3640;
        }
        .site-header {
            padding: 32px 16px;
            text-align: center;
            background: linear-gradient(135deg, #667eea, #764ba2);
            color: #fff;
        }
        .projects-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
            gap: 20px;
            max-width: 1100px;
            margin: 0 auto;
            padding: 24px;
        }
        .project-card {
            display: block;
            padding: 18px;
            border-radius: 10px;
            background: #fff;
            box-shadow: 0 2px 6px rgba(0, 0, 0, 0.08);
            text-decoration: none;
            color: inherit;
        }
        .project-card:hover {
            transform: translateY(-2px);
        }
        .visit-count {
            font-size: 12px;
            color: #718093;
        }
    </style>
</head>
<body>
    <header class="site-header">
        <h1>Online Tools Directory</h1>
        <p>Hand-picked utilities, ranked by weekly traffic.</p>
    </header>
    <main>
        <div class="projects-grid">"#;

/// Document suffix from the region close tag to the end of the page.
pub const DOCUMENT_TAIL: &str = r#"</div>
    </main>
    <footer class="site-footer">
        <p>Updated nightly from the weekly traffic report.</p>
    </footer>
</body>
</html>
"#;

/// Inner region content with two stale cards and the production closing
/// indent, for documents that should change when patched.
pub const PLACEHOLDER_INNER: &str = "\n            <a href=\"https://old.example.com\" class=\"project-card\">stale one</a>\n\n            <a href=\"https://older.example.com\" class=\"project-card\">stale two</a>\n        ";

/// A temporary site tree with helper methods for test setup and assertion.
///
/// The standard layout places the homepage at `www/index.html`, the ranking
/// feed at `data/latest_top7.json`, the domain presentation config at
/// `config/domains_config.json` and snapshots under `backups/`.
///
/// # Example
///
/// ```rust,no_run
/// use site_test_utils::site::{TestSite, PLACEHOLDER_INNER};
///
/// let site = TestSite::new();
/// site.write_document(PLACEHOLDER_INNER);
/// site.write_feed(&[TestSite::feed_entry(1, "tools.example.com", 4821)]);
/// site.assert_file_exists("www/index.html");
/// ```
pub struct TestSite {
    temp_dir: TempDir,
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSite {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` under the root, with forward slashes.
    ///
    /// Safe to embed in TOML and JSON on every platform.
    pub fn path_str(&self, rel: &str) -> String {
        NormalizedPath::new(self.root().join(rel)).as_str().to_string()
    }

    /// Write `content` to `rel` under the root, creating parent directories.
    pub fn write_file(&self, rel: &str, content: &str) {
        let full_path = self.root().join(rel);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Write `www/index.html` with `inner` spliced between the standard
    /// head and tail, so the card region holds exactly `inner`.
    pub fn write_document(&self, inner: &str) {
        self.write_raw_document(&format!("{DOCUMENT_HEAD}{inner}{DOCUMENT_TAIL}"));
    }

    /// Write `www/index.html` verbatim, for malformed-document scenarios.
    pub fn write_raw_document(&self, content: &str) {
        self.write_file("www/index.html", content);
    }

    /// One ranking feed entry as a JSON object literal.
    ///
    /// The short name is the first dotted label of `domain` and the URL is
    /// `https://` plus the domain, matching the producer's conventions.
    pub fn feed_entry(rank: u32, domain: &str, visits: u64) -> String {
        let short = domain.split('.').next().unwrap_or(domain);
        format!(
            r#"{{"rank": {rank}, "domain": "{domain}", "short_name": "{short}", "display_name": "{domain}", "url": "https://{domain}", "visits_7d": {visits}}}"#
        )
    }

    /// Write `data/latest_top7.json` holding `entries` in feed order.
    pub fn write_feed(&self, entries: &[String]) {
        let body = format!(
            "{{\n  \"last_update\": \"2025-08-25 03:00:00\",\n  \"top7\": [\n    {}\n  ]\n}}\n",
            entries.join(",\n    ")
        );
        self.write_file("data/latest_top7.json", &body);
    }

    /// One configured domain as a JSON member literal for [`write_domains`].
    ///
    /// [`write_domains`]: Self::write_domains
    pub fn domain_entry(
        domain: &str,
        title: &str,
        description: &str,
        icon: &str,
        color: &str,
    ) -> String {
        format!(
            r#""{domain}": {{"title": "{title}", "description": "{description}", "icon": "{icon}", "color": "{color}"}}"#
        )
    }

    /// Write `config/domains_config.json` holding `entries`.
    pub fn write_domains(&self, entries: &[String]) {
        let body = format!(
            "{{\n  \"domains\": {{\n    {}\n  }}\n}}\n",
            entries.join(",\n    ")
        );
        self.write_file("config/domains_config.json", &body);
    }

    /// Write a minimal article page with a title and meta description.
    pub fn write_article(&self, rel: &str, title: &str, description: &str) {
        let body = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<title>{title}</title>\n<meta name=\"description\" content=\"{description}\">\n</head>\n<body>\n<h1>{title}</h1>\n<p>Body text for {title}.</p>\n</body>\n</html>\n"
        );
        self.write_file(rel, &body);
    }

    /// Settings file body wired to the standard layout under this root.
    pub fn config_toml(&self) -> String {
        format!(
            "[paths]\ndocument = \"{}\"\nfeed = \"{}\"\ndomains = \"{}\"\nbackup_dir = \"{}\"\n",
            self.path_str("www/index.html"),
            self.path_str("data/latest_top7.json"),
            self.path_str("config/domains_config.json"),
            self.path_str("backups"),
        )
    }

    /// Read the file at `rel` (relative to root) as a string.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file cannot be read.
    pub fn read_file(&self, rel: &str) -> String {
        let full_path = self.root().join(rel);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// File names in the `backups/` directory, sorted.
    pub fn backups(&self) -> Vec<String> {
        let dir = self.root().join("backups");
        if !dir.exists() {
            return Vec::new();
        }
        let mut names: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that `rel` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, rel: &str) {
        let full_path = self.root().join(rel);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, rel: &str) {
        let full_path = self.root().join(rel);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `rel` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let file_content = self.read_file(rel);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            rel,
            content,
            file_content
        );
    }
}
