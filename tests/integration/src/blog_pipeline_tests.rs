//! End-to-end integration tests for blog article collection
//!
//! These tests exercise the complete flow at the library level: settings
//! loading -> site tree scan -> article extraction -> blog index JSON.

use site_core::{BlogCollector, BlogData, SiteConfig};
use site_fs::NormalizedPath;
use site_test_utils::site::TestSite;

/// Set up a small site tree: two article pages plus chrome that must
/// never be collected.
fn setup_tree(site: &TestSite) {
    site.write_article(
        "www/pages/ai/agent-notes.html",
        "Agent Notes",
        "Field notes from agent experiments",
    );
    site.write_article(
        "www/pages/posts/release-recap.html",
        "Release Recap",
        "What shipped this quarter",
    );
    site.write_article("www/index.html", "Home", "Site home");
    site.write_article("www/blog.html", "Blog", "Blog index");
    site.write_article("www/pages/partner-showcase.html", "Partners", "Landing page");
}

fn collector_for(site: &TestSite) -> BlogCollector {
    BlogCollector::new(
        NormalizedPath::new(site.path_str("www")),
        NormalizedPath::new(site.path_str("www/blog_data.json")),
    )
}

#[test]
fn test_collect_then_add_then_recollect() {
    let site = TestSite::new();
    setup_tree(&site);
    let collector = collector_for(&site);

    // 1. Initial collection sees the two articles, none of the chrome
    let data = collector.run().unwrap();
    assert_eq!(data.total_articles, 2);
    assert_eq!(data.categories, vec!["AI", "Tech Notes"]);
    site.assert_file_contains("www/blog_data.json", "\"totalArticles\": 2");

    // 2. A new article lands; a re-run picks it up and rewrites the index.
    //    The index JSON itself sits inside the tree and is never collected.
    site.write_article(
        "www/pages/papers/prfaq-launch.html",
        "Writing a PRFAQ",
        "Working backwards from the launch",
    );
    let data = collector.run().unwrap();
    assert_eq!(data.total_articles, 3);
    assert_eq!(data.categories, vec!["AI", "Management", "Tech Notes"]);
    site.assert_file_contains("www/blog_data.json", "Writing a PRFAQ");
    site.assert_file_contains("www/blog_data.json", "\"totalArticles\": 3");

    // URLs are site-absolute and the homepage never leaks in
    assert!(data.articles.iter().all(|a| a.url.starts_with("/pages/")));
    assert!(data.articles.iter().all(|a| a.url != "/index.html"));
}

#[test]
fn test_output_round_trips_through_serde() {
    let site = TestSite::new();
    setup_tree(&site);

    let data = collector_for(&site).run().unwrap();

    let parsed: BlogData = serde_json::from_str(&site.read_file("www/blog_data.json")).unwrap();
    assert_eq!(parsed.total_articles, data.total_articles);
    assert_eq!(parsed.last_update, data.last_update);
    assert_eq!(parsed.categories, data.categories);
    assert_eq!(parsed.articles, data.articles);
}

#[test]
fn test_settings_file_drives_collection() {
    let site = TestSite::new();
    setup_tree(&site);
    site.write_file(
        "site.toml",
        &format!(
            "[blogs]\nwww_root = \"{}\"\noutput = \"{}\"\n",
            site.path_str("www"),
            site.path_str("data/blog_data.json"),
        ),
    );

    let config = SiteConfig::load(&NormalizedPath::new(site.root().join("site.toml"))).unwrap();
    let data = BlogCollector::from_config(&config.blogs).run().unwrap();

    assert_eq!(data.total_articles, 2);
    site.assert_file_exists("data/blog_data.json");
    site.assert_file_contains("data/blog_data.json", "Agent Notes");
}

#[test]
fn test_excluded_directories_skipped_at_any_depth() {
    let site = TestSite::new();
    site.write_article("www/pages/posts/deep-dive.html", "Deep Dive", "One long read");
    site.write_article("www/pages/log/notes/buried.html", "Buried", "Raw log entry");
    site.write_article("www/webclick/stats.html", "Stats", "Traffic numbers");
    site.write_article("www/pages/pic/gallery.html", "Gallery", "Screenshots");
    site.write_article("www/pages/index.html", "Section Home", "Section landing");
    site.write_article("www/pages/posts/tool-showcase.html", "Tools", "Landing page");

    let data = collector_for(&site).run().unwrap();

    assert_eq!(data.total_articles, 1);
    assert_eq!(data.articles[0].title, "Deep Dive");
    assert_eq!(data.articles[0].url, "/pages/posts/deep-dive.html");
}
