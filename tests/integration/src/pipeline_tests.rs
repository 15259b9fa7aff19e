//! End-to-end integration tests for the homepage update pipeline
//!
//! These tests exercise the complete flow at the library level: settings
//! loading -> feed and domain parsing -> region patch -> backup -> document
//! write -> publish.

use chrono::{Local, TimeZone};
use site_core::{BackupManager, CheckStatus, Error, SiteConfig, UpdateEngine, UpdateOptions};
use site_fs::NormalizedPath;
use site_region::{Error as RegionError, count_occurrences};
use site_test_utils::site::{DOCUMENT_HEAD, DOCUMENT_TAIL, PLACEHOLDER_INNER, TestSite};

/// Set up a populated site: a homepage with two stale cards, a two-entry
/// ranking feed, and one configured domain.
fn setup_site() -> TestSite {
    let site = TestSite::new();
    site.write_document(PLACEHOLDER_INNER);
    site.write_feed(&[
        TestSite::feed_entry(1, "alpha.example.com", 15230),
        TestSite::feed_entry(2, "beta.example.com", 9841),
    ]);
    site.write_domains(&[TestSite::domain_entry(
        "alpha.example.com",
        "Alpha Tools",
        "Handy converters for everyday files",
        "🧰",
        "linear-gradient(45deg, #667eea, #764ba2)",
    )]);
    site
}

/// Settings wired to the standard layout, with the upload tool pointed at
/// a path that does not exist so no test ever shells out by accident.
fn config_for(site: &TestSite) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.paths.document = site.path_str("www/index.html");
    config.paths.feed = site.path_str("data/latest_top7.json");
    config.paths.domains = site.path_str("config/domains_config.json");
    config.paths.backup_dir = site.path_str("backups");
    config.publish.tool = site.path_str("bin/absent-uploader");
    config
}

fn engine_for(site: &TestSite) -> UpdateEngine {
    UpdateEngine::new(config_for(site))
}

#[cfg(unix)]
fn install_uploader(site: &TestSite, script: &str) -> String {
    use std::os::unix::fs::PermissionsExt;
    site.write_file("bin/fake-s3cmd", script);
    let path = site.root().join("bin/fake-s3cmd");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    site.path_str("bin/fake-s3cmd")
}

#[test]
fn test_settings_file_drives_full_update() {
    let site = setup_site();

    // 1. Write and load settings from site.toml
    let settings = format!(
        "{}\n[publish]\ntool = \"{}\"\n",
        site.config_toml(),
        site.path_str("bin/absent-uploader")
    );
    site.write_file("site.toml", &settings);
    let config = SiteConfig::load(&NormalizedPath::new(site.root().join("site.toml"))).unwrap();
    assert_eq!(config.paths.document, site.path_str("www/index.html"));

    // 2. The document is healthy before the update
    let engine = UpdateEngine::new(config);
    let check = engine.check().unwrap();
    assert_eq!(check.status, CheckStatus::Healthy);

    // 3. Run the update
    let report = engine.update(&UpdateOptions::default()).unwrap();

    // 4. Durable effects happened in order: snapshot first, then the write
    let backed_up = report
        .actions
        .iter()
        .position(|a| a.starts_with("Backed up"))
        .unwrap();
    let updated = report
        .actions
        .iter()
        .position(|a| a.starts_with("Updated 2 cards"))
        .unwrap();
    assert!(backed_up < updated);

    let backups = site.backups();
    assert_eq!(backups.len(), 1);
    site.assert_file_contains(&format!("backups/{}", backups[0]), "stale one");

    // 5. The rendered cards replaced the stale region, chrome untouched
    let document = site.read_file("www/index.html");
    assert!(document.starts_with(DOCUMENT_HEAD));
    assert!(document.ends_with(DOCUMENT_TAIL));
    assert!(document.contains("Alpha Tools"));
    assert!(document.contains("Handy converters for everyday files"));
    assert!(document.contains("15,230 visits"));
    assert!(document.contains("beta.example.com"));
    assert!(!document.contains("stale"));

    // 6. The absent upload tool degraded to a warning, not a failure
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("not found, skipping publish"));
}

#[test]
fn test_update_reflects_feed_changes_across_runs() {
    let site = setup_site();
    let engine = engine_for(&site);

    engine.update(&UpdateOptions::default()).unwrap();
    site.assert_file_contains("www/index.html", "15,230 visits");

    // The ranking shifts: beta overtakes alpha
    site.write_feed(&[
        TestSite::feed_entry(1, "beta.example.com", 20105),
        TestSite::feed_entry(2, "alpha.example.com", 14990),
    ]);
    engine.update(&UpdateOptions::default()).unwrap();

    let document = site.read_file("www/index.html");
    assert!(document.contains("20,105 visits"));
    assert!(document.contains("14,990 visits"));
    let beta = document.find("beta.example.com").unwrap();
    let alpha = document.find("Alpha Tools").unwrap();
    assert!(beta < alpha, "cards must appear in feed order");

    // Repeated patching never duplicates the region
    assert_eq!(
        count_occurrences(&document, r#"<div class="projects-grid">"#),
        1
    );
    assert!(document.ends_with(DOCUMENT_TAIL));

    // The newest snapshot holds the pre-rewrite state of the second run
    let backups = site.backups();
    assert!(!backups.is_empty());
    let newest = backups.last().unwrap();
    site.assert_file_contains(&format!("backups/{newest}"), "Alpha Tools");
}

#[test]
fn test_update_then_check_reports_healthy() {
    let site = setup_site();
    let engine = engine_for(&site);

    engine.update(&UpdateOptions::default()).unwrap();

    let check = engine.check().unwrap();
    assert_eq!(check.status, CheckStatus::Healthy);
    assert_eq!(check.anchor_count, 1);
    assert!(check.issues.is_empty());
    assert!(check.document_len > 1000);
}

#[test]
fn test_unparseable_feed_leaves_document_untouched() {
    let site = setup_site();
    site.write_file("data/latest_top7.json", "{ \"top7\": [ oops");
    let before = site.read_file("www/index.html");

    let err = engine_for(&site).update(&UpdateOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Fs(_)));

    assert_eq!(site.read_file("www/index.html"), before);
    assert!(site.backups().is_empty());
}

#[test]
fn test_duplicate_anchor_aborts_before_any_effect() {
    let site = setup_site();
    // A second anchor inside the region makes the document ambiguous
    site.write_raw_document(&format!(
        "{DOCUMENT_HEAD}\n            <div class=\"projects-grid\">old</div>\n        {DOCUMENT_TAIL}"
    ));
    let before = site.read_file("www/index.html");

    match engine_for(&site).update(&UpdateOptions::default()) {
        Err(Error::Region(RegionError::AnchorAmbiguous { count, .. })) => assert_eq!(count, 2),
        other => panic!("unexpected result: {other:?}"),
    }

    assert_eq!(site.read_file("www/index.html"), before);
    assert!(site.backups().is_empty());
}

#[test]
fn test_feed_timestamp_alone_does_not_force_rewrite() {
    let site = setup_site();
    let engine = engine_for(&site);
    engine.update(&UpdateOptions::default()).unwrap();
    let after_first = site.read_file("www/index.html");

    // Same entries, fresher stamp: the patched document is unchanged
    let entries = [
        TestSite::feed_entry(1, "alpha.example.com", 15230),
        TestSite::feed_entry(2, "beta.example.com", 9841),
    ];
    site.write_file(
        "data/latest_top7.json",
        &format!(
            "{{\n  \"last_update\": \"2025-08-25 09:00:00\",\n  \"top7\": [\n    {}\n  ]\n}}\n",
            entries.join(",\n    ")
        ),
    );

    let err = engine.update(&UpdateOptions::default()).unwrap_err();
    assert!(matches!(err, Error::NoOpDetected));
    assert_eq!(site.read_file("www/index.html"), after_first);
}

#[test]
fn test_snapshots_accumulate_across_minutes() {
    let site = setup_site();
    let manager = BackupManager::new(NormalizedPath::new(site.path_str("backups")));
    let document = NormalizedPath::new(site.path_str("www/index.html"));

    let first = Local.with_ymd_and_hms(2025, 8, 25, 3, 0, 0).unwrap();
    let second = Local.with_ymd_and_hms(2025, 8, 25, 3, 1, 0).unwrap();
    manager.snapshot_at(&document, first).unwrap();
    manager.snapshot_at(&document, second).unwrap();

    assert_eq!(
        site.backups(),
        vec![
            "index_backup_20250825_0300.html".to_string(),
            "index_backup_20250825_0301.html".to_string(),
        ]
    );
}

#[test]
fn test_dry_run_previews_then_real_run_applies() {
    let site = setup_site();
    let engine = engine_for(&site);

    let preview = engine
        .update(&UpdateOptions {
            dry_run: true,
            skip_publish: false,
        })
        .unwrap();
    assert!(preview.actions.iter().all(|a| a.starts_with("[dry-run] Would")));
    let diff = preview.diff.unwrap();
    assert!(diff.contains("stale one"));
    assert!(diff.contains("Alpha Tools"));

    // Nothing durable happened yet
    assert!(site.backups().is_empty());
    site.assert_file_contains("www/index.html", "stale one");

    // The same engine then applies the previewed change for real
    engine.update(&UpdateOptions::default()).unwrap();
    site.assert_file_contains("www/index.html", "Alpha Tools");
    assert_eq!(site.backups().len(), 1);
}

#[cfg(unix)]
#[test]
fn test_publish_tool_receives_document_and_destination() {
    let site = setup_site();
    let args_file = site.path_str("publish-args.txt");
    let tool = install_uploader(
        &site,
        &format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > \"{args_file}\"\nexit 0\n"),
    );

    let mut config = config_for(&site);
    config.publish.tool = tool;
    config.publish.destination = "s3://cards-bucket/index.html".to_string();

    let report = UpdateEngine::new(config)
        .update(&UpdateOptions::default())
        .unwrap();
    assert!(report.warnings.is_empty());
    assert!(
        report
            .actions
            .iter()
            .any(|a| a.contains("Published") && a.contains("s3://cards-bucket/index.html"))
    );

    let args = site.read_file("publish-args.txt");
    let lines: Vec<&str> = args.lines().collect();
    assert_eq!(
        lines,
        vec![
            "put",
            site.path_str("www/index.html").as_str(),
            "s3://cards-bucket/index.html",
            "--acl-public",
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_publish_failure_never_fails_the_update() {
    let site = setup_site();
    let tool = install_uploader(&site, "#!/bin/sh\necho 'remote rejected' >&2\nexit 3\n");

    let mut config = config_for(&site);
    config.publish.tool = tool;

    let report = UpdateEngine::new(config)
        .update(&UpdateOptions::default())
        .unwrap();

    // The local write went through even though the upload did not
    site.assert_file_contains("www/index.html", "Alpha Tools");
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("Publish failed"));
    assert!(report.warnings[0].contains("remote rejected"));
}
