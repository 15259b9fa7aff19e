//! Blog article collection: scans the site tree for article pages and
//! produces the JSON consumed by the blog index.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{DateTime, Local};
use regex::Regex;
use serde::{Deserialize, Serialize};
use site_fs::{NormalizedPath, io};

use crate::config::BlogsConfig;
use crate::error::Result;

/// Files that are part of the site chrome, never articles.
const EXCLUDED_FILES: &[&str] = &[
    "index.html",
    "stats.html",
    "blog.html",
    "manifest.json",
    "sw.js",
    "api.php",
    "all.html",
    "vote.html",
    "meet.html",
];

/// Directory names skipped entirely during the scan.
const EXCLUDED_DIRS: &[&str] = &["log", "webclick", "pic"];

/// Category keyword table, checked against the path below the scan
/// root. First match wins, in table order.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("AI", &["ai", "claude", "tts", "voice", "machine-learning", "ai-projects"]),
    ("Architecture", &["architecture", "system", "design", "tech-blog", "ssl", "qcp"]),
    ("AdTech", &["adtech", "dsp", "adx", "rtb", "sx"]),
    ("Management", &["management", "paper", "pdf", "product", "prfaq", "git", "review"]),
];

const DEFAULT_CATEGORY: &str = "Tech Notes";
const FALLBACK_ARTICLE_DESCRIPTION: &str = "Technical article.";

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("Invalid title regex")
});

static META_DESCRIPTION_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<meta\s[^>]*name\s*=\s*["']description["'][^>]*>"#)
        .expect("Invalid meta description regex")
});

static CONTENT_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)content\s*=\s*["']([^"']*)["']"#).expect("Invalid content attribute regex")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid tag regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Showcase pages are landing material, not articles.
static SHOWCASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*showcase.*\.html$").expect("Invalid showcase regex"));

/// One article page found in the site tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogArticle {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Modification date, `YYYY-MM-DD`.
    pub date: String,
    /// Site-absolute URL of the page.
    pub url: String,
    /// Where the page was found on disk.
    pub file_path: String,
}

/// The blog index payload, serialized as `blog_data.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogData {
    pub last_update: String,
    pub total_articles: usize,
    /// Articles sorted by date, newest first.
    pub articles: Vec<BlogArticle>,
    /// Distinct categories present, sorted.
    pub categories: Vec<String>,
}

/// Scans a site tree for article pages and writes the blog index data.
pub struct BlogCollector {
    www_root: NormalizedPath,
    output: NormalizedPath,
}

impl BlogCollector {
    pub fn new(www_root: NormalizedPath, output: NormalizedPath) -> Self {
        Self { www_root, output }
    }

    pub fn from_config(config: &BlogsConfig) -> Self {
        Self::new(
            NormalizedPath::new(&config.www_root),
            NormalizedPath::new(&config.output),
        )
    }

    /// Collect all articles under the scan root.
    pub fn collect(&self) -> Result<BlogData> {
        self.collect_at(Local::now())
    }

    /// Like [`collect`](Self::collect) with an explicit "now" for the
    /// `lastUpdate` stamp.
    pub fn collect_at(&self, now: DateTime<Local>) -> Result<BlogData> {
        let root = self.www_root.to_native();
        let mut files = Vec::new();
        visit_dir(&root, &mut files)?;
        files.sort();

        let mut articles: Vec<BlogArticle> = files
            .iter()
            .filter(|path| is_article_file(path))
            .map(|path| self.article_for(path))
            .collect();

        articles.sort_by(|a, b| b.date.cmp(&a.date));

        let categories: Vec<String> = articles
            .iter()
            .map(|article| article.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        tracing::info!("collected {} articles", articles.len());

        Ok(BlogData {
            last_update: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            total_articles: articles.len(),
            articles,
            categories,
        })
    }

    /// Serialize `data` to the configured output file atomically.
    pub fn write(&self, data: &BlogData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        io::write_atomic(&self.output, json.as_bytes())?;
        Ok(())
    }

    /// Collect and write in one step.
    pub fn run(&self) -> Result<BlogData> {
        let data = self.collect()?;
        self.write(&data)?;
        Ok(data)
    }

    fn article_for(&self, path: &Path) -> BlogArticle {
        let (title, description) = extract_title_and_description(path);
        let relative = self.relative_to_root(path);

        let title = if title.is_empty() {
            title_from_stem(path)
        } else {
            title
        };

        BlogArticle {
            title,
            description,
            category: categorize(&relative),
            date: file_date(path),
            url: format!("/{}", NormalizedPath::new(&relative)),
            file_path: NormalizedPath::new(path).as_str().to_string(),
        }
    }

    fn relative_to_root(&self, path: &Path) -> PathBuf {
        path.strip_prefix(self.www_root.to_native())
            .unwrap_or(path)
            .to_path_buf()
    }
}

/// Recursively gather `.html` files, skipping excluded directories.
///
/// Unreadable subdirectories are logged and skipped; only a failure at
/// the scan root itself is an error.
fn visit_dir(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            let name = entry.file_name().to_string_lossy().to_lowercase();
            if EXCLUDED_DIRS.contains(&name.as_str()) {
                continue;
            }
            if let Err(e) = visit_dir(&path, files) {
                tracing::warn!("skipping unreadable directory {}: {e}", path.display());
            }
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
        {
            files.push(path);
        }
    }
    Ok(())
}

fn is_article_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let lower = name.to_lowercase();
    if EXCLUDED_FILES.contains(&lower.as_str()) {
        return false;
    }
    !SHOWCASE_RE.is_match(&lower)
}

/// Pull the `<title>` text and a description out of a page.
///
/// Description preference: the `description` meta tag, then the first
/// 200 characters of the tag-stripped body, then a generic line.
/// Unreadable files are logged and yield empty strings so the caller
/// falls back to name-derived values.
fn extract_title_and_description(path: &Path) -> (String, String) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("failed to read {}: {e}", path.display());
            return (String::new(), String::new());
        }
    };

    let title = TITLE_RE
        .captures(&content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    let mut description = META_DESCRIPTION_TAG_RE
        .find(&content)
        .and_then(|tag| CONTENT_ATTR_RE.captures(tag.as_str()))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    if description.is_empty() {
        description = summarize_body(&content);
    }

    (title, description)
}

/// First 200 characters of the page with markup stripped.
fn summarize_body(content: &str) -> String {
    let text = TAG_RE.replace_all(content, " ");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    let text = text.trim();

    if text.is_empty() {
        return FALLBACK_ARTICLE_DESCRIPTION.to_string();
    }
    if text.chars().count() > 200 {
        let prefix: String = text.chars().take(200).collect();
        format!("{prefix}...")
    } else {
        text.to_string()
    }
}

/// Category from the first keyword found in the path below the root.
fn categorize(relative: &Path) -> String {
    let path_str = relative.to_string_lossy().to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| path_str.contains(keyword)) {
            return (*category).to_string();
        }
    }
    DEFAULT_CATEGORY.to_string()
}

/// Modification date of the file, today when unavailable.
fn file_date(path: &Path) -> String {
    let datetime: DateTime<Local> = match fs::metadata(path).and_then(|m| m.modified()) {
        Ok(time) => time.into(),
        Err(_) => Local::now(),
    };
    datetime.format("%Y-%m-%d").to_string()
}

/// `my-first-post.html` becomes `My First Post`.
fn title_from_stem(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");
    stem.replace('-', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
