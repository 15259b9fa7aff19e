//! The collect-blogs command: article metadata for the blog index.

use colored::Colorize;

use site_core::BlogCollector;

use crate::commands::load_site_config;
use crate::error::Result;

/// Run the collect-blogs command
pub fn run_collect_blogs(
    config_path: Option<&str>,
    www_root: Option<&str>,
    output: Option<&str>,
) -> Result<()> {
    println!("{} Collecting blog articles...", "=>".blue().bold());

    let mut blogs = load_site_config(config_path)?.blogs;
    if let Some(root) = www_root {
        blogs.www_root = root.to_string();
    }
    if let Some(output) = output {
        blogs.output = output.to_string();
    }

    let data = BlogCollector::from_config(&blogs).run()?;

    println!(
        "   {} articles across {} categories",
        data.total_articles,
        data.categories.len()
    );
    for category in &data.categories {
        let count = data
            .articles
            .iter()
            .filter(|article| article.category == *category)
            .count();
        println!("   {} {} ({})", "+".green(), category, count);
    }

    println!("{} Wrote {}.", "OK".green().bold(), blogs.output.cyan());
    Ok(())
}
