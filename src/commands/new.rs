//! Create a new markdown post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Folio;

/// Write a new post into source/_posts and return its path
pub fn create_post(
    folio: &Folio,
    title: &str,
    categories: &[String],
    excerpt: Option<&str>,
) -> Result<PathBuf> {
    let now = chrono::Local::now();
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let target_dir = folio.source_dir.join("_posts");
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let mut content = String::from("---\n");
    content.push_str(&format!("title: {}\n", yaml_string(title)));
    content.push_str(&format!("date: {}\n", now.format("%Y-%m-%d %H:%M:%S")));
    if categories.is_empty() {
        content.push_str("categories:\n");
    } else {
        let list: Vec<String> = categories.iter().map(|c| yaml_string(c)).collect();
        content.push_str(&format!("categories: [{}]\n", list.join(", ")));
    }
    if let Some(excerpt) = excerpt {
        content.push_str(&format!("excerpt: {}\n", yaml_string(excerpt)));
    }
    content.push_str("---\n\n");

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Quote a value so YAML reads it back as the same string
fn yaml_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
