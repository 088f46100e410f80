//! Content loader - loads posts from the data file and source directory

use chrono::Local;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownSummarizer, Post};
use crate::error::LoadError;
use crate::Folio;

/// Loads the site's post collection
pub struct ContentLoader<'a> {
    folio: &'a Folio,
    summarizer: MarkdownSummarizer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self {
            folio,
            summarizer: MarkdownSummarizer::new(),
        }
    }

    /// Load every published post.
    ///
    /// Posts from the data file come first, followed by markdown posts in
    /// file name order. Slugs must be unique across both sources.
    pub fn load_posts(&self) -> Result<Vec<Post>, LoadError> {
        let mut posts = self.load_data_file()?;
        posts.extend(self.load_markdown_posts()?);
        self.finalize(posts)
    }

    /// Load the YAML list of posts, if the site has one
    fn load_data_file(&self) -> Result<Vec<Post>, LoadError> {
        let path = &self.folio.posts_file;
        if !path.exists() {
            tracing::debug!("No posts data file at {:?}", path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let posts: Vec<Post> = serde_yaml::from_str(&content).map_err(|e| LoadError::Yaml {
            path: path.clone(),
            source: e,
        })?;

        for post in &posts {
            if post.slug.trim().is_empty() {
                return Err(LoadError::MissingField {
                    path: path.clone(),
                    field: "slug",
                });
            }
            if post.title.trim().is_empty() {
                return Err(LoadError::MissingField {
                    path: path.clone(),
                    field: "title",
                });
            }
        }

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), path);
        Ok(posts)
    }

    /// Load all markdown posts from source/_posts
    fn load_markdown_posts(&self) -> Result<Vec<Post>, LoadError> {
        let posts_dir = self.folio.source_dir.join("_posts");
        if !posts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&posts_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }
            match self.load_post(path) {
                Ok(Some(post)) => posts.push(post),
                Ok(None) => tracing::debug!("Skipping unpublished post {:?}", path),
                Err(e) => tracing::warn!("Failed to load post {:?}: {}", path, e),
            }
        }

        Ok(posts)
    }

    /// Load a single post from a file; `None` when it is unpublished
    fn load_post(&self, path: &Path) -> Result<Option<Post>, LoadError> {
        let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let (fm, body) = FrontMatter::parse(&content).map_err(|e| LoadError::Yaml {
            path: path.to_path_buf(),
            source: e,
        })?;

        if !fm.published {
            return Ok(None);
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        let date = match fm.date {
            Some(date) => date,
            None => {
                let modified = fs::metadata(path)
                    .and_then(|m| m.modified())
                    .map_err(|e| LoadError::io(path, e))?;
                chrono::DateTime::<Local>::from(modified)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            }
        };

        let title = fm
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| stem.clone());
        let mut post = Post::new(title, date);
        post.slug = fm.slug.filter(|s| !s.trim().is_empty()).unwrap_or(stem);
        post.categories = fm.categories;
        post.excerpt = fm
            .excerpt
            .unwrap_or_else(|| self.summarizer.excerpt(body));
        post.read_time = Some(
            fm.read_time
                .unwrap_or_else(|| self.summarizer.read_time(body)),
        );
        post.image = fm.image;

        Ok(Some(post))
    }

    /// Enforce collection invariants: a category on every post, unique slugs
    fn finalize(&self, mut posts: Vec<Post>) -> Result<Vec<Post>, LoadError> {
        let mut seen = HashSet::new();

        for post in &mut posts {
            if post.categories.is_empty() {
                tracing::debug!(
                    "Post '{}' has no category, using '{}'",
                    post.slug,
                    self.folio.config.default_category
                );
                post.categories
                    .push(self.folio.config.default_category.clone());
            }
            if !seen.insert(post.slug.clone()) {
                return Err(LoadError::DuplicateSlug(post.slug.clone()));
            }
        }

        tracing::info!("Loaded {} posts", posts.len());
        Ok(posts)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::create_dir_all(dir.path().join("source/_posts")).unwrap();
        dir
    }

    fn load(dir: &TempDir) -> Result<Vec<Post>, LoadError> {
        let folio = Folio::new(dir.path()).unwrap();
        ContentLoader::new(&folio).load_posts()
    }

    #[test]
    fn test_empty_site_has_no_posts() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir).unwrap().is_empty());
    }

    #[test]
    fn test_loads_data_file_then_markdown() {
        let dir = site();
        fs::write(
            dir.path().join("data/posts.yml"),
            r#"
- slug: from-data
  title: From data
  excerpt: Listed in YAML
  categories: [Web]
  date: "2024-01-01"
  readTime: 3 min
"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("source/_posts/hello-world.md"),
            "---\ntitle: Hello World\ndate: 2024-02-01\ncategories: [Rust, Web]\n---\n\nFirst paragraph.\n\nSecond one.\n",
        )
        .unwrap();

        let posts = load(&dir).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "from-data");
        assert_eq!(posts[0].read_time.as_deref(), Some("3 min"));

        let md = &posts[1];
        assert_eq!(md.slug, "hello-world");
        assert_eq!(md.title, "Hello World");
        assert_eq!(md.categories, vec!["Rust", "Web"]);
        assert_eq!(md.excerpt, "First paragraph.");
        assert_eq!(md.read_time.as_deref(), Some("1 min"));
        assert!(md.published_at().is_ok());
    }

    #[test]
    fn test_blank_slug_and_title_fall_back_to_file_stem() {
        let dir = site();
        fs::write(
            dir.path().join("source/_posts/a.md"),
            "---\nslug: \"\"\ntitle: \"  \"\ndate: 2024-02-01\n---\nBody\n",
        )
        .unwrap();

        let posts = load(&dir).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "a");
        assert_eq!(posts[0].title, "a");
    }

    #[test]
    fn test_missing_category_gets_default() {
        let dir = site();
        fs::write(
            dir.path().join("source/_posts/plain.md"),
            "---\ntitle: Plain\ndate: 2024-02-01\n---\nBody\n",
        )
        .unwrap();

        let posts = load(&dir).unwrap();
        assert_eq!(posts[0].categories, vec!["uncategorized"]);
    }

    #[test]
    fn test_missing_date_uses_mtime() {
        let dir = site();
        fs::write(dir.path().join("source/_posts/undated.md"), "---\ntitle: Undated\n---\nBody\n")
            .unwrap();

        let posts = load(&dir).unwrap();
        assert!(posts[0].published_at().is_ok());
    }

    #[test]
    fn test_unpublished_and_broken_posts_are_skipped() {
        let dir = site();
        fs::write(
            dir.path().join("source/_posts/draft.md"),
            "---\ntitle: Draft\npublished: false\n---\nBody\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("source/_posts/broken.md"),
            "---\ntitle: [oops\n---\nBody\n",
        )
        .unwrap();
        fs::write(dir.path().join("source/_posts/notes.txt"), "not a post").unwrap();

        assert!(load(&dir).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_slug_is_rejected() {
        let dir = site();
        fs::write(
            dir.path().join("data/posts.yml"),
            "- slug: same\n  title: One\n  categories: [Web]\n  date: \"2024-01-01\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("source/_posts/same.md"),
            "---\ntitle: Two\ndate: 2024-01-02\n---\nBody\n",
        )
        .unwrap();

        match load(&dir) {
            Err(LoadError::DuplicateSlug(slug)) => assert_eq!(slug, "same"),
            other => panic!("expected duplicate slug error, got {:?}", other),
        }
    }

    #[test]
    fn test_data_file_errors_are_fatal() {
        let dir = site();
        fs::write(dir.path().join("data/posts.yml"), "- title: No slug or date\n").unwrap();
        assert!(matches!(load(&dir), Err(LoadError::Yaml { .. })));

        fs::write(
            dir.path().join("data/posts.yml"),
            "- slug: \"\"\n  title: Empty slug\n  date: \"2024-01-01\"\n",
        )
        .unwrap();
        assert!(matches!(
            load(&dir),
            Err(LoadError::MissingField { field: "slug", .. })
        ));
    }
}
