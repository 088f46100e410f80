//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("A site already exists in {:?}", target_dir);
    }

    // Create directory structure
    fs::create_dir_all(target_dir.join("data"))?;
    fs::create_dir_all(target_dir.join("source/_posts"))?;

    let config_content = r#"# Site
title: Portfolio
subtitle: ''
author: John Doe

# Content
source_dir: source
posts_file: data/posts.yml
default_category: uncategorized
default_read_time: 5 min

# Blog listing
per_page: 6
category_match: any
date_format: DD MMM YYYY

# Services showcase (leave empty for the built-in catalogue)
services: []
"#;
    fs::write(&config_path, config_content)?;

    let posts_content = r#"- slug: introduction-react-hooks
  title: Introduction aux React Hooks
  excerpt: Découvrez comment les hooks simplifient la gestion d'état dans vos composants.
  categories: [React, Web]
  date: "2024-03-15"
  image: /images/blog/react-hooks.jpg
  readTime: 8 min

- slug: api-rest-laravel
  title: Construire une API REST avec Laravel
  excerpt: Les bonnes pratiques pour concevoir une API robuste et évolutive.
  categories: [Backend, PHP]
  date: "2024-02-20"
  image: /images/blog/laravel-api.jpg
  readTime: 12 min

- slug: docker-pour-developpeurs
  title: Docker pour les développeurs web
  excerpt: Conteneurisez votre environnement de développement en quelques étapes.
  categories: [DevOps, Web]
  date: "2024-01-10"
  image: /images/blog/docker.jpg
  readTime: 10 min
"#;
    fs::write(target_dir.join("data/posts.yml"), posts_content)?;

    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: Bienvenue sur le blog
date: {}
categories: [Annonces]
---

Premier article publié depuis les sources markdown du site.

<!-- more -->

Créez un nouvel article avec `folio new "Mon article" -c Web`, puis
parcourez la liste avec `folio blog`.
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );
    fs::write(target_dir.join("source/_posts/bienvenue.md"), sample_post)?;

    tracing::debug!("Scaffolded site files in {:?}", target_dir);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{self, QueryState};
    use crate::Folio;

    #[test]
    fn test_init_creates_a_loadable_site() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.config.per_page, 6);

        let posts = folio.load_posts().unwrap();
        assert_eq!(posts.len(), 4);

        let listing = query::listing(&posts, &QueryState::new(), folio.config.page_size()).unwrap();
        assert_eq!(listing.total_matches, 4);
        assert_eq!(listing.posts[0].slug, "bienvenue");
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
