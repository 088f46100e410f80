//! Post and Service models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::helpers::parse_date_string;

/// Read time shown when neither the post nor the config carries one
pub const DEFAULT_READ_TIME: &str = "5 min";

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique, URL-friendly identifier
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short summary shown in listings
    #[serde(default)]
    pub excerpt: String,

    /// Category labels; the first one is the primary category
    #[serde(default)]
    pub categories: Vec<String>,

    /// Publication date as written in the content source
    pub date: String,

    /// Cover image path or URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Display read time, e.g. "7 min"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            slug: slug::slugify(&title),
            title,
            excerpt: String::new(),
            categories: Vec::new(),
            date: date.into(),
            image: None,
            read_time: None,
        }
    }

    /// The category shown next to the post in listings
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Whether the post lists `category`
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Interpret the publication date.
    ///
    /// Fails with [`QueryError::Data`] rather than guessing when the stored
    /// value is not a recognizable date.
    pub fn published_at(&self) -> Result<NaiveDateTime, QueryError> {
        parse_date_string(&self.date).ok_or_else(|| QueryError::Data {
            slug: self.slug.clone(),
            date: self.date.clone(),
        })
    }
}

/// An entry of the services showcase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    /// Icon name, resolved by whatever renders the catalogue
    #[serde(default)]
    pub icon: String,
}

impl Service {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// The built-in services catalogue
pub fn default_services() -> Vec<Service> {
    vec![
        Service::new(
            "code",
            "Développement Web Frontend",
            "Applications web modernes avec React, Next.js et Vue.js. Focus sur l'expérience utilisateur et la performance.",
        ),
        Service::new(
            "database",
            "Développement Backend",
            "APIs robustes et évolutives avec PHP, Node.js et Laravel. Architecture microservices.",
        ),
        Service::new(
            "smartphone",
            "Développement Mobile",
            "Applications mobiles natives et cross-platform avec React Native et Java.",
        ),
        Service::new(
            "cloud",
            "Cloud & DevOps",
            "Déploiement et maintenance sur AWS et Docker. CI/CD pipelines.",
        ),
        Service::new(
            "book-open",
            "Formation",
            "Cours pratiques en développement fullstack, du débutant au niveau avancé.",
        ),
        Service::new(
            "users",
            "Consulting",
            "Conseils et accompagnement technique pour vos projets digitaux.",
        ),
        Service::new(
            "globe",
            "SEO & Performance",
            "Optimisation pour les moteurs de recherche et amélioration des performances web.",
        ),
        Service::new(
            "git-branch",
            "Gestion de Projet",
            "Méthodologies Agile/Scrum, planification et suivi de projets techniques.",
        ),
        Service::new(
            "terminal",
            "Architecture Logicielle",
            "Conception d'architectures scalables et maintenables, patterns de conception.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_slugifies_title() {
        let post = Post::new("Hello World, Again", "2024-01-15");
        assert_eq!(post.slug, "hello-world-again");
        assert_eq!(post.read_time, None);
        assert_eq!(post.primary_category(), None);
    }

    #[test]
    fn test_published_at_reports_bad_dates() {
        let mut post = Post::new("Broken", "someday");
        post.slug = "broken".to_string();
        assert_eq!(
            post.published_at(),
            Err(QueryError::Data {
                slug: "broken".to_string(),
                date: "someday".to_string(),
            })
        );
    }

    #[test]
    fn test_deserialize_camel_case_fields() {
        let yaml = r#"
slug: react-hooks
title: React Hooks
excerpt: A tour of hooks
categories: [React, Web]
date: "2024-02-01"
readTime: 8 min
"#;
        let post: Post = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(post.read_time.as_deref(), Some("8 min"));
        assert_eq!(post.primary_category(), Some("React"));
        assert!(post.has_category("Web"));
        assert!(!post.has_category("web"));
    }

    #[test]
    fn test_default_services() {
        let services = default_services();
        assert_eq!(services.len(), 9);
        assert_eq!(services[0].icon, "code");
    }
}
