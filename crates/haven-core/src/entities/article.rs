//! Article entity - a publication owned by a single author

use chrono::{DateTime, Utc};

use crate::value_objects::{Slug, Snowflake};

/// Article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub title: String,
    /// Minted from the title at creation, immutable afterwards
    pub slug: Slug,
    pub description: String,
    pub body: String,
    pub published: bool,
    /// Set on the first false->true publish transition; the notification
    /// fanout never re-fires once this is present.
    pub first_published_at: Option<DateTime<Utc>>,
    /// Unordered, case-sensitive tag set
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Create a new unpublished article, minting its slug from the title
    pub fn new(
        id: Snowflake,
        author_id: Snowflake,
        title: String,
        description: String,
        body: String,
        tags: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        let slug = Slug::from_title(&title);
        Self {
            id,
            author_id,
            title,
            slug,
            description,
            body,
            published: false,
            first_published_at: None,
            tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether a user owns this article
    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    /// Whether setting `published` to `new_state` is the first publish
    /// transition, i.e. the one that triggers the notification fanout
    pub fn is_first_publish(&self, new_state: bool) -> bool {
        new_state && !self.published && self.first_published_at.is_none()
    }

    /// Apply an update; the slug survives even a title change
    pub fn apply_update(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        body: Option<String>,
        published: Option<bool>,
        tags: Option<Vec<String>>,
    ) {
        let now = Utc::now();
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(body) = body {
            self.body = body;
        }
        if let Some(published) = published {
            if published && self.first_published_at.is_none() {
                self.first_published_at = Some(now);
            }
            self.published = published;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        self.updated_at = now;
    }

    /// Check if the tag set contains `tag` (exact, case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article::new(
            Snowflake::new(1),
            Snowflake::new(10),
            "How to Train your Dragon".to_string(),
            "Ever wonder how?".to_string(),
            "You have to believe".to_string(),
            vec!["dragons".to_string(), "training".to_string()],
        )
    }

    #[test]
    fn test_new_article_is_unpublished() {
        let a = article();
        assert!(!a.published);
        assert!(a.first_published_at.is_none());
        assert!(a.slug.as_str().starts_with("how-to-train-your-dragon-"));
    }

    #[test]
    fn test_first_publish_detection() {
        let mut a = article();
        assert!(a.is_first_publish(true));
        assert!(!a.is_first_publish(false));

        a.apply_update(None, None, None, Some(true), None);
        assert!(a.published);
        assert!(a.first_published_at.is_some());

        // Unpublish then republish: not a first publish anymore
        a.apply_update(None, None, None, Some(false), None);
        assert!(!a.is_first_publish(true));
    }

    #[test]
    fn test_slug_survives_title_change() {
        let mut a = article();
        let slug = a.slug.clone();
        a.apply_update(Some("A brand new title".to_string()), None, None, None, None);
        assert_eq!(a.slug, slug);
        assert_eq!(a.title, "A brand new title");
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let a = article();
        assert!(a.has_tag("dragons"));
        assert!(!a.has_tag("Dragons"));
    }
}
