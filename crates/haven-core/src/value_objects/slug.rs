//! Article slugs - URL-safe identifiers derived from a title
//!
//! A slug is minted once at article creation and never changes, even when
//! the title does. Uniqueness comes from a random uuid tail appended to the
//! slugified title.

use std::fmt;

use uuid::Uuid;

/// URL-safe article identifier, immutable after creation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Mint a new slug from an article title
    ///
    /// The random suffix is the last segment of a uuid v4, so two articles
    /// with the same title never collide.
    pub fn from_title(title: &str) -> Self {
        let uuid = Uuid::new_v4().to_string();
        let suffix = uuid.rsplit('-').next().unwrap_or("0");
        let base = slugify(title);
        if base.is_empty() {
            Self(suffix.to_string())
        } else {
            Self(format!("{base}-{suffix}"))
        }
    }

    /// Wrap an already-persisted slug value
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the slug as a str
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the slug, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lowercase a title and collapse every non-alphanumeric run into a single
/// hyphen, trimming hyphens at both ends.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            for lc in c.to_lowercase() {
                out.push(lc);
            }
        } else {
            pending_hyphen = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  How to Train your Dragon!  "), "how-to-train-your-dragon");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("a -- b__c"), "a-b-c");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_slug_has_random_suffix() {
        let a = Slug::from_title("Same Title");
        let b = Slug::from_title("Same Title");
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("same-title-"));
        assert!(b.as_str().starts_with("same-title-"));
    }

    #[test]
    fn test_slug_from_empty_title_is_suffix_only() {
        let slug = Slug::from_title("???");
        assert!(!slug.as_str().is_empty());
        assert!(!slug.as_str().starts_with('-'));
    }
}
