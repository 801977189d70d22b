//! Article entity <-> model mapper

use haven_core::entities::Article;
use haven_core::value_objects::{Slug, Snowflake};

use crate::models::ArticleModel;

/// Combine an article row with its separately-loaded tag set
pub fn article_with_tags(model: ArticleModel, tags: Vec<String>) -> Article {
    Article {
        id: Snowflake::new(model.id),
        author_id: Snowflake::new(model.author_id),
        title: model.title,
        slug: Slug::from_raw(model.slug),
        description: model.description,
        body: model.body,
        published: model.published,
        first_published_at: model.first_published_at,
        tags,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
