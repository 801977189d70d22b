//! Comment entity <-> model mapper

use haven_core::entities::Comment;
use haven_core::value_objects::Snowflake;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            article_id: Snowflake::new(model.article_id),
            author_id: Snowflake::new(model.author_id),
            body: model.body,
            parent_id: model.parent_id.map(Snowflake::new),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
