//! Value objects - immutable types that represent domain concepts

mod slug;
mod snowflake;

pub use slug::{slugify, Slug};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
