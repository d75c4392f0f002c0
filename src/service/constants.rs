pub const ID_MIN_VALUE: i64 = 1;
pub const ID_VALUE_MAX: i64 = i64::MAX;

pub const AUTHOR_NAME_LENGTH_MIN: usize = 3;
pub const AUTHOR_NAME_LENGTH_MAX: usize = 15;
pub const TAG_NAME_LENGTH_MIN: usize = 3;
pub const TAG_NAME_LENGTH_MAX: usize = 15;
pub const NEWS_TITLE_LENGTH_MIN: usize = 5;
pub const NEWS_TITLE_LENGTH_MAX: usize = 30;
pub const NEWS_CONTENT_LENGTH_MIN: usize = 5;
pub const NEWS_CONTENT_LENGTH_MAX: usize = 255;
pub const COMMENT_CONTENT_LENGTH_MIN: usize = 5;
pub const COMMENT_CONTENT_LENGTH_MAX: usize = 255;

pub const AUTHOR_ENTITY_NAME: &str = "author";
pub const NEWS_ENTITY_NAME: &str = "news";
