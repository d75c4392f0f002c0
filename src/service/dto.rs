//! Request and response payloads of the news service, with their field declarations.

use crate::domain::descriptor::{FieldDescriptor, TypeDescriptor};
use crate::domain::model::{Constraint, Value};
use crate::domain::ports::Described;
use crate::service::constants::*;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const ID: &[Constraint] = &[Constraint::Min(ID_MIN_VALUE), Constraint::Max(ID_VALUE_MAX)];
const REQUIRED_ID: &[Constraint] = &[
    Constraint::NotNull,
    Constraint::Min(ID_MIN_VALUE),
    Constraint::Max(ID_VALUE_MAX),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl AuthorRequest {
    pub fn new(id: Option<i64>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }
}

static AUTHOR_REQUEST: TypeDescriptor<AuthorRequest> = TypeDescriptor {
    type_name: "AuthorRequest",
    fields: &[
        FieldDescriptor {
            name: "id",
            constraints: ID,
            read: |request| Ok(request.id.into()),
        },
        FieldDescriptor {
            name: "name",
            constraints: &[
                Constraint::NotNull,
                Constraint::Size {
                    min: AUTHOR_NAME_LENGTH_MIN,
                    max: AUTHOR_NAME_LENGTH_MAX,
                },
            ],
            read: |request| Ok(request.name.as_deref().into()),
        },
    ],
};

impl Described for AuthorRequest {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        &AUTHOR_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
}

static TAG_REQUEST: TypeDescriptor<TagRequest> = TypeDescriptor {
    type_name: "TagRequest",
    fields: &[
        FieldDescriptor {
            name: "id",
            constraints: ID,
            read: |request| Ok(request.id.into()),
        },
        FieldDescriptor {
            name: "name",
            constraints: &[
                Constraint::NotNull,
                Constraint::Size {
                    min: TAG_NAME_LENGTH_MIN,
                    max: TAG_NAME_LENGTH_MAX,
                },
            ],
            read: |request| Ok(request.name.as_deref().into()),
        },
    ],
};

impl Described for TagRequest {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        &TAG_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsRequest {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<i64>,
    #[serde(default)]
    pub tags: Vec<i64>,
}

static NEWS_REQUEST: TypeDescriptor<NewsRequest> = TypeDescriptor {
    type_name: "NewsRequest",
    fields: &[
        FieldDescriptor {
            name: "id",
            constraints: ID,
            read: |request| Ok(request.id.into()),
        },
        FieldDescriptor {
            name: "title",
            constraints: &[
                Constraint::NotNull,
                Constraint::Size {
                    min: NEWS_TITLE_LENGTH_MIN,
                    max: NEWS_TITLE_LENGTH_MAX,
                },
            ],
            read: |request| Ok(request.title.as_deref().into()),
        },
        FieldDescriptor {
            name: "content",
            constraints: &[
                Constraint::NotNull,
                Constraint::Size {
                    min: NEWS_CONTENT_LENGTH_MIN,
                    max: NEWS_CONTENT_LENGTH_MAX,
                },
            ],
            read: |request| Ok(request.content.as_deref().into()),
        },
        FieldDescriptor {
            name: "authorId",
            constraints: REQUIRED_ID,
            read: |request| Ok(request.author_id.into()),
        },
        FieldDescriptor {
            name: "tags",
            constraints: &[],
            read: |_| Ok(Value::Null),
        },
    ],
};

impl Described for NewsRequest {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        &NEWS_REQUEST
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub id: Option<i64>,
    pub content: Option<String>,
    pub news_id: Option<i64>,
}

static COMMENT_REQUEST: TypeDescriptor<CommentRequest> = TypeDescriptor {
    type_name: "CommentRequest",
    fields: &[
        FieldDescriptor {
            name: "id",
            constraints: ID,
            read: |request| Ok(request.id.into()),
        },
        FieldDescriptor {
            name: "content",
            constraints: &[
                Constraint::NotNull,
                Constraint::Size {
                    min: COMMENT_CONTENT_LENGTH_MIN,
                    max: COMMENT_CONTENT_LENGTH_MAX,
                },
            ],
            read: |request| Ok(request.content.as_deref().into()),
        },
        FieldDescriptor {
            name: "newsId",
            constraints: REQUIRED_ID,
            read: |request| Ok(request.news_id.into()),
        },
    ],
};

impl Described for CommentRequest {
    fn descriptor() -> &'static TypeDescriptor<Self> {
        &COMMENT_REQUEST
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
    pub create_date: NaiveDateTime,
    pub last_update_date: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::Constrained;

    #[test]
    fn test_descriptor_lists_only_constrained_fields() {
        let request = NewsRequest::default();
        let names: Vec<&str> = request
            .constrained_fields()
            .iter()
            .map(|field| field.name)
            .collect();
        assert_eq!(names, vec!["id", "title", "content", "authorId"]);
        assert_eq!(request.type_name(), "NewsRequest");
    }

    #[test]
    fn test_descriptor_reads_live_values() {
        let request = AuthorRequest::new(Some(3), "Alice");
        let fields = request.constrained_fields();

        assert!(matches!(fields[0].value, Ok(Value::Int(3))));
        assert!(matches!(fields[1].value, Ok(Value::Text("Alice"))));
        assert_eq!(
            AuthorRequest::descriptor().field("name").unwrap().constraints.len(),
            2
        );
    }
}
