use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Blog entry as listed by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Either a populated user object or a bare reference.
    #[serde(default)]
    pub author: Option<Value>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl BlogPost {
    /// Author email when the backend populated the reference.
    pub fn author_label(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|author| author.get("email"))
            .and_then(Value::as_str)
            .filter(|email| !email.is_empty())
    }

    /// Calendar day the post was created on, if the timestamp is RFC 3339.
    pub fn created_on(&self) -> Option<NaiveDate> {
        let raw = self.created_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.date_naive())
    }
}

/// Payload for creating a blog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    /// Identifier of the authoring user.
    pub author: Option<String>,
}

/// `GET /api/blogs` response body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BlogList {
    #[serde(default)]
    pub blogs: Vec<BlogPost>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_populated_author_and_date() {
        let list: BlogList = serde_json::from_value(json!({
            "blogs": [{
                "_id": "b1",
                "title": "Hello",
                "content": "World",
                "author": {"_id": "u1", "email": "ada@x.io"},
                "createdAt": "2024-03-05T10:20:30.000Z"
            }]
        }))
        .unwrap();

        let post = &list.blogs[0];
        assert_eq!(post.author_label(), Some("ada@x.io"));
        assert_eq!(post.created_on(), NaiveDate::from_ymd_opt(2024, 3, 5));
    }

    #[test]
    fn bare_author_reference_has_no_label() {
        let post: BlogPost = serde_json::from_value(json!({
            "title": "t",
            "author": "u1",
            "createdAt": "yesterday"
        }))
        .unwrap();

        assert_eq!(post.author_label(), None);
        assert_eq!(post.created_on(), None);
    }

    #[test]
    fn missing_blogs_field_is_empty_list() {
        let list: BlogList = serde_json::from_value(json!({})).unwrap();
        assert!(list.blogs.is_empty());
    }
}
