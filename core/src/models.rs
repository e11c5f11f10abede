//! Wire models for the Books and Authors resources.
//!
//! # Design
//! Reads are lenient: unknown members are ignored and missing members fall
//! back to `Default`, so a validation-error payload still parses into a
//! success model with empty fields instead of failing the call. `ErrorModel`
//! is the exception; every member of the problem-details payload is required.

use serde::{Deserialize, Serialize};

/// A book as exchanged with `/api/v1/Books`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookModel {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub page_count: i32,
    pub excerpt: Option<String>,
    /// ISO-8601 instant, e.g. `2026-10-19T08:30:00Z`.
    pub publish_date: Option<String>,
}

/// An author as exchanged with `/api/v1/Authors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorsModel {
    pub id: i32,
    pub id_book: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl AuthorsModel {
    pub fn new(id: i32, id_book: i32, first_name: &str, last_name: &str) -> Self {
        Self {
            id,
            id_book,
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
        }
    }
}

/// Problem-details payload reported by the server on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorModel {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: u16,
    pub trace_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_uses_camel_case_on_the_wire() {
        let book = BookModel {
            id: 7,
            title: Some("Book 7".to_string()),
            description: None,
            page_count: 700,
            excerpt: None,
            publish_date: Some("2026-10-19T08:30:00Z".to_string()),
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["pageCount"], 700);
        assert_eq!(json["publishDate"], "2026-10-19T08:30:00Z");
        assert!(json["description"].is_null());
    }

    #[test]
    fn author_ignores_unknown_fields() {
        let author: AuthorsModel = serde_json::from_str(
            r#"{"id":1,"idBook":1,"firstName":"First Name 1","lastName":"Last Name 1","nickname":"x"}"#,
        )
        .unwrap();
        assert_eq!(author, AuthorsModel::new(1, 1, "First Name 1", "Last Name 1"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let book: BookModel = serde_json::from_str(r#"{"title":"Only title"}"#).unwrap();
        assert_eq!(book.id, 0);
        assert_eq!(book.page_count, 0);
        assert_eq!(book.title.as_deref(), Some("Only title"));
        assert!(book.publish_date.is_none());
    }

    #[test]
    fn error_model_reads_problem_details() {
        let error: ErrorModel = serde_json::from_str(
            r#"{"type":"https://tools.ietf.org/html/rfc9110#section-15.5.5","title":"Not Found","status":404,"traceId":"00-abc-def-00","errors":{}}"#,
        )
        .unwrap();
        assert_eq!(error.title, "Not Found");
        assert_eq!(error.status, 404);
        assert_eq!(error.kind, "https://tools.ietf.org/html/rfc9110#section-15.5.5");
    }

    #[test]
    fn error_model_requires_title() {
        let result: Result<ErrorModel, _> =
            serde_json::from_str(r#"{"id":1,"idBook":1,"firstName":"A","lastName":"B"}"#);
        assert!(result.is_err());
    }
}
