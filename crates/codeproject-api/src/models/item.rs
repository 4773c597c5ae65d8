//! Listing entries shared by all paged endpoints

use chrono::NaiveDateTime;
use serde::Deserialize;
use url::Url;

/// A name with its integer id, as the API reports authors, tags,
/// categories, and licenses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedIdPair {
    pub id: i32,
    pub name: String,
}

/// A single entry in a paged listing: an article, question, forum message,
/// or scraped forum link. Filled as far as the source provides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemSummary {
    pub id: String,
    pub title: String,
    pub authors: Vec<NamedIdPair>,
    /// The item's abstract
    pub summary: String,
    pub content_type: String,
    pub doc_type: Option<NamedIdPair>,
    pub categories: Vec<NamedIdPair>,
    pub tags: Vec<NamedIdPair>,
    pub license: Option<NamedIdPair>,
    pub created_date: Option<NaiveDateTime>,
    pub modified_date: Option<NaiveDateTime>,
    /// Member who last edited the item's discussion thread, if any
    pub thread_editor: Option<NamedIdPair>,
    pub thread_modified_date: Option<NaiveDateTime>,
    pub rating: f64,
    pub votes: i32,
    pub popularity: f64,
    pub website_link: Option<Url>,
    pub api_link: Option<Url>,
    /// Parent message id; only meaningful for forum messages
    pub parent_id: i32,
    /// Original message id of the discussion thread; forum messages only
    pub thread_id: i32,
    /// Indent level in the discussion; forum messages only
    pub indent_level: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_full_article_entry() {
        let json = r#"{
            "id": "4711",
            "title": "Writing parsers",
            "authors": [{"id": 9, "name": "Jan"}],
            "summary": "A short abstract",
            "contentType": "Article",
            "docType": {"id": 1, "name": "Article"},
            "categories": [{"id": 3, "name": "C++"}],
            "tags": [{"id": 42, "name": "parsing"}],
            "license": {"id": 7, "name": "CPOL"},
            "createdDate": "2016-11-03T08:00:00",
            "modifiedDate": "2017-01-30T12:34:56",
            "rating": 4.83,
            "votes": 57,
            "popularity": 8.9,
            "websiteLink": "https://www.codeproject.com/Articles/4711/Writing-parsers",
            "apiLink": "https://api.codeproject.com/v1/Articles/4711"
        }"#;
        let item: ItemSummary = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "4711");
        assert_eq!(item.authors[0].name, "Jan");
        assert_eq!(item.doc_type.as_ref().unwrap().name, "Article");
        assert_eq!(item.created_date.unwrap().to_string(), "2016-11-03 08:00:00");
        assert_eq!(item.votes, 57);
        assert_eq!(
            item.website_link.as_ref().unwrap().path(),
            "/Articles/4711/Writing-parsers"
        );
    }

    #[test]
    fn deserializes_a_sparse_message_entry() {
        let json = r#"{"id": "5561502", "title": "Re: Sorted", "parentId": 5561304, "threadId": 5561107, "indentLevel": 2}"#;
        let item: ItemSummary = serde_json::from_str(json).unwrap();
        assert_eq!(item.parent_id, 5_561_304);
        assert_eq!(item.thread_id, 5_561_107);
        assert_eq!(item.indent_level, 2);
        assert!(item.authors.is_empty());
        assert!(item.created_date.is_none());
    }
}
