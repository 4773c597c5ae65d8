//! The paged envelope wrapping every listing response

use serde::Deserialize;

use super::ItemSummary;

/// One page of a listing plus its paging metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagedData {
    pub pagination: Pagination,
    pub items: Vec<ItemSummary>,
}

/// Paging metadata attached to every paged response.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_items: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_paged_envelope() {
        let json = r#"{
            "pagination": {"page": 3, "pageSize": 25, "totalPages": 7, "totalItems": 160},
            "items": [
                {"id": "101", "title": "First", "rating": 4.5, "votes": 12},
                {"id": "102", "title": "Second"}
            ]
        }"#;
        let page: PagedData = serde_json::from_str(json).unwrap();
        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.pagination.page_size, 25);
        assert_eq!(page.pagination.total_pages, 7);
        assert_eq!(page.pagination.total_items, 160);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].rating, 4.5);
        assert_eq!(page.items[1].title, "Second");
    }

    #[test]
    fn tolerates_missing_sections() {
        let page: PagedData = serde_json::from_str("{}").unwrap();
        assert_eq!(page.pagination.page, 0);
        assert!(page.items.is_empty());
    }
}
