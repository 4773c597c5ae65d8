//! Forum-list scraping fallback
//!
//! The API has no endpoint listing the available forums, so this fetches
//! the public forum overview page and pulls the forum links out of its
//! HTML. Goes away the moment the API grows a real listing endpoint.

use std::borrow::Cow;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::warn;
use url::Url;

use crate::constants::{FORUM_LIST_PAGE, SITE_BASE_URL};
use crate::models::{ItemSummary, PagedData, Pagination};

static ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<a\s[^>]*>.*?</a>").expect("anchor pattern compiles"));
static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="(.*?)""#).expect("href pattern compiles"));
static FORUM_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("forum id pattern compiles"));
static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\s*<[^>]*>\s*|&gt;").expect("markup pattern compiles"));

/// Fetch the forum overview page and scrape the forum links.
///
/// Returns `None` on any transport failure or non-success status; callers
/// treat that like an API listing that came back empty.
pub(crate) async fn forum_links() -> Option<PagedData> {
    forum_links_from(&format!("{SITE_BASE_URL}{FORUM_LIST_PAGE}")).await
}

pub(crate) async fn forum_links_from(page_url: &str) -> Option<PagedData> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .inspect_err(|e| warn!(error = %e, "building scraper client failed"))
        .ok()?;
    let response = client
        .get(page_url)
        .header(reqwest::header::ACCEPT, "application/text")
        .send()
        .await
        .inspect_err(|e| warn!(error = %e, "forum page fetch failed"))
        .ok()?;
    if !response.status().is_success() {
        warn!(status = response.status().as_u16(), "forum page fetch refused");
        return None;
    }
    let html = response
        .text()
        .await
        .inspect_err(|e| warn!(error = %e, "reading forum page failed"))
        .ok()?;

    let mut items = extract_forum_links(&html);
    // The Lounge has no /Forums/ link on the overview page
    items.insert(0, lounge());

    Some(PagedData {
        pagination: Pagination {
            page: 1,
            page_size: items.len() as u32,
            total_pages: 1,
            total_items: items.len() as u32,
        },
        items,
    })
}

/// Pull an `{id, title, link}` entry out of every anchor whose href
/// starts with `/Forums/`; everything else on the page is ignored.
pub(crate) fn extract_forum_links(html: &str) -> Vec<ItemSummary> {
    let mut result = Vec::new();
    for anchor in ANCHOR.find_iter(html) {
        let anchor = anchor.as_str();
        let Some(href) = HREF.captures(anchor).and_then(|c| c.get(1)) else {
            continue;
        };
        let href = href.as_str();
        if !href.to_ascii_lowercase().starts_with("/forums/") {
            continue;
        }
        let Some(id) = FORUM_ID.find(href) else {
            continue;
        };

        let stripped = MARKUP.replace_all(anchor, "");
        let title = match urlencoding::decode(&stripped).map(Cow::into_owned) {
            Ok(decoded) => decoded,
            Err(_) => stripped.into_owned(),
        };

        result.push(ItemSummary {
            id: id.as_str().to_string(),
            title,
            website_link: Url::parse(SITE_BASE_URL)
                .ok()
                .and_then(|base| base.join(href.trim_start_matches('/')).ok()),
            ..ItemSummary::default()
        });
    }
    result
}

fn lounge() -> ItemSummary {
    ItemSummary {
        id: "1159".into(),
        title: "The Lounge".into(),
        website_link: Url::parse("https://www.codeproject.com/Lounge.aspx").ok(),
        ..ItemSummary::default()
    }
}
