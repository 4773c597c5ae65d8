//! The user profile behind a user token

use serde::Deserialize;
use url::Url;

/// Profile of the member the request token belongs to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub id: i32,
    /// Clean, HTML-stripped version of `display_name`
    pub user_name: String,
    /// Public display name; can contain limited HTML
    pub display_name: String,
    pub avatar: Option<Url>,
    #[serde(alias = "eMail")]
    pub email: String,
    pub html_emails: bool,
    pub country: String,
    pub home_page: Option<Url>,
    pub code_project_member_id: i32,
    pub member_profile_page_url: Option<Url>,
    pub twitter_name: String,
    pub google_plus_profile: String,
    pub linked_in_profile_url: Option<Url>,
    pub biography: String,
    pub company: String,
    pub job_title: String,
}
