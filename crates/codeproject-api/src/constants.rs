//! Relative endpoint paths under the API root

// "My" API paths (user-token only)
pub const MY_PROFILE: &str = "v1/My/Profile";
pub const MY_REPUTATION: &str = "v1/My/Reputation";
pub const MY_NOTIFICATIONS: &str = "v1/My/Notifications";
pub const MY_ANSWERS: &str = "v1/My/Answers";
pub const MY_ARTICLES: &str = "v1/My/Articles";
pub const MY_BLOG_POSTS: &str = "v1/My/BlogPosts";
pub const MY_BOOKMARKS: &str = "v1/My/Bookmarks";
pub const MY_MESSAGES: &str = "v1/My/Messages";
pub const MY_QUESTIONS: &str = "v1/My/Questions";
pub const MY_TIPS: &str = "v1/My/Tips";

// Articles API paths
pub const ARTICLES: &str = "v1/Articles";

// Questions API paths
pub const QUESTIONS: &str = "v1/Questions";

// Forum messages API paths
pub const FORUM: &str = "v1/Forum";
pub const MESSAGE_THREAD: &str = "v1/MessageThread";

/// Main site root, used only by the forum-list scraping fallback
pub const SITE_BASE_URL: &str = "https://www.codeproject.com/";

/// Public forum overview page scraped for forum links
pub const FORUM_LIST_PAGE: &str = "script/Forums/List.aspx";
