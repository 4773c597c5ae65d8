//! Listing modes rendered into endpoint URL paths

use std::fmt;

/// Message layout for a forum listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForumDisplayMode {
    /// Every message
    Messages,
    /// Only thread-starting messages
    #[default]
    Threads,
}

impl fmt::Display for ForumDisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ForumDisplayMode::Messages => "Messages",
            ForumDisplayMode::Threads => "Threads",
        })
    }
}

/// Filter and ordering for a questions listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuestionMode {
    Default,
    /// Only unanswered questions
    Unanswered,
    /// Ordered by last activity, descending
    Active,
    /// Ordered by creation date, descending
    #[default]
    New,
}

impl fmt::Display for QuestionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuestionMode::Default => "Default",
            QuestionMode::Unanswered => "Unanswered",
            QuestionMode::Active => "Active",
            QuestionMode::New => "New",
        })
    }
}
