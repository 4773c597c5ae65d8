//! Typed response models for the v1 API
//!
//! The API reports fields in camelCase and omits the ones it has no value
//! for, so every model tolerates missing fields.

mod item;
mod modes;
mod notifications;
mod paged;
mod profile;
mod reputation;

pub use item::{ItemSummary, NamedIdPair};
pub use modes::{ForumDisplayMode, QuestionMode};
pub use notifications::{Notification, NotificationList};
pub use paged::{PagedData, Pagination};
pub use profile::UserProfile;
pub use reputation::{Reputation, ReputationType};
