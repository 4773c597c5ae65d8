//! Member notifications

use chrono::NaiveDateTime;
use serde::Deserialize;
use url::Url;

/// The list of notifications for the token's member.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationList {
    pub notifications: Vec<Notification>,
}

/// A single notification.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notification {
    pub id: i32,
    /// Type name of the item the notification is about
    pub object_type_name: String,
    pub object_id: i32,
    pub subject: String,
    pub topic: String,
    pub notification_date: Option<NaiveDateTime>,
    pub un_read: bool,
    pub content: String,
    pub link: Option<Url>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_notification_list() {
        let json = r#"{
            "notifications": [{
                "id": 77,
                "objectTypeName": "Answer",
                "objectId": 123456,
                "subject": "Re: your question",
                "topic": "Answers",
                "notificationDate": "2017-02-01T09:15:00",
                "unRead": true,
                "content": "Someone answered.",
                "link": "https://www.codeproject.com/Answers/123456"
            }]
        }"#;
        let list: NotificationList = serde_json::from_str(json).unwrap();
        assert_eq!(list.notifications.len(), 1);
        let notification = &list.notifications[0];
        assert_eq!(notification.object_type_name, "Answer");
        assert!(notification.un_read);
        assert!(notification.notification_date.is_some());
    }
}
