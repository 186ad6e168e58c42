use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    PriceDrop,
    BackInStock,
    Review,
    Recommendation,
    Deal,
}

/// A notification every shopper starts with. Read and dismissed state is
/// kept per session.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Display label such as "2 hours ago".
    pub time: String,
    /// Initial read state.
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}
