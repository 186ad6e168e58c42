use crate::catalog::{Catalog, Notification, NotificationKind};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Notification {0} does not exist")]
    UnknownNotification(String),
}

#[derive(Serialize, Debug)]
pub struct NotificationView<'a> {
    pub id: &'a str,
    pub kind: NotificationKind,
    pub title: &'a str,
    pub message: &'a str,
    pub time: &'a str,
    /// Initial read state, or read in this session.
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<&'a str>,
}

#[derive(Serialize, Debug)]
pub struct Inbox<'a> {
    pub unread_count: usize,
    pub items: Vec<NotificationView<'a>>,
}

/// A shopper's view over the catalog notifications: which ones were read and
/// which ones were deleted.
#[derive(Clone, Debug, Default)]
pub struct NotificationInbox {
    read: HashSet<String>,
    dismissed: HashSet<String>,
}

impl NotificationInbox {
    fn visible<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Notification> + 'a {
        catalog
            .notifications()
            .iter()
            .filter(move |n| !self.dismissed.contains(&n.id))
    }

    fn is_read(&self, notification: &Notification) -> bool {
        notification.read || self.read.contains(&notification.id)
    }

    fn find<'a>(&self, catalog: &'a Catalog, id: &str) -> Result<&'a Notification, NotificationError> {
        catalog
            .get_notification(id)
            .filter(|n| !self.dismissed.contains(&n.id))
            .ok_or_else(|| NotificationError::UnknownNotification(id.to_string()))
    }

    pub fn list<'a>(&'a self, catalog: &'a Catalog) -> Inbox<'a> {
        let items: Vec<NotificationView<'a>> = self
            .visible(catalog)
            .map(|n| NotificationView {
                id: &n.id,
                kind: n.kind,
                title: &n.title,
                message: &n.message,
                time: &n.time,
                read: self.is_read(n),
                action_url: n.action_url.as_deref(),
            })
            .collect();
        Inbox {
            unread_count: items.iter().filter(|i| !i.read).count(),
            items,
        }
    }

    pub fn unread_count(&self, catalog: &Catalog) -> usize {
        self.visible(catalog).filter(|n| !self.is_read(n)).count()
    }

    pub fn mark_read(&mut self, catalog: &Catalog, id: &str) -> Result<(), NotificationError> {
        let notification = self.find(catalog, id)?;
        self.read.insert(notification.id.clone());
        Ok(())
    }

    /// Returns how many notifications were unread.
    pub fn mark_all_read(&mut self, catalog: &Catalog) -> usize {
        let unread: Vec<String> = self
            .visible(catalog)
            .filter(|n| !self.is_read(n))
            .map(|n| n.id.clone())
            .collect();
        let count = unread.len();
        self.read.extend(unread);
        count
    }

    pub fn delete(&mut self, catalog: &Catalog, id: &str) -> Result<(), NotificationError> {
        let notification = self.find(catalog, id)?;
        self.dismissed.insert(notification.id.clone());
        Ok(())
    }
}
