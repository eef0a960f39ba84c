//! Notification center — transient banners for the editor.
//!
//! A bounded queue of notifications with per-entry TTLs; expired entries
//! are pruned on the event loop's tick. Carries the save confirmation
//! and error banners.

use serde::{Deserialize, Serialize};


/// The severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Short label suitable for display.
    pub fn label(&self) -> &str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "ok",
            NotificationKind::Warning => "warn",
            NotificationKind::Error => "error",
        }
    }
}


/// A single notification entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub body: String,
    /// Timestamp (ms since epoch) when the notification was created.
    pub created_ms: u64,
    /// Time-to-live in milliseconds; `None` persists until dismissed.
    pub ttl_ms: Option<u64>,
}

impl Notification {
    /// Whether this notification has expired at the given time.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        match self.ttl_ms {
            Some(ttl) => now_ms.saturating_sub(self.created_ms) >= ttl,
            None => false,
        }
    }
}


/// A bounded queue of notifications.
pub struct NotificationCenter {
    items: Vec<Notification>,
    max_items: usize,
}

impl NotificationCenter {
    /// Create a center holding at most `max_items` entries.
    pub fn new(max_items: usize) -> Self {
        NotificationCenter {
            items: Vec::new(),
            max_items,
        }
    }

    /// Push a new notification, evicting the oldest when full.
    pub fn push(&mut self, kind: NotificationKind, body: &str, now_ms: u64, ttl_ms: Option<u64>) {
        if self.items.len() >= self.max_items {
            self.items.remove(0);
        }
        self.items.push(Notification {
            kind,
            body: body.to_string(),
            created_ms: now_ms,
            ttl_ms,
        });
    }

    /// Drop expired notifications.
    pub fn prune(&mut self, now_ms: u64) {
        self.items.retain(|n| !n.is_expired(now_ms));
    }

    /// The most recent notification, if any.
    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }

    /// Number of live notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the center is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
