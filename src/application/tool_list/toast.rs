//! Transient success notifications.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ToastId, Timestamp};

/// Screen corner a toast is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastTheme {
    Light,
    #[default]
    Dark,
    Colored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
}

/// Presentation options shared by every toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToastOptions {
    pub position: ToastPosition,
    pub auto_close_ms: u64,
    pub hide_progress_bar: bool,
    pub close_on_click: bool,
    pub pause_on_hover: bool,
    pub draggable: bool,
    pub theme: ToastTheme,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: ToastPosition::TopRight,
            auto_close_ms: 2000,
            hide_progress_bar: false,
            close_on_click: true,
            pause_on_hover: true,
            draggable: true,
            theme: ToastTheme::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

impl Toast {
    pub fn is_expired(&self, now: &Timestamp) -> bool {
        !now.is_before(&self.expires_at)
    }
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_success(
        &mut self,
        message: impl Into<String>,
        options: &ToastOptions,
        now: Timestamp,
    ) -> ToastId {
        let toast = Toast {
            id: ToastId::new(),
            kind: ToastKind::Success,
            message: message.into(),
            created_at: now,
            expires_at: now.plus_millis(options.auto_close_ms),
        };
        let id = toast.id;
        self.toasts.push(toast);
        id
    }

    /// Removes a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: &ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| &t.id != id);
        self.toasts.len() != before
    }

    /// Drops every toast whose auto-close delay has elapsed.
    pub fn prune(&mut self, now: &Timestamp) {
        self.toasts.retain(|t| !t.is_expired(now));
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_page_behavior() {
        let options = ToastOptions::default();
        assert_eq!(options.position, ToastPosition::TopRight);
        assert_eq!(options.auto_close_ms, 2000);
        assert_eq!(options.theme, ToastTheme::Dark);
        assert!(options.close_on_click);
    }

    #[test]
    fn toast_expires_after_auto_close_delay() {
        let mut queue = ToastQueue::new();
        let now = Timestamp::now();
        queue.push_success("Saved successfully!", &ToastOptions::default(), now);

        queue.prune(&now.plus_millis(1999));
        assert_eq!(queue.active().len(), 1);

        queue.prune(&now.plus_millis(2000));
        assert!(queue.is_empty());
    }

    #[test]
    fn dismiss_removes_only_the_clicked_toast() {
        let mut queue = ToastQueue::new();
        let now = Timestamp::now();
        let options = ToastOptions::default();
        let first = queue.push_success("one", &options, now);
        queue.push_success("two", &options, now);

        assert!(queue.dismiss(&first));
        assert!(!queue.dismiss(&first));
        assert_eq!(queue.active().len(), 1);
        assert_eq!(queue.active()[0].message, "two");
    }

    #[test]
    fn position_and_theme_serialize_like_config_values() {
        assert_eq!(serde_json::to_string(&ToastPosition::TopRight).unwrap(), "\"top-right\"");
        assert_eq!(serde_json::to_string(&ToastTheme::Dark).unwrap(), "\"dark\"");
    }
}
