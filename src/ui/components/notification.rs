//! Notification/toast component for user feedback.
//!
//! Transient messages (fetch completed, fetch failed) shown stacked in the
//! bottom-right corner and dropped once their duration elapses.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// The type of notification, which determines its appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message (blue).
    Info,
    /// Success message (green).
    Success,
    /// Error message (red).
    Error,
}

impl NotificationType {
    /// Get the icon for this notification type.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationType::Info => "ℹ",
            NotificationType::Success => "✓",
            NotificationType::Error => "✗",
        }
    }

    /// Get the color for this notification type.
    pub fn color(&self) -> Color {
        match self {
            NotificationType::Info => Color::Blue,
            NotificationType::Success => Color::Green,
            NotificationType::Error => Color::Red,
        }
    }
}

/// A single notification message.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message.
    pub message: String,
    /// The type of notification.
    pub notification_type: NotificationType,
    /// When the notification was created.
    created_at: Instant,
    /// How long the notification should be displayed.
    duration: Duration,
}

impl Notification {
    /// Create a new notification.
    pub fn new(
        message: impl Into<String>,
        notification_type: NotificationType,
        duration: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Create an info notification with default duration (3 seconds).
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info, Duration::from_secs(3))
    }

    /// Create a success notification with default duration (3 seconds).
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success, Duration::from_secs(3))
    }

    /// Create an error notification with default duration (5 seconds).
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error, Duration::from_secs(5))
    }

    /// Check if the notification has expired.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Manages a bounded queue of notifications.
#[derive(Debug, Default)]
pub struct NotificationManager {
    /// Queue of notifications, oldest first.
    notifications: VecDeque<Notification>,
}

/// Maximum number of toasts shown at once; older ones are dropped.
const MAX_VISIBLE: usize = 3;

impl NotificationManager {
    /// Create a new notification manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification to the queue.
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
        while self.notifications.len() > MAX_VISIBLE {
            self.notifications.pop_front();
        }
    }

    /// Add an info notification.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Notification::info(message));
    }

    /// Add a success notification.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notification::success(message));
    }

    /// Add an error notification.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Notification::error(message));
    }

    /// Remove expired notifications. Called on each tick.
    pub fn tick(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Get the number of queued notifications.
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Check if there are no notifications.
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Render the notifications stacked in the bottom-right corner.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let width = 46.min(area.width.saturating_sub(4));
        let toast_height = 3u16;

        for (i, notification) in self.notifications.iter().rev().enumerate() {
            let offset = (i as u16 + 1) * toast_height;
            if offset + 1 > area.height {
                break;
            }

            let toast_area = Rect::new(
                area.x + area.width.saturating_sub(width + 2),
                area.y + area.height.saturating_sub(offset + 1),
                width,
                toast_height,
            );

            let style = Style::default().fg(notification.notification_type.color());
            let line = Line::from(format!(
                "{} {}",
                notification.notification_type.icon(),
                notification.message
            ));

            frame.render_widget(Clear, toast_area);
            frame.render_widget(
                Paragraph::new(line)
                    .style(style)
                    .block(Block::default().borders(Borders::ALL).border_style(style)),
                toast_area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_len() {
        let mut manager = NotificationManager::new();
        assert!(manager.is_empty());
        manager.info("loaded");
        manager.error("failed");
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut manager = NotificationManager::new();
        for i in 0..10 {
            manager.info(format!("message {i}"));
        }
        assert_eq!(manager.len(), MAX_VISIBLE);
    }

    #[test]
    fn test_tick_drops_expired() {
        let mut manager = NotificationManager::new();
        manager.push(Notification::new(
            "gone",
            NotificationType::Info,
            Duration::ZERO,
        ));
        manager.success("stays");

        std::thread::sleep(Duration::from_millis(5));
        manager.tick();
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_type_icons_differ() {
        assert_ne!(
            NotificationType::Success.icon(),
            NotificationType::Error.icon()
        );
    }
}
