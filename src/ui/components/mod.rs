//! Reusable UI components.

mod help_bar;
mod loading;
mod notification;

pub use help_bar::render_context_help;
pub use loading::LoadingIndicator;
pub use notification::{Notification, NotificationManager, NotificationType};
