//! User interface components and views.
//!
//! This module contains all TUI rendering logic: the table view, the help
//! view, and reusable components (spinner, toasts, hint bar).

mod components;
pub mod theme;
mod views;

pub use components::{render_context_help, LoadingIndicator, Notification, NotificationManager};
pub use theme::Theme;
pub use views::{HelpView, TableContext, TableView};
