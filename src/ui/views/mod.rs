//! Application views.

mod help;
mod table;

pub use help::HelpView;
pub use table::{TableContext, TableView};
