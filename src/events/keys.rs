//! Key-context hint strings for the bottom help bar.

/// The input context the application is currently in.
///
/// Determines which keyboard hints are shown and how keys are routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Initial fetch in flight.
    Loading,
    /// The launch table.
    Table,
    /// The full-screen help view.
    Help,
}

/// Hint line for the given context, in `[key] description` format.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Loading => "[q] quit",
        KeyContext::Table => {
            "[h/l] column [s] sort [n/p] page [g/G] first/last [-/+] page size [r] refresh [?] help [q] quit"
        }
        KeyContext::Help => "[Esc] close [q] quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_hints_cover_core_actions() {
        let hints = get_context_hints(KeyContext::Table);
        assert!(hints.contains("[s] sort"));
        assert!(hints.contains("page size"));
    }

    #[test]
    fn test_every_context_mentions_quit() {
        for context in [KeyContext::Loading, KeyContext::Table, KeyContext::Help] {
            assert!(get_context_hints(context).contains("quit"));
        }
    }
}
