//! Sort directive and the header-activation toggle.

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The single active (key, direction) pair governing row order.
///
/// At most one directive is active at a time; the table starts with none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// The field to sort by.
    pub key: String,
    /// The direction to sort in.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create an ascending sort on the given key.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }
}

/// Compute the next sort directive after the user activates a column header.
///
/// First activation of any key sorts ascending; re-activating the active key
/// flips the direction. Once a sort exists there is no way back to the
/// unsorted state, only asc/desc cycling.
pub fn toggle_sort(current: Option<&SortSpec>, activated_key: &str) -> SortSpec {
    match current {
        Some(spec) if spec.key == activated_key => SortSpec {
            key: spec.key.clone(),
            direction: spec.direction.flipped(),
        },
        _ => SortSpec::ascending(activated_key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_activation_sorts_ascending() {
        let next = toggle_sort(None, "name");
        assert_eq!(next, SortSpec::ascending("name"));
    }

    #[test]
    fn test_same_key_cycles_asc_desc_asc() {
        let first = toggle_sort(None, "flight_number");
        assert_eq!(first.direction, SortDirection::Ascending);

        let second = toggle_sort(Some(&first), "flight_number");
        assert_eq!(second.direction, SortDirection::Descending);

        let third = toggle_sort(Some(&second), "flight_number");
        assert_eq!(third.direction, SortDirection::Ascending);

        let fourth = toggle_sort(Some(&third), "flight_number");
        assert_eq!(fourth.direction, SortDirection::Descending);
    }

    #[test]
    fn test_different_key_resets_to_ascending() {
        let by_name = SortSpec {
            key: "name".to_string(),
            direction: SortDirection::Descending,
        };
        let next = toggle_sort(Some(&by_name), "date_unix");
        assert_eq!(next, SortSpec::ascending("date_unix"));
    }
}
