//! The view-model engine: sort + paginate.
//!
//! `compute_view` is the single derivation the table renders from. It is a
//! pure function of the dataset, the sort directive, and the pagination
//! state: same inputs, same output, and the input records are never mutated.

use std::cmp::Ordering;

use super::page::Pagination;
use super::record::Record;
use super::sort::{SortDirection, SortSpec};

/// The derived view consumed directly by rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// The visible page's records, in display order.
    pub rows: Vec<Record>,
    /// Total number of pages. At least 1, even for an empty dataset.
    pub total_pages: usize,
    /// The clamped page actually shown, in `[1, total_pages]`.
    pub current_page: usize,
}

/// Derive the visible page from the full dataset.
///
/// Sorting is stable: records with equal keys keep their input order, and a
/// descending directive reverses the comparison outcome rather than the
/// sorted array, so stability holds in both directions. Records missing the
/// sort field order before records that have it.
///
/// The requested page is clamped into `[1, total_pages]`, and the final
/// slice is truncated at the end of the dataset, so no input can make this
/// fail.
pub fn compute_view(
    records: &[Record],
    sort: Option<&SortSpec>,
    pagination: &Pagination,
) -> ViewModel {
    // Sort indices rather than records so unsorted views and the non-page
    // remainder never clone a row.
    let mut order: Vec<usize> = (0..records.len()).collect();
    if let Some(spec) = sort {
        order.sort_by(|&a, &b| {
            let cmp = compare_by_key(&records[a], &records[b], &spec.key);
            match spec.direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });
    }

    let total_pages = page_count(records.len(), pagination.page_size);
    let current_page = pagination.current_page.clamp(1, total_pages);

    let start = (current_page - 1) * pagination.page_size;
    let end = (start + pagination.page_size).min(records.len());
    let rows = if start < records.len() {
        order[start..end]
            .iter()
            .map(|&i| records[i].clone())
            .collect()
    } else {
        Vec::new()
    };

    ViewModel {
        rows,
        total_pages,
        current_page,
    }
}

/// `max(1, ceil(count / page_size))`.
pub fn page_count(record_count: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0);
    record_count.div_ceil(page_size).max(1)
}

fn compare_by_key(a: &Record, b: &Record, key: &str) -> Ordering {
    match (a.get(key), b.get(key)) {
        (Some(x), Some(y)) => x.compare(y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::Cell;
    use crate::model::sort::toggle_sort;
    use std::collections::BTreeMap;

    fn record(id: &str, extra: &[(&str, Cell)]) -> Record {
        let mut fields = BTreeMap::new();
        fields.insert("id".to_string(), Cell::Text(id.to_string()));
        for (k, v) in extra {
            fields.insert(k.to_string(), v.clone());
        }
        Record::new(fields).unwrap()
    }

    fn numbered(values: &[(&str, f64)]) -> Vec<Record> {
        values
            .iter()
            .map(|(id, n)| record(id, &[("n", Cell::Number(*n))]))
            .collect()
    }

    fn ids(vm: &ViewModel) -> Vec<&str> {
        vm.rows.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_unsorted_preserves_input_order() {
        let records = numbered(&[("a", 3.0), ("b", 1.0), ("c", 2.0)]);
        let vm = compute_view(&records, None, &Pagination::new(20));
        assert_eq!(ids(&vm), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_ascending_by_number() {
        let records = numbered(&[("a", 3.0), ("b", 1.0), ("c", 2.0)]);
        let sort = SortSpec::ascending("n");
        let vm = compute_view(&records, Some(&sort), &Pagination::new(20));
        assert_eq!(ids(&vm), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_descending_by_number() {
        let records = numbered(&[("a", 3.0), ("b", 1.0), ("c", 2.0)]);
        let sort = toggle_sort(Some(&SortSpec::ascending("n")), "n");
        let vm = compute_view(&records, Some(&sort), &Pagination::new(20));
        assert_eq!(ids(&vm), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let records = numbered(&[
            ("a", 2.0),
            ("b", 1.0),
            ("c", 2.0),
            ("d", 1.0),
            ("e", 2.0),
        ]);

        let asc = SortSpec::ascending("n");
        let vm = compute_view(&records, Some(&asc), &Pagination::new(20));
        assert_eq!(ids(&vm), vec!["b", "d", "a", "c", "e"]);

        // Descending reverses the comparison, not the array: ties keep
        // their input order.
        let desc = toggle_sort(Some(&asc), "n");
        let vm = compute_view(&records, Some(&desc), &Pagination::new(20));
        assert_eq!(ids(&vm), vec!["a", "c", "e", "b", "d"]);
    }

    #[test]
    fn test_sort_by_text_field() {
        let records = vec![
            record("1", &[("name", Cell::Text("Starlink".into()))]),
            record("2", &[("name", Cell::Text("CRS-1".into()))]),
            record("3", &[("name", Cell::Text("FalconSat".into()))]),
        ];
        let sort = SortSpec::ascending("name");
        let vm = compute_view(&records, Some(&sort), &Pagination::new(20));
        assert_eq!(ids(&vm), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_missing_sort_field_orders_first() {
        let records = vec![
            record("a", &[("n", Cell::Number(1.0))]),
            record("b", &[]),
            record("c", &[("n", Cell::Number(0.0))]),
        ];
        let sort = SortSpec::ascending("n");
        let vm = compute_view(&records, Some(&sort), &Pagination::new(20));
        assert_eq!(ids(&vm), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_input_records_are_not_mutated() {
        let records = numbered(&[("a", 3.0), ("b", 1.0)]);
        let before = records.clone();
        let sort = SortSpec::ascending("n");
        let _ = compute_view(&records, Some(&sort), &Pagination::new(1));
        assert_eq!(records, before);
    }

    #[test]
    fn test_page_count_formula() {
        assert_eq!(page_count(0, 20), 1);
        assert_eq!(page_count(1, 20), 1);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(21, 20), 2);
        assert_eq!(page_count(45, 20), 3);
    }

    #[test]
    fn test_forty_five_records_page_three_has_five() {
        let records: Vec<Record> =
            (0..45).map(|i| record(&format!("r{i:02}"), &[])).collect();
        let mut p = Pagination::new(20);
        p.set_page(3);
        let vm = compute_view(&records, None, &p);
        assert_eq!(vm.total_pages, 3);
        assert_eq!(vm.current_page, 3);
        assert_eq!(vm.rows.len(), 5);
    }

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        let records: Vec<Record> =
            (0..45).map(|i| record(&format!("r{i:02}"), &[])).collect();
        let mut p = Pagination::new(20);
        p.set_page(99);
        let vm = compute_view(&records, None, &p);
        assert_eq!(vm.current_page, 3);
        assert_eq!(vm.rows.len(), 5);
    }

    #[test]
    fn test_empty_dataset() {
        let vm = compute_view(&[], None, &Pagination::new(20));
        assert!(vm.rows.is_empty());
        assert_eq!(vm.total_pages, 1);
        assert_eq!(vm.current_page, 1);
    }

    #[test]
    fn test_page_size_larger_than_dataset() {
        let records = numbered(&[("a", 1.0), ("b", 2.0)]);
        let vm = compute_view(&records, None, &Pagination::new(100));
        assert_eq!(vm.total_pages, 1);
        assert_eq!(vm.rows.len(), 2);
    }

    #[test]
    fn test_pages_partition_the_sorted_dataset() {
        let records: Vec<Record> = (0..45)
            .map(|i| {
                record(
                    &format!("r{i:02}"),
                    // Many ties so stability matters to the partition.
                    &[("n", Cell::Number((i % 7) as f64))],
                )
            })
            .collect();
        let sort = SortSpec::ascending("n");

        let mut concatenated: Vec<Record> = Vec::new();
        let mut p = Pagination::new(20);
        let total = compute_view(&records, Some(&sort), &p).total_pages;
        for page in 1..=total {
            p.set_page(page);
            let vm = compute_view(&records, Some(&sort), &p);
            concatenated.extend(vm.rows);
        }

        // Concatenating all pages reproduces the full sorted sequence,
        // each record exactly once.
        let full = compute_view(&records, Some(&sort), &Pagination::new(45));
        assert_eq!(concatenated, full.rows);
        assert_eq!(concatenated.len(), records.len());
    }
}
