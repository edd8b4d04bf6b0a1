//! Filter, sort and paginate, recomputed on every render
//!
//! Everything works on row indices into the caller's `data`, so records are
//! never cloned or reordered in place.

use super::column::{Column, RowKey, RowKeyStrategy};
use super::record::{compare_values, matches_query, record_value, resolve_path};
use super::state::{SortDirection, SortState, TableState};
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::ops::Range;

/// Most page buttons shown at once
pub const PAGE_WINDOW: usize = 5;

/// Indices of rows matching `query`, in data order.
///
/// Matching is a case-insensitive substring test over every top-level
/// scalar or array field.
pub fn filter_rows(values: &[Value], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    values
        .iter()
        .enumerate()
        .filter(|(_, value)| matches_query(value, &needle))
        .map(|(index, _)| index)
        .collect()
}

/// Stable sort of `indices` by the sorted column.
///
/// Absent values sort last in both directions. A sort key that names no
/// column in `columns` leaves the order unchanged.
pub fn sort_rows<T>(indices: &mut [usize], data: &[T], values: &[Value], columns: &[Column<T>], sort: Option<&SortState>) {
    let Some(sort) = sort else {
        return;
    };
    let Some(column) = columns.iter().find(|column| column.key == sort.key) else {
        return;
    };

    let directed = |ordering: Ordering| match sort.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    };

    match &column.compare {
        Some(compare) => indices.sort_by(|&a, &b| directed(compare(&data[a], &data[b]))),
        None => indices.sort_by(|&a, &b| {
            match (resolve_path(&values[a], &column.key), resolve_path(&values[b], &column.key)) {
                (Some(x), Some(y)) => directed(compare_values(x, y)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }),
    }
}

/// Number of pages for `total` rows. A zero page size means one page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    match (total, page_size) {
        (0, _) => 0,
        (_, 0) => 1,
        (total, size) => total.div_ceil(size),
    }
}

/// Slice of the filtered rows shown on 1-based `page`
pub fn page_range(total: usize, page: usize, page_size: usize) -> Range<usize> {
    if page_size == 0 {
        return 0..total;
    }
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

/// Page buttons around `current`: at most [`PAGE_WINDOW`] distinct pages,
/// centred on `current` where the bounds allow.
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= PAGE_WINDOW {
        return (1..=total_pages).collect();
    }
    let start = current
        .saturating_sub(PAGE_WINDOW / 2)
        .clamp(1, total_pages - PAGE_WINDOW + 1);
    (start..start + PAGE_WINDOW).collect()
}

/// One visible row
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleRow {
    /// Position in the caller's `data`
    pub index: usize,
    pub key: RowKey,
}

/// Everything a render needs, derived from data, columns and state
#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
    pub rows: Vec<VisibleRow>,
    /// Rows left after filtering
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    /// 1-based position of the first row shown ("Showing A to B of N")
    pub first: usize,
    pub last: usize,
    pub window: Vec<usize>,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn has_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn summary(&self) -> String {
        format!("Showing {} to {} of {} results", self.first, self.last, self.total)
    }
}

/// Run filter, sort and paginate for the current state
pub fn compute_view<T: Serialize>(
    data: &[T],
    columns: &[Column<T>],
    state: &TableState,
    page_size: usize,
    row_key: &RowKeyStrategy<T>,
) -> TableView {
    let values: Vec<Value> = data.iter().map(record_value).collect();

    let mut indices = filter_rows(&values, &state.query);
    sort_rows(&mut indices, data, &values, columns, state.sort.as_ref());

    let total = indices.len();
    let total_pages = page_count(total, page_size);
    let page = state.current_page(total_pages);
    let range = page_range(total, page, page_size);
    let (first, last) = if range.is_empty() {
        (0, 0)
    } else {
        (range.start + 1, range.end)
    };

    let rows = indices[range]
        .iter()
        .map(|&index| VisibleRow {
            index,
            key: row_key.key_for(&data[index], &values[index], index),
        })
        .collect();

    TableView {
        rows,
        total,
        page,
        total_pages,
        first,
        last,
        window: page_window(page, total_pages),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Clone, Debug, PartialEq)]
    struct Person {
        id: String,
        name: String,
        age: Option<u32>,
    }

    fn person(id: &str, name: &str, age: Option<u32>) -> Person {
        Person {
            id: id.to_string(),
            name: name.to_string(),
            age,
        }
    }

    fn columns() -> Vec<Column<Person>> {
        vec![
            Column::new("name", "Name").sortable(),
            Column::new("age", "Age").sortable(),
            Column::new("id", "Id"),
        ]
    }

    fn names(view: &TableView, data: &[Person]) -> Vec<String> {
        view.rows.iter().map(|row| data[row.index].name.clone()).collect()
    }

    fn sorted(key: &str, direction: SortDirection) -> TableState {
        TableState {
            sort: Some(SortState {
                key: key.to_string(),
                direction,
            }),
            ..TableState::default()
        }
    }

    #[test]
    fn test_sort_by_name_then_toggle() {
        let data = vec![person("a", "Zed", None), person("b", "Amy", None)];
        let key = RowKeyStrategy::default();

        let view = compute_view(&data, &columns(), &sorted("name", SortDirection::Ascending), 10, &key);
        assert_eq!(names(&view, &data), vec!["Amy", "Zed"]);

        let view = compute_view(&data, &columns(), &sorted("name", SortDirection::Descending), 10, &key);
        assert_eq!(names(&view, &data), vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_numeric_sort_and_absent_last() {
        let data = vec![
            person("a", "A", Some(30)),
            person("b", "B", None),
            person("c", "C", Some(9)),
            person("d", "D", Some(100)),
        ];
        let key = RowKeyStrategy::default();

        let view = compute_view(&data, &columns(), &sorted("age", SortDirection::Ascending), 10, &key);
        assert_eq!(names(&view, &data), vec!["C", "A", "D", "B"]);

        let view = compute_view(&data, &columns(), &sorted("age", SortDirection::Descending), 10, &key);
        assert_eq!(names(&view, &data), vec!["D", "A", "C", "B"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_values() {
        let data = vec![
            person("1", "Same", Some(1)),
            person("2", "Same", Some(2)),
            person("3", "Same", Some(3)),
        ];
        let view = compute_view(
            &data,
            &columns(),
            &sorted("name", SortDirection::Descending),
            10,
            &RowKeyStrategy::default(),
        );
        let ids: Vec<_> = view.rows.iter().map(|row| row.index).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_custom_comparator() {
        let data = vec![person("a", "bb", None), person("b", "a", None), person("c", "ccc", None)];
        let columns = vec![
            Column::new("name", "Name")
                .sortable()
                .compare_with(|a: &Person, b: &Person| a.name.len().cmp(&b.name.len())),
        ];
        let view = compute_view(
            &data,
            &columns,
            &sorted("name", SortDirection::Descending),
            10,
            &RowKeyStrategy::default(),
        );
        assert_eq!(names(&view, &data), vec!["ccc", "bb", "a"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let data = vec![person("a", "Amy", None), person("b", "Zed", None), person("c", "Sam", None)];
        let mut state = TableState::default();
        state.set_query("AM");
        let view = compute_view(&data, &columns(), &state, 10, &RowKeyStrategy::default());
        assert_eq!(names(&view, &data), vec!["Amy", "Sam"]);
    }

    #[test]
    fn test_query_matching_nothing_is_empty() {
        let data = vec![person("a", "Amy", None)];
        let mut state = TableState::default();
        state.set_query("nobody");
        let view = compute_view(&data, &columns(), &state, 10, &RowKeyStrategy::default());
        assert!(view.is_empty());
        assert!(view.rows.is_empty());
        assert!(!view.has_pagination());
    }

    #[test]
    fn test_page_size_one() {
        let data = vec![person("a", "First", None), person("b", "Second", None), person("c", "Third", None)];
        let mut state = TableState::default();
        state.go_to(2, 3);
        let view = compute_view(&data, &columns(), &state, 1, &RowKeyStrategy::default());
        assert_eq!(view.total_pages, 3);
        assert_eq!(names(&view, &data), vec!["Second"]);
        assert_eq!(view.summary(), "Showing 2 to 2 of 3 results");
    }

    #[test]
    fn test_page_size_zero_is_single_page() {
        let data: Vec<Person> = (0..25).map(|i| person(&i.to_string(), "x", None)).collect();
        let view = compute_view(&data, &columns(), &TableState::default(), 0, &RowKeyStrategy::default());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.rows.len(), 25);
        assert_eq!(view.summary(), "Showing 1 to 25 of 25 results");
    }

    #[test]
    fn test_page_clamped_after_shrink() {
        let data: Vec<Person> = (0..12).map(|i| person(&i.to_string(), "x", None)).collect();
        let mut state = TableState::default();
        state.go_to(3, 3);

        let view = compute_view(&data[..7], &columns(), &state, 5, &RowKeyStrategy::default());
        assert_eq!(view.page, 2);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.summary(), "Showing 6 to 7 of 7 results");
    }

    #[test]
    fn test_row_keys_follow_strategy() {
        let data = vec![person("a", "Amy", None), person("b", "Zed", None)];
        let view = compute_view(
            &data,
            &columns(),
            &sorted("name", SortDirection::Descending),
            10,
            &RowKeyStrategy::default(),
        );
        assert_eq!(view.rows[0].key, RowKey::Stable("b".into()));

        let view = compute_view(
            &data,
            &columns(),
            &sorted("name", SortDirection::Descending),
            10,
            &RowKeyStrategy::Index,
        );
        assert_eq!(view.rows[0].key, RowKey::Positional(1));
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(4, 6), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_unknown_sort_key_keeps_order() {
        let data = vec![person("a", "Zed", None), person("b", "Amy", None)];
        let view = compute_view(
            &data,
            &columns(),
            &sorted("missing", SortDirection::Ascending),
            10,
            &RowKeyStrategy::default(),
        );
        assert_eq!(names(&view, &data), vec!["Zed", "Amy"]);
    }
}
