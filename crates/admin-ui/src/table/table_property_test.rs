//! Property-based tests for the table pipeline
//!
//! Covers search accuracy, sort toggling, pagination coverage and row keys
//! over randomly generated listings.

use super::column::{Column, RowKeyStrategy};
use super::pipeline::{compute_view, filter_rows, page_count, page_window};
use super::record::record_value;
use super::state::{SortDirection, TableState};
use proptest::prelude::*;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Listing {
    id: String,
    city: String,
    rent_per_head: Option<u32>,
    amenities: Vec<String>,
}

fn listing_strategy() -> impl Strategy<Value = Listing> {
    (
        "[a-z0-9]{1,6}",
        "[A-Za-z ]{0,12}",
        proptest::option::of(0u32..50_000),
        proptest::collection::vec("[A-Za-z]{1,8}", 0..3),
    )
        .prop_map(|(id, city, rent_per_head, amenities)| Listing {
            id,
            city,
            rent_per_head,
            amenities,
        })
}

fn listings() -> impl Strategy<Value = Vec<Listing>> {
    proptest::collection::vec(listing_strategy(), 0..40)
}

fn columns() -> Vec<Column<Listing>> {
    vec![
        Column::new("city", "City").sortable(),
        Column::new("rentPerHead", "Rent").sortable(),
        Column::new("amenities", "Amenities"),
    ]
}

fn field_contains(listing: &Listing, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    listing.id.to_lowercase().contains(&needle)
        || listing.city.to_lowercase().contains(&needle)
        || listing
            .rent_per_head
            .map_or_else(|| "null".to_string(), |rent| rent.to_string())
            .contains(&needle)
        || listing.amenities.join(",").to_lowercase().contains(&needle)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_empty_query_keeps_every_row(data in listings()) {
        let values: Vec<Value> = data.iter().map(record_value).collect();
        prop_assert_eq!(filter_rows(&values, "").len(), data.len());
    }

    #[test]
    fn prop_query_keeps_exactly_matching_rows(data in listings(), query in "[A-Za-z0-9]{1,3}") {
        let values: Vec<Value> = data.iter().map(record_value).collect();
        let kept = filter_rows(&values, &query);

        for (index, listing) in data.iter().enumerate() {
            prop_assert_eq!(kept.contains(&index), field_contains(listing, &query));
        }
    }

    #[test]
    fn prop_pages_cover_sorted_rows_once(
        data in listings(),
        page_size in 1usize..8,
        descending in any::<bool>(),
    ) {
        let columns = columns();
        let mut state = TableState::default();
        state.toggle_sort(&columns[1]);
        if descending {
            state.toggle_sort(&columns[1]);
        }

        let expected_pages = page_count(data.len(), page_size);
        prop_assert_eq!(expected_pages, data.len().div_ceil(page_size));

        let single = compute_view(&data, &columns, &state, 0, &RowKeyStrategy::Index);
        let mut concatenated = Vec::new();
        for page in 1..=expected_pages.max(1) {
            state.go_to(page, expected_pages);
            let view = compute_view(&data, &columns, &state, page_size, &RowKeyStrategy::Index);
            prop_assert_eq!(view.total_pages, expected_pages);
            prop_assert!(view.rows.len() <= page_size);
            concatenated.extend(view.rows.iter().map(|row| row.index));
        }

        let all: Vec<usize> = single.rows.iter().map(|row| row.index).collect();
        prop_assert_eq!(concatenated, all);
    }

    #[test]
    fn prop_sorted_rows_are_ordered_with_absent_last(data in listings(), descending in any::<bool>()) {
        let columns = columns();
        let mut state = TableState::default();
        state.toggle_sort(&columns[1]);
        if descending {
            state.toggle_sort(&columns[1]);
        }
        let direction = state.sort_direction("rentPerHead");
        prop_assert_eq!(
            direction,
            Some(if descending { SortDirection::Descending } else { SortDirection::Ascending })
        );

        let view = compute_view(&data, &columns, &state, 0, &RowKeyStrategy::Index);
        let rents: Vec<Option<u32>> = view.rows.iter().map(|row| data[row.index].rent_per_head).collect();
        let present = rents.iter().take_while(|rent| rent.is_some()).count();
        prop_assert!(rents[present..].iter().all(Option::is_none));

        let present: Vec<u32> = rents[..present].iter().flatten().copied().collect();
        for pair in present.windows(2) {
            if descending {
                prop_assert!(pair[0] >= pair[1]);
            } else {
                prop_assert!(pair[0] <= pair[1]);
            }
        }
    }

    #[test]
    fn prop_field_keys_ignore_position(data in listings(), shift in 0usize..40) {
        let strategy = RowKeyStrategy::field("id");
        for (index, listing) in data.iter().enumerate() {
            let value = record_value(listing);
            prop_assert_eq!(
                strategy.key_for(listing, &value, index),
                strategy.key_for(listing, &value, index + shift)
            );
        }
    }

    #[test]
    fn prop_page_window_is_distinct_and_bounded(total in 1usize..60, current in 1usize..60) {
        let current = current.min(total);
        let window = page_window(current, total);

        prop_assert_eq!(window.len(), total.min(5));
        prop_assert!(window.contains(&current));
        prop_assert!(window.windows(2).all(|pair| pair[1] == pair[0] + 1));
        prop_assert!(window.iter().all(|page| (1..=total).contains(page)));
    }
}
