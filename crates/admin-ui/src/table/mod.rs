//! Renderer-independent core of the data table
//!
//! [`compute_view`] turns data, columns and [`TableState`] into the rows of
//! the current page. The `DataTable` component only renders its output and
//! feeds user events back into the state.

pub mod column;
pub mod pipeline;
pub mod record;
pub mod state;

pub use column::{CellRenderer, Column, Comparator, RowActions, RowKey, RowKeyStrategy};
pub use pipeline::{PAGE_WINDOW, TableView, VisibleRow, compute_view, filter_rows, page_count, page_range, page_window, sort_rows};
pub use record::{compare_values, display_value, matches_query, record_value, resolve_path};
pub use state::{SortDirection, SortState, TableState};

#[cfg(test)]
mod table_property_test;
