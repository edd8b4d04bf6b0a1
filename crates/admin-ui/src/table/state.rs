//! Interactive table state: search query, sort and current page

use super::column::Column;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

/// State owned by one mounted table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    pub query: String,
    pub sort: Option<SortState>,
    /// 1-based; may exceed the page count after the data shrinks
    pub page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: None,
            page: 1,
        }
    }
}

impl TableState {
    /// Replace the search query and return to the first page
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Header click: same column flips direction, another column starts ascending.
    /// Non-sortable columns leave the state untouched.
    pub fn toggle_sort<T>(&mut self, column: &Column<T>) {
        if !column.sortable {
            return;
        }

        self.sort = Some(match self.sort.take() {
            Some(current) if current.key == column.key => SortState {
                key: current.key,
                direction: current.direction.toggled(),
            },
            _ => SortState {
                key: column.key.clone(),
                direction: SortDirection::Ascending,
            },
        });
    }

    /// Direction shown on `key`'s header, if it is the sorted column
    pub fn sort_direction(&self, key: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|sort| sort.key == key)
            .map(|sort| sort.direction)
    }

    /// Jump to `page`, clamped to `1..=total_pages`
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    pub fn previous(&mut self, total_pages: usize) {
        let current = self.current_page(total_pages);
        self.go_to(current.saturating_sub(1), total_pages);
    }

    pub fn next(&mut self, total_pages: usize) {
        let current = self.current_page(total_pages);
        self.go_to(current + 1, total_pages);
    }

    /// Page actually displayed: the stored page clamped to the last page
    pub fn current_page(&self, total_pages: usize) -> usize {
        self.page.clamp(1, total_pages.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row;

    #[test]
    fn test_same_column_toggles_direction() {
        let name: Column<Row> = Column::new("name", "Name").sortable();
        let mut state = TableState::default();

        state.toggle_sort(&name);
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Ascending));
        state.toggle_sort(&name);
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Descending));
        state.toggle_sort(&name);
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_other_column_resets_to_ascending() {
        let name: Column<Row> = Column::new("name", "Name").sortable();
        let city: Column<Row> = Column::new("city", "City").sortable();
        let mut state = TableState::default();

        state.toggle_sort(&name);
        state.toggle_sort(&name);
        state.toggle_sort(&city);
        assert_eq!(state.sort_direction("city"), Some(SortDirection::Ascending));
        assert_eq!(state.sort_direction("name"), None);
    }

    #[test]
    fn test_non_sortable_column_is_noop() {
        let name: Column<Row> = Column::new("name", "Name").sortable();
        let photo: Column<Row> = Column::new("photo", "Photo");
        let mut state = TableState::default();

        state.toggle_sort(&name);
        state.toggle_sort(&photo);
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Ascending));
        assert_eq!(state.sort_direction("photo"), None);
    }

    #[test]
    fn test_query_change_resets_page() {
        let mut state = TableState::default();
        state.go_to(3, 5);
        assert_eq!(state.page, 3);
        state.set_query("amy");
        assert_eq!(state.page, 1);
        assert_eq!(state.query, "amy");
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = TableState::default();
        state.previous(4);
        assert_eq!(state.page, 1);
        state.go_to(9, 4);
        assert_eq!(state.page, 4);
        state.next(4);
        assert_eq!(state.page, 4);
        state.go_to(0, 4);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_current_page_after_data_shrinks() {
        let mut state = TableState::default();
        state.go_to(5, 5);
        assert_eq!(state.current_page(3), 3);
        assert_eq!(state.current_page(0), 1);
        state.previous(3);
        assert_eq!(state.page, 2);
    }
}
