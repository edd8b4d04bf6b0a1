//! Searchable, sortable, paginated table over any serializable record type

use crate::components::loading::Spinner;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::table::{Column, RowActions, RowKeyStrategy, SortDirection, TableState, compute_view, display_value, record_value, resolve_path};
use dioxus::prelude::*;
use serde::Serialize;
use serde_json::Value;

/// Props for the DataTable component
#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps<T: Clone + PartialEq + Serialize + 'static> {
    /// Ordered column descriptors
    pub columns: Vec<Column<T>>,
    /// Rows, owned and fetched by the caller
    pub data: Vec<T>,
    #[props(default = true)]
    pub searchable: bool,
    #[props(default = "Search...".to_string(), into)]
    pub search_placeholder: String,
    /// Invoked with the record when a row (outside the actions cell) is clicked
    #[props(default = None)]
    pub on_row_click: Option<EventHandler<T>>,
    /// Adds a trailing "Actions" column
    #[props(default = None)]
    pub actions: Option<RowActions<T>>,
    #[props(default = "No data found".to_string(), into)]
    pub empty_message: String,
    #[props(default = false)]
    pub loading: bool,
    /// Rows per page; 0 disables pagination
    #[props(default = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
    #[props(default)]
    pub row_key: RowKeyStrategy<T>,
}

/// Generic data table
#[component]
pub fn DataTable<T: Clone + PartialEq + Serialize + 'static>(props: DataTableProps<T>) -> Element {
    let state = use_signal(TableState::default);
    render_table(&props, state)
}

/// Table markup for `props` under the given interactive state
fn render_table<T: Clone + PartialEq + Serialize + 'static>(props: &DataTableProps<T>, mut state: Signal<TableState>) -> Element {
    if props.loading {
        return rsx! {
            div { class: "data-table-loading",
                Spinner { message: Some("Loading...".to_string()) }
            }
        };
    }

    let view = compute_view(&props.data, &props.columns, &state.read(), props.page_size, &props.row_key);
    let query = state.read().query.clone();
    let colspan = props.columns.len() + usize::from(props.actions.is_some());
    let current = view.page;
    let total_pages = view.total_pages;
    let summary = view.summary();

    rsx! {
        div { class: "data-table",
            if props.searchable {
                div { class: "data-table-search",
                    input {
                        r#type: "text",
                        class: "form-input search-input",
                        placeholder: "{props.search_placeholder}",
                        value: "{query}",
                        oninput: move |evt| state.write().set_query(evt.value()),
                    }
                }
            }

            div { class: "table-container",
                table { class: "table",
                    thead {
                        tr {
                            for column in props.columns.iter() {
                                HeaderCell { key: "{column.key}", column: column.clone(), state }
                            }
                            if props.actions.is_some() {
                                th { class: "actions-header", "Actions" }
                            }
                        }
                    }
                    tbody {
                        if view.is_empty() {
                            tr {
                                td { class: "empty-state", colspan: "{colspan}", "{props.empty_message}" }
                            }
                        }
                        for row in view.rows.iter() {
                            TableRow {
                                key: "{row.key}",
                                record: props.data[row.index].clone(),
                                columns: props.columns.clone(),
                                on_row_click: props.on_row_click,
                                actions: props.actions.clone(),
                            }
                        }
                    }
                }
            }

            if view.has_pagination() {
                div { class: "pagination",
                    div { class: "pagination-summary", "{summary}" }
                    div { class: "pagination-controls",
                        button {
                            class: "btn btn-secondary btn-small",
                            disabled: current <= 1,
                            onclick: move |_| state.write().previous(total_pages),
                            "Previous"
                        }
                        for page in view.window.iter().copied() {
                            button {
                                key: "{page}",
                                class: if page == current { "page-btn active" } else { "page-btn" },
                                onclick: move |_| state.write().go_to(page, total_pages),
                                "{page}"
                            }
                        }
                        button {
                            class: "btn btn-secondary btn-small",
                            disabled: current >= total_pages,
                            onclick: move |_| state.write().next(total_pages),
                            "Next"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct HeaderCellProps<T: Clone + PartialEq + 'static> {
    column: Column<T>,
    state: Signal<TableState>,
}

#[component]
fn HeaderCell<T: Clone + PartialEq + 'static>(props: HeaderCellProps<T>) -> Element {
    let mut state = props.state;
    let arrow = state.read().sort_direction(&props.column.key).map(SortDirection::arrow);
    let label = props.column.label.clone();
    let class = if props.column.sortable { "sortable" } else { "" };
    let column = props.column;

    rsx! {
        th { class: "{class}", onclick: move |_| state.write().toggle_sort(&column),
            "{label}"
            if let Some(arrow) = arrow {
                span { class: "sort-indicator", " {arrow}" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TableRowProps<T: Clone + PartialEq + Serialize + 'static> {
    record: T,
    columns: Vec<Column<T>>,
    #[props(default = None)]
    on_row_click: Option<EventHandler<T>>,
    #[props(default = None)]
    actions: Option<RowActions<T>>,
}

/// Part of a row a click landed in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowRegion {
    Cell,
    Actions,
}

/// Open the row once for a click in a data cell. Clicks in the actions
/// cell belong to its controls and never open the row.
fn route_row_click<T: Clone>(open: Option<impl FnOnce(T)>, region: RowRegion, record: &T) -> bool {
    match (region, open) {
        (RowRegion::Cell, Some(open)) => {
            open(record.clone());
            true
        }
        _ => false,
    }
}

#[component]
fn TableRow<T: Clone + PartialEq + Serialize + 'static>(props: TableRowProps<T>) -> Element {
    let value = record_value(&props.record);
    let on_row_click = props.on_row_click;
    let class = if on_row_click.is_some() { "clickable" } else { "" };

    // handlers sit on the cells, not the row, so each click is routed once
    rsx! {
        tr { class: "{class}",
            for column in props.columns.iter() {
                td {
                    key: "{column.key}",
                    onclick: {
                        let record = props.record.clone();
                        move |_| {
                            route_row_click(on_row_click.map(|handler| move |row: T| handler.call(row)), RowRegion::Cell, &record);
                        }
                    },
                    {cell_content(column, &props.record, &value)}
                }
            }
            if let Some(actions) = &props.actions {
                td {
                    class: "actions-cell",
                    onclick: {
                        let record = props.record.clone();
                        move |evt: MouseEvent| {
                            evt.stop_propagation();
                            route_row_click(on_row_click.map(|handler| move |row: T| handler.call(row)), RowRegion::Actions, &record);
                        }
                    },
                    {actions.render(&props.record)}
                }
            }
        }
    }
}

/// Custom renderer output, else the resolved value, else a placeholder
fn cell_content<T>(column: &Column<T>, record: &T, value: &Value) -> Element {
    if let Some(render) = &column.render {
        return render(record);
    }
    match resolve_path(value, &column.key) {
        Some(cell) => {
            let text = display_value(cell);
            rsx! { "{text}" }
        }
        None => rsx! {
            span { class: "cell-placeholder", "-" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SortState;
    use std::cell::{Cell, RefCell};

    #[derive(Serialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Listing {
        id: String,
        city: String,
        rent_per_head: Option<u32>,
    }

    fn listing(id: &str, city: &str, rent_per_head: Option<u32>) -> Listing {
        Listing {
            id: id.to_string(),
            city: city.to_string(),
            rent_per_head,
        }
    }

    fn listings() -> Vec<Listing> {
        vec![listing("a", "Pune", Some(8500)), listing("b", "Mumbai", None)]
    }

    fn columns() -> Vec<Column<Listing>> {
        vec![
            Column::new("city", "City").sortable(),
            Column::new("rentPerHead", "Rent").sortable(),
        ]
    }

    #[component]
    fn PresetTable(data: Vec<Listing>, preset: TableState) -> Element {
        let state = use_signal(|| preset.clone());
        let props = DataTableProps {
            columns: columns(),
            data,
            searchable: true,
            search_placeholder: "Search...".to_string(),
            on_row_click: None,
            actions: None,
            empty_message: "No listings".to_string(),
            loading: false,
            page_size: DEFAULT_PAGE_SIZE,
            row_key: RowKeyStrategy::default(),
        };
        render_table(&props, state)
    }

    fn render(data: Vec<Listing>, preset: TableState) -> String {
        let mut dom = VirtualDom::new_with_props(PresetTable, PresetTableProps { data, preset });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn sorted_by(key: &str, direction: SortDirection) -> TableState {
        TableState {
            sort: Some(SortState {
                key: key.to_string(),
                direction,
            }),
            ..TableState::default()
        }
    }

    #[test]
    fn test_unmatched_query_renders_only_empty_message() {
        let mut preset = TableState::default();
        preset.set_query("zzz");
        let html = render(listings(), preset);

        assert!(html.contains("No listings"));
        assert!(!html.contains("Pune"));
        assert!(!html.contains("Mumbai"));
        // header row plus the empty-state row
        assert_eq!(html.matches("<tr").count(), 2);
        assert!(!html.contains("Showing"));
    }

    #[test]
    fn test_absent_value_renders_placeholder() {
        let html = render(listings(), TableState::default());

        assert!(html.contains("8500"));
        assert_eq!(html.matches("cell-placeholder").count(), 1);
        assert!(!html.contains("No listings"));
    }

    #[test]
    fn test_sorted_header_shows_direction() {
        let html = render(listings(), sorted_by("city", SortDirection::Ascending));
        assert!(html.contains("↑"));
        assert!(!html.contains("↓"));
        assert!(html.find("Mumbai") < html.find("Pune"));

        let html = render(listings(), sorted_by("city", SortDirection::Descending));
        assert!(html.contains("↓"));
        assert!(!html.contains("↑"));
        assert!(html.find("Pune") < html.find("Mumbai"));
    }

    #[test]
    fn test_unsorted_table_has_no_indicator() {
        let html = render(listings(), TableState::default());
        assert!(!html.contains("sort-indicator"));
    }

    #[test]
    fn test_cell_click_opens_row_once() {
        let opened = RefCell::new(Vec::new());
        let row = listing("a", "Pune", None);

        let fired = route_row_click(Some(|record: Listing| opened.borrow_mut().push(record.id)), RowRegion::Cell, &row);

        assert!(fired);
        assert_eq!(*opened.borrow(), vec!["a".to_string()]);
    }

    #[test]
    fn test_actions_click_never_opens_row() {
        let opened = Cell::new(0);
        let row = listing("a", "Pune", None);

        let fired = route_row_click(Some(|_: Listing| opened.set(opened.get() + 1)), RowRegion::Actions, &row);

        assert!(!fired);
        assert_eq!(opened.get(), 0);
        assert!(!route_row_click(None::<fn(Listing)>, RowRegion::Cell, &row));
    }
}
