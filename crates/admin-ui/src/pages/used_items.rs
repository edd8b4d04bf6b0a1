//! Marketplace listing management page

use super::common::{delete_row, non_empty, number_filter};
use super::users::SummaryTile;
use crate::components::{DataTable, DetailField, ErrorBanner, Modal, Select, TextField};
use crate::hooks::{Remote, Toaster, use_remote, use_toast};
use crate::models::{ItemCondition, UsedItem, UsedItemFilters};
use crate::services::UsedItemsApi;
use crate::table::{Column, RowActions};
use crate::utils::{days_ago, format_rupees};
use chrono::Utc;
use dioxus::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct ItemFilterInputs {
    city: String,
    category: String,
    condition: String,
    min_price: String,
    max_price: String,
}

impl ItemFilterInputs {
    fn to_filters(&self) -> UsedItemFilters {
        UsedItemFilters {
            city: non_empty(&self.city),
            item_category: non_empty(&self.category),
            condition: ItemCondition::parse(&self.condition),
            min_price: number_filter(&self.min_price),
            max_price: number_filter(&self.max_price),
            ..Default::default()
        }
    }
}

/// Sorted, de-duplicated non-empty categories, plus `selected` so the
/// active filter stays selectable after the list narrows
fn category_options(items: &[UsedItem], selected: &str) -> Vec<(String, String)> {
    let mut categories: Vec<String> = items
        .iter()
        .map(|item| item.item_category.clone())
        .chain((!selected.is_empty()).then(|| selected.to_string()))
        .filter(|category| !category.is_empty())
        .collect();
    categories.sort();
    categories.dedup();
    categories.into_iter().map(|c| (c.clone(), c)).collect()
}

fn item_columns() -> Vec<Column<UsedItem>> {
    vec![
        Column::new("brandName", "Item").sortable().render(|item: &UsedItem| {
            rsx! {
                div {
                    p { class: "font-medium text-gray-900", "{item.brand_name}" }
                    p { class: "text-xs text-gray-500", "{item.item_type}" }
                }
            }
        }),
        Column::new("itemCategory", "Category").sortable(),
        Column::new("condition", "Condition").sortable().render(|item: &UsedItem| {
            let class = item.condition.badge_class();
            let label = item.condition.as_str();
            rsx! { span { class: "{class}", "{label}" } }
        }),
        Column::new("city", "City").sortable(),
        Column::new("price", "Price").sortable().render(|item: &UsedItem| {
            let price = format_rupees(item.price);
            rsx! { span { class: "font-semibold text-gray-900", "{price}" } }
        }),
        Column::new("createdAt", "Listed").sortable().render(|item: &UsedItem| {
            let listed = days_ago(item.created_at, Utc::now());
            rsx! { span { class: "text-sm text-gray-500", "{listed}" } }
        }),
    ]
}

fn item_actions(items: Remote<Vec<UsedItem>>, selected: Signal<Option<UsedItem>>, toaster: Toaster) -> RowActions<UsedItem> {
    RowActions::new(move |item: &UsedItem| {
        let mut selected = selected;
        let viewed = item.clone();
        let id = item.id.clone();

        rsx! {
            div { class: "flex items-center justify-end gap-1",
                button {
                    class: "p-1.5 rounded-lg text-gray-500 hover:bg-gray-100",
                    title: "View details",
                    onclick: move |_| selected.set(Some(viewed.clone())),
                    "👁"
                }
                button {
                    class: "p-1.5 rounded-lg text-gray-500 hover:bg-red-50 hover:text-red-600",
                    title: "Delete item",
                    onclick: move |_| {
                        delete_item(items, toaster, id.clone());
                    },
                    "🗑"
                }
            }
        }
    })
}

fn delete_item(items: Remote<Vec<UsedItem>>, toaster: Toaster, id: String) -> bool {
    let target = id.clone();
    delete_row(
        items,
        toaster,
        "Item",
        move || async move { UsedItemsApi::remove_used_item(&id).await },
        move |item: &UsedItem| item.id == target,
    )
}

#[component]
pub fn UsedItems() -> Element {
    let toaster = use_toast();
    let mut inputs = use_signal(ItemFilterInputs::default);
    let mut selected = use_signal(|| None::<UsedItem>);

    let items = use_remote(move || {
        let filters = inputs.read().to_filters();
        async move { UsedItemsApi::get_used_items(&filters).await }
    });

    let columns = use_hook(item_columns);
    let actions = use_hook(|| item_actions(items, selected, toaster));

    let current = inputs();
    let categories = category_options(&items.data.read(), &current.category);
    let conditions: Vec<(String, String)> = ItemCondition::all()
        .iter()
        .map(|c| (c.as_str().to_string(), c.as_str().to_string()))
        .collect();
    let (total, like_new) = {
        let data = items.data.read();
        (
            data.len(),
            data.iter()
                .filter(|item| matches!(item.condition, ItemCondition::New | ItemCondition::LikeNew))
                .count(),
        )
    };

    rsx! {
        div { class: "space-y-6",
            div {
                h1 { class: "text-2xl font-bold text-gray-900", "Used Items" }
                p { class: "text-sm text-gray-500", "Manage marketplace listings" }
            }

            div { class: "bg-white shadow rounded-lg p-4",
                div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-5 gap-4",
                    TextField {
                        label: Some("City".to_string()),
                        value: current.city.clone(),
                        oninput: move |value: String| inputs.write().city = value,
                    }
                    Select {
                        label: Some("Category".to_string()),
                        value: current.category.clone(),
                        options: categories,
                        empty_option: Some("All Categories".to_string()),
                        onchange: move |value: String| inputs.write().category = value,
                    }
                    Select {
                        label: Some("Condition".to_string()),
                        value: current.condition.clone(),
                        options: conditions,
                        empty_option: Some("All Conditions".to_string()),
                        onchange: move |value: String| inputs.write().condition = value,
                    }
                    TextField {
                        label: Some("Min Price".to_string()),
                        input_type: "number",
                        value: current.min_price.clone(),
                        oninput: move |value: String| inputs.write().min_price = value,
                    }
                    TextField {
                        label: Some("Max Price".to_string()),
                        input_type: "number",
                        value: current.max_price.clone(),
                        oninput: move |value: String| inputs.write().max_price = value,
                    }
                }
            }

            div { class: "grid grid-cols-2 gap-4",
                SummaryTile { label: "Total Items", value: total }
                SummaryTile { label: "New / Like New", value: like_new }
            }

            if let Some(error) = items.error_message() {
                ErrorBanner { message: error, on_retry: Some(EventHandler::new(move |_| items.refresh())) }
            }

            div { class: "bg-white shadow rounded-lg overflow-hidden",
                DataTable::<UsedItem> {
                    columns: columns.clone(),
                    data: items.data.read().clone(),
                    loading: items.is_loading(),
                    search_placeholder: "Search items by name, brand, city...",
                    on_row_click: Some(EventHandler::new(move |item: UsedItem| selected.set(Some(item)))),
                    actions: Some(actions.clone()),
                    empty_message: "No items found",
                }
            }

            if let Some(item) = selected() {
                ItemDetailModal {
                    item: item.clone(),
                    on_close: move |_| selected.set(None),
                    on_delete: move |id: String| {
                        if delete_item(items, toaster, id) {
                            selected.set(None);
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn ItemDetailModal(item: UsedItem, on_close: EventHandler<()>, on_delete: EventHandler<String>) -> Element {
    let id = item.id.clone();
    let price = format_rupees(item.price);
    let listed = days_ago(item.created_at, Utc::now());
    let images = item.image_urls.clone().unwrap_or_default();
    let description = (!item.description.is_empty()).then(|| item.description.clone());

    rsx! {
        Modal {
            title: "Item Details",
            on_close: move |_| on_close.call(()),
            footer: Some(rsx! {
                button { class: "btn btn-secondary", onclick: move |_| on_close.call(()), "Close" }
                button { class: "btn btn-danger", onclick: move |_| on_delete.call(id.clone()), "Delete Item" }
            }),
            div { class: "space-y-6",
                if !images.is_empty() {
                    div { class: "grid grid-cols-3 gap-2",
                        for url in images {
                            a { key: "{url}", href: "{url}", target: "_blank", rel: "noopener noreferrer",
                                img { class: "w-full h-28 object-cover rounded", src: "{url}" }
                            }
                        }
                    }
                }
                div { class: "grid grid-cols-2 gap-4",
                    DetailField { label: "Brand", value: Some(item.brand_name.clone()) }
                    DetailField { label: "Type", value: Some(item.item_type.clone()) }
                    DetailField { label: "Category", value: Some(item.item_category.clone()) }
                    DetailField { label: "Condition", value: Some(item.condition.as_str().to_string()) }
                    DetailField { label: "City", value: Some(item.city.clone()) }
                    DetailField { label: "Price", value: Some(price) }
                    DetailField { label: "Seller ID", value: Some(item.user_id.clone()) }
                    DetailField { label: "Listed", value: Some(listed) }
                }
                DetailField { label: "Description", value: description }
            }
        }
    }
}
