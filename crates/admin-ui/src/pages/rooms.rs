//! Room listing management page

use super::common::{delete_row, non_empty, number_filter, options};
use super::users::SummaryTile;
use crate::components::{DataTable, DetailField, ErrorBanner, Modal, Select, TextField};
use crate::hooks::{Remote, Toaster, use_remote, use_toast};
use crate::models::{Room, RoomFilters, UserType};
use crate::services::RoomsApi;
use crate::table::{Column, RowActions};
use crate::utils::{days_ago, format_rupees};
use chrono::Utc;
use dioxus::prelude::*;

/// Filter inputs as typed; parsed into [`RoomFilters`] on every fetch
#[derive(Clone, Debug, Default, PartialEq)]
struct RoomFilterInputs {
    city: String,
    user_type: String,
    min_rent: String,
    max_rent: String,
}

impl RoomFilterInputs {
    fn to_filters(&self) -> RoomFilters {
        RoomFilters {
            city: non_empty(&self.city),
            user_type: non_empty(&self.user_type),
            min_rent: number_filter(&self.min_rent),
            max_rent: number_filter(&self.max_rent),
            ..Default::default()
        }
    }
}

fn user_type_badge(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Tenant => "badge badge-info",
        UserType::Owner => "badge badge-purple",
        UserType::Unknown => "badge",
    }
}

fn room_columns() -> Vec<Column<Room>> {
    vec![
        Column::new("city", "City").sortable(),
        Column::new("nearbyLandmark", "Landmark"),
        Column::new("userType", "Listed By").sortable().render(|room: &Room| {
            let class = user_type_badge(room.user_type);
            let label = room.user_type.as_str();
            rsx! { span { class: "{class}", "{label}" } }
        }),
        Column::new("sizeOfPlace", "Size"),
        Column::new("rentPerHead", "Rent / Head").sortable().render(|room: &Room| {
            let rent = format_rupees(room.rent_per_head);
            rsx! { span { class: "font-semibold text-gray-900", "{rent}" } }
        }),
        Column::new("amenities", "Amenities").render(|room: &Room| {
            let shown = room.amenities.len().min(3);
            let extra = room.amenities.len() - shown;
            let amenities = room.amenities[..shown].to_vec();
            rsx! {
                div { class: "flex flex-wrap gap-1",
                    for amenity in amenities {
                        span { key: "{amenity}", class: "badge", "{amenity}" }
                    }
                    if extra > 0 {
                        span { class: "text-xs text-gray-400", "+{extra}" }
                    }
                }
            }
        }),
        Column::new("createdAt", "Listed").sortable().render(|room: &Room| {
            let listed = days_ago(room.created_at, Utc::now());
            rsx! { span { class: "text-sm text-gray-500", "{listed}" } }
        }),
    ]
}

fn room_actions(rooms: Remote<Vec<Room>>, selected: Signal<Option<Room>>, toaster: Toaster) -> RowActions<Room> {
    RowActions::new(move |room: &Room| {
        let mut selected = selected;
        let viewed = room.clone();
        let id = room.id.clone();

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
                    title: "Delete room",
                    onclick: move |_| {
                        delete_room(rooms, toaster, id.clone());
                    },
                    "🗑"
                }
            }
        }
    })
}

fn delete_room(rooms: Remote<Vec<Room>>, toaster: Toaster, id: String) -> bool {
    let target = id.clone();
    delete_row(
        rooms,
        toaster,
        "Room",
        move || async move { RoomsApi::delete_room(&id).await },
        move |room: &Room| room.id == target,
    )
}

#[component]
pub fn Rooms() -> Element {
    let toaster = use_toast();
    let mut inputs = use_signal(RoomFilterInputs::default);
    let mut selected = use_signal(|| None::<Room>);

    let rooms = use_remote(move || {
        let filters = inputs.read().to_filters();
        async move { RoomsApi::get_rooms(&filters).await }
    });

    let columns = use_hook(room_columns);
    let actions = use_hook(|| room_actions(rooms, selected, toaster));

    let current = inputs();
    let (total, tenants, owners) = {
        let data = rooms.data.read();
        (
            data.len(),
            data.iter().filter(|room| room.user_type == UserType::Tenant).count(),
            data.iter().filter(|room| room.user_type == UserType::Owner).count(),
        )
    };

    rsx! {
        div { class: "space-y-6",
            div {
                h1 { class: "text-2xl font-bold text-gray-900", "Rooms" }
                p { class: "text-sm text-gray-500", "Manage all room listings" }
            }

            div { class: "bg-white shadow rounded-lg p-4",
                div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4",
                    TextField {
                        label: Some("City".to_string()),
                        value: current.city.clone(),
                        placeholder: "e.g. Bengaluru",
                        oninput: move |value: String| inputs.write().city = value,
                    }
                    Select {
                        label: Some("Listed By".to_string()),
                        value: current.user_type.clone(),
                        options: UserType::all().iter().map(|t| (t.as_str().to_string(), t.as_str().to_string())).collect::<Vec<_>>(),
                        empty_option: Some("All Types".to_string()),
                        onchange: move |value: String| inputs.write().user_type = value,
                    }
                    TextField {
                        label: Some("Min Rent".to_string()),
                        input_type: "number",
                        value: current.min_rent.clone(),
                        oninput: move |value: String| inputs.write().min_rent = value,
                    }
                    TextField {
                        label: Some("Max Rent".to_string()),
                        input_type: "number",
                        value: current.max_rent.clone(),
                        oninput: move |value: String| inputs.write().max_rent = value,
                    }
                }
            }

            div { class: "grid grid-cols-3 gap-4",
                SummaryTile { label: "Total Rooms", value: total }
                SummaryTile { label: "Tenants", value: tenants }
                SummaryTile { label: "Owners", value: owners }
            }

            if let Some(error) = rooms.error_message() {
                ErrorBanner { message: error, on_retry: Some(EventHandler::new(move |_| rooms.refresh())) }
            }

            div { class: "bg-white shadow rounded-lg overflow-hidden",
                DataTable::<Room> {
                    columns: columns.clone(),
                    data: rooms.data.read().clone(),
                    loading: rooms.is_loading(),
                    search_placeholder: "Search rooms by city, landmark, description...",
                    on_row_click: Some(EventHandler::new(move |room: Room| selected.set(Some(room)))),
                    actions: Some(actions.clone()),
                    empty_message: "No rooms found",
                }
            }

            if let Some(room) = selected() {
                RoomDetailModal {
                    room: room.clone(),
                    on_close: move |_| selected.set(None),
                    on_delete: move |id: String| {
                        if delete_room(rooms, toaster, id) {
                            selected.set(None);
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn RoomDetailModal(room: Room, on_close: EventHandler<()>, on_delete: EventHandler<String>) -> Element {
    let id = room.id.clone();
    let rent = format_rupees(room.rent_per_head);
    let listed = days_ago(room.created_at, Utc::now());
    let images = room.image_urls.clone().unwrap_or_default();
    let amenities = (!room.amenities.is_empty()).then(|| room.amenities.join(", "));
    let description = (!room.description.is_empty()).then(|| room.description.clone());

    rsx! {
        Modal {
            title: "Room Details",
            on_close: move |_| on_close.call(()),
            footer: Some(rsx! {
                button { class: "btn btn-secondary", onclick: move |_| on_close.call(()), "Close" }
                button { class: "btn btn-danger", onclick: move |_| on_delete.call(id.clone()), "Delete Room" }
            }),
            div { class: "space-y-6",
                if let Some(cover) = room.cover_image() {
                    img { class: "w-full h-56 object-cover rounded-lg", src: "{cover}", alt: "{room.city}" }
                }
                div { class: "grid grid-cols-2 gap-4",
                    DetailField { label: "City", value: Some(room.city.clone()) }
                    DetailField { label: "Landmark", value: Some(room.nearby_landmark.clone()) }
                    DetailField { label: "Listed By", value: Some(room.user_type.as_str().to_string()) }
                    DetailField { label: "Size", value: Some(room.size_of_place.clone()) }
                    DetailField { label: "Rent / Head", value: Some(rent) }
                    DetailField { label: "Listed", value: Some(listed) }
                    DetailField { label: "Owner ID", value: Some(room.user_id.clone()) }
                    DetailField { label: "Amenities", value: amenities }
                }
                DetailField { label: "Description", value: description }
                if images.len() > 1 {
                    div { class: "grid grid-cols-3 gap-2",
                        for url in images {
                            a { key: "{url}", href: "{url}", target: "_blank", rel: "noopener noreferrer",
                                img { class: "w-full h-24 object-cover rounded", src: "{url}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_inputs_parse_into_query() {
        let inputs = RoomFilterInputs {
            city: "Pune".into(),
            user_type: String::new(),
            min_rent: "5000".into(),
            max_rent: "lots".into(),
        };
        let filters = inputs.to_filters();
        assert_eq!(filters.city.as_deref(), Some("Pune"));
        assert_eq!(filters.user_type, None);
        assert_eq!(filters.min_rent, Some(5000.0));
        assert_eq!(filters.max_rent, None);
    }
}
