//! Admin dashboard page component

use crate::app::Route;
use crate::components::{Spinner, StatsCard, StatsColor, Trend};
use crate::hooks::{use_auth, use_remote};
use crate::models::{Room, RoomFilters, UsedItem, UsedItemFilters, User, UserFilters};
use crate::services::{RoomsApi, UsedItemsApi, UsersApi};
use crate::utils::{format_rupees, time_ago};
use chrono::{DateTime, Duration, Utc};
use dioxus::prelude::*;

/// Records fetched per collection for the overview
pub const DASHBOARD_FETCH_LIMIT: u32 = 100;
const RECENT_USERS: usize = 5;
const RECENT_ROOMS: usize = 4;
const TREND_WINDOW_DAYS: i64 = 30;

/// Headline counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_users: usize,
    pub active_users: usize,
    pub total_rooms: usize,
    pub total_items: usize,
}

impl DashboardStats {
    pub fn compute(users: &[User], rooms: &[Room], items: &[UsedItem]) -> Self {
        Self {
            total_users: users.len(),
            active_users: users.iter().filter(|user| user.is_active()).count(),
            total_rooms: rooms.len(),
            total_items: items.len(),
        }
    }
}

/// Newest `limit` records by creation time; undated records sort last
pub fn most_recent<T: Clone>(
    records: &[T],
    created_at: impl Fn(&T) -> Option<DateTime<Utc>>,
    limit: usize,
) -> Vec<T> {
    let mut sorted: Vec<&T> = records.iter().collect();
    sorted.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    sorted.into_iter().take(limit).cloned().collect()
}

/// Records created in the last 30 days against the 30 days before.
///
/// `None` when the earlier window is empty, since no percentage exists.
pub fn monthly_trend<T>(
    records: &[T],
    created_at: impl Fn(&T) -> Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<Trend> {
    let window = Duration::days(TREND_WINDOW_DAYS);
    let (mut recent, mut previous) = (0i64, 0i64);
    for date in records.iter().filter_map(&created_at) {
        if date > now - window && date <= now {
            recent += 1;
        } else if date > now - window * 2 && date <= now - window {
            previous += 1;
        }
    }

    if previous == 0 {
        return None;
    }
    Some(Trend {
        percent: ((recent - previous) * 100 / previous) as i32,
        positive: recent >= previous,
    })
}

/// Admin dashboard component
#[component]
pub fn Dashboard() -> Element {
    let auth_context = use_auth();

    // Three independent requests; a failed one leaves its list empty
    let users = use_remote(|| async {
        let filters = UserFilters {
            limit: Some(DASHBOARD_FETCH_LIMIT),
            ..Default::default()
        };
        UsersApi::get_users(&filters).await
    });
    let rooms = use_remote(|| async {
        let filters = RoomFilters {
            limit: Some(DASHBOARD_FETCH_LIMIT),
            ..Default::default()
        };
        RoomsApi::get_rooms(&filters).await
    });
    let items = use_remote(|| async {
        let filters = UsedItemFilters {
            limit: Some(DASHBOARD_FETCH_LIMIT),
            ..Default::default()
        };
        UsedItemsApi::get_used_items(&filters).await
    });

    if users.is_loading() || rooms.is_loading() || items.is_loading() {
        return rsx! {
            Spinner { size: "large".to_string(), message: Some("Loading dashboard...".to_string()) }
        };
    }

    let stats = DashboardStats::compute(&users.data.read(), &rooms.data.read(), &items.data.read());
    let now = Utc::now();
    let user_trend = monthly_trend(&users.data.read(), |user| user.created_at, now);
    let room_trend = monthly_trend(&rooms.data.read(), |room| room.created_at, now);
    let item_trend = monthly_trend(&items.data.read(), |item| item.created_at, now);
    let recent_users = most_recent(&users.data.read(), |user| user.created_at, RECENT_USERS);
    let recent_rooms = most_recent(&rooms.data.read(), |room| room.created_at, RECENT_ROOMS);
    let greeting = auth_context
        .current_admin()
        .map(|admin| format!("Welcome back, {}", admin.name))
        .unwrap_or_else(|| "Welcome back".to_string());

    rsx! {
        div { class: "space-y-6",
            div {
                h1 { class: "text-2xl font-bold text-gray-900", "{greeting}" }
                p { class: "text-sm text-gray-500", "Overview of the Hello Roomie platform" }
            }

            div { class: "grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4",
                StatsCard {
                    title: "Total Users",
                    value: stats.total_users.to_string(),
                    icon: "👥",
                    color: StatsColor::Cyan,
                    trend: user_trend,
                }
                StatsCard {
                    title: "Active Users",
                    value: stats.active_users.to_string(),
                    subtitle: Some(format!("of {} registered", stats.total_users)),
                    icon: "✅",
                    color: StatsColor::Green,
                }
                StatsCard {
                    title: "Room Listings",
                    value: stats.total_rooms.to_string(),
                    icon: "🏠",
                    color: StatsColor::Purple,
                    trend: room_trend,
                }
                StatsCard {
                    title: "Used Items",
                    value: stats.total_items.to_string(),
                    icon: "📦",
                    color: StatsColor::Orange,
                    trend: item_trend,
                }
            }

            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                div { class: "bg-white shadow rounded-lg",
                    div { class: "flex items-center justify-between px-4 py-4 border-b",
                        h3 { class: "text-lg font-medium text-gray-900", "Recent Users" }
                        Link { to: Route::Users {}, class: "text-sm text-blue-600 hover:text-blue-500", "View all" }
                    }
                    ul { class: "divide-y",
                        if recent_users.is_empty() {
                            li { class: "px-4 py-8 text-center text-gray-500", "No users yet" }
                        }
                        for user in recent_users {
                            li { key: "{user.uid}", class: "flex items-center px-4 py-3",
                                div { class: "w-10 h-10 rounded-full bg-gradient-to-br from-cyan-500 to-purple-600 flex items-center justify-center text-white font-medium",
                                    {user.initial().to_string()}
                                }
                                div { class: "ml-3 flex-1 min-w-0",
                                    p { class: "text-sm font-medium text-gray-900 truncate", {user.shown_name().to_string()} }
                                    p { class: "text-xs text-gray-500", {user.city.clone().unwrap_or_else(|| "Not set".to_string())} }
                                }
                                span { class: "text-xs text-gray-400", {time_ago(user.created_at, now)} }
                            }
                        }
                    }
                }

                div { class: "bg-white shadow rounded-lg",
                    div { class: "flex items-center justify-between px-4 py-4 border-b",
                        h3 { class: "text-lg font-medium text-gray-900", "Recent Rooms" }
                        Link { to: Route::Rooms {}, class: "text-sm text-blue-600 hover:text-blue-500", "View all" }
                    }
                    ul { class: "divide-y",
                        if recent_rooms.is_empty() {
                            li { class: "px-4 py-8 text-center text-gray-500", "No rooms yet" }
                        }
                        for room in recent_rooms {
                            li { key: "{room.id}", class: "flex items-center justify-between px-4 py-3",
                                div {
                                    p { class: "text-sm font-medium text-gray-900", "{room.city}" }
                                    p { class: "text-xs text-gray-500", "{room.nearby_landmark}" }
                                }
                                div { class: "text-right",
                                    p { class: "text-sm font-semibold text-gray-900", {format_rupees(room.rent_per_head)} }
                                    p { class: "text-xs text-gray-400", {time_ago(room.created_at, now)} }
                                }
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
    use chrono::TimeZone;

    fn user(uid: &str, active: Option<bool>, day: Option<u32>) -> User {
        User {
            uid: uid.to_string(),
            full_name: uid.to_uppercase(),
            is_active: active,
            created_at: day.map(|d| Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_stats_count_active_users() {
        let users = vec![user("a", Some(true), None), user("b", Some(false), None), user("c", None, None)];
        let stats = DashboardStats::compute(&users, &[], &[]);
        assert_eq!(
            stats,
            DashboardStats {
                total_users: 3,
                active_users: 1,
                total_rooms: 0,
                total_items: 0,
            }
        );
    }

    #[test]
    fn test_most_recent_orders_newest_first() {
        let users = vec![
            user("old", None, Some(1)),
            user("undated", None, None),
            user("new", None, Some(20)),
            user("mid", None, Some(10)),
        ];
        let recent = most_recent(&users, |u| u.created_at, 2);
        let ids: Vec<&str> = recent.iter().map(|u| u.uid.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid"]);

        let all = most_recent(&users, |u| u.created_at, 10);
        assert_eq!(all.last().map(|u| u.uid.as_str()), Some("undated"));
    }

    #[test]
    fn test_monthly_trend_compares_windows() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let days_back = |days: i64| Some(now - Duration::days(days));
        let dates = vec![days_back(1), days_back(5), days_back(12), days_back(40), days_back(45), None];

        let trend = monthly_trend(&dates, |d| *d, now).unwrap();
        assert_eq!(trend, Trend { percent: 50, positive: true });

        let shrinking = vec![days_back(2), days_back(35), days_back(50)];
        assert_eq!(
            monthly_trend(&shrinking, |d| *d, now),
            Some(Trend { percent: -50, positive: false })
        );
    }

    #[test]
    fn test_monthly_trend_without_history() {
        let now = Utc::now();
        let dates = vec![Some(now - Duration::days(3))];
        assert_eq!(monthly_trend(&dates, |d| *d, now), None);
    }
}
