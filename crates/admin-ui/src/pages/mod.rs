//! Pages module

mod common;

pub mod admins;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod notifications;
pub mod notify;
pub mod notify_detail;
pub mod report_detail;
pub mod reports;
pub mod rooms;
pub mod signup;
pub mod support;
pub mod support_detail;
pub mod used_items;
pub mod users;

pub use admins::Admins;
pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
pub use notifications::Notifications;
pub use notify::NotifyList;
pub use notify_detail::NotifyDetail;
pub use report_detail::ReportDetail;
pub use reports::Reports;
pub use rooms::Rooms;
pub use signup::Signup;
pub use support::Support;
pub use support_detail::SupportDetail;
pub use used_items::UsedItems;
pub use users::Users;
