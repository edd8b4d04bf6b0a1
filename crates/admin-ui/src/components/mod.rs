//! UI Components module

pub mod data_table;
pub mod feedback;
pub mod forms;
pub mod layout;
pub mod loading;
pub mod stats_card;

// Re-export commonly used components
pub use data_table::DataTable;
pub use feedback::{Badge, DetailField, ErrorBanner, Modal, ToastContainer};
pub use forms::{Button, ButtonVariant, Select, TextArea, TextField};
pub use layout::{AdminLayout, Sidebar};
pub use loading::{PageLoader, Spinner};
pub use stats_card::{StatsCard, StatsColor, Trend};
