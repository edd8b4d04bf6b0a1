//! Helpers shared by the list and detail pages

use crate::hooks::{Remote, Toaster};
use crate::models::{AdminResult, MessageResponse};
use crate::utils::confirm;
use dioxus::prelude::*;
use std::future::Future;

/// Confirm, call the delete endpoint, then drop the row locally.
///
/// `noun` is the singular, capitalized record name ("Report"). Returns
/// whether the admin confirmed, i.e. whether the request was sent.
pub fn delete_row<T, F, Fut>(
    rows: Remote<Vec<T>>,
    toaster: Toaster,
    noun: &'static str,
    request: F,
    is_target: impl Fn(&T) -> bool + 'static,
) -> bool
where
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = AdminResult<MessageResponse>> + 'static,
{
    let lower = noun.to_lowercase();
    if !confirm(&format!("Are you sure you want to delete this {}?", lower)) {
        return false;
    }

    spawn(async move {
        match request().await {
            Ok(_) => {
                rows.remove_where(is_target);
                toaster.success(format!("{} deleted successfully", noun));
            }
            Err(error) => {
                tracing::error!("Failed to delete {}: {}", lower, error);
                toaster.error(format!("Failed to delete {}", lower));
            }
        }
    });
    true
}

/// Blank means "any"; other values are kept verbatim so controlled inputs
/// do not lose trailing spaces while typing
pub fn non_empty(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

/// Tri-state select value: `"true"`, `"false"` or any
pub fn bool_filter(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Numeric filter input; blank or malformed input means "no bound"
pub fn number_filter(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Inverse of [`bool_filter`] for rendering the select
pub fn bool_filter_value(value: Option<bool>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// (value, label) select options from static pairs
pub fn options(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}
