//! Browser shims with native fallbacks

/// Ask the user to confirm a destructive action.
///
/// Native builds have no dialog and always confirm.
#[cfg(target_arch = "wasm32")]
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn confirm(message: &str) -> bool {
    tracing::debug!(message, "Auto-confirming outside the browser");
    true
}

/// Suspend the current task for `ms` milliseconds
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_native_confirm_accepts() {
        assert!(confirm("Delete this room?"));
    }

    #[tokio::test]
    async fn test_sleep_ms_returns() {
        sleep_ms(1).await;
    }
}
