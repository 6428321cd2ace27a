use crate::core::SplitDuration;

/// Async counterpart of [`crate::sleep_for_nanoseconds`] for tokio callers.
///
/// Yields to the runtime instead of blocking the worker thread. Negative
/// durations complete immediately.
pub async fn sleep_for_nanoseconds_async(nanoseconds: i64) {
    let requested = SplitDuration::split(nanoseconds);
    match requested.to_duration() {
        Some(span) if !span.is_zero() => {
            tracing::debug!("Async sleep requested: {}", requested);
            tokio::time::sleep(span).await;
        }
        _ => {}
    }
}
