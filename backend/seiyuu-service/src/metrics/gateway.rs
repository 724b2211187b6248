use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec,
};

lazy_static! {
    /// Gateway operations by name and outcome (ok/error/not_found).
    pub static ref GATEWAY_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "seiyuu_gateway_operations_total",
        "Gateway operations segmented by operation and outcome",
        &["operation", "outcome"]
    )
    .expect("failed to register seiyuu_gateway_operations_total");

    /// AniList round-trip time by query (summary, profile, page).
    pub static ref STAFF_LOOKUP_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "seiyuu_staff_lookup_duration_seconds",
        "AniList staff lookup duration segmented by query",
        &["query"]
    )
    .expect("failed to register seiyuu_staff_lookup_duration_seconds");

    /// Name cache lookups (hit/miss).
    pub static ref NAME_CACHE_EVENTS: IntCounterVec = register_int_counter_vec!(
        "seiyuu_name_cache_events_total",
        "Voice-actor name cache events segmented by outcome",
        &["event"]
    )
    .expect("failed to register seiyuu_name_cache_events_total");
}

pub fn record_operation<T>(operation: &str, result: &crate::error::Result<T>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(crate::error::AppError::NotFound(_)) => "not_found",
        Err(_) => "error",
    };
    GATEWAY_OPERATIONS_TOTAL
        .with_label_values(&[operation, outcome])
        .inc();
}
