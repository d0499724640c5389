use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static RECORDS_CREATED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "jobboard_records_created_total",
        "Records appended to a collection",
        &["collection"]
    )
    .expect("register records_created_total")
});

pub static STORAGE_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "jobboard_storage_errors_total",
        "Collection reads or writes that failed with an I/O error"
    )
    .expect("register storage_errors_total")
});

pub static CORRUPT_READS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "jobboard_corrupt_reads_total",
        "Collection reads whose content was malformed and replaced by the default shape"
    )
    .expect("register corrupt_reads_total")
});

pub static RECORDS_SKIPPED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "jobboard_records_skipped_total",
        "Stored records left out of a read because they do not fit the record type",
        &["collection"]
    )
    .expect("register records_skipped_total")
});

pub fn record_created(collection: &str) {
    RECORDS_CREATED_TOTAL.with_label_values(&[collection]).inc();
}

pub fn record_skipped(collection: &str) {
    RECORDS_SKIPPED_TOTAL.with_label_values(&[collection]).inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
