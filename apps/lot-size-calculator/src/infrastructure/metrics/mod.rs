//! Prometheus Metrics Module
//!
//! Exposes calculator metrics in Prometheus format at `/metrics`.
//!
//! # Metrics
//!
//! - `lot_calculator_calculations_total{convention, outcome}`: calculations
//!   by pip convention and result
//! - `lot_calculator_calculation_seconds`: time spent per calculation

use std::sync::OnceLock;
use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the Prometheus metrics recorder.
///
/// Repeated calls return the same handle.
///
/// # Panics
///
/// Panics if another global recorder is already installed.
#[allow(clippy::expect_used)]
pub fn init_metrics() -> PrometheusHandle {
    PROMETHEUS_HANDLE
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder");

            register_metrics();
            handle
        })
        .clone()
}

/// Get the Prometheus handle for rendering metrics.
///
/// Returns `None` if metrics have not been initialized.
#[must_use]
pub fn get_metrics_handle() -> Option<PrometheusHandle> {
    PROMETHEUS_HANDLE.get().cloned()
}

fn register_metrics() {
    describe_counter!(
        "lot_calculator_calculations_total",
        "Lot size calculations by pip convention and outcome"
    );
    describe_histogram!(
        "lot_calculator_calculation_seconds",
        "Time to parse inputs and compute a lot size"
    );
}

/// Outcome label for a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A lot size was produced.
    Success,
    /// Inputs were rejected.
    Rejected,
}

impl Outcome {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Rejected => "rejected",
        }
    }
}

/// Record one calculation.
pub fn record_calculation(convention: &'static str, outcome: Outcome, duration: Duration) {
    counter!(
        "lot_calculator_calculations_total",
        "convention" => convention,
        "outcome" => outcome.as_str()
    )
    .increment(1);
    histogram!("lot_calculator_calculation_seconds").record(duration.as_secs_f64());
}
