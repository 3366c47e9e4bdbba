//! Telemetry helpers for hosts embedding the overlay.
//!
//! The overlay only emits `tracing` events. Hosts that already run a
//! subscriber get them for free; everyone else can opt into a compact
//! console subscriber with the `telemetry` feature.

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`
/// (falling back to `chart_overlay=info`).
///
/// Returns `false` when the `telemetry` feature is off or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chart_overlay=info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
