use ark::{Dashboard, DashboardConfig};
use ark_demos::common::get_source;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,ark=trace,ark_core=debug,ark_postgres=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let dashboard = Dashboard::builder()
        .with_source(get_source()?)
        .sensors(DashboardConfig::reference_sensors())
        .build()?;

    let report = dashboard.report().await?;
    tracing::info!(
        sensors = report.views.len(),
        warnings = report.warnings.len(),
        "report ready"
    );

    Ok(())
}
