use ark::{Dashboard, DashboardConfig};
use ark_demos::common::get_source;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create source (mock in CI when ARK_DEMOS_USE_MOCK is set).
    let source = get_source()?;

    // 2. Build the dashboard for the four reference plant sensors.
    let dashboard = Dashboard::builder()
        .with_source(source)
        .sensors(DashboardConfig::reference_sensors())
        .build()?;

    // 3. Build the presentation mapping; a template would receive this object.
    let ctx = dashboard.context().await?;

    // 4. Print it.
    println!("{}", serde_json::to_string_pretty(&ctx)?);

    Ok(())
}
