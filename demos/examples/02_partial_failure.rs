use ark::{Dashboard, DashboardConfig, FailurePolicy};
use ark_demos::common::{get_source, missing_sensor_key};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = get_source()?;

    let mut sensors = DashboardConfig::reference_sensors();
    sensors.push(ark::SensorSpec::new("conductivity", missing_sensor_key()));

    // Partial: the broken sensor is dropped and the rest still render.
    let dashboard = Dashboard::builder()
        .with_source(source.clone())
        .sensors(sensors.clone())
        .build()?;
    let report = dashboard.report().await?;

    println!("Rendered sensors:");
    for name in report.sensors() {
        println!("  {name}");
    }
    println!("Dropped sensors:");
    for w in &report.warnings {
        println!("  {} ({}): {}", w.sensor, w.source_key, w.error);
    }

    // Strict: the same configuration fails the whole request.
    let strict = Dashboard::builder()
        .with_source(source)
        .sensors(sensors)
        .failure_policy(FailurePolicy::Strict)
        .build()?;
    match strict.report().await {
        Ok(_) => println!("Strict policy: every sensor rendered"),
        Err(e) => println!("Strict policy: {e}"),
    }

    Ok(())
}
