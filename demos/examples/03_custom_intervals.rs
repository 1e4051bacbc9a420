use ark::{Dashboard, DashboardConfig, ViewKind};
use ark_demos::common::get_source;

const CONFIG: &str = r#"{
    "sensors": [
        {"name": "temperature", "source_key": "CM_HAM_DO_AI1/Temp_value"},
        {"name": "pressure", "source_key": "CM_PRESSURE/Output"}
    ],
    "intervals": [5, 15, 60]
}"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = DashboardConfig::from_json(CONFIG)?;
    let intervals = cfg.intervals.clone();

    let dashboard = Dashboard::builder()
        .with_source(get_source()?)
        .config(cfg)
        .build()?;
    let report = dashboard.report().await?;

    for (name, views) in &report.views {
        println!("{name}: {} raw readings", views.raw.len());
        for kind in ViewKind::all_for(&intervals) {
            let n = report.context.view(name, kind).map_or(0, <[_]>::len);
            println!("  {:<14} {:>3} points  ({})", kind.to_string(), n, kind.context_key(name));
        }
    }

    Ok(())
}
