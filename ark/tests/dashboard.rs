use std::sync::Arc;

use ark::{ArkError, Dashboard, DashboardConfig, FailurePolicy, Sample, ViewKind};
use ark_core::is_sorted_by_time;
use ark_mock::MockSource;
use chrono::{NaiveDate, NaiveDateTime};

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 4, 19)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn reference_dashboard() -> Dashboard {
    Dashboard::builder()
        .with_source(Arc::new(MockSource::new()))
        .sensors(DashboardConfig::reference_sensors())
        .build()
        .unwrap()
}

#[tokio::test]
async fn reference_plant_yields_four_keys_per_sensor() {
    let report = reference_dashboard().report().await.unwrap();
    assert!(report.warnings.is_empty());
    assert_eq!(report.context.len(), 16);
    for name in ["temperature", "ph", "oxygen", "pressure"] {
        for key in [
            format!("{name}_data"),
            format!("normalized_{name}_data"),
            format!("{name}_15_data"),
            format!("{name}_30_data"),
        ] {
            let series = report.context.get(&key).expect(&key);
            assert!(!series.is_empty(), "{key} is empty");
            assert!(is_sorted_by_time(series), "{key} is not sorted");
        }
    }
}

#[tokio::test]
async fn views_follow_configuration_order() {
    let report = reference_dashboard().report().await.unwrap();
    let names: Vec<&str> = report.sensors().collect();
    assert_eq!(names, vec!["temperature", "ph", "oxygen", "pressure"]);
}

#[tokio::test]
async fn out_of_order_source_rows_are_sorted() {
    let report = reference_dashboard().report().await.unwrap();
    let ph = report.context.view("ph", ViewKind::Raw).unwrap();
    assert_eq!(ph.len(), 8);
    assert!(is_sorted_by_time(ph));
    assert_eq!(ph[0].value, 7.02);
}

#[tokio::test]
async fn normalized_view_spans_unit_interval() {
    let report = reference_dashboard().report().await.unwrap();
    let temps = report.context.get("normalized_temperature_data").unwrap();
    assert_eq!(temps.first().map(|s| s.value), Some(0.0));
    assert_eq!(temps.last().map(|s| s.value), Some(1.0));
    assert!(temps.iter().all(|s| (0.0..=1.0).contains(&s.value)));
}

#[tokio::test]
async fn bucketed_views_hold_means_at_bucket_starts() {
    let report = reference_dashboard().report().await.unwrap();
    let pressure = report.context.get("pressure_15_data").unwrap();
    assert_eq!(
        pressure,
        &[
            Sample::new(at(5, 0), 1.013),
            Sample::new(at(5, 15), 1.015),
            Sample::new(at(5, 30), 1.011),
            Sample::new(at(5, 45), 1.017),
        ]
    );

    let oxygen = report.views_for("oxygen").unwrap();
    let half_hours = oxygen.bucketed(30).unwrap();
    assert_eq!(half_hours.len(), 2);
    assert_eq!(half_hours[0].ts, at(5, 0));
    // 6.8, 6.4, 6.6 and 7.1 fall into 05:00; the duplicate timestamp counts twice.
    assert!((half_hours[0].value - 6.725).abs() < 1e-9);
    assert_eq!(half_hours[1].ts, at(5, 30));
}

#[tokio::test]
async fn one_failing_sensor_is_dropped_and_the_rest_render() {
    let dashboard = Dashboard::builder()
        .with_source(Arc::new(MockSource::new()))
        .sensor("temperature", "CM_HAM_DO_AI1/Temp_value")
        .sensor("ph", "FAIL")
        .sensor("oxygen", "CM_PID_DO/Process_DO")
        .sensor("pressure", "CM_PRESSURE/Output")
        .build()
        .unwrap();

    let report = dashboard.report().await.unwrap();
    assert_eq!(report.context.len(), 12);
    assert!(report.context.keys().all(|k| !k.contains("ph")));
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].sensor, "ph");
    assert_eq!(report.warnings[0].source_key, "FAIL");
    assert!(matches!(report.warnings[0].error, ArkError::Query { .. }));
}

#[tokio::test]
async fn empty_and_flat_series_are_dropped() {
    let dashboard = Dashboard::builder()
        .with_source(Arc::new(MockSource::new()))
        .sensor("empty", "EMPTY")
        .sensor("flat", "FLAT")
        .sensor("pressure", "CM_PRESSURE/Output")
        .build()
        .unwrap();

    let report = dashboard.report().await.unwrap();
    assert_eq!(report.sensors().collect::<Vec<_>>(), vec!["pressure"]);
    let errors: Vec<&ArkError> = report.warnings.iter().map(|w| &w.error).collect();
    assert_eq!(
        errors,
        vec![&ArkError::EmptySeries, &ArkError::DegenerateRange { value: 5.0 }]
    );
}

#[tokio::test]
async fn every_sensor_failing_still_renders_an_empty_context() {
    let dashboard = Dashboard::builder()
        .with_source(Arc::new(MockSource::new()))
        .sensor("a", "FAIL")
        .sensor("b", "missing_table")
        .build()
        .unwrap();

    let ctx = dashboard.context().await.unwrap();
    assert!(ctx.is_empty());
}

#[tokio::test]
async fn strict_policy_aborts_on_first_failure() {
    let dashboard = Dashboard::builder()
        .with_source(Arc::new(MockSource::new()))
        .sensor("temperature", "CM_HAM_DO_AI1/Temp_value")
        .sensor("flat", "FLAT")
        .sensor("ph", "FAIL")
        .failure_policy(FailurePolicy::Strict)
        .build()
        .unwrap();

    let err = dashboard.report().await.unwrap_err();
    match &err {
        ArkError::SeriesFailed { sensor, error } => {
            assert_eq!(sensor, "flat");
            assert_eq!(**error, ArkError::DegenerateRange { value: 5.0 });
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn extra_intervals_add_keys() {
    let dashboard = Dashboard::builder()
        .with_source(Arc::new(MockSource::new()))
        .sensor("pressure", "CM_PRESSURE/Output")
        .intervals(&[5, 15, 60])
        .build()
        .unwrap();

    let ctx = dashboard.context().await.unwrap();
    let keys: Vec<&str> = ctx.keys().collect();
    assert_eq!(
        keys,
        vec![
            "normalized_pressure_data",
            "pressure_15_data",
            "pressure_5_data",
            "pressure_60_data",
            "pressure_data",
        ]
    );
    assert_eq!(ctx.get("pressure_60_data").unwrap().len(), 1);
}

#[tokio::test]
async fn context_serializes_as_flat_json_object() {
    let ctx = reference_dashboard().context().await.unwrap();
    let json = serde_json::to_value(&ctx).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 16);
    assert!(obj["temperature_15_data"].is_array());
}
