#![cfg(feature = "test-adapters")]

use std::sync::{Arc, Mutex};

use ark_core::{ArkError, Sample, SeriesSource};
use ark_postgres::{PgSource, adapter};
use chrono::NaiveDate;

fn reading(m: u32, v: f64) -> Sample {
    Sample::new(
        NaiveDate::from_ymd_opt(2023, 4, 19)
            .unwrap()
            .and_hms_opt(5, m, 0)
            .unwrap(),
        v,
    )
}

#[tokio::test]
async fn fetch_uses_injected_adapter() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let log = Arc::clone(&seen);
    let rows = <dyn adapter::PgTimeValues>::from_fn(move |table| {
        log.lock().unwrap().push(table.to_string());
        Ok(vec![reading(10, 7.1), reading(5, 7.0)])
    });

    let pg = PgSource::from_adapter(rows);
    let out = pg.fetch("CM_HAM_PH_AI1/pH_value").await.unwrap();

    assert_eq!(out, vec![reading(10, 7.1), reading(5, 7.0)]);
    assert_eq!(*seen.lock().unwrap(), vec!["CM_HAM_PH_AI1/pH_value"]);
}

#[tokio::test]
async fn missing_table_maps_to_query_error_naming_the_key() {
    let rows = <dyn adapter::PgTimeValues>::from_fn(|_| {
        Err(ArkError::query(
            "ark-postgres",
            "select from CM_X: relation \"CM_X\" does not exist",
        ))
    });

    let err = PgSource::from_adapter(rows).fetch("CM_X").await.unwrap_err();
    match err {
        ArkError::Query { provider, msg } => {
            assert_eq!(provider, "ark-postgres");
            assert!(msg.contains("CM_X"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn query_errors_are_retagged_with_source_name() {
    let rows = <dyn adapter::PgTimeValues>::from_fn(|_| {
        Err(ArkError::query("driver", "connection refused"))
    });

    let err = PgSource::from_adapter(rows).fetch("t").await.unwrap_err();
    assert_eq!(err, ArkError::query("ark-postgres", "connection refused"));
}

#[tokio::test]
async fn data_errors_pass_through() {
    let rows = <dyn adapter::PgTimeValues>::from_fn(|_| {
        Err(ArkError::Data("t: unsupported value column type text".into()))
    });

    let err = PgSource::from_adapter(rows).fetch("t").await.unwrap_err();
    assert!(matches!(err, ArkError::Data(_)));
}
