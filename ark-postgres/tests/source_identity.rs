use ark_core::SeriesSource;
use ark_postgres::{PgConfig, PgSource, quote_ident};

#[test]
fn source_identity() {
    let pg = PgSource::new(PgConfig::default());
    assert_eq!(pg.name(), "ark-postgres");
    assert_eq!(pg.vendor(), "PostgreSQL");
    assert_eq!(pg.key(), PgSource::KEY);
}

#[test]
fn reference_tables_quote_cleanly() {
    for table in [
        "CM_HAM_DO_AI1/Temp_value",
        "CM_HAM_PH_AI1/pH_value",
        "CM_PID_DO/Process_DO",
        "CM_PRESSURE/Output",
    ] {
        let q = quote_ident(table).unwrap();
        assert_eq!(q, format!("\"{table}\""));
    }
}

#[tokio::test]
async fn invalid_table_name_fails_before_connecting() {
    let pg = PgSource::new(PgConfig {
        host: "unreachable.invalid".into(),
        ..PgConfig::default()
    });
    let err = pg.fetch("").await.unwrap_err();
    assert!(matches!(err, ark_core::ArkError::InvalidArg(_)));
}
