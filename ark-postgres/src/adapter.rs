use std::fmt;
#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use tokio::task::JoinHandle;
use tokio_postgres::types::Type;
use tokio_postgres::{Client, NoTls, Row};

use ark_core::{ArkError, Sample};

use crate::PgConfig;

const PROVIDER: &str = "ark-postgres";

/// Table reader abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait PgTimeValues: Send + Sync {
    /// Read every `(time, value)` row of `table`, in storage order.
    async fn time_values(&self, table: &str) -> Result<Vec<Sample>, ArkError>;
}

/// Quote `name` as a PostgreSQL identifier.
///
/// The name is wrapped in double quotes and embedded double quotes are
/// doubled, so table names such as `CM_HAM_DO_AI1/Temp_value` are usable as-is
/// and cannot escape the identifier.
///
/// # Errors
/// Returns `ArkError::InvalidArg` if `name` is empty or contains a NUL byte.
pub fn quote_ident(name: &str) -> Result<String, ArkError> {
    if name.is_empty() {
        return Err(ArkError::InvalidArg("table name must not be empty".into()));
    }
    if name.contains('\0') {
        return Err(ArkError::InvalidArg(format!(
            "table name {name:?} contains a NUL byte"
        )));
    }
    Ok(format!("\"{}\"", name.replace('"', "\"\"")))
}

/// The statement used to read one sensor table.
///
/// # Errors
/// See [`quote_ident`].
pub fn time_value_query(table: &str) -> Result<String, ArkError> {
    Ok(format!("SELECT time, value FROM {}", quote_ident(table)?))
}

fn map_pg_err(e: &tokio_postgres::Error, context: &str) -> ArkError {
    let msg = e.as_db_error().map_or_else(|| e.to_string(), |db| db.message().to_string());
    ArkError::query(PROVIDER, format!("{context}: {msg}"))
}

/// Column types accepted in the `value` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueColumn {
    /// `double precision`
    Float8,
    /// `real`
    Float4,
    /// `bigint`
    Int8,
    /// `integer`
    Int4,
    /// `smallint`
    Int2,
}

impl ValueColumn {
    /// Map a PostgreSQL column type to a supported value column, if any.
    #[must_use]
    pub fn from_type(ty: &Type) -> Option<Self> {
        match *ty {
            Type::FLOAT8 => Some(Self::Float8),
            Type::FLOAT4 => Some(Self::Float4),
            Type::INT8 => Some(Self::Int8),
            Type::INT4 => Some(Self::Int4),
            Type::INT2 => Some(Self::Int2),
            _ => None,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn read(self, row: &Row, idx: usize) -> Result<Option<f64>, tokio_postgres::Error> {
        Ok(match self {
            Self::Float8 => row.try_get::<_, Option<f64>>(idx)?,
            Self::Float4 => row.try_get::<_, Option<f32>>(idx)?.map(f64::from),
            Self::Int8 => row.try_get::<_, Option<i64>>(idx)?.map(|v| v as f64),
            Self::Int4 => row.try_get::<_, Option<i32>>(idx)?.map(f64::from),
            Self::Int2 => row.try_get::<_, Option<i16>>(idx)?.map(f64::from),
        })
    }
}

/// Column types accepted in the `time` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeColumn {
    /// `timestamp without time zone`
    Timestamp,
    /// `timestamp with time zone`, read as UTC wall-clock time.
    TimestampTz,
}

impl TimeColumn {
    /// Map a PostgreSQL column type to a supported time column, if any.
    #[must_use]
    pub fn from_type(ty: &Type) -> Option<Self> {
        match *ty {
            Type::TIMESTAMP => Some(Self::Timestamp),
            Type::TIMESTAMPTZ => Some(Self::TimestampTz),
            _ => None,
        }
    }

    fn read(self, row: &Row, idx: usize) -> Result<NaiveDateTime, tokio_postgres::Error> {
        match self {
            Self::Timestamp => row.try_get::<_, NaiveDateTime>(idx),
            Self::TimestampTz => Ok(row.try_get::<_, DateTime<Utc>>(idx)?.naive_utc()),
        }
    }
}

fn decode_rows(table: &str, rows: &[Row]) -> Result<Vec<Sample>, ArkError> {
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };
    let columns = first.columns();
    let (Some(time_col), Some(value_col)) = (columns.first(), columns.get(1)) else {
        return Err(ArkError::Data(format!(
            "{table}: expected (time, value) columns, got {}",
            columns.len()
        )));
    };
    let time = TimeColumn::from_type(time_col.type_()).ok_or_else(|| {
        ArkError::Data(format!("{table}: unsupported time column type {}", time_col.type_()))
    })?;
    let value = ValueColumn::from_type(value_col.type_()).ok_or_else(|| {
        ArkError::Data(format!("{table}: unsupported value column type {}", value_col.type_()))
    })?;

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let ts = time
            .read(row, 0)
            .map_err(|e| ArkError::Data(format!("{table}: time: {e}")))?;
        let v = value
            .read(row, 1)
            .map_err(|e| ArkError::Data(format!("{table}: value: {e}")))?;
        // NULL readings carry no value to plot.
        if let Some(v) = v {
            out.push(Sample::new(ts, v));
        }
    }
    Ok(out)
}

/// Handle to a spawned connection driver.
///
/// Dropping the handle detaches the task; it keeps running until the
/// connection shuts down on its own.
struct DriverTask(JoinHandle<()>);

impl DriverTask {
    fn spawn<F, E>(connection: F) -> Self
    where
        F: Future<Output = Result<(), E>> + Send + 'static,
        E: fmt::Display + Send + 'static,
    {
        Self(tokio::spawn(async move {
            if let Err(_e) = connection.await {
                #[cfg(feature = "tracing")]
                tracing::error!(error = %_e, "postgres connection error");
            }
        }))
    }

    async fn join(self) {
        let _ = self.0.await;
    }
}

/// A client connection released when the guard goes out of scope.
///
/// Dropping the guard drops the client, after which the driver sends the
/// protocol terminate message and closes the socket. Every exit path,
/// including early returns with `?`, releases the connection; use
/// [`close`](Self::close) to also wait for the shutdown to finish.
pub struct ScopedConnection {
    client: Client,
    driver: DriverTask,
}

impl ScopedConnection {
    /// Open a connection and spawn its driver on the current Tokio runtime.
    ///
    /// # Errors
    /// Returns `ArkError::Query` if the server is unreachable or rejects the login.
    pub async fn open(config: &PgConfig) -> Result<Self, ArkError> {
        let (client, connection) = config
            .to_driver_config()
            .connect(NoTls)
            .await
            .map_err(|e| map_pg_err(&e, &format!("connect to {}:{}", config.host, config.port)))?;

        Ok(Self {
            client,
            driver: DriverTask::spawn(connection),
        })
    }

    /// The live client.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Drop the client and wait until the driver has closed the connection.
    pub async fn close(self) {
        let Self { client, driver } = self;
        drop(client);
        driver.join().await;
    }
}

/// Production adapter: one transient connection per table read.
#[derive(Clone)]
pub struct RealAdapter {
    config: PgConfig,
}

impl RealAdapter {
    /// Build an adapter that connects with `config`.
    #[must_use]
    pub const fn new(config: PgConfig) -> Self {
        Self { config }
    }

    /// Connection parameters in use.
    #[must_use]
    pub const fn config(&self) -> &PgConfig {
        &self.config
    }
}

#[async_trait]
impl PgTimeValues for RealAdapter {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "ark_postgres::time_values", skip(self))
    )]
    async fn time_values(&self, table: &str) -> Result<Vec<Sample>, ArkError> {
        let sql = time_value_query(table)?;
        let conn = ScopedConnection::open(&self.config).await?;
        let rows = conn
            .client()
            .query(sql.as_str(), &[])
            .await
            .map_err(|e| map_pg_err(&e, &format!("select from {table}")))?;
        conn.close().await;
        decode_rows(table, &rows)
    }
}

#[cfg(feature = "test-adapters")]
impl dyn PgTimeValues {
    /// Build a `PgTimeValues` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn PgTimeValues>
    where
        F: Send + Sync + 'static + Fn(&str) -> Result<Vec<Sample>, ArkError>,
    {
        struct FnRows<F>(F);
        #[async_trait]
        impl<F> PgTimeValues for FnRows<F>
        where
            F: Send + Sync + 'static + Fn(&str) -> Result<Vec<Sample>, ArkError>,
        {
            async fn time_values(&self, table: &str) -> Result<Vec<Sample>, ArkError> {
                (self.0)(table)
            }
        }
        Arc::new(FnRows(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ident_wraps_and_escapes() {
        assert_eq!(
            quote_ident("CM_HAM_DO_AI1/Temp_value").unwrap(),
            "\"CM_HAM_DO_AI1/Temp_value\""
        );
        assert_eq!(quote_ident("a\"b").unwrap(), "\"a\"\"b\"");
        assert_eq!(
            quote_ident("x\"; DROP TABLE t; --").unwrap(),
            "\"x\"\"; DROP TABLE t; --\""
        );
    }

    #[test]
    fn quote_ident_rejects_empty_and_nul() {
        assert!(matches!(quote_ident(""), Err(ArkError::InvalidArg(_))));
        assert!(matches!(quote_ident("a\0b"), Err(ArkError::InvalidArg(_))));
    }

    #[test]
    fn query_selects_time_and_value() {
        assert_eq!(
            time_value_query("CM_PRESSURE/Output").unwrap(),
            "SELECT time, value FROM \"CM_PRESSURE/Output\""
        );
    }

    #[test]
    fn supported_column_types() {
        assert_eq!(ValueColumn::from_type(&Type::FLOAT8), Some(ValueColumn::Float8));
        assert_eq!(ValueColumn::from_type(&Type::INT4), Some(ValueColumn::Int4));
        assert_eq!(ValueColumn::from_type(&Type::TEXT), None);
        assert_eq!(TimeColumn::from_type(&Type::TIMESTAMP), Some(TimeColumn::Timestamp));
        assert_eq!(TimeColumn::from_type(&Type::TIMESTAMPTZ), Some(TimeColumn::TimestampTz));
        assert_eq!(TimeColumn::from_type(&Type::DATE), None);
    }

    #[tokio::test]
    async fn dropping_the_driver_handle_does_not_cancel_shutdown() {
        let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();
        let (done_tx, done_rx) = tokio::sync::oneshot::channel::<()>();
        let driver = DriverTask::spawn(async move {
            let _ = release_rx.await;
            let _ = done_tx.send(());
            Ok::<(), fmt::Error>(())
        });

        drop(driver);
        release_tx.send(()).unwrap();
        assert!(done_rx.await.is_ok(), "driver task was cancelled");
    }

    #[tokio::test]
    async fn join_waits_for_the_driver_to_finish() {
        let (done_tx, mut done_rx) = tokio::sync::oneshot::channel::<()>();
        let driver = DriverTask::spawn(async move {
            tokio::task::yield_now().await;
            let _ = done_tx.send(());
            Err::<(), _>(fmt::Error)
        });

        driver.join().await;
        assert_eq!(done_rx.try_recv(), Ok(()));
    }

    #[test]
    fn no_rows_decode_to_empty_series() {
        assert_eq!(decode_rows("t", &[]), Ok(vec![]));
    }
}
