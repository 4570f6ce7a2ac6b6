use once_cell::sync::OnceCell;
use sqlx::PgPool;
use time::{OffsetDateTime, Time, UtcOffset};

use crate::domain::SolarMeasurement;

static LOCAL_OFFSET: OnceCell<UtcOffset> = OnceCell::new();

/// Resolve and cache the local UTC offset.
///
/// The `time` crate refuses to read the TZ database once the process is
/// multi-threaded, so this must run before the async runtime spawns worker
/// threads. Falls back to UTC when the offset cannot be determined; later
/// calls return the cached value.
pub fn init_local_offset() -> UtcOffset {
    *LOCAL_OFFSET.get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}

/// Current wall-clock time in the server's local offset.
///
/// Uses the offset cached by [`init_local_offset`]; without it, falls back to
/// a best-effort lookup and then UTC.
pub fn local_now() -> OffsetDateTime {
    let offset = LOCAL_OFFSET
        .get()
        .copied()
        .or_else(|| UtcOffset::current_local_offset().ok())
        .unwrap_or(UtcOffset::UTC);
    OffsetDateTime::now_utc().to_offset(offset)
}

/// Midnight of the calendar day containing `now`, in the same offset.
pub fn start_of_day(now: OffsetDateTime) -> OffsetDateTime {
    now.replace_time(Time::MIDNIGHT)
}

/// Fetch all measurements taken at or after `start`, oldest first.
///
/// Errors are returned to the caller unmodified; there is no retry and no
/// degraded result shape at this layer.
pub async fn measurements_since(
    pool: &PgPool,
    start: OffsetDateTime,
) -> Result<Vec<SolarMeasurement>, sqlx::Error> {
    sqlx::query_as::<_, SolarMeasurement>(MEASUREMENTS_SINCE_SQL)
        .bind(start)
        .fetch_all(pool)
        .await
}

// Same-day filtering and ascending order are carried by this SQL text.
const MEASUREMENTS_SINCE_SQL: &str = r#"
    SELECT
        id,
        "timestamp",
        "production_kWh",
        battery_percent,
        "grid_export_kWh"
    FROM solar_measurement
    WHERE "timestamp" >= $1
    ORDER BY "timestamp"
"#;

/// Fetch the measurements for the current calendar day (local midnight
/// onwards), oldest first. Returns an empty list when nothing matched.
pub async fn today_measurements(pool: &PgPool) -> Result<Vec<SolarMeasurement>, sqlx::Error> {
    measurements_since(pool, start_of_day(local_now())).await
}
