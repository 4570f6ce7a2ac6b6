use serde::Serialize;
use time::OffsetDateTime;

/// One stored sensor reading from the solar installation.
///
/// Rows are written by an external ingestion process; this crate only reads
/// them. The mixed-case `production_kWh` / `grid_export_kWh` identifiers come
/// from the existing table and are preserved on the JSON surface.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SolarMeasurement {
    pub id: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(rename = "production_kWh")]
    #[sqlx(rename = "production_kWh")]
    pub production_kwh: f64,
    pub battery_percent: f64,
    #[serde(rename = "grid_export_kWh")]
    #[sqlx(rename = "grid_export_kWh")]
    pub grid_export_kwh: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn serializes_with_table_field_names() {
        let m = SolarMeasurement {
            id: 7,
            timestamp: datetime!(2024-01-01 08:00:00 UTC),
            production_kwh: 2.5,
            battery_percent: 80.0,
            grid_export_kwh: 0.3,
        };

        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["id"], 7);
        assert_eq!(v["timestamp"], "2024-01-01T08:00:00Z");
        assert_eq!(v["production_kWh"], 2.5);
        assert_eq!(v["battery_percent"], 80.0);
        assert_eq!(v["grid_export_kWh"], 0.3);
    }
}
