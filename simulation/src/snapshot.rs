//! Snapshot projection
//!
//! Read-only display views of the simulation, serialized with the field names
//! the dashboard clients expect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::components::{CountryRecord, Trend};

/// Decimal places kept for the displayed change percent
pub const CHANGE_PRECISION: i32 = 3;

// ============================================================================
// Views
// ============================================================================

/// One country as shown on the globe and the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryView {
    pub code: String,
    pub iso2: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub population: u64,
    pub trend: Trend,
    /// Percent change, rounded for display
    pub change: f64,
    pub color: String,
}

impl From<&CountryRecord> for CountryView {
    fn from(record: &CountryRecord) -> Self {
        Self {
            code: record.country.code.clone(),
            iso2: record.country.iso2.clone(),
            name: record.country.name.clone(),
            lat: record.country.lat,
            lng: record.country.lng,
            population: record.population,
            trend: record.trend,
            change: round_to(record.change_percent, CHANGE_PRECISION),
            color: record.trend.color().to_string(),
        }
    }
}

/// Timestamped projection of every record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
    pub countries: Vec<CountryView>,
}

impl Snapshot {
    pub fn country(&self, code: &str) -> Option<&CountryView> {
        self.countries.iter().find(|c| c.code == code)
    }

    pub fn total_population(&self) -> u64 {
        self.countries.iter().map(|c| c.population).fold(0u64, u64::saturating_add)
    }
}

/// Project records without touching them
pub fn project(records: &[CountryRecord], updated_at: DateTime<Utc>) -> Snapshot {
    Snapshot {
        updated_at,
        countries: records.iter().map(CountryView::from).collect(),
    }
}

pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round() / factor;
    // Avoid rendering -0.0 for tiny negative changes
    if rounded == 0.0 { 0.0 } else { rounded }
}

// ============================================================================
// Timestamp format
// ============================================================================

/// RFC 3339 in UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Country;
    use chrono::TimeZone;

    fn sample_record() -> CountryRecord {
        CountryRecord {
            country: Country::new("BRA", "BR", "Brazil", -14.235, -51.9253),
            population: 214_000_123,
            previous_population: 213_993_437,
            trend: Trend::Up,
            change_percent: 0.0031245,
        }
    }

    #[test]
    fn test_view_fields() {
        let view = CountryView::from(&sample_record());
        assert_eq!(view.code, "BRA");
        assert_eq!(view.iso2, "BR");
        assert_eq!(view.population, 214_000_123);
        assert_eq!(view.trend, Trend::Up);
        assert_eq!(view.change, 0.003);
        assert_eq!(view.color, "#2e7d32");
    }

    #[test]
    fn test_projection_is_idempotent() {
        let records = vec![sample_record()];
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let first = project(&records, at);
        let second = project(&records, at);
        assert_eq!(first, second);
        assert_eq!(records[0], sample_record());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.0124999, 3), 0.012);
        assert_eq!(round_to(-0.0456, 3), -0.046);
        assert_eq!(round_to(-0.0001, 3), 0.0);
        assert!(round_to(-0.0001, 3).is_sign_positive());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let snapshot = project(&[sample_record()], at);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["updatedAt"], "2024-05-01T12:00:00.000Z");
        let country = &json["countries"][0];
        assert_eq!(country["code"], "BRA");
        assert_eq!(country["trend"], "up");
        assert_eq!(country["population"], 214_000_123u64);
        assert_eq!(country["color"], "#2e7d32");
        assert!(country.get("previous_population").is_none());

        let parsed: Snapshot = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.updated_at, at);
        assert_eq!(parsed.total_population(), 214_000_123);
        assert!(parsed.country("BRA").is_some());
    }
}
