//! Forecast snapshot entity
//!
//! An ordered sequence of forecast points plus place metadata, produced by
//! the external forecast service and immutable once stored. Derived views
//! (local time, day/night, daily summaries) are computed on demand.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One point of the forecast series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Point-in-time, UTC epoch seconds
    pub timestamp_utc: i64,
    /// Temperature in the unit system the snapshot was fetched with
    pub temperature: f64,
    /// Apparent temperature
    pub feels_like: f64,
    /// Relative humidity in percent (0-100)
    pub humidity: u8,
    /// Surface pressure in hPa
    pub pressure: u32,
    /// Wind speed in meters per second
    pub wind_speed: f64,
    /// Wind direction in meteorological degrees, if reported
    pub wind_direction_degrees: Option<f64>,
    /// Provider weather condition code
    pub weather_code: u16,
    /// Localized condition description from the provider
    pub description: String,
}

/// Summary of one local-date bucket of forecast points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Local calendar date at the forecast place
    pub date: NaiveDate,
    /// Highest temperature across the day's points
    pub temperature_max: f64,
    /// Lowest temperature across the day's points
    pub temperature_min: f64,
    /// Representative condition code (the middle point of the day)
    pub weather_code: u16,
}

/// A full forecast for one place and unit system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    /// Forecast points in chronological order
    pub points: Vec<ForecastPoint>,
    /// Offset of the place's timezone from UTC, in seconds
    pub utc_offset_seconds: i32,
    /// Sunrise, UTC epoch seconds (0 if unreported)
    pub sunrise_utc: i64,
    /// Sunset, UTC epoch seconds (0 if unreported)
    pub sunset_utc: i64,
}

fn to_naive(timestamp: i64) -> NaiveDateTime {
    DateTime::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .naive_utc()
}

impl ForecastSnapshot {
    /// The nearest forecast point, i.e. current conditions
    #[must_use]
    pub fn current(&self) -> Option<&ForecastPoint> {
        self.points.first()
    }

    /// Convert a UTC epoch timestamp to the place's local wall-clock time
    #[must_use]
    pub fn local_datetime(&self, timestamp_utc: i64) -> NaiveDateTime {
        to_naive(timestamp_utc + i64::from(self.utc_offset_seconds))
    }

    /// Whether the given instant falls outside local daylight
    ///
    /// Compares local times of day only: an unreported sunrise or sunset
    /// degenerates to the instant itself, which biases toward daytime.
    #[must_use]
    pub fn is_night_at(&self, timestamp_utc: i64) -> bool {
        let local = self.local_datetime(timestamp_utc);
        let sunrise = if self.sunrise_utc > 0 {
            self.local_datetime(self.sunrise_utc)
        } else {
            local
        };
        let sunset = if self.sunset_utc > 0 {
            self.local_datetime(self.sunset_utc)
        } else {
            local
        };
        let is_day = sunrise.time() <= local.time() && local.time() <= sunset.time();
        !is_day
    }

    /// Whether current conditions fall outside local daylight
    #[must_use]
    pub fn is_night(&self) -> bool {
        self.current()
            .is_some_and(|point| self.is_night_at(point.timestamp_utc))
    }

    /// Group points by local calendar date into at most `max_days` summaries
    #[must_use]
    pub fn daily_summaries(&self, max_days: usize) -> Vec<DailySummary> {
        let mut buckets: BTreeMap<NaiveDate, Vec<&ForecastPoint>> = BTreeMap::new();
        for point in &self.points {
            let date = self.local_datetime(point.timestamp_utc).date();
            buckets.entry(date).or_default().push(point);
        }

        buckets
            .into_iter()
            .take(max_days)
            .map(|(date, points)| {
                let temperature_max = points
                    .iter()
                    .map(|p| p.temperature)
                    .fold(f64::NEG_INFINITY, f64::max);
                let temperature_min = points
                    .iter()
                    .map(|p| p.temperature)
                    .fold(f64::INFINITY, f64::min);
                let weather_code = points[points.len() / 2].weather_code;
                DailySummary {
                    date,
                    temperature_max,
                    temperature_min,
                    weather_code,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(timestamp_utc: i64, temperature: f64, weather_code: u16) -> ForecastPoint {
        ForecastPoint {
            timestamp_utc,
            temperature,
            feels_like: temperature - 1.0,
            humidity: 50,
            pressure: 1013,
            wind_speed: 3.0,
            wind_direction_degrees: Some(180.0),
            weather_code,
            description: "test".to_string(),
        }
    }

    // 2024-01-15 12:00:00 UTC
    const NOON: i64 = 1_705_320_000;

    fn snapshot_with_sun(points: Vec<ForecastPoint>) -> ForecastSnapshot {
        ForecastSnapshot {
            points,
            utc_offset_seconds: 0,
            sunrise_utc: NOON - 5 * 3600,
            sunset_utc: NOON + 5 * 3600,
        }
    }

    #[test]
    fn local_datetime_applies_offset() {
        let snap = ForecastSnapshot {
            points: vec![],
            utc_offset_seconds: 12_600, // UTC+3:30
            sunrise_utc: 0,
            sunset_utc: 0,
        };
        let local = snap.local_datetime(NOON);
        assert_eq!(local.format("%H:%M").to_string(), "15:30");
    }

    #[test]
    fn noon_is_day_midnight_is_night() {
        let snap = snapshot_with_sun(vec![point(NOON, 10.0, 800)]);
        assert!(!snap.is_night_at(NOON));
        assert!(snap.is_night_at(NOON + 12 * 3600));
        assert!(!snap.is_night());
    }

    #[test]
    fn missing_sun_times_bias_toward_day() {
        let snap = ForecastSnapshot {
            points: vec![point(NOON, 10.0, 800)],
            utc_offset_seconds: 0,
            sunrise_utc: 0,
            sunset_utc: 0,
        };
        assert!(!snap.is_night());
    }

    #[test]
    fn daily_summaries_group_by_local_date() {
        let day = 86_400;
        let snap = snapshot_with_sun(vec![
            point(NOON, 10.0, 800),
            point(NOON + 3 * 3600, 14.0, 801),
            point(NOON + 6 * 3600, 8.0, 500),
            point(NOON + day, 2.0, 600),
            point(NOON + day + 3 * 3600, 5.0, 600),
        ]);

        let summaries = snap.daily_summaries(5);
        assert_eq!(summaries.len(), 2);
        assert!((summaries[0].temperature_max - 14.0).abs() < f64::EPSILON);
        assert!((summaries[0].temperature_min - 8.0).abs() < f64::EPSILON);
        // Middle point of three is the representative code
        assert_eq!(summaries[0].weather_code, 801);
        assert_eq!(summaries[1].weather_code, 600);
    }

    #[test]
    fn daily_summaries_respect_max_days() {
        let day = 86_400;
        let points = (0..6).map(|i| point(NOON + i * day, 10.0, 800)).collect();
        let snap = snapshot_with_sun(points);
        assert_eq!(snap.daily_summaries(5).len(), 5);
    }

    #[test]
    fn timezone_offset_can_shift_the_date_bucket() {
        // 23:00 UTC with UTC+2 lands on the next local date
        let late = NOON + 11 * 3600;
        let snap = ForecastSnapshot {
            points: vec![point(NOON, 10.0, 800), point(late, 4.0, 500)],
            utc_offset_seconds: 7_200,
            sunrise_utc: 0,
            sunset_utc: 0,
        };
        let summaries = snap.daily_summaries(5);
        assert_eq!(summaries.len(), 2);
    }
}
