//! Reduction of 3-hourly forecast samples into per-day cards.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    model::{ForecastDay, ForecastSeries},
    time::local_date,
};

/// Number of upcoming days shown when nothing else is configured.
pub const DEFAULT_FORECAST_DAYS: usize = 3;

#[derive(Debug)]
struct DayAccumulator<'a> {
    temps: Vec<f64>,
    icon_code: &'a str,
    description: &'a str,
}

/// Groups samples by local calendar date and returns the `days` dates that
/// follow the first one.
///
/// Each sample contributes both its `temp_max` and `temp_min` to one pool per
/// date, and the day's extremes are taken over that pool. The icon and
/// description come from the last sample seen for the date.
pub fn aggregate(series: &ForecastSeries, days: usize) -> Vec<ForecastDay> {
    let mut by_date: BTreeMap<NaiveDate, DayAccumulator<'_>> = BTreeMap::new();

    for sample in &series.samples {
        let Some(date) = local_date(sample.timestamp, series.utc_offset) else {
            debug!(timestamp = sample.timestamp, "skipping unrepresentable forecast sample");
            continue;
        };

        let day = by_date.entry(date).or_insert_with(|| DayAccumulator {
            temps: Vec::new(),
            icon_code: &sample.icon_code,
            description: &sample.description,
        });
        day.temps.push(sample.temp_max);
        day.temps.push(sample.temp_min);
        day.icon_code = &sample.icon_code;
        day.description = &sample.description;
    }

    by_date
        .into_iter()
        .skip(1)
        .take(days)
        .map(|(date, day)| ForecastDay {
            date,
            max_temp: day.temps.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            min_temp: day.temps.iter().copied().fold(f64::INFINITY, f64::min),
            icon_code: day.icon_code.to_string(),
            description: day.description.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ForecastSample;

    // 2024-01-15T00:00:00Z
    const JAN_15: i64 = 1_705_276_800;
    const HOUR: i64 = 3600;
    const DAY: i64 = 24 * HOUR;

    fn sample(
        timestamp: i64,
        temp_max: f64,
        temp_min: f64,
        icon: &str,
        desc: &str,
    ) -> ForecastSample {
        ForecastSample {
            timestamp,
            temp_max,
            temp_min,
            icon_code: icon.to_string(),
            description: desc.to_string(),
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn four_dates_yield_three_days_after_today() {
        let series = ForecastSeries {
            utc_offset: 0,
            samples: (0..32)
                .map(|i| sample(JAN_15 + i * 3 * HOUR, 10.0, 5.0, "01d", "clear sky"))
                .collect(),
        };

        let days = aggregate(&series, DEFAULT_FORECAST_DAYS);

        let dates: Vec<_> = days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(16), date(17), date(18)]);
    }

    #[test]
    fn grouping_uses_location_offset() {
        // 20:00 UTC on the 15th is already the 16th at UTC+5:30.
        let series = ForecastSeries {
            utc_offset: 19_800,
            samples: vec![
                sample(JAN_15 + 12 * HOUR, 1.0, 1.0, "01d", "a"),
                sample(JAN_15 + 20 * HOUR, 2.0, 2.0, "01n", "b"),
            ],
        };

        let days = aggregate(&series, 3);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, date(16));
        assert_eq!(days[0].description, "b");
    }

    #[test]
    fn extremes_pool_max_and_min_readings() {
        let series = ForecastSeries {
            utc_offset: 0,
            samples: vec![
                sample(JAN_15, 0.0, 0.0, "01d", "today"),
                // temp_min above temp_max: the pool still yields 7 as the max.
                sample(JAN_15 + DAY, 3.0, 7.0, "04d", "odd"),
                sample(JAN_15 + DAY + 3 * HOUR, 5.0, 4.0, "04d", "odd"),
            ],
        };

        let days = aggregate(&series, 3);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].max_temp, 7.0);
        assert_eq!(days[0].min_temp, 3.0);
        assert!(days[0].min_temp <= days[0].max_temp);
    }

    #[test]
    fn representative_is_last_sample_of_the_day() {
        let series = ForecastSeries {
            utc_offset: 0,
            samples: vec![
                sample(JAN_15, 0.0, 0.0, "01d", "today"),
                sample(JAN_15 + DAY, 1.0, 1.0, "10d", "light rain"),
                sample(JAN_15 + DAY + 3 * HOUR, 1.0, 1.0, "10d", "light rain"),
                sample(JAN_15 + DAY + 6 * HOUR, 1.0, 1.0, "01d", "clear sky"),
            ],
        };

        let days = aggregate(&series, 3);
        // Rain dominates the day, but the last sample wins.
        assert_eq!(days[0].icon_code, "01d");
        assert_eq!(days[0].description, "clear sky");
    }

    #[test]
    fn unordered_samples_are_sorted_by_date() {
        let series = ForecastSeries {
            utc_offset: 0,
            samples: vec![
                sample(JAN_15 + 2 * DAY, 2.0, 2.0, "01d", "c"),
                sample(JAN_15, 0.0, 0.0, "01d", "a"),
                sample(JAN_15 + DAY, 1.0, 1.0, "01d", "b"),
            ],
        };

        let days = aggregate(&series, 3);
        let dates: Vec<_> = days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(16), date(17)]);
    }

    #[test]
    fn empty_or_single_day_series_has_no_cards() {
        assert!(aggregate(&ForecastSeries::default(), 3).is_empty());

        let series = ForecastSeries {
            utc_offset: 0,
            samples: vec![sample(JAN_15, 1.0, 0.0, "01d", "a")],
        };
        assert!(aggregate(&series, 3).is_empty());
    }
}
