//! Calendar day and week keys.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Display and parse format for [`DayKey`], e.g. `05-03-2024`.
pub const DAY_KEY_FORMAT: &str = "%d-%m-%Y";

/// A local calendar day used to bucket work time.
///
/// Ordering follows the calendar, not the string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Localizes a Unix timestamp into `tz` and takes its calendar date.
    ///
    /// Returns `None` if the timestamp is outside the representable range.
    pub fn from_timestamp<Tz: TimeZone>(secs: i64, tz: &Tz) -> Option<Self> {
        tz.timestamp_opt(secs, 0)
            .single()
            .map(|dt| Self(dt.date_naive()))
    }

    /// The current calendar day in `tz`.
    pub fn today<Tz: TimeZone>(tz: &Tz) -> Self {
        Self(Utc::now().with_timezone(tz).date_naive())
    }

    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Monday of the week containing this day.
    ///
    /// Clamped to [`NaiveDate::MIN`] for the partial week at the start of the
    /// calendar range.
    #[must_use]
    pub fn week_start(self) -> NaiveDate {
        let days_since_monday = self.0.weekday().num_days_from_monday();
        self.0
            .checked_sub_signed(Duration::days(i64::from(days_since_monday)))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DAY_KEY_FORMAT).map(Self)
    }
}

impl Serialize for DayKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn display_uses_day_month_year() {
        assert_eq!(DayKey::new(date(2024, 3, 5)).to_string(), "05-03-2024");
    }

    #[test]
    fn parses_display_form() {
        let key: DayKey = "05-03-2024".parse().unwrap();
        assert_eq!(key.date(), date(2024, 3, 5));
        assert!("2024-03-05".parse::<DayKey>().is_err());
    }

    #[test]
    fn same_local_day_maps_to_same_key() {
        let morning = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 1).unwrap().timestamp();
        let night = Utc.with_ymd_and_hms(2024, 3, 5, 23, 59, 59).unwrap().timestamp();

        assert_eq!(
            DayKey::from_timestamp(morning, &Utc),
            DayKey::from_timestamp(night, &Utc)
        );
    }

    #[test]
    fn timezone_moves_day_boundary() {
        // 02:00 UTC on the 5th is still the 4th in UTC-5.
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 2, 0, 0).unwrap().timestamp();
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();

        assert_eq!(
            DayKey::from_timestamp(ts, &Utc).unwrap().date(),
            date(2024, 3, 5)
        );
        assert_eq!(
            DayKey::from_timestamp(ts, &eastern).unwrap().date(),
            date(2024, 3, 4)
        );
    }

    #[test]
    fn named_zone_day_boundary() {
        let ts = Utc.with_ymd_and_hms(2024, 7, 1, 23, 30, 0).unwrap().timestamp();
        let key = DayKey::from_timestamp(ts, &chrono_tz::Europe::Berlin).unwrap();
        assert_eq!(key.date(), date(2024, 7, 2));
    }

    #[test]
    fn out_of_range_timestamp_has_no_day() {
        assert_eq!(DayKey::from_timestamp(i64::MAX, &Utc), None);
    }

    #[test]
    fn week_start_is_monday() {
        // Mar 4, 2024 is a Monday.
        let monday = date(2024, 3, 4);
        for offset in 0..7 {
            let day = DayKey::new(monday + Duration::days(offset));
            assert_eq!(day.week_start(), monday, "offset {offset}");
        }
        assert_eq!(DayKey::new(date(2024, 3, 11)).week_start(), date(2024, 3, 11));
    }

    #[test]
    fn week_start_clamps_at_calendar_minimum() {
        // NaiveDate::MIN is a Thursday; its Monday is not representable.
        for offset in 0..4 {
            let day = DayKey::new(NaiveDate::MIN + Duration::days(offset));
            assert_eq!(day.week_start(), NaiveDate::MIN, "offset {offset}");
        }
        let next_monday = NaiveDate::MIN + Duration::days(4);
        assert_eq!(DayKey::new(next_monday).week_start(), next_monday);
    }

    #[test]
    fn ordering_is_calendar_order() {
        let a: DayKey = "31-01-2024".parse().unwrap();
        let b: DayKey = "01-02-2024".parse().unwrap();
        assert!(a < b);
    }

    #[test]
    fn serde_uses_display_form() {
        let key = DayKey::new(date(2024, 3, 5));
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"05-03-2024\"");
        let parsed: DayKey = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, key);
    }
}
