//! Timestamp text form.
//!
//! Dates travel as ISO-8601 strings in UTC with millisecond precision and a `Z`
//! suffix, e.g. `2024-01-01T00:00:00.000Z`. Sub-millisecond precision is
//! truncated on the way out. Years outside `0000..=9999` use the expanded
//! form: a sign and six digits, e.g. `+010000-01-01T00:00:00.000Z` or
//! `-000001-01-01T00:00:00.000Z`.

use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, SubsecRound, Utc,
};

/// Formats a timestamp in its canonical text form.
pub(crate) fn to_iso_string(dt: &DateTime<Utc>) -> String {
    let dt = dt.trunc_subsecs(3);
    let year = dt.year();
    if (0..=9999).contains(&year) {
        return dt.to_rfc3339_opts(SecondsFormat::Millis, true);
    }

    let sign = if year < 0 { '-' } else { '+' };
    format!(
        "{}{:06}-{}",
        sign,
        year.unsigned_abs(),
        dt.format("%m-%dT%H:%M:%S%.3fZ")
    )
}

/// Parses an ISO-8601 timestamp.
///
/// Accepts RFC 3339 with any offset, a date-time with no offset (read as UTC),
/// and a bare `YYYY-MM-DD` date (midnight UTC). Each form may also carry a
/// signed year of four to six digits, which covers both the expanded form and
/// what `chrono` prints for out-of-range years (`+10000`, `-0001`).
pub(crate) fn parse_iso_string(s: &str) -> Result<DateTime<Utc>, String> {
    let s = s.trim();
    match split_signed_year(s) {
        // The rest is parsed against a leap year so that 29 February survives
        // until the real year is applied.
        Some((year, rest)) => parse_with_year(&format!("2000{}", rest), Some(year)),
        None => parse_with_year(s, None),
    }
}

/// Splits `±YYYYYY-...` into the year and the `-...` remainder.
fn split_signed_year(s: &str) -> Option<(i32, &str)> {
    let negative = match s.as_bytes().first()? {
        b'+' => false,
        b'-' => true,
        _ => return None,
    };
    let body = &s[1..];
    let end = body.find('-')?;
    let digits = &body[..end];
    if !(4..=6).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = digits.parse().ok()?;
    Some((if negative { -year } else { year }, &body[end..]))
}

fn parse_with_year(s: &str, year: Option<i32>) -> Result<DateTime<Utc>, String> {
    let rfc3339_err = match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => return with_year(dt, year).map(|dt| dt.with_timezone(&Utc)),
        Err(e) => e,
    };

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return with_year(naive, year).map(|naive| naive.and_utc());
    }

    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(date) => with_year(date, year).map(|date| date.and_time(NaiveTime::MIN).and_utc()),
        Err(_) => Err(rfc3339_err.to_string()),
    }
}

fn with_year<T: Datelike>(value: T, year: Option<i32>) -> Result<T, String> {
    match year {
        None => Ok(value),
        Some(year) => value
            .with_year(year)
            .ok_or_else(|| format!("date does not exist in year {}", year)),
    }
}

/// Builds a timestamp from milliseconds since the Unix epoch.
pub(crate) fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_canonical_form() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(to_iso_string(&dt), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_sub_millisecond_precision_is_truncated() {
        let dt = Utc
            .with_ymd_and_hms(2024, 6, 30, 12, 34, 56)
            .unwrap()
            .with_nanosecond(123_987_654)
            .unwrap();
        assert_eq!(to_iso_string(&dt), "2024-06-30T12:34:56.123Z");
    }

    #[test]
    fn test_parse_offsets_normalize_to_utc() {
        let dt = parse_iso_string("2024-01-01T02:00:00.000+02:00").unwrap();
        assert_eq!(to_iso_string(&dt), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_parse_date_only_and_naive() {
        let date_only = parse_iso_string("2024-03-15").unwrap();
        assert_eq!(to_iso_string(&date_only), "2024-03-15T00:00:00.000Z");

        let naive = parse_iso_string("2024-03-15T08:30:00").unwrap();
        assert_eq!(to_iso_string(&naive), "2024-03-15T08:30:00.000Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_iso_string("yesterday").is_err());
        assert!(parse_iso_string("").is_err());
        assert!(parse_iso_string("2024-13-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_out_of_range_years_use_expanded_form() {
        let far = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(to_iso_string(&far), "+010000-01-01T00:00:00.000Z");

        let bce = Utc.with_ymd_and_hms(-1, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(to_iso_string(&bce), "-000001-06-15T12:00:00.000Z");

        let year_zero = Utc.with_ymd_and_hms(0, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(to_iso_string(&year_zero), "0000-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_parse_expanded_years() {
        let far = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_iso_string("+010000-01-01T00:00:00.000Z").unwrap(), far);
        assert_eq!(parse_iso_string("+10000-01-01T00:00:00.000Z").unwrap(), far);

        let bce = Utc.with_ymd_and_hms(-1, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(parse_iso_string("-000001-06-15T12:00:00.000Z").unwrap(), bce);
        assert_eq!(parse_iso_string("-0001-06-15T12:00:00.000Z").unwrap(), bce);
        assert_eq!(
            parse_iso_string("-000001-06-15").unwrap(),
            Utc.with_ymd_and_hms(-1, 6, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_expanded_year_offsets_and_leap_days() {
        // The offset may move the instant across a year boundary.
        let dt = parse_iso_string("+010000-01-01T01:00:00.000+02:00").unwrap();
        assert_eq!(to_iso_string(&dt), "9999-12-31T23:00:00.000Z");

        let leap = parse_iso_string("+010000-02-29T00:00:00.000Z").unwrap();
        assert_eq!(leap.month(), 2);
        assert_eq!(leap.day(), 29);
        assert!(parse_iso_string("+010001-02-29T00:00:00.000Z").is_err());
    }

    #[test]
    fn test_extreme_years_round_trip() {
        for dt in [DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC] {
            let dt = dt.trunc_subsecs(3);
            assert_eq!(parse_iso_string(&to_iso_string(&dt)).unwrap(), dt);
        }
    }

    #[test]
    fn test_epoch_millis() {
        let dt = from_epoch_millis(1_704_067_200_000).unwrap();
        assert_eq!(to_iso_string(&dt), "2024-01-01T00:00:00.000Z");
    }
}
