use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use regex::Captures;

/// The "current time" a parse is anchored against.
///
/// Observation-time and issue-time reconstruction (day-of-month + HH:MM)
/// needs a reference instant to resolve which month the report belongs to.
/// That instant is always passed in explicitly rather than read from the
/// system clock inside a decoder, so parsing stays deterministic and
/// testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock(DateTime<Utc>);

impl Clock {
    /// Anchors a clock to a specific UTC instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Anchors a clock to the system's current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// The anchored instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    pub(crate) fn year(&self) -> i32 {
        self.0.year()
    }

    pub(crate) fn month(&self) -> u32 {
        self.0.month()
    }

    pub(crate) fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Default for Clock {
    /// Defaults to the system clock, as most callers want.
    fn default() -> Self {
        Self::now()
    }
}

/// Builds a [`Clock`] from an `EXTERNAL_TIMESTAMP` match (`YYYY/MM/DD
/// HH:MM`), if the header carried one.
///
/// This external prefix *overrides* the caller-supplied clock for
/// day-of-month/HH:MM reconstruction, rather than merely being skipped
/// over. Returns `None` if the captured fields don't form a valid date
/// (which the pattern's digit-only groups make unlikely in practice).
pub fn from_external_timestamp(caps: &Captures) -> Option<Clock> {
    let year: i32 = caps["year"].parse().ok()?;
    let month: u32 = caps["month"].parse().ok()?;
    let day: u32 = caps["day"].parse().ok()?;
    let hour: u32 = caps["hour"].parse().ok()?;
    let minute: u32 = caps["minute"].parse().ok()?;
    build(year, month, day, hour, minute).map(Clock::at)
}

/// Reconstructs an absolute UTC instant from a day-of-month and an HH:MM
/// time, against a reference clock.
///
/// Tries the reference clock's own month first. That candidate is accepted
/// only when it does not lie in the future relative to the clock *and* the
/// clock's own day-of-month is not earlier than `day` (earlier would mean
/// the report is from the tail of the previous month); failing either
/// check, the candidate rolls back a month, wrapping the year at the
/// January boundary. Once rolled back, only the future check still
/// applies — the day-of-month comparison only ever distinguishes "this
/// month" from "not this month", a decision already made by reaching the
/// rollback loop.
///
/// `hour == 24` is accepted as a synonym for `00:00` the following day,
/// used by TAF validity/period boundaries that reuse this reconstruction.
pub fn reconstruct(clock: &Clock, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    let (hour, day_offset) = if hour >= 24 { (hour - 24, 1) } else { (hour, 0) };

    let mut year = clock.year();
    let mut month = clock.month();

    if let Some(dt) = build(year, month, day, hour, minute) {
        let dt = dt + chrono::Duration::days(day_offset);
        if dt <= clock.instant() && clock.day() >= day {
            return dt;
        }
    }

    loop {
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
        if let Some(dt) = build(year, month, day, hour, minute) {
            let dt = dt + chrono::Duration::days(day_offset);
            if dt <= clock.instant() {
                return dt;
            }
        }
        // Guard against a pathological (day, hour, minute) that never
        // constructs a valid date; bail out after a full year of rollback.
        if year <= clock.year() - 2 {
            return build(clock.year(), clock.month(), day, hour, minute)
                .map(|dt| dt + chrono::Duration::days(day_offset))
                .unwrap_or(clock.instant());
        }
    }
}

fn build(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
}

/// Resolves a TAF-internal day/hour/minute field against a running
/// `(year, month)` anchor, rolling the anchor forward a month whenever the
/// day number decreases relative to the last field resolved (the report has
/// crossed a month boundary partway through its validity period or change
/// groups). Returns the resolved instant together with the anchor to pass
/// into the next call.
pub fn resolve_taf_field(
    anchor_year: i32,
    anchor_month: u32,
    last_day: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> (DateTime<Utc>, i32, u32, u32) {
    let (mut year, mut month) = (anchor_year, anchor_month);
    if day < last_day {
        if month == 12 {
            month = 1;
            year += 1;
        } else {
            month += 1;
        }
    }
    let (hour, day_offset) = if hour >= 24 { (0, 1) } else { (hour, 0) };
    let dt = build(year, month, day, hour, minute)
        .unwrap_or_else(|| Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap())
        + chrono::Duration::days(day_offset);
    (dt, year, month, day)
}

/// Resolves a `DDHH` time field where `HH == 24` means next-day `00:00`,
/// anchored to a given (year, month) pair already known from context (the
/// TAF validity period's own issue month, not re-derived per field).
pub fn resolve_dd_hh(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    let (hour, day_offset) = if hour >= 24 { (0, 1) } else { (hour, 0) };
    let base = build(year, month, day, hour, 0).unwrap_or_else(|| {
        Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap()
    });
    base + chrono::Duration::days(day_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(y: i32, m: u32, d: u32, h: u32, mi: u32) -> Clock {
        Clock::at(Utc.with_ymd_and_hms(y, m, d, h, mi, 0).unwrap())
    }

    #[test]
    fn same_month_past_instant() {
        let c = clock(2025, 6, 25, 16, 55);
        let t = reconstruct(&c, 25, 16, 51);
        assert_eq!(t, Utc.with_ymd_and_hms(2025, 6, 25, 16, 51, 0).unwrap());
    }

    #[test]
    fn future_instant_rolls_back_a_month() {
        let c = clock(2025, 6, 5, 0, 10);
        let t = reconstruct(&c, 25, 16, 51);
        assert_eq!(t, Utc.with_ymd_and_hms(2025, 5, 25, 16, 51, 0).unwrap());
    }

    #[test]
    fn january_rollback_wraps_year() {
        let c = clock(2025, 1, 5, 0, 10);
        let t = reconstruct(&c, 28, 12, 0);
        assert_eq!(t, Utc.with_ymd_and_hms(2024, 12, 28, 12, 0, 0).unwrap());
    }

    #[test]
    fn taf_field_rolls_forward_on_day_decrease() {
        let (dt, year, month, day) = resolve_taf_field(2025, 6, 30, 1, 6, 0);
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 7, 1, 6, 0, 0).unwrap());
        assert_eq!((year, month, day), (2025, 7, 1));
    }

    #[test]
    fn taf_field_december_rollover_wraps_year() {
        let (dt, year, month, day) = resolve_taf_field(2025, 12, 31, 1, 0, 0);
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        assert_eq!((year, month, day), (2026, 1, 1));
    }

    #[test]
    fn hour_24_is_next_day_midnight() {
        let t = resolve_dd_hh(2025, 6, 15, 24);
        assert_eq!(t, Utc.with_ymd_and_hms(2025, 6, 16, 0, 0, 0).unwrap());
    }

    #[test]
    fn external_timestamp_overrides_clock() {
        let caps = crate::patterns::EXTERNAL_TIMESTAMP
            .captures("2025/12/15 20:57 ")
            .unwrap();
        let c = from_external_timestamp(&caps).unwrap();
        assert_eq!(c.instant(), Utc.with_ymd_and_hms(2025, 12, 15, 20, 57, 0).unwrap());
    }
}
