//! End-date normalization for booking periods.
//!
//! ## Summary
//! A single booking never carries an end date. A recurring booking without
//! one gets a default span long enough to show a handful of occurrences:
//! one week for daily bookings, five occurrences for weekly ones and seven
//! for monthly ones.

use chrono::{Days, Months, NaiveDate, NaiveDateTime, Timelike};
use roombook_core::types::{BookingFilters, Recurrence, RecurrenceInterval, RecurrenceType};

/// Default span of a daily booking, in weeks.
const DAILY_SPAN_WEEKS: u64 = 1;
/// Repeat periods spanned by a weekly booking (5 occurrences).
const WEEKLY_SPAN_PERIODS: u64 = 4;
/// Repeat periods spanned by a monthly booking (7 occurrences).
const MONTHLY_SPAN_PERIODS: u32 = 6;

/// ## Summary
/// Normalizes `filters.dates.end_date` according to `filters.recurrence`.
///
/// Clears the end date of single bookings and fills in a default end date
/// for recurring bookings that have a start date but no end date. Anything
/// else, including unrecognized recurrence types, is left untouched.
///
/// ## Side Effects
/// Mutates `filters.dates` in place. Calling it again is a no-op.
pub fn sanitize_recurrence(filters: &mut BookingFilters) {
    let BookingFilters {
        dates, recurrence, ..
    } = filters;

    match (&recurrence.kind, dates.start_date, dates.end_date) {
        (RecurrenceType::Single, _, Some(end_date)) => {
            tracing::debug!(%end_date, "Clearing end date of single booking");
            dates.end_date = None;
        }
        (RecurrenceType::Daily | RecurrenceType::Every, Some(start_date), None) => {
            dates.end_date = default_end_date(start_date, recurrence);
            tracing::debug!(
                %start_date,
                end_date = ?dates.end_date,
                recurrence = %recurrence.kind,
                number = recurrence.number,
                interval = recurrence.interval.as_str(),
                "Computed default end date"
            );
        }
        (kind, start_date, end_date) => {
            tracing::trace!(
                recurrence = %kind,
                ?start_date,
                ?end_date,
                "Booking period left untouched"
            );
        }
    }
}

/// ## Summary
/// Computes the default end date of a recurring booking starting on `start`.
///
/// Month arithmetic clamps to the last day of shorter months
/// (`2024-08-31` + 6 months is `2025-02-28`).
///
/// Returns `None` if the span leaves chrono's supported date range.
#[must_use]
pub fn default_end_date(start: NaiveDate, recurrence: &Recurrence) -> Option<NaiveDate> {
    if recurrence.kind == RecurrenceType::Daily {
        return start.checked_add_days(Days::new(7 * DAILY_SPAN_WEEKS));
    }

    match recurrence.interval {
        RecurrenceInterval::Week => start.checked_add_days(Days::new(
            7 * WEEKLY_SPAN_PERIODS * u64::from(recurrence.number),
        )),
        RecurrenceInterval::Month => start.checked_add_months(Months::new(
            MONTHLY_SPAN_PERIODS.checked_mul(recurrence.number)?,
        )),
    }
}

/// ## Summary
/// Switches the recurrence type of a booking being edited.
///
/// Moving to a recurring type after the booking has started pins the start
/// date back to the original start. Moving to a single booking picks today,
/// or tomorrow if the original start time has already passed. The period is
/// then run through [`sanitize_recurrence`].
///
/// ## Side Effects
/// Mutates `filters.recurrence.kind` and `filters.dates`.
pub fn change_recurrence_type(
    filters: &mut BookingFilters,
    new_type: RecurrenceType,
    booking_start: NaiveDateTime,
    now: NaiveDateTime,
) {
    match new_type {
        RecurrenceType::Daily | RecurrenceType::Every if now.date() > booking_start.date() => {
            filters.dates.start_date = Some(booking_start.date());
        }
        RecurrenceType::Single => {
            let today = now.date();
            filters.dates.start_date = if floor_to_minute(now) > floor_to_minute(booking_start) {
                today.succ_opt()
            } else {
                Some(today)
            };
        }
        _ => {}
    }

    tracing::debug!(
        from = %filters.recurrence.kind,
        to = %new_type,
        start_date = ?filters.dates.start_date,
        "Changing recurrence type"
    );
    filters.recurrence.kind = new_type;
    sanitize_recurrence(filters);
}

fn floor_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0)
        .and_then(|truncated| truncated.with_nanosecond(0))
        .unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roombook_core::types::{DateRange, WeekdayCode};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, s).unwrap()
    }

    fn filters(start: Option<NaiveDate>, end: Option<NaiveDate>, recurrence: Recurrence) -> BookingFilters {
        BookingFilters::new(DateRange::new(start, end), recurrence)
    }

    #[test_log::test]
    fn single_booking_drops_end_date() {
        let mut f = filters(Some(date(2024, 1, 1)), Some(date(2024, 1, 9)), Recurrence::single());
        sanitize_recurrence(&mut f);
        assert_eq!(f.dates, DateRange::starting(date(2024, 1, 1)));
    }

    #[test_log::test]
    fn daily_booking_spans_one_week() {
        let mut f = filters(Some(date(2024, 1, 1)), None, Recurrence::daily());
        sanitize_recurrence(&mut f);
        assert_eq!(f.dates.end_date, Some(date(2024, 1, 8)));
    }

    #[test_log::test]
    fn weekly_booking_spans_four_periods() {
        let mut f = filters(
            Some(date(2024, 1, 1)),
            None,
            Recurrence::every_week(2, vec![WeekdayCode::Mon]),
        );
        sanitize_recurrence(&mut f);
        // 8 weeks
        assert_eq!(f.dates.end_date, Some(date(2024, 2, 26)));
    }

    #[test_log::test]
    fn monthly_booking_spans_six_periods() {
        let mut f = filters(Some(date(2024, 1, 15)), None, Recurrence::every_month(1));
        sanitize_recurrence(&mut f);
        assert_eq!(f.dates.end_date, Some(date(2024, 7, 15)));

        let mut clamped = filters(Some(date(2024, 8, 31)), None, Recurrence::every_month(1));
        sanitize_recurrence(&mut clamped);
        assert_eq!(clamped.dates.end_date, Some(date(2025, 2, 28)));
    }

    #[test_log::test]
    fn zero_repeat_ends_on_start_date() {
        let mut weekly = filters(Some(date(2024, 3, 5)), None, Recurrence::every_week(0, vec![]));
        sanitize_recurrence(&mut weekly);
        assert_eq!(weekly.dates.end_date, Some(date(2024, 3, 5)));

        let mut monthly = filters(Some(date(2024, 3, 5)), None, Recurrence::every_month(0));
        sanitize_recurrence(&mut monthly);
        assert_eq!(monthly.dates.end_date, Some(date(2024, 3, 5)));
    }

    #[test_log::test]
    fn span_past_calendar_range_leaves_end_date_unset() {
        let mut daily = filters(Some(NaiveDate::MAX), None, Recurrence::daily());
        sanitize_recurrence(&mut daily);
        assert_eq!(daily.dates.end_date, None);

        let mut weekly = filters(Some(date(2024, 1, 1)), None, Recurrence::every_week(u32::MAX, vec![]));
        sanitize_recurrence(&mut weekly);
        assert_eq!(weekly.dates.end_date, None);

        let mut monthly = filters(Some(date(2024, 1, 1)), None, Recurrence::every_month(u32::MAX));
        sanitize_recurrence(&mut monthly);
        assert_eq!(monthly.dates.end_date, None);
    }

    #[test_log::test]
    fn existing_end_date_is_kept() {
        let mut f = filters(Some(date(2024, 1, 1)), Some(date(2024, 1, 3)), Recurrence::daily());
        sanitize_recurrence(&mut f);
        assert_eq!(f.dates.end_date, Some(date(2024, 1, 3)));
    }

    #[test_log::test]
    fn missing_start_date_is_left_alone() {
        let mut f = filters(None, None, Recurrence::every_month(2));
        sanitize_recurrence(&mut f);
        assert_eq!(f.dates, DateRange::default());
    }

    #[test_log::test]
    fn unknown_type_is_a_no_op() {
        let recurrence = Recurrence {
            kind: RecurrenceType::Unknown("yearly".into()),
            ..Recurrence::every_month(1)
        };
        let mut f = filters(Some(date(2024, 1, 1)), None, recurrence);
        let before = f.clone();
        sanitize_recurrence(&mut f);
        assert_eq!(f, before);
    }

    #[test_log::test]
    fn sanitizing_twice_matches_once() {
        let cases = [
            filters(Some(date(2024, 1, 1)), None, Recurrence::daily()),
            filters(Some(date(2024, 1, 1)), Some(date(2024, 2, 1)), Recurrence::single()),
            filters(Some(date(2024, 1, 31)), None, Recurrence::every_month(3)),
            filters(Some(date(2024, 1, 1)), None, Recurrence::every_week(1, vec![])),
        ];
        for case in cases {
            let mut once = case.clone();
            sanitize_recurrence(&mut once);
            let mut twice = once.clone();
            sanitize_recurrence(&mut twice);
            assert_eq!(once, twice);
        }
    }

    #[test_log::test]
    fn switching_to_recurring_after_start_pins_original_start() {
        let mut f = filters(Some(date(2024, 3, 10)), None, Recurrence::single());
        change_recurrence_type(
            &mut f,
            RecurrenceType::Daily,
            datetime(2024, 3, 1, 9, 0, 0),
            datetime(2024, 3, 5, 12, 0, 0),
        );
        assert_eq!(f.recurrence.kind, RecurrenceType::Daily);
        assert_eq!(f.dates.start_date, Some(date(2024, 3, 1)));
        assert_eq!(f.dates.end_date, Some(date(2024, 3, 8)));
    }

    #[test_log::test]
    fn switching_to_recurring_before_start_keeps_start_date() {
        let mut f = filters(Some(date(2024, 3, 10)), None, Recurrence::single());
        change_recurrence_type(
            &mut f,
            RecurrenceType::Every,
            datetime(2024, 3, 10, 9, 0, 0),
            datetime(2024, 3, 10, 11, 0, 0),
        );
        assert_eq!(f.dates.start_date, Some(date(2024, 3, 10)));
        assert_eq!(f.dates.end_date, Some(date(2024, 4, 7)));
    }

    #[test_log::test]
    fn switching_to_single_moves_past_start_to_tomorrow() {
        let mut f = filters(Some(date(2024, 3, 1)), Some(date(2024, 3, 8)), Recurrence::daily());
        change_recurrence_type(
            &mut f,
            RecurrenceType::Single,
            datetime(2024, 3, 5, 9, 0, 0),
            datetime(2024, 3, 5, 9, 1, 0),
        );
        assert_eq!(f.dates, DateRange::starting(date(2024, 3, 6)));
    }

    #[test_log::test]
    fn switching_to_single_within_same_minute_uses_today() {
        let mut f = filters(Some(date(2024, 3, 1)), Some(date(2024, 3, 8)), Recurrence::daily());
        change_recurrence_type(
            &mut f,
            RecurrenceType::Single,
            datetime(2024, 3, 5, 9, 0, 0),
            datetime(2024, 3, 5, 9, 0, 45),
        );
        assert_eq!(f.dates, DateRange::starting(date(2024, 3, 5)));
    }
}
