//! Occurrence expansion using the `rrule` crate.
//!
//! The availability API answers with one bucket of occurrences per day.
//! Expanding the requested recurrence locally lets the UI tell which of the
//! requested days the server actually returned.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use rrule::{Frequency, NWeekday, RRule, Tz};
use roombook_core::types::{DateRange, Recurrence, RecurrenceInterval, RecurrenceType};

use crate::error::{RecurrenceError, RecurrenceResult};

/// Options for occurrence expansion.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionOptions {
    /// Maximum number of occurrences to generate.
    pub max_occurrences: u16,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            max_occurrences: 1000,
        }
    }
}

/// ## Summary
/// Expands a booking period and its recurrence into occurrence dates.
///
/// Single bookings (and unrecognized recurrence types) occur once, on the
/// start date. Recurring bookings are expanded up to and including the end
/// date. Monthly bookings follow RFC 5545 and skip months that lack the
/// start day.
///
/// ## Errors
///
/// Returns an error if:
/// - The period has no start date
/// - A recurring period has no end date
/// - The repeat interval is zero or too large
/// - The resulting rule fails `rrule` validation
pub fn expand_occurrences(
    dates: &DateRange,
    recurrence: &Recurrence,
    options: &ExpansionOptions,
) -> RecurrenceResult<Vec<NaiveDate>> {
    let start = dates.start_date.ok_or(RecurrenceError::MissingStartDate)?;

    let (frequency, number) = match (&recurrence.kind, recurrence.interval) {
        (RecurrenceType::Daily, _) => (Frequency::Daily, 1),
        (RecurrenceType::Every, RecurrenceInterval::Week) => (Frequency::Weekly, recurrence.number),
        (RecurrenceType::Every, RecurrenceInterval::Month) => {
            (Frequency::Monthly, recurrence.number)
        }
        (kind, _) => {
            tracing::trace!(recurrence = %kind, %start, "Expanding as a single occurrence");
            return Ok(vec![start]);
        }
    };

    let end = dates.end_date.ok_or(RecurrenceError::MissingEndDate)?;
    if end < start {
        tracing::debug!(%start, %end, "Booking period ends before it starts");
        return Ok(Vec::new());
    }

    let interval = u16::try_from(number)
        .ok()
        .filter(|interval| *interval > 0)
        .ok_or(RecurrenceError::InvalidInterval(number))?;

    let mut rule = RRule::new(frequency)
        .interval(interval)
        .until(at_midnight(end));
    if recurrence.selects_weekdays() && !recurrence.weekdays.is_empty() {
        rule = rule.by_weekday(
            recurrence
                .weekdays
                .iter()
                .map(|code| NWeekday::Every((*code).into()))
                .collect(),
        );
    }

    let rrule_set = rule.build(at_midnight(start))?;
    let result = rrule_set.all(options.max_occurrences);
    if result.limited {
        tracing::warn!(
            limit = options.max_occurrences,
            "Occurrence expansion hit the configured limit"
        );
    }

    let occurrences: Vec<NaiveDate> = result.dates.iter().map(|dt| dt.date_naive()).collect();
    tracing::trace!(count = occurrences.len(), %start, %end, "Expanded occurrences");
    Ok(occurrences)
}

fn at_midnight(date: NaiveDate) -> chrono::DateTime<Tz> {
    date.and_time(NaiveTime::MIN).and_utc().with_timezone(&Tz::UTC)
}

/// Outcome of comparing expected occurrence dates with per-day buckets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reconciliation {
    /// Expected dates the server returned occurrences for.
    pub matched: Vec<NaiveDate>,
    /// Expected dates without any occurrence.
    pub missing: Vec<NaiveDate>,
    /// Days with occurrences that were not expected.
    pub unexpected: Vec<NaiveDate>,
}

impl Reconciliation {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// ## Summary
/// Reconciles expected occurrence dates with the server's per-day buckets.
///
/// A day whose bucket is empty counts as having no occurrence. All three
/// output lists are sorted and free of duplicates.
#[must_use]
pub fn reconcile_occurrences<T>(
    expected: &[NaiveDate],
    buckets: &BTreeMap<NaiveDate, Vec<T>>,
) -> Reconciliation {
    let mut expected: Vec<NaiveDate> = expected.to_vec();
    expected.sort_unstable();
    expected.dedup();

    let (matched, missing): (Vec<NaiveDate>, Vec<NaiveDate>) = expected
        .iter()
        .partition(|day| buckets.get(*day).is_some_and(|bucket| !bucket.is_empty()));

    let unexpected = buckets
        .iter()
        .filter(|(day, bucket)| !bucket.is_empty() && expected.binary_search(*day).is_err())
        .map(|(day, _)| *day)
        .collect();

    Reconciliation {
        matched,
        missing,
        unexpected,
    }
}
