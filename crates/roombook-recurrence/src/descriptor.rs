//! Mapping between the API repetition triple and the form recurrence descriptor.

use roombook_core::types::{
    Recurrence, RecurrenceInterval, RecurrenceType, RepeatFrequency, RepetitionTriple, WeekdayCode,
};

use crate::weekdays::canonical_weekdays;

/// ## Summary
/// Converts a repetition triple returned by the API into a form descriptor.
///
/// Monthly repetitions never carry a weekday selection. A weekday list with
/// an unknown code is dropped as a whole. Unknown frequencies fall back to a
/// single booking.
#[must_use]
pub fn to_descriptor(triple: &RepetitionTriple) -> Recurrence {
    match triple.frequency {
        RepeatFrequency::Never => Recurrence::single(),
        RepeatFrequency::Day => Recurrence::daily(),
        RepeatFrequency::Week => Recurrence::every_week(triple.interval, weekday_selection(triple)),
        RepeatFrequency::Month => Recurrence::every_month(triple.interval),
        RepeatFrequency::Unknown(ref raw) => {
            tracing::warn!(
                frequency = %raw,
                interval = triple.interval,
                "Unknown repeat frequency, treating as single booking"
            );
            Recurrence::single()
        }
    }
}

fn weekday_selection(triple: &RepetitionTriple) -> Vec<WeekdayCode> {
    let Some(raw) = triple.weekdays.as_deref() else {
        return Vec::new();
    };
    let raw: Vec<&str> = raw.iter().map(String::as_str).collect();
    canonical_weekdays(&raw).unwrap_or_default()
}

/// ## Summary
/// Converts a form descriptor into the `(frequency, interval)` pair sent to the API.
///
/// The weekday selection travels in a separate parameter and is not part of
/// the pair. Returns `None` for an unrecognized recurrence type.
#[must_use]
pub fn from_descriptor(recurrence: &Recurrence) -> Option<(RepeatFrequency, u32)> {
    match (&recurrence.kind, recurrence.interval) {
        (RecurrenceType::Single, _) => Some((RepeatFrequency::Never, 0)),
        (RecurrenceType::Daily, _) => Some((RepeatFrequency::Day, 1)),
        (RecurrenceType::Every, RecurrenceInterval::Week) => {
            Some((RepeatFrequency::Week, recurrence.number))
        }
        (RecurrenceType::Every, RecurrenceInterval::Month) => {
            Some((RepeatFrequency::Month, recurrence.number))
        }
        (RecurrenceType::Unknown(raw), _) => {
            tracing::trace!(recurrence = %raw, "No repeat frequency for recurrence type");
            None
        }
    }
}

/// Same as [`from_descriptor`], packed as a triple without weekdays.
#[must_use]
pub fn to_repetition(recurrence: &Recurrence) -> Option<RepetitionTriple> {
    from_descriptor(recurrence)
        .map(|(frequency, interval)| RepetitionTriple::new(frequency, interval, None))
}
