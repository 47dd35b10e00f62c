//! Request dispatch for the `roombook` binary.

use chrono::NaiveDate;
use roombook_core::types::{BookingFilters, Recurrence, RepetitionTriple};
use roombook_recurrence::descriptor::to_descriptor;
use roombook_recurrence::expand::{ExpansionOptions, expand_occurrences};
use roombook_recurrence::sanitize::sanitize_recurrence;
use roombook_recurrence::weekdays::{LocaleContext, WeekdayFormatter, parse_locale};
use roombook_service::params::preprocess_parameters;
use roombook_service::serializers::room_filter_rules;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppResult;

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Request {
    /// Normalize a search form and build its query parameters.
    Sanitize { filters: BookingFilters },
    /// Describe a repetition triple returned by the API.
    Describe {
        repetition: RepetitionTriple,
        #[serde(default)]
        locale: Option<String>,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Sanitized {
        filters: BookingFilters,
        parameters: Map<String, Value>,
        occurrences: Vec<NaiveDate>,
    },
    Described {
        recurrence: Recurrence,
        weekdays: Option<String>,
        legacy: Option<&'static str>,
    },
}

/// ## Summary
/// Handles one request.
///
/// Occurrences are best effort: a period that cannot be expanded yields an
/// empty list. A request locale applies to that request only.
///
/// ## Errors
/// Returns an error if a locale is invalid or a parameter rule fails.
pub fn handle(request: Request, locale: &LocaleContext) -> AppResult<Response> {
    match request {
        Request::Sanitize { mut filters } => {
            sanitize_recurrence(&mut filters);
            let parameters = preprocess_parameters(&filters, &room_filter_rules())?;
            let occurrences = if filters.dates.start_date.is_some() {
                expand_occurrences(
                    &filters.dates,
                    &filters.recurrence,
                    &ExpansionOptions::default(),
                )
                .unwrap_or_else(|err| {
                    tracing::warn!(
                        error = %err,
                        dates = ?filters.dates,
                        "Skipping occurrence expansion"
                    );
                    Vec::new()
                })
            } else {
                Vec::new()
            };
            tracing::info!(
                parameters = parameters.len(),
                occurrences = occurrences.len(),
                "Sanitized booking filters"
            );
            Ok(Response::Sanitized {
                filters,
                parameters,
                occurrences,
            })
        }
        Request::Describe {
            repetition,
            locale: tag,
        } => {
            let formatter = match tag {
                Some(tag) => WeekdayFormatter::try_new(&parse_locale(&tag)?)?,
                None => locale.formatter()?,
            };
            let recurrence = to_descriptor(&repetition);
            let weekdays = formatter.describe(&recurrence);
            tracing::info!(frequency = %repetition.frequency, ?weekdays, "Described repetition");
            Ok(Response::Described {
                recurrence,
                weekdays,
                legacy: repetition.legacy_description(),
            })
        }
    }
}
