//! Locale-aware rendering of recurring weekdays.
//!
//! Weekday names and list joining come from ICU4X compiled CLDR data, so the
//! output follows each locale's conventions: Oxford comma in `en-US`, none in
//! `en-GB`, `et`/`und` joiners, ideographic separators in CJK locales.
//! The surrounding "Every ..." phrasing is English.

mod formatter;
mod locale;

pub use formatter::{RenderRequest, WeekdayFormatter, canonical_weekdays};
pub use locale::{LocaleContext, parse_locale, render_recurrence_weekdays};
