/// Date format used on the wire between the client and the booking API
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";
/// Time-of-day format used by time slots
pub const WIRE_TIME_FORMAT: &str = "%H:%M";
/// Combined format of the `start_dt`/`end_dt` query parameters
pub const WIRE_DATETIME_FORMAT: &str =
    const_str::concat!(WIRE_DATE_FORMAT, " ", WIRE_TIME_FORMAT);

/// Locale used when neither the configuration nor the caller picks one
pub const DEFAULT_LOCALE: &str = "en-US";
