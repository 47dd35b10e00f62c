use serde_json::{Value, json};

pub struct FilterCase {
    pub name: &'static str,
    /// Form state as sent by the UI (camel-cased, possibly without an end date).
    pub filters: Value,
    /// Expected `available_rooms` parameters after sanitizing.
    pub expected: Value,
}

pub fn filter_cases() -> Vec<FilterCase> {
    vec![
        FilterCase {
            name: "single_booking_drops_end_date",
            filters: json!({
                "dates": {"startDate": "2024-05-06", "endDate": "2024-05-10"},
                "recurrence": {"type": "single"},
                "timeSlot": {"startTime": "10:00", "endTime": "11:30"}
            }),
            expected: json!({
                "start_dt": "2024-05-06 10:00",
                "end_dt": "2024-05-06 11:30",
                "repeat_frequency": "NEVER",
                "repeat_interval": 0
            }),
        },
        FilterCase {
            name: "weekly_booking_gets_default_span",
            filters: json!({
                "dates": {"startDate": "2024-01-01", "endDate": null},
                "recurrence": {"type": "every", "number": 2, "interval": "week", "weekdays": ["mon"]},
                "timeSlot": {"startTime": "08:00", "endTime": "09:00"},
                "capacity": 12,
                "onlyFavorites": true
            }),
            expected: json!({
                "capacity": 12,
                "favorite": true,
                "start_dt": "2024-01-01 08:00",
                "end_dt": "2024-02-26 09:00",
                "repeat_frequency": "WEEK",
                "repeat_interval": 2
            }),
        },
        FilterCase {
            name: "monthly_booking_with_search_fields",
            filters: json!({
                "dates": {"startDate": "2024-01-31"},
                "recurrence": {"type": "every", "number": 1, "interval": "month"},
                "text": "auditorium",
                "equipment": ["Projector", "Webcam"],
                "building": "40",
                "onlyMine": false
            }),
            expected: json!({
                "text": "auditorium",
                "equipment": ["Projector", "Webcam"],
                "building": "40",
                "start_dt": "2024-01-31 00:00",
                "end_dt": "2024-07-31 23:59",
                "repeat_frequency": "MONTH",
                "repeat_interval": 1
            }),
        },
        FilterCase {
            name: "daily_booking_without_dates",
            filters: json!({
                "recurrence": {"type": "daily"},
                "floor": "2"
            }),
            expected: json!({
                "floor": "2",
                "repeat_frequency": "DAY",
                "repeat_interval": 1
            }),
        },
        FilterCase {
            name: "unknown_recurrence_type_sends_no_repetition",
            filters: json!({
                "dates": {"startDate": "2024-01-01"},
                "recurrence": {"type": "fortnightly"}
            }),
            expected: json!({
                "start_dt": "2024-01-01 00:00",
                "end_dt": "2024-01-01 23:59"
            }),
        },
    ]
}
