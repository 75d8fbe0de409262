use chrono::{DateTime, Utc};
use dioxus::prelude::*;

pub fn format_timestamp(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn Timestamp(value: Option<DateTime<Utc>>) -> Element {
    let text = format_timestamp(value);
    let title = value.map(|dt| dt.to_rfc3339()).unwrap_or_default();

    rsx!(
        span {
            class: "whitespace-nowrap",
            title: "{title}",
            "{text}"
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_utc_or_placeholder() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 1, 9, 5, 0).unwrap();

        assert_eq!(format_timestamp(Some(dt)), "2026-03-01 09:05 UTC");
        assert_eq!(format_timestamp(None), "-");
    }
}
