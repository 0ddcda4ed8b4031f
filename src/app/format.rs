//! Display formatting helpers.

use chrono::{DateTime, NaiveDateTime};

/// The timestamp format the backend expects on reservation creation.
pub const BACKEND_DATETIME: &str = "%d/%m/%Y %H:%M";

pub fn to_backend_datetime(dt: NaiveDateTime) -> String {
    dt.format(BACKEND_DATETIME).to_string()
}

/// Render a backend timestamp for display as `DD/MM/YYYY HH:mm`. The backend
/// is inconsistent about shapes (ISO with and without zone, sometimes already
/// formatted), so unparseable input is shown as received.
pub fn display_datetime(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.naive_local().format(BACKEND_DATETIME).to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return dt.format(BACKEND_DATETIME).to_string();
        }
    }
    raw.to_string()
}

/// `R$ 1234,50` - two decimals, Brazilian comma separator.
pub fn currency(value: f64) -> String {
    format!("R$ {:.2}", value).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn backend_datetime_shape() {
        let dt = NaiveDate::from_ymd_opt(2026, 2, 1)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(to_backend_datetime(dt), "01/02/2026 14:30");
    }

    #[test]
    fn display_handles_backend_shapes() {
        assert_eq!(display_datetime("2026-02-01T14:30:00"), "01/02/2026 14:30");
        assert_eq!(
            display_datetime("2026-02-01T14:30:00.000Z"),
            "01/02/2026 14:30"
        );
        // already formatted or unknown: passed through
        assert_eq!(display_datetime("01/02/2026 14:30"), "01/02/2026 14:30");
        assert_eq!(display_datetime(""), "-");
    }

    #[test]
    fn currency_uses_comma() {
        assert_eq!(currency(150.0), "R$ 150,00");
        assert_eq!(currency(0.0), "R$ 0,00");
        assert_eq!(currency(1234.5), "R$ 1234,50");
    }
}
