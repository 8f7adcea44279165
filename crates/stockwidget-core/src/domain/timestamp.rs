use std::fmt::{Display, Formatter};

use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// `YYYY-MM-DDTHH:MM:SS.mmmZ`, the shape used for log line prefixes.
const ISO_MILLIS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// UTC timestamp rendered with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Converts any offset to UTC.
    pub fn from_offset_datetime(value: OffsetDateTime) -> Self {
        Self(value.to_offset(time::UtcOffset::UTC))
    }

    pub fn format_iso8601(self) -> String {
        self.0
            .format(ISO_MILLIS)
            .or_else(|_| self.0.format(&Rfc3339))
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso8601())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn formats_with_milliseconds_and_z_suffix() {
        let ts = UtcDateTime::from_offset_datetime(datetime!(2024-03-05 07:08:09.123_456 UTC));
        assert_eq!(ts.format_iso8601(), "2024-03-05T07:08:09.123Z");
    }

    #[test]
    fn normalizes_non_utc_offsets() {
        let ts = UtcDateTime::from_offset_datetime(datetime!(2024-01-01 01:00:00 +01:00));
        assert_eq!(ts.to_string(), "2024-01-01T00:00:00.000Z");
    }
}
