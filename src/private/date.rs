use chrono::{DateTime, Datelike, Utc};

/// A `YYYYMMDD` date stamp, always derived from a UTC instant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Date(u32);

impl Date {
    pub(crate) fn from_datetime(datetime: &DateTime<Utc>) -> Self {
        Self(datetime.year() as u32 * 10000 + datetime.month() * 100 + datetime.day())
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08}", self.0)
    }
}
