use chrono::{DateTime, Utc};

/// The `x-amz-date` timestamp (`YYYYMMDD'T'HHMMSS'Z'`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct AmzDatetime(DateTime<Utc>);

impl AmzDatetime {
    pub(crate) fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl std::fmt::Display for AmzDatetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.format("%Y%m%dT%H%M%SZ").fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test() -> anyhow::Result<()> {
        let datetime = DateTime::parse_from_rfc3339("2020-01-02T03:04:05+00:00")?;
        assert_eq!(
            AmzDatetime::from_datetime(datetime.with_timezone(&Utc)).to_string(),
            "20200102T030405Z"
        );
        Ok(())
    }
}
