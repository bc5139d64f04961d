use super::{Date, REQUEST_TYPE, SERVICE_NAME};

/// The scope part of an `x-amz-credential` value
/// (`YYYYMMDD/{region}/s3/aws4_request`).
///
/// The full credential is `{access_key_id}/{credential_scope}`. The
/// same bytes appear as a policy condition and as a form field, which
/// binds the signature to this date, region, and service.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CredentialScope {
    date: Date,
    region: String,
}

impl CredentialScope {
    pub(crate) fn new(date: Date, region: impl Into<String>) -> Self {
        Self {
            date,
            region: region.into(),
        }
    }
}

impl std::fmt::Display for CredentialScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.date, self.region, SERVICE_NAME, REQUEST_TYPE
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    #[test]
    fn test() -> anyhow::Result<()> {
        let datetime = DateTime::parse_from_rfc3339("2016-12-10T00:00:00Z")?.with_timezone(&Utc);
        let credential_scope = CredentialScope::new(Date::from_datetime(&datetime), "ap-northeast-1");
        assert_eq!(
            credential_scope.to_string(),
            "20161210/ap-northeast-1/s3/aws4_request"
        );
        Ok(())
    }
}
