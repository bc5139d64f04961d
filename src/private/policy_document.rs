use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, SerializeSeq};

/// The policy document authorizing a constrained, time-limited upload.
///
/// <https://docs.aws.amazon.com/AmazonS3/latest/API/sigv4-HTTPPOSTConstructPolicy.html>
///
/// Field order and condition order are fixed so that the serialized
/// bytes are reproducible.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub(crate) struct PolicyDocument {
    pub(crate) expiration: Expiration,
    pub(crate) conditions: Vec<Condition>,
}

impl PolicyDocument {
    /// Serializes `self` to its canonical JSON form.
    ///
    /// `<`, `>` and `&` are escaped as `\u00XX` sequences. Signatures
    /// are computed over these exact bytes, so the escaping must match
    /// verifiers that compare against HTML-escaping JSON encoders.
    pub(crate) fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self).map(|json| escape_html_chars(&json))
    }
}

fn escape_html_chars(json: &str) -> String {
    json.replace('&', "\\u0026")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
}

/// One condition clause the storage service enforces against the
/// actual upload request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Condition {
    /// Serialized as a single-entry object, e.g. `{"bucket":"b"}`.
    ExactMatch { field: String, value: String },
    /// Serialized as the 3-element array
    /// `["content-length-range",min,max]`.
    ContentLengthRange(u64, u64),
}

impl Condition {
    pub(crate) fn exact_match(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ExactMatch {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl serde::Serialize for Condition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Condition::ExactMatch { field, value } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(field, value)?;
                map.end()
            }
            Condition::ContentLengthRange(min, max) => {
                let mut seq = serializer.serialize_seq(Some(3))?;
                seq.serialize_element("content-length-range")?;
                seq.serialize_element(min)?;
                seq.serialize_element(max)?;
                seq.end()
            }
        }
    }
}

/// The policy expiration timestamp.
///
/// Rendered as `%Y-%m-%dT%H:%M:%SZZ`, a literal `Z` followed by the
/// UTC zone designator. Existing verifiers pin this double-`Z` form,
/// so it must not be normalized to `+00:00` or a single `Z`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Expiration(DateTime<Utc>);

impl Expiration {
    pub(crate) fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl std::fmt::Display for Expiration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.format("%Y-%m-%dT%H:%M:%SZZ").fmt(f)
    }
}

impl serde::Serialize for Expiration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
