pub(crate) mod amz_datetime;
pub(crate) mod credential_scope;
pub(crate) mod date;
pub(crate) mod policy_document;

pub(crate) use self::amz_datetime::AmzDatetime;
pub(crate) use self::credential_scope::CredentialScope;
pub(crate) use self::date::Date;

pub(crate) const SERVICE_NAME: &str = "s3";
pub(crate) const REQUEST_TYPE: &str = "aws4_request";

pub(crate) fn hex_encode(message_digest: &[u8]) -> String {
    use std::fmt::Write as _;
    message_digest.iter().fold(String::new(), |mut s, b| {
        let _ = write!(s, "{:02x}", b);
        s
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_encode() {
        assert_eq!(hex_encode(&[]), "");
        assert_eq!(hex_encode(&[0x00, 0x0f, 0xa0, 0xff]), "000fa0ff");
    }
}
