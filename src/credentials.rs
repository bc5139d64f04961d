/// AWS credentials used to sign POST policies.
///
/// Supplied per call; nothing is cached or persisted. `region` is
/// required by [`V4Signer`](crate::V4Signer) and unused by
/// [`V2Signer`](crate::V2Signer).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: Option<String>,
}
