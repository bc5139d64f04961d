use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

use crate::private::{REQUEST_TYPE, SERVICE_NAME};

/// A request-scoped signing key derived from a secret access key.
///
/// The derivation chain narrows the raw secret step by step: date key,
/// region key, service key, signing key. Each step's MAC output is the
/// next step's key.
#[derive(Clone)]
pub(crate) struct SigningKey(Hmac<Sha256>);

impl SigningKey {
    pub(crate) fn derive(secret_access_key: &str, date_stamp: &str, region: &str) -> Self {
        let date_key = hmac_sha256(
            format!("AWS4{}", secret_access_key).as_bytes(),
            date_stamp.as_bytes(),
        );
        let region_key = hmac_sha256(&date_key, region.as_bytes());
        let service_key = hmac_sha256(&region_key, SERVICE_NAME.as_bytes());
        let signing_key = hmac_sha256(&service_key, REQUEST_TYPE.as_bytes());
        Self(Hmac::new_from_slice(&signing_key).expect("HMAC can take key of any size"))
    }

    pub(crate) fn sign(&self, message: &[u8]) -> Vec<u8> {
        let mut mac = self.0.clone();
        mac.update(message);
        mac.finalize().into_bytes().to_vec()
    }
}

/// Single-pass MAC used by the legacy signing scheme.
pub(crate) fn hmac_sha1(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac =
        Hmac::<Sha1>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

fn hmac_sha256(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}
