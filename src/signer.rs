use chrono::Duration;

use crate::clock::Clock;
use crate::credentials::Credentials;
use crate::form_data::FormData;
use crate::private::policy_document::{Condition, Expiration, PolicyDocument};
use crate::private::{hex_encode, AmzDatetime, CredentialScope, Date};
use crate::signing_key::{self, SigningKey};
use crate::{Error, ErrorKind};

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Upload constraints baked into the policy document.
///
/// No semantic validation is performed here: out-of-range sizes or
/// malformed names are encoded faithfully and rejected by the storage
/// service at upload time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UploadConfig {
    pub bucket_name: String,
    pub object_key: String,
    pub content_type: String,
    /// Used as both bounds of the `content-length-range` condition, so
    /// the upload must match this size exactly.
    pub file_size: u64,
    /// Overrides the synthesized `http://{bucket}.s3.amazonaws.com/`
    /// target. [`V4Signer`] callers should always set this: the
    /// synthesized URL carries no region.
    pub upload_url: Option<String>,
    /// How long the policy stays valid. Defaults to one hour.
    /// [`V2Signer`] ignores this and always uses one hour.
    pub expiration: Option<Duration>,
    /// Extra exact-match conditions and form fields, conventionally
    /// `x-amz-meta-*` named. Emitted in this order.
    pub metadata: Vec<(String, String)>,
}

/// Upload target and signed form fields.
///
/// The `file` field is not included; append it after these fields when
/// building the multipart request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UploadPolicies {
    pub url: String,
    pub form: FormData,
}

/// Builds a signed POST policy for a constrained upload.
pub trait PolicySigner {
    fn create_policies(
        &self,
        credentials: &Credentials,
        config: &UploadConfig,
    ) -> Result<UploadPolicies, Error>;
}

/// Legacy signer.
///
/// Single-pass HMAC-SHA1 over the base64-encoded policy, secret key
/// used directly, base64 signature. Expiration is fixed at one hour
/// and metadata is not supported.
#[derive(Clone, Debug, Default)]
pub struct V2Signer {
    clock: Clock,
}

impl V2Signer {
    pub fn new() -> Self {
        Self::with_clock(Clock::system())
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }
}

impl PolicySigner for V2Signer {
    fn create_policies(
        &self,
        credentials: &Credentials,
        config: &UploadConfig,
    ) -> Result<UploadPolicies, Error> {
        let now = self.clock.now();
        let document = PolicyDocument {
            expiration: Expiration::from_datetime(now + Duration::hours(1)),
            conditions: vec![
                Condition::exact_match("bucket", &config.bucket_name),
                Condition::exact_match("key", &config.object_key),
                Condition::exact_match("Content-Type", &config.content_type),
                Condition::ContentLengthRange(config.file_size, config.file_size),
            ],
        };
        let policy = encode_policy(&document)?;
        let signature = base64::Engine::encode(
            &base64::engine::general_purpose::STANDARD,
            signing_key::hmac_sha1(
                credentials.secret_access_key.as_bytes(),
                policy.as_bytes(),
            ),
        );

        Ok(UploadPolicies {
            url: resolve_upload_url(config),
            form: FormData::new(vec![
                (
                    "AWSAccessKeyId".to_string(),
                    credentials.access_key_id.clone(),
                ),
                ("key".to_string(), config.object_key.clone()),
                ("Content-Type".to_string(), config.content_type.clone()),
                ("signature".to_string(), signature),
                ("policy".to_string(), policy),
            ]),
        })
    }
}

/// Current-generation signer.
///
/// Derives a scoped signing key (HMAC-SHA256 chain over date, region,
/// service, request type), enriches the policy with credential scope,
/// algorithm, and timestamp conditions, and renders the signature as
/// lowercase hex. Requires [`Credentials::region`].
#[derive(Clone, Debug, Default)]
pub struct V4Signer {
    clock: Clock,
}

impl V4Signer {
    pub fn new() -> Self {
        Self::with_clock(Clock::system())
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }
}

impl PolicySigner for V4Signer {
    fn create_policies(
        &self,
        credentials: &Credentials,
        config: &UploadConfig,
    ) -> Result<UploadPolicies, Error> {
        let region = credentials
            .region
            .as_deref()
            .ok_or(ErrorKind::RegionNotFound)?;
        let now = self.clock.now();
        let date = Date::from_datetime(&now);
        let amz_date = AmzDatetime::from_datetime(now).to_string();
        let amz_credential = format!(
            "{}/{}",
            credentials.access_key_id,
            CredentialScope::new(date, region)
        );

        let mut conditions = vec![
            Condition::exact_match("bucket", &config.bucket_name),
            Condition::exact_match("key", &config.object_key),
            Condition::exact_match("Content-Type", &config.content_type),
            Condition::ContentLengthRange(config.file_size, config.file_size),
            Condition::exact_match("x-amz-credential", &amz_credential),
            Condition::exact_match("x-amz-algorithm", ALGORITHM),
            Condition::exact_match("x-amz-date", &amz_date),
        ];
        for (name, value) in &config.metadata {
            conditions.push(Condition::exact_match(name, value));
        }
        let expiration = config.expiration.unwrap_or_else(|| Duration::hours(1));
        let document = PolicyDocument {
            expiration: Expiration::from_datetime(now + expiration),
            conditions,
        };
        let policy = encode_policy(&document)?;

        let signing_key =
            SigningKey::derive(&credentials.secret_access_key, &date.to_string(), region);
        let signature = hex_encode(&signing_key.sign(policy.as_bytes()));

        let mut fields = vec![
            ("key".to_string(), config.object_key.clone()),
            ("Content-Type".to_string(), config.content_type.clone()),
            ("X-Amz-Credential".to_string(), amz_credential),
            ("X-Amz-Algorithm".to_string(), ALGORITHM.to_string()),
            ("X-Amz-Date".to_string(), amz_date),
            ("Policy".to_string(), policy),
            ("X-Amz-Signature".to_string(), signature),
        ];
        for (name, value) in &config.metadata {
            fields.push((name.clone(), value.clone()));
        }

        Ok(UploadPolicies {
            url: resolve_upload_url(config),
            form: FormData::new(fields),
        })
    }
}

fn encode_policy(document: &PolicyDocument) -> Result<String, Error> {
    let json = document
        .to_json()
        .map_err(ErrorKind::PolicyDocumentSerialization)?;
    Ok(base64::Engine::encode(
        &base64::engine::general_purpose::STANDARD,
        json.as_bytes(),
    ))
}

fn resolve_upload_url(config: &UploadConfig) -> String {
    match &config.upload_url {
        Some(upload_url) => upload_url.clone(),
        None => format!("http://{}.s3.amazonaws.com/", config.bucket_name),
    }
}
