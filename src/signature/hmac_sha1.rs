// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha1::Sha1;
// self
use crate::{
	_prelude::*,
	credentials::Credentials,
	signature::{SignatureAlgorithm, constant_time_eq, shared_secret_key},
};

type HmacSha1Mac = Hmac<Sha1>;

/// `HMAC-SHA1`: base64 of HMAC-SHA1 over the base string, keyed with the shared-secret key.
#[derive(Clone, Copy, Debug)]
pub struct HmacSha1;
impl SignatureAlgorithm for HmacSha1 {
	const NAME: &'static str = "HMAC-SHA1";

	fn sign(base_string: &str, credentials: &Credentials) -> Result<String> {
		let key = shared_secret_key(credentials);
		let mut mac = HmacSha1Mac::new_from_slice(key.as_bytes())
			.map_err(|e| Error::illegal_argument("consumer_secret", e.to_string()))?;

		mac.update(base_string.as_bytes());

		Ok(STANDARD.encode(mac.finalize().into_bytes()))
	}

	fn verify(base_string: &str, credentials: &Credentials, candidate: &str) -> Result<bool> {
		Ok(constant_time_eq(&Self::sign(base_string, credentials)?, candidate))
	}
}
