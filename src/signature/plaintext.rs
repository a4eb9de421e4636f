// self
use crate::{
	_prelude::*,
	credentials::Credentials,
	signature::{SignatureAlgorithm, constant_time_eq, shared_secret_key},
};

/// `PLAINTEXT`: the signature is the shared-secret key; the base string is not consulted.
#[derive(Clone, Copy, Debug)]
pub struct Plaintext;
impl SignatureAlgorithm for Plaintext {
	const NAME: &'static str = "PLAINTEXT";

	fn sign(_: &str, credentials: &Credentials) -> Result<String> {
		Ok(shared_secret_key(credentials))
	}

	fn verify(_: &str, credentials: &Credentials, candidate: &str) -> Result<bool> {
		Ok(constant_time_eq(&shared_secret_key(credentials), candidate))
	}
}
