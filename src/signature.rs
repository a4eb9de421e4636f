//! Signature methods (RFC 5849 section 3.4).
//!
//! [`SignatureMethod`] is the closed set of methods a request may name; each variant delegates to
//! a [`SignatureAlgorithm`] implementation.

mod hmac_sha1;
mod plaintext;
mod rsa_sha1;

pub use hmac_sha1::*;
pub use plaintext::*;
pub use rsa_sha1::*;

// crates.io
use subtle::ConstantTimeEq;
// self
use crate::{
	_prelude::*,
	codec::percent_encode,
	credentials::Credentials,
	obs::{self, SignatureOperation, SignatureOutcome, SignatureSpan},
};

/// Signing primitive behind one [`SignatureMethod`] variant.
pub trait SignatureAlgorithm {
	/// Wire name placed in `oauth_signature_method`.
	const NAME: &'static str;

	/// Signs `base_string` with `credentials`.
	fn sign(base_string: &str, credentials: &Credentials) -> Result<String>;

	/// Checks `candidate` against `base_string`.
	fn verify(base_string: &str, credentials: &Credentials, candidate: &str) -> Result<bool>;
}

/// Signature methods defined by OAuth 1.0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SignatureMethod {
	/// `PLAINTEXT`: the shared-secret key itself; only for TLS-protected channels.
	Plaintext,
	/// `HMAC-SHA1`.
	#[default]
	HmacSha1,
	/// `RSA-SHA1`: RSASSA-PKCS1-v1_5 over SHA-1.
	RsaSha1,
}
impl SignatureMethod {
	/// Returns the wire name.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignatureMethod::Plaintext => Plaintext::NAME,
			SignatureMethod::HmacSha1 => HmacSha1::NAME,
			SignatureMethod::RsaSha1 => RsaSha1::NAME,
		}
	}

	/// Computes the `oauth_signature` value for `base_string`.
	pub fn sign(self, base_string: &str, credentials: &Credentials) -> Result<String> {
		let _guard = SignatureSpan::new(SignatureOperation::Sign, self.as_str()).entered();

		obs::record_signature_outcome(SignatureOperation::Sign, SignatureOutcome::Attempt);

		let result = match self {
			SignatureMethod::Plaintext => Plaintext::sign(base_string, credentials),
			SignatureMethod::HmacSha1 => HmacSha1::sign(base_string, credentials),
			SignatureMethod::RsaSha1 => RsaSha1::sign(base_string, credentials),
		};

		obs::record_signature_outcome(SignatureOperation::Sign, SignatureOutcome::of(&result));

		result
	}

	/// Returns whether `candidate` is a valid signature of `base_string`.
	///
	/// Shared-secret methods compare in constant time.
	pub fn verify(
		self,
		base_string: &str,
		credentials: &Credentials,
		candidate: &str,
	) -> Result<bool> {
		let _guard = SignatureSpan::new(SignatureOperation::Verify, self.as_str()).entered();

		obs::record_signature_outcome(SignatureOperation::Verify, SignatureOutcome::Attempt);

		let result = match self {
			SignatureMethod::Plaintext => Plaintext::verify(base_string, credentials, candidate),
			SignatureMethod::HmacSha1 => HmacSha1::verify(base_string, credentials, candidate),
			SignatureMethod::RsaSha1 => RsaSha1::verify(base_string, credentials, candidate),
		};
		let outcome = match result {
			Ok(true) => SignatureOutcome::Success,
			_ => SignatureOutcome::Failure,
		};

		obs::record_signature_outcome(SignatureOperation::Verify, outcome);

		result
	}
}
impl Display for SignatureMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for SignatureMethod {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"PLAINTEXT" => Ok(SignatureMethod::Plaintext),
			"HMAC-SHA1" => Ok(SignatureMethod::HmacSha1),
			"RSA-SHA1" => Ok(SignatureMethod::RsaSha1),
			other => Err(Error::InvalidSignatureMethod { method: other.to_owned() }),
		}
	}
}
impl From<SignatureMethod> for String {
	fn from(value: SignatureMethod) -> Self {
		value.as_str().to_owned()
	}
}
impl TryFrom<String> for SignatureMethod {
	type Error = Error;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// `pe(consumer_secret)&pe(token_secret)`, the key shared by PLAINTEXT and HMAC-SHA1.
pub fn shared_secret_key(credentials: &Credentials) -> String {
	format!(
		"{}&{}",
		percent_encode(credentials.consumer_secret.expose()),
		percent_encode(credentials.token_secret_or_empty())
	)
}

fn constant_time_eq(expected: &str, candidate: &str) -> bool {
	expected.as_bytes().ct_eq(candidate.as_bytes()).into()
}
