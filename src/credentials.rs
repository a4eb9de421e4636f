//! Consumer and token credentials bound into every signature.

// self
use crate::{_prelude::*, key::KeyMaterial};

/// Redacted secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);
impl Secret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for Secret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Secret").field(&"<redacted>").finish()
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Immutable credential set for one signing operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
	/// Consumer key sent as `oauth_consumer_key`.
	pub consumer_key: String,
	/// Consumer shared secret (PLAINTEXT, HMAC-SHA1).
	pub consumer_secret: Secret,
	/// Token sent as `oauth_token`, once one has been issued.
	#[serde(default)]
	pub token: Option<String>,
	/// Token shared secret.
	#[serde(default)]
	pub token_secret: Option<Secret>,
	/// RSA private key used by RSA-SHA1 signing.
	#[serde(default)]
	pub private_key: Option<KeyMaterial>,
	/// RSA public key or certificate used by RSA-SHA1 verification.
	#[serde(default)]
	pub public_key: Option<KeyMaterial>,
}
impl Credentials {
	/// Creates a builder seeded with the consumer pair.
	pub fn builder(
		consumer_key: impl Into<String>,
		consumer_secret: impl Into<String>,
	) -> CredentialsBuilder {
		CredentialsBuilder::new(consumer_key, consumer_secret)
	}

	/// Token secret, or the empty string before a token has been issued.
	pub fn token_secret_or_empty(&self) -> &str {
		self.token_secret.as_ref().map(Secret::expose).unwrap_or_default()
	}

	/// Validates invariants for the credential set.
	pub fn validate(&self) -> Result<(), CredentialsError> {
		if self.consumer_key.is_empty() {
			return Err(CredentialsError::EmptyConsumerKey);
		}
		if self.token_secret.is_some() && self.token.is_none() {
			return Err(CredentialsError::TokenSecretWithoutToken);
		}

		Ok(())
	}
}

/// Errors raised while constructing credentials.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum CredentialsError {
	/// The consumer key is required by every request.
	#[error("Consumer key cannot be empty.")]
	EmptyConsumerKey,
	/// A token secret only makes sense alongside a token.
	#[error("Token secret supplied without a token.")]
	TokenSecretWithoutToken,
}
impl From<CredentialsError> for Error {
	fn from(e: CredentialsError) -> Self {
		let parameter = match e {
			CredentialsError::EmptyConsumerKey => "consumer_key",
			CredentialsError::TokenSecretWithoutToken => "token_secret",
		};

		Error::illegal_argument(parameter, e.to_string())
	}
}

/// Builder for [`Credentials`] values.
#[derive(Debug)]
pub struct CredentialsBuilder {
	consumer_key: String,
	consumer_secret: Secret,
	token: Option<String>,
	token_secret: Option<Secret>,
	private_key: Option<KeyMaterial>,
	public_key: Option<KeyMaterial>,
}
impl CredentialsBuilder {
	/// Creates a new builder seeded with the consumer pair.
	pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			consumer_secret: Secret::new(consumer_secret),
			token: None,
			token_secret: None,
			private_key: None,
			public_key: None,
		}
	}

	/// Sets the token pair.
	pub fn token(mut self, token: impl Into<String>, token_secret: impl Into<String>) -> Self {
		self.token = Some(token.into());
		self.token_secret = Some(Secret::new(token_secret));

		self
	}

	/// Sets the RSA private key.
	pub fn private_key(mut self, material: KeyMaterial) -> Self {
		self.private_key = Some(material);

		self
	}

	/// Sets the RSA public key or certificate.
	pub fn public_key(mut self, material: KeyMaterial) -> Self {
		self.public_key = Some(material);

		self
	}

	/// Consumes the builder and validates the resulting credentials.
	pub fn build(self) -> Result<Credentials, CredentialsError> {
		let credentials = Credentials {
			consumer_key: self.consumer_key,
			consumer_secret: self.consumer_secret,
			token: self.token,
			token_secret: self.token_secret,
			private_key: self.private_key,
			public_key: self.public_key,
		};

		credentials.validate()?;

		Ok(credentials)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let credentials = Credentials::builder("key", "super-secret")
			.token("token", "token-secret")
			.build()
			.expect("Credentials fixture should build.");
		let rendered = format!("{credentials:?}");

		assert!(!rendered.contains("super-secret"));
		assert!(!rendered.contains("token-secret"));
		assert_eq!(format!("{}", credentials.consumer_secret), "<redacted>");
	}

	#[test]
	fn builder_validates() {
		assert_eq!(Credentials::builder("", "s").build(), Err(CredentialsError::EmptyConsumerKey));

		let err: Error = CredentialsError::EmptyConsumerKey.into();

		assert!(matches!(
			err,
			Error::IllegalArgument { ref parameter, .. } if parameter == "consumer_key"
		));
	}

	#[test]
	fn deserializes_with_optional_fields() {
		let credentials: Credentials = serde_json::from_str(
			r#"{"consumer_key":"dpf43f3p2l4k3l03","consumer_secret":"kd94hf93k423kf44"}"#,
		)
		.expect("Minimal credentials should deserialize.");

		assert_eq!(credentials.token, None);
		assert_eq!(credentials.token_secret_or_empty(), "");
		assert!(credentials.validate().is_ok());
	}
}
