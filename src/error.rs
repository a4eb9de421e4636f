//! Signing-engine error types shared across codecs, key material, and signature methods.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical signing error exposed by public APIs.
///
/// Every variant describes an input-validity fault; nothing is retried internally.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Percent-decoding failure.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// PEM armor could not be removed.
	#[error(transparent)]
	InvalidPem(#[from] PemError),

	/// Signature method name is unknown or malformed.
	#[error("Unsupported signature method `{method}`.")]
	InvalidSignatureMethod {
		/// The rejected method name.
		method: String,
	},
	/// Caller violated an input invariant.
	#[error("Illegal value for `{parameter}`: {reason}.")]
	IllegalArgument {
		/// Offending parameter name.
		parameter: String,
		/// Human-readable explanation.
		reason: String,
	},
	/// A signature method needs key material the credentials do not carry.
	#[error("{method} requires a {key}, but none was supplied.")]
	MissingKeyMaterial {
		/// Signature method label.
		method: &'static str,
		/// Kind of key that is missing.
		key: &'static str,
	},
	/// A received parameter set lacks a required entry.
	#[error("Parameter `{name}` is required.")]
	MissingParameter {
		/// Missing parameter name.
		name: &'static str,
	},
	/// URL cannot be used as an OAuth base string URI.
	#[error("URL `{url}` is not an absolute http(s) URL.")]
	InvalidUrl {
		/// The rejected URL text.
		url: String,
		/// Underlying parsing failure, when the URL did not parse at all.
		#[source]
		source: Option<url::ParseError>,
	},
	/// DER payload is not a key of the expected kind.
	#[error("Key material labelled `{label}` could not be decoded.")]
	InvalidKey {
		/// PEM label of the rejected material.
		label: &'static str,
		/// Underlying ASN.1 or RSA decoding failure.
		#[source]
		source: BoxError,
	},
	/// RSA primitive failed while producing a signature.
	#[error("RSA signing failed.")]
	Crypto {
		/// Underlying signature failure.
		#[source]
		source: BoxError,
	},
}
impl Error {
	/// Builds an [`Error::IllegalArgument`] for the named parameter.
	pub fn illegal_argument(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::IllegalArgument { parameter: parameter.into(), reason: reason.into() }
	}

	/// Wraps a key decoding failure.
	pub fn invalid_key(
		label: &'static str,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self::InvalidKey { label, source: Box::new(src) }
	}

	/// Wraps an RSA signing failure.
	pub fn crypto(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Crypto { source: Box::new(src) }
	}
}

/// Percent-decoding failures.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum DecodeError {
	/// A `%` was not followed by two hexadecimal digits.
	#[error("Invalid percent escape at byte offset {offset}.")]
	InvalidEscape {
		/// Byte offset of the `%` introducing the escape.
		offset: usize,
	},
	/// Decoded octets are not valid UTF-8.
	#[error("Decoded bytes are not valid UTF-8.")]
	InvalidUtf8(#[from] std::str::Utf8Error),
}

/// PEM armor failures.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum PemError {
	/// Text does not begin with the expected header line.
	#[error("Invalid PEM encoding; must start with `{header}`.")]
	MissingHeader {
		/// Expected header marker.
		header: String,
	},
	/// Text does not end with the expected footer line.
	#[error("Invalid PEM encoding; must end with `{footer}`.")]
	MissingFooter {
		/// Expected footer marker.
		footer: String,
	},
	/// Body between the markers is not valid base64.
	#[error("Invalid PEM body: {reason}.")]
	InvalidBase64 {
		/// Base64 decoder message.
		reason: String,
	},
	/// No known label matches the PEM header.
	#[error("Unrecognized PEM label.")]
	UnknownLabel,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn messages_carry_context() {
		let err = Error::illegal_argument("oauth_signature", "must not be pre-set");

		assert_eq!(err.to_string(), "Illegal value for `oauth_signature`: must not be pre-set.");

		let err = Error::MissingKeyMaterial { method: "RSA-SHA1", key: "private key" };

		assert_eq!(err.to_string(), "RSA-SHA1 requires a private key, but none was supplied.");
	}

	#[test]
	fn leaf_errors_convert() {
		let err: Error = DecodeError::InvalidEscape { offset: 3 }.into();

		assert!(matches!(err, Error::Decode(DecodeError::InvalidEscape { offset: 3 })));

		let err: Error = PemError::UnknownLabel.into();

		assert!(matches!(err, Error::InvalidPem(PemError::UnknownLabel)));
	}
}
