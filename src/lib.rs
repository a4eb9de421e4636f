//! OAuth 1.0 request signing engine: byte-exact signature base strings, PLAINTEXT, HMAC-SHA1, and
//! RSA-SHA1 signatures, plus the PEM/DER key handling RSA needs. HTTP transport is left to the
//! caller.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod canonical;
pub mod client;
pub mod codec;
pub mod credentials;
pub mod error;
pub mod generator;
pub mod key;
pub mod obs;
pub mod params;
pub mod request;
pub mod signature;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		codec::RandomSource,
		credentials::Credentials,
		generator::{CredentialGenerator, FixedClock},
		key::KeyMaterial,
	};

	/// PKCS#8 RSA private key used by RSA-SHA1 fixtures.
	pub const RSA_PRIVATE_KEY_PEM: &str = include_str!("../tests/fixtures/rsa1024-priv.pem");
	/// The same RSA private key in the PKCS#1 (`RSA PRIVATE KEY`) form.
	pub const RSA_PKCS1_PRIVATE_KEY_PEM: &str =
		include_str!("../tests/fixtures/rsa1024-priv-pkcs1.pem");
	/// SPKI public half of [`RSA_PRIVATE_KEY_PEM`].
	pub const RSA_PUBLIC_KEY_PEM: &str = include_str!("../tests/fixtures/rsa1024-pub.pem");
	/// Self-signed certificate wrapping [`RSA_PUBLIC_KEY_PEM`].
	pub const RSA_CERTIFICATE_PEM: &str = include_str!("../tests/fixtures/rsa1024-cert.pem");

	/// Deterministic byte source that counts upwards from a seed; never use outside tests.
	#[derive(Debug, Default)]
	pub struct CountingRandom {
		next: std::sync::atomic::AtomicU8,
	}
	impl CountingRandom {
		/// Creates a source whose first emitted byte is `seed`.
		pub fn new(seed: u8) -> Self {
			Self { next: std::sync::atomic::AtomicU8::new(seed) }
		}
	}
	impl RandomSource for CountingRandom {
		fn fill_bytes(&self, dest: &mut [u8]) {
			for byte in dest.iter_mut() {
				*byte = self.next.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
			}
		}
	}

	/// Generator pinned to a counting byte source and a fixed clock.
	pub fn fixed_generator(seed: u8, unix_seconds: i64) -> CredentialGenerator {
		let clock = FixedClock::from_unix_timestamp(unix_seconds)
			.expect("Fixture timestamp should be representable.");

		CredentialGenerator::new(Arc::new(CountingRandom::new(seed)), Arc::new(clock))
	}

	/// RFC 5849 section 1.2 consumer credentials without a token.
	pub fn photos_consumer() -> Credentials {
		Credentials::builder("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
			.build()
			.expect("Photos consumer fixture should build.")
	}

	/// Consumer credentials carrying the RSA fixture key pair.
	pub fn rsa_consumer() -> Credentials {
		Credentials::builder("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
			.private_key(KeyMaterial::new(RSA_PRIVATE_KEY_PEM))
			.public_key(KeyMaterial::new(RSA_CERTIFICATE_PEM))
			.build()
			.expect("RSA consumer fixture should build.")
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use {color_eyre as _, proptest as _, serde_json as _};
