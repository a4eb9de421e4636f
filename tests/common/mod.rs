//! Fixtures shared by the integration tests; mirrors the crate's `_preludet` helpers without
//! requiring the `test` feature.

#![allow(dead_code)]

// std
use std::sync::{
	Arc,
	atomic::{AtomicU8, Ordering},
};
// self
use oauth1_signer::{
	codec::RandomSource,
	credentials::Credentials,
	generator::{CredentialGenerator, FixedClock},
	key::KeyMaterial,
};

pub const RSA_PKCS1_PRIVATE_KEY_PEM: &str = include_str!("../fixtures/rsa1024-priv-pkcs1.pem");
pub const RSA_PRIVATE_KEY_PEM: &str = include_str!("../fixtures/rsa1024-priv.pem");
pub const RSA_CERTIFICATE_PEM: &str = include_str!("../fixtures/rsa1024-cert.pem");

#[derive(Debug)]
struct CountingRandom(AtomicU8);
impl RandomSource for CountingRandom {
	fn fill_bytes(&self, dest: &mut [u8]) {
		for byte in dest.iter_mut() {
			*byte = self.0.fetch_add(1, Ordering::Relaxed);
		}
	}
}

pub fn fixed_generator(seed: u8, unix_seconds: i64) -> CredentialGenerator {
	let clock = FixedClock::from_unix_timestamp(unix_seconds)
		.expect("Fixture timestamp should be representable.");

	CredentialGenerator::new(Arc::new(CountingRandom(AtomicU8::new(seed))), Arc::new(clock))
}

pub fn photos_consumer() -> Credentials {
	Credentials::builder("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
		.build()
		.expect("Photos consumer fixture should build.")
}

pub fn rsa_consumer() -> Credentials {
	Credentials::builder("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
		.private_key(KeyMaterial::new(RSA_PRIVATE_KEY_PEM))
		.public_key(KeyMaterial::new(RSA_CERTIFICATE_PEM))
		.build()
		.expect("RSA consumer fixture should build.")
}
