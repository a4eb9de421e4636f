// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use rsa::{
	pkcs1v15::{Signature, SigningKey, VerifyingKey},
	signature::{SignatureEncoding, Signer, Verifier},
};
use sha1::Sha1;
// self
use crate::{
	_prelude::*,
	credentials::Credentials,
	key::{self, KeyMaterial},
	signature::SignatureAlgorithm,
};

/// `RSA-SHA1`: base64 of RSASSA-PKCS1-v1_5 with SHA-1 over the base string.
///
/// Signing decodes [`Credentials::private_key`]; verification prefers
/// [`Credentials::public_key`] and falls back to the public half of the private key.
#[derive(Clone, Copy, Debug)]
pub struct RsaSha1;
impl SignatureAlgorithm for RsaSha1 {
	const NAME: &'static str = "RSA-SHA1";

	fn sign(base_string: &str, credentials: &Credentials) -> Result<String> {
		let material = credentials
			.private_key
			.as_ref()
			.ok_or(Error::MissingKeyMaterial { method: Self::NAME, key: "private key" })?;
		let signing_key = SigningKey::<Sha1>::new(key::decode_private_key(material)?);
		let signature = signing_key.try_sign(base_string.as_bytes()).map_err(Error::crypto)?;

		Ok(STANDARD.encode(signature.to_bytes()))
	}

	fn verify(base_string: &str, credentials: &Credentials, candidate: &str) -> Result<bool> {
		let material = verification_material(credentials)?;
		let verifying_key = VerifyingKey::<Sha1>::new(key::decode_public_key(material)?);
		let Ok(raw) = STANDARD.decode(candidate) else {
			return Ok(false);
		};
		let Ok(signature) = Signature::try_from(raw.as_slice()) else {
			return Ok(false);
		};

		Ok(verifying_key.verify(base_string.as_bytes(), &signature).is_ok())
	}
}

fn verification_material(credentials: &Credentials) -> Result<&KeyMaterial> {
	credentials.public_key.as_ref().or(credentials.private_key.as_ref()).ok_or(
		Error::MissingKeyMaterial { method: RsaSha1::NAME, key: "public key or certificate" },
	)
}
