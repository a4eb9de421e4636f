// crates.io
use rsa::{
	RsaPrivateKey, RsaPublicKey,
	pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey},
	pkcs8::{DecodePrivateKey, DecodePublicKey},
};
use x509_cert::{
	Certificate,
	der::{Decode, Encode},
};
// self
use crate::{
	_prelude::*,
	key::{KeyMaterial, PemLabel},
};

/// Decodes an RSA private key from `PRIVATE KEY` (PKCS#8) or `RSA PRIVATE KEY` (PKCS#1) PEM.
pub fn decode_private_key(material: &KeyMaterial) -> Result<RsaPrivateKey> {
	let (label, der) = material.to_der()?;

	match label {
		PemLabel::PrivateKey => RsaPrivateKey::from_pkcs8_der(&der)
			.map_err(|e| Error::invalid_key(label.as_str(), e)),
		PemLabel::RsaPrivateKey => RsaPrivateKey::from_pkcs1_der(&der)
			.map_err(|e| Error::invalid_key(label.as_str(), e)),
		other => Err(Error::illegal_argument(
			"private_key",
			format!("expected PRIVATE KEY or RSA PRIVATE KEY material, found {other}"),
		)),
	}
}

/// Decodes an RSA public key from `PUBLIC KEY`, `RSA PUBLIC KEY`, or `CERTIFICATE` PEM.
///
/// Private key material is also accepted; its public half is returned.
pub fn decode_public_key(material: &KeyMaterial) -> Result<RsaPublicKey> {
	let (label, der) = material.to_der()?;

	match label {
		PemLabel::PublicKey => RsaPublicKey::from_public_key_der(&der)
			.map_err(|e| Error::invalid_key(label.as_str(), e)),
		PemLabel::RsaPublicKey => RsaPublicKey::from_pkcs1_der(&der)
			.map_err(|e| Error::invalid_key(label.as_str(), e)),
		PemLabel::Certificate => {
			let spki = certificate_public_key_der(&der)?;

			RsaPublicKey::from_public_key_der(&spki)
				.map_err(|e| Error::invalid_key(label.as_str(), e))
		},
		PemLabel::PrivateKey | PemLabel::RsaPrivateKey =>
			decode_private_key(material).map(|key| key.to_public_key()),
	}
}

/// Extracts the DER-encoded SubjectPublicKeyInfo from a DER certificate.
pub fn certificate_public_key_der(certificate_der: &[u8]) -> Result<Vec<u8>> {
	let label = PemLabel::Certificate.as_str();
	let certificate =
		Certificate::from_der(certificate_der).map_err(|e| Error::invalid_key(label, e))?;

	certificate
		.tbs_certificate
		.subject_public_key_info
		.to_der()
		.map_err(|e| Error::invalid_key(label, e))
}
