mod common;

// std
use std::collections::BTreeMap;
// crates.io
use color_eyre::Result;
// self
use common::*;
use oauth1_signer::{
	client::{self, OAuthClient},
	credentials::Credentials,
	error::Error,
	key::KeyMaterial,
	params::{OAUTH_SIGNATURE, OAuthParams},
	request::{HttpMethod, RequestDescriptor},
	signature::SignatureMethod,
};

fn photos_request() -> RequestDescriptor {
	RequestDescriptor::new(HttpMethod::Get, "HTTP://Photos.Example.NET:80/photos?file=vacation.jpg")
		.expect("Fixture URL should parse.")
		.param("size", "original")
}

fn pinned(nonce: &str, timestamp: &str) -> BTreeMap<String, String> {
	BTreeMap::from([
		("oauth_nonce".to_string(), nonce.to_string()),
		("oauth_timestamp".to_string(), timestamp.to_string()),
	])
}

#[test]
fn signing_is_deterministic_once_nonce_and_timestamp_are_pinned() -> Result<()> {
	let client = OAuthClient::new();
	let credentials = Credentials::builder("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
		.token("nnch734d00sl2jdk", "pfkkdhi9sl3r4s00")
		.build()?;
	let extras = pinned("kllo9940pd9333jh", "1191242096");
	let first = client.build_signed_params(&photos_request(), &credentials, &extras)?;
	let second = client.build_signed_params(&photos_request(), &credentials, &extras)?;

	assert_eq!(first, second);
	assert!(client::verify_signed_params(&photos_request(), &first, &credentials)?);

	Ok(())
}

#[test]
fn injected_generator_reproduces_signatures() -> Result<()> {
	let build = || {
		OAuthClient::new()
			.with_generator(fixed_generator(42, 1_700_000_000))
			.build_signed_params(&photos_request(), &photos_consumer(), &BTreeMap::new())
	};

	assert_eq!(build()?, build()?);

	Ok(())
}

#[test]
fn system_generator_produces_fresh_nonces() -> Result<()> {
	let client = OAuthClient::new();
	let extras = BTreeMap::new();
	let first = client.build_signed_params(&photos_request(), &photos_consumer(), &extras)?;
	let second = client.build_signed_params(&photos_request(), &photos_consumer(), &extras)?;

	assert_ne!(first.get("oauth_nonce"), second.get("oauth_nonce"));
	assert_ne!(first.signature(), second.signature());

	Ok(())
}

#[test]
fn rsa_sha1_round_trip_through_headers() -> Result<()> {
	let client =
		OAuthClient::new().with_signature_method(SignatureMethod::RsaSha1).with_realm("Photos");
	let signed = client.build_signed_params(&photos_request(), &rsa_consumer(), &BTreeMap::new())?;
	let header = client.authorization_header(&signed);

	assert!(
		header.starts_with("OAuth realm=\"Photos\", oauth_consumer_key=\"dpf43f3p2l4k3l03\"")
	);
	assert!(header.contains("oauth_signature_method=\"RSA-SHA1\""));

	// A verifier holding only the certificate accepts the request.
	let verifier = Credentials::builder("dpf43f3p2l4k3l03", "")
		.public_key(KeyMaterial::new(RSA_CERTIFICATE_PEM))
		.build()?;

	assert!(client::verify_signed_params(&photos_request(), &signed, &verifier)?);

	let tampered = photos_request().param("size", "thumbnail");

	assert!(!client::verify_signed_params(&tampered, &signed, &verifier)?);

	Ok(())
}

#[test]
fn pkcs1_private_keys_sign_identically() -> Result<()> {
	let pkcs1 = Credentials::builder("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
		.private_key(KeyMaterial::new(RSA_PKCS1_PRIVATE_KEY_PEM))
		.build()?;
	let client = OAuthClient::new().with_signature_method(SignatureMethod::RsaSha1);
	let extras = pinned("wIjqoS", "137131200");
	let from_pkcs8 = client.build_signed_params(&photos_request(), &rsa_consumer(), &extras)?;
	let from_pkcs1 = client.build_signed_params(&photos_request(), &pkcs1, &extras)?;

	assert_eq!(from_pkcs8.signature(), from_pkcs1.signature());

	Ok(())
}

#[test]
fn verification_reports_structural_problems() -> Result<()> {
	let unsigned = OAuthParams::from_received([("oauth_signature_method", "HMAC-SHA1")])?;

	assert!(matches!(
		client::verify_signed_params(&photos_request(), &unsigned, &photos_consumer()),
		Err(Error::MissingParameter { name: OAUTH_SIGNATURE })
	));

	let unknown = OAuthParams::from_received([
		("oauth_signature_method", "HMAC-SHA256"),
		("oauth_signature", "x"),
	])?;

	assert!(matches!(
		client::verify_signed_params(&photos_request(), &unknown, &photos_consumer()),
		Err(Error::InvalidSignatureMethod { .. })
	));

	let foreign = OAuthParams::from_received([
		("oauth_consumer_key", "someone-else"),
		("oauth_signature_method", "PLAINTEXT"),
		("oauth_signature", "kd94hf93k423kf44&"),
	])?;

	assert!(!client::verify_signed_params(&photos_request(), &foreign, &photos_consumer())?);

	Ok(())
}

#[test]
fn query_string_serialization_carries_every_parameter() -> Result<()> {
	let signed = OAuthClient::new().build_signed_params(
		&photos_request(),
		&photos_consumer(),
		&pinned("wIjqoS", "137131200"),
	)?;
	let query = signed.to_query_string();

	assert_eq!(query.split('&').count(), signed.len());
	assert!(query.contains("oauth_nonce=wIjqoS"));

	Ok(())
}
