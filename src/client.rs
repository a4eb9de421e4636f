//! OAuth 1.0 client orchestration: assembles protocol parameters, canonicalizes the request, and
//! attaches `oauth_signature`.

// self
use crate::{
	_prelude::*,
	canonical,
	credentials::Credentials,
	generator::{CredentialGenerator, DEFAULT_NONCE_BITS},
	obs::{self, SignatureOperation, SignatureOutcome, SignatureSpan},
	params::{
		self, OAUTH_CONSUMER_KEY, OAUTH_NONCE, OAUTH_SIGNATURE, OAUTH_SIGNATURE_METHOD,
		OAUTH_TIMESTAMP, OAUTH_TOKEN, OAUTH_VERSION, OAUTH_VERSION_1_0, OAuthParams, ParamMap,
	},
	request::RequestDescriptor,
	signature::SignatureMethod,
};

/// Client settings; deserializable so callers can keep them next to their other configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	/// Method advertised in `oauth_signature_method` unless a request overrides it.
	pub signature_method: SignatureMethod,
	/// Protection realm rendered into `Authorization` headers.
	pub realm: Option<String>,
	/// Nonce strength in bits; must be a positive multiple of 8.
	pub nonce_bits: usize,
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			signature_method: SignatureMethod::default(),
			realm: None,
			nonce_bits: DEFAULT_NONCE_BITS,
		}
	}
}

/// Signs outbound requests for one consumer configuration.
#[derive(Clone, Debug, Default)]
pub struct OAuthClient {
	config: ClientConfig,
	generator: CredentialGenerator,
}
impl OAuthClient {
	/// Creates a client with the default configuration and system randomness/clock.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a client from explicit configuration.
	pub fn with_config(config: ClientConfig) -> Self {
		Self { config, generator: CredentialGenerator::default() }
	}

	/// Overrides the signature method.
	pub fn with_signature_method(mut self, method: SignatureMethod) -> Self {
		self.config.signature_method = method;

		self
	}

	/// Overrides the `Authorization` header realm.
	pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
		self.config.realm = Some(realm.into());

		self
	}

	/// Overrides the nonce strength.
	pub fn with_nonce_bits(mut self, bits: usize) -> Self {
		self.config.nonce_bits = bits;

		self
	}

	/// Swaps the nonce/timestamp generator, e.g. for a frozen clock in tests.
	pub fn with_generator(mut self, generator: CredentialGenerator) -> Self {
		self.generator = generator;

		self
	}

	/// Active configuration.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Produces the complete signed OAuth parameter set for `request`.
	///
	/// `extra_oauth_params` may supply additional `oauth_*` parameters (`oauth_callback`,
	/// `oauth_verifier`, ...) and may pin `oauth_nonce`, `oauth_timestamp`, or
	/// `oauth_signature_method`. It must not contain `oauth_signature`, `oauth_consumer_key`, or
	/// `oauth_token`, and any `oauth_version` must be `1.0`.
	pub fn build_signed_params(
		&self,
		request: &RequestDescriptor,
		credentials: &Credentials,
		extra_oauth_params: &BTreeMap<String, String>,
	) -> Result<OAuthParams> {
		let _guard = SignatureSpan::new(
			SignatureOperation::BuildParams,
			extra_oauth_params
				.get(OAUTH_SIGNATURE_METHOD)
				.map(String::as_str)
				.unwrap_or(self.config.signature_method.as_str()),
		)
		.entered();

		obs::record_signature_outcome(SignatureOperation::BuildParams, SignatureOutcome::Attempt);

		let result = self.sign_request(request, credentials, extra_oauth_params);

		obs::record_signature_outcome(
			SignatureOperation::BuildParams,
			SignatureOutcome::of(&result),
		);

		result
	}

	/// Renders `params` as an `Authorization` header value using the configured realm.
	pub fn authorization_header(&self, params: &OAuthParams) -> String {
		params.to_authorization_header(self.config.realm.as_deref())
	}

	fn sign_request(
		&self,
		request: &RequestDescriptor,
		credentials: &Credentials,
		extra_oauth_params: &BTreeMap<String, String>,
	) -> Result<OAuthParams> {
		validate_extra_params(extra_oauth_params)?;
		credentials.validate()?;

		let mut oauth = self.generate_oauth_params(credentials, extra_oauth_params)?;
		let method = oauth.signature_method()?;
		let base_string = signature_base_string(request, &oauth)?;
		let signature = method.sign(&base_string, credentials)?;

		oauth.set_signature(signature);

		Ok(oauth)
	}

	fn generate_oauth_params(
		&self,
		credentials: &Credentials,
		extra_oauth_params: &BTreeMap<String, String>,
	) -> Result<OAuthParams> {
		let mut oauth = OAuthParams::default();

		oauth.insert(OAUTH_CONSUMER_KEY, credentials.consumer_key.as_str());
		oauth.insert(OAUTH_SIGNATURE_METHOD, self.config.signature_method.as_str());
		oauth.insert(OAUTH_VERSION, OAUTH_VERSION_1_0);

		if let Some(token) = credentials.token.as_deref() {
			oauth.insert(OAUTH_TOKEN, token);
		}
		if !extra_oauth_params.contains_key(OAUTH_NONCE) {
			oauth.insert(OAUTH_NONCE, self.generator.generate_nonce(self.config.nonce_bits)?);
		}
		if !extra_oauth_params.contains_key(OAUTH_TIMESTAMP) {
			oauth.insert(OAUTH_TIMESTAMP, self.generator.generate_timestamp()?);
		}

		for (key, value) in extra_oauth_params {
			oauth.insert(key.as_str(), value.as_str());
		}

		Ok(oauth)
	}
}

/// Verifies a received, signed parameter set against `request`.
///
/// Returns `Ok(false)` when the signature does not match or the consumer key differs from
/// `credentials`; structural problems (missing or unknown method, missing signature, unusable
/// key material) are errors.
pub fn verify_signed_params(
	request: &RequestDescriptor,
	oauth: &OAuthParams,
	credentials: &Credentials,
) -> Result<bool> {
	let candidate = oauth.signature().ok_or(Error::MissingParameter { name: OAUTH_SIGNATURE })?;
	let method = oauth.signature_method()?;

	if oauth.get(OAUTH_CONSUMER_KEY) != Some(credentials.consumer_key.as_str()) {
		return Ok(false);
	}

	let base_string = signature_base_string(request, oauth)?;

	method.verify(&base_string, credentials, candidate)
}

/// Base string over the request's signable parameters merged with `oauth`.
///
/// A parameter may not appear both in the request and among the OAuth parameters. Servers that
/// accept `oauth_*` parameters in the query string must strip them from the request URL before
/// passing them here as `oauth`.
pub fn signature_base_string(request: &RequestDescriptor, oauth: &OAuthParams) -> Result<String> {
	let mut merged: ParamMap = request.signable_params();

	if let Some((key, _)) = oauth.iter().find(|(key, _)| merged.contains_key(*key)) {
		return Err(Error::illegal_argument(
			key,
			"supplied both as a request parameter and as an OAuth parameter",
		));
	}

	merged.merge(&oauth.to_param_map());

	canonical::base_string_for(&request.method, &request.url, request.path(), &merged)
}

fn validate_extra_params(extra_oauth_params: &BTreeMap<String, String>) -> Result<()> {
	if extra_oauth_params.contains_key(OAUTH_SIGNATURE) {
		return Err(Error::illegal_argument(
			OAUTH_SIGNATURE,
			"the signature is computed by the signer",
		));
	}

	for (key, value) in extra_oauth_params {
		params::ensure_oauth_key(key)?;

		match key.as_str() {
			OAUTH_CONSUMER_KEY | OAUTH_TOKEN => {
				return Err(Error::illegal_argument(key, "taken from the credentials"));
			},
			OAUTH_VERSION if value != OAUTH_VERSION_1_0 => {
				return Err(Error::illegal_argument(key, format!("expected `1.0`, got `{value}`")));
			},
			_ => {},
		}
	}

	Ok(())
}
