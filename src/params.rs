//! Ordered parameter bags used as canonicalization input and as the signed OAuth output.

// std
use std::collections::btree_map::Entry;
// self
use crate::{_prelude::*, codec::percent_encode, signature::SignatureMethod};

/// `oauth_consumer_key`.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
/// `oauth_nonce`.
pub const OAUTH_NONCE: &str = "oauth_nonce";
/// `oauth_signature`.
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
/// `oauth_signature_method`.
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
/// `oauth_timestamp`.
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
/// `oauth_token`.
pub const OAUTH_TOKEN: &str = "oauth_token";
/// `oauth_version`.
pub const OAUTH_VERSION: &str = "oauth_version";
/// The only protocol version this engine speaks.
pub const OAUTH_VERSION_1_0: &str = "1.0";
/// Prefix shared by every protocol parameter.
pub const OAUTH_PREFIX: &str = "oauth_";

/// Multi-valued parameter mapping; values keep their insertion order per key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamMap(BTreeMap<String, Vec<String>>);
impl ParamMap {
	/// Creates an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `value` to the sequence stored under `key`.
	pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.entry(key.into()).or_default().push(value.into());
	}

	/// Replaces every value stored under `key`.
	pub fn insert<I, S>(&mut self, key: impl Into<String>, values: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.0.insert(key.into(), values.into_iter().map(Into::into).collect());
	}

	/// Builder-style [`append`](Self::append).
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.append(key, value);

		self
	}

	/// Values stored under `key`.
	pub fn get(&self, key: &str) -> Option<&[String]> {
		self.0.get(key).map(Vec::as_slice)
	}

	/// Returns true when `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no keys are present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates keys with their value sequences.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
	}

	/// Flattens into one `(key, value)` pair per stored value.
	pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().flat_map(|(k, values)| values.iter().map(move |v| (k.as_str(), v.as_str())))
	}

	/// Appends every pair of `other`.
	pub fn merge(&mut self, other: &ParamMap) {
		for (key, value) in other.pairs() {
			self.append(key, value);
		}
	}
}
impl<K, V> FromIterator<(K, V)> for ParamMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = Self::new();

		map.extend(iter);

		map
	}
}
impl<K, V> Extend<(K, V)> for ParamMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (key, value) in iter {
			self.append(key, value);
		}
	}
}

/// OAuth protocol parameters (`oauth_*`) carried by a signed request.
///
/// `oauth_signature` can only be written by the signing engine; a set produced by
/// [`OAuthClient`](crate::client::OAuthClient) always carries it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OAuthParams(BTreeMap<String, String>);
impl OAuthParams {
	/// Parses a parameter set received from a peer (e.g. a decoded `Authorization` header).
	///
	/// Every key must carry the `oauth_` prefix and appear once.
	pub fn from_received<I, K, V>(entries: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let mut params = Self::default();

		for (key, value) in entries {
			let key = key.into();

			ensure_oauth_key(&key)?;

			match params.0.entry(key) {
				Entry::Vacant(slot) => {
					slot.insert(value.into());
				},
				Entry::Occupied(slot) => {
					return Err(Error::illegal_argument(
						slot.key(),
						"parameter appears more than once",
					));
				},
			}
		}

		Ok(params)
	}

	pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.insert(key.into(), value.into());
	}

	pub(crate) fn set_signature(&mut self, signature: String) {
		self.0.insert(OAUTH_SIGNATURE.to_owned(), signature);
	}

	/// Value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// The computed `oauth_signature`, if present.
	pub fn signature(&self) -> Option<&str> {
		self.get(OAUTH_SIGNATURE)
	}

	/// Parses `oauth_signature_method`.
	pub fn signature_method(&self) -> Result<SignatureMethod> {
		self.get(OAUTH_SIGNATURE_METHOD)
			.ok_or(Error::MissingParameter { name: OAUTH_SIGNATURE_METHOD })?
			.parse()
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if the set is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates parameters in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Copies the parameters into a [`ParamMap`] for canonicalization.
	pub fn to_param_map(&self) -> ParamMap {
		self.iter().collect()
	}

	/// Renders an `Authorization` header value: `OAuth realm="..", k="pe(v)", ..`.
	pub fn to_authorization_header(&self, realm: Option<&str>) -> String {
		let mut parts = Vec::with_capacity(self.0.len() + 1);

		if let Some(realm) = realm {
			parts.push(format!("realm=\"{}\"", escape_quoted(realm)));
		}

		parts.extend(
			self.iter().map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v))),
		);

		format!("OAuth {}", parts.join(", "))
	}

	/// Renders `k=v&..` with both sides percent-encoded, for query strings or form bodies.
	pub fn to_query_string(&self) -> String {
		self.iter()
			.map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
			.collect::<Vec<_>>()
			.join("&")
	}

	/// Consumes the set, returning the underlying map.
	pub fn into_inner(self) -> BTreeMap<String, String> {
		self.0
	}
}

pub(crate) fn ensure_oauth_key(key: &str) -> Result<()> {
	if key.starts_with(OAUTH_PREFIX) && key.len() > OAUTH_PREFIX.len() {
		Ok(())
	} else {
		Err(Error::illegal_argument(key, "OAuth parameters must be prefixed with `oauth_`"))
	}
}

fn escape_quoted(value: &str) -> String {
	value.replace('\\', "\\\\").replace('"', "\\\"")
}
